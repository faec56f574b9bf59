//! Reading the caret stops of the current visual line.

use crate::geometry::{is_above, is_below};
use crate::utils::is_in_same_block;
use crate::{CaretPosition, CaretWalker};
use core_types::HDirection;
use dom::classify::is_br;
use layout::ClientRects;

/// Why a line read stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BreakType {
    /// A `<br>` ends the line.
    Br,
    /// The next stop belongs to another block.
    Block,
    /// The next stop is on a wrapped line of the same block.
    Wrap,
    /// The walk reached the edge of the root.
    Eol,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineInfo {
    /// Stops on the line, in document order, excluding the start.
    pub positions: Vec<CaretPosition>,
    pub break_type: BreakType,
    /// The stop that ended the line, if any.
    pub break_at: Option<CaretPosition>,
}

fn positions_until_break(
    walker: &CaretWalker<'_>,
    rects: &dyn ClientRects,
    direction: HDirection,
    start: CaretPosition,
) -> LineInfo {
    let dom = walker.dom();
    let root = walker.root();
    let start_rect = start.caret_rect(dom, rects);
    let mut positions = Vec::new();
    let mut current = start;

    let (break_type, break_at) = loop {
        let Some(next) = walker.step(direction, current) else {
            break (BreakType::Eol, None);
        };
        if next.child_at_relative(dom, 0).is_some_and(|n| is_br(dom, n)) {
            if direction.is_forwards() {
                positions.push(next);
            }
            break (BreakType::Br, Some(next));
        }
        let Some(rect) = next.caret_rect(dom, rects) else {
            current = next;
            continue;
        };
        if !is_in_same_block(dom, &start, &next, root) {
            break (BreakType::Block, Some(next));
        }
        let wrapped = start_rect.is_some_and(|s| match direction {
            HDirection::Forwards => is_below(&rect, &s),
            HDirection::Backwards => is_above(&rect, &s),
        });
        if wrapped {
            break (BreakType::Wrap, Some(next));
        }
        positions.push(next);
        current = next;
    };

    if !direction.is_forwards() {
        positions.reverse();
    }
    LineInfo {
        positions,
        break_type,
        break_at,
    }
}

/// Stops from `start` to the end of its visual line.
pub fn positions_until_next_line(
    walker: &CaretWalker<'_>,
    rects: &dyn ClientRects,
    start: CaretPosition,
) -> LineInfo {
    positions_until_break(walker, rects, HDirection::Forwards, start)
}

/// Stops from the start of the visual line up to `start`.
pub fn positions_until_previous_line(
    walker: &CaretWalker<'_>,
    rects: &dyn ClientRects,
    start: CaretPosition,
) -> LineInfo {
    positions_until_break(walker, rects, HDirection::Backwards, start)
}
