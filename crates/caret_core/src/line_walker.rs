//! Caret positions ordered by visual line.
//!
//! [`positions_until`] walks caret stops away from a start point and tags
//! each rendered stop with a relative line number: `0` for the start line,
//! positive below it and negative above it. Stops on the far side of the
//! start (above it when walking down, and the reverse) are skipped. The
//! sequence is lazy and ends when the walk runs out or the caller's
//! predicate accepts a position; that position is not yielded.

use crate::geometry::{horizontal_distance, is_above, is_below};
use crate::{CaretPosition, CaretWalker};
use core_types::VDirection;
use dom::Id;
use layout::{ClientRects, Rectangle};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinePosition {
    pub position: CaretPosition,
    pub rect: Rectangle,
    pub line: i32,
}

/// Where a line walk begins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkStart {
    /// Beside a node: after it walking down, before it walking up. Lines are
    /// measured from the node's own box.
    Node(Id),
    Position(CaretPosition),
}

pub struct LinePositions<'a, F> {
    walker: CaretWalker<'a>,
    rects: &'a dyn ClientRects,
    direction: VDirection,
    predicate: F,
    pending: Option<CaretPosition>,
    current: Option<CaretPosition>,
    target: Rectangle,
    last_rect: Rectangle,
    line: i32,
    done: bool,
}

pub fn positions_until<'a, F>(
    walker: CaretWalker<'a>,
    rects: &'a dyn ClientRects,
    direction: VDirection,
    predicate: F,
    start: WalkStart,
) -> LinePositions<'a, F>
where
    F: FnMut(&LinePosition) -> bool,
{
    let dom = walker.dom();
    let (start_pos, target) = match start {
        WalkStart::Position(pos) => (Some(pos), pos.caret_rect(dom, rects)),
        WalkStart::Node(node) => {
            let boxes = rects.node_rects(node);
            match direction {
                VDirection::Down => (CaretPosition::after(dom, node), boxes.last().copied()),
                VDirection::Up => (CaretPosition::before(dom, node), boxes.first().copied()),
            }
        }
    };
    let done = start_pos.is_none() || target.is_none();
    let target = target.unwrap_or_default();
    LinePositions {
        walker,
        rects,
        direction,
        predicate,
        pending: start_pos,
        current: None,
        target,
        last_rect: target,
        line: 0,
        done,
    }
}

pub fn up_until<'a, F>(
    walker: CaretWalker<'a>,
    rects: &'a dyn ClientRects,
    predicate: F,
    start: WalkStart,
) -> LinePositions<'a, F>
where
    F: FnMut(&LinePosition) -> bool,
{
    positions_until(walker, rects, VDirection::Up, predicate, start)
}

pub fn down_until<'a, F>(
    walker: CaretWalker<'a>,
    rects: &'a dyn ClientRects,
    predicate: F,
    start: WalkStart,
) -> LinePositions<'a, F>
where
    F: FnMut(&LinePosition) -> bool,
{
    positions_until(walker, rects, VDirection::Down, predicate, start)
}

impl<F> Iterator for LinePositions<'_, F>
where
    F: FnMut(&LinePosition) -> bool,
{
    type Item = LinePosition;

    fn next(&mut self) -> Option<LinePosition> {
        if self.done {
            return None;
        }
        let dom = self.walker.dom();
        loop {
            let pos = match self.pending.take() {
                Some(pos) => pos,
                None => {
                    let stepped = self
                        .current
                        .and_then(|c| self.walker.step(self.direction.to_horizontal(), c));
                    match stepped {
                        Some(pos) => pos,
                        None => {
                            self.done = true;
                            return None;
                        }
                    }
                }
            };
            self.current = Some(pos);

            let Some(rect) = pos.caret_rect(dom, self.rects) else {
                continue;
            };
            let (behind, crossed) = match self.direction {
                VDirection::Down => (
                    is_above(&rect, &self.target),
                    is_below(&rect, &self.last_rect),
                ),
                VDirection::Up => (
                    is_below(&rect, &self.target),
                    is_above(&rect, &self.last_rect),
                ),
            };
            if behind {
                continue;
            }
            if crossed {
                self.line += self.direction.sign();
            }

            let line_pos = LinePosition {
                position: pos,
                rect,
                line: self.line,
            };
            if (self.predicate)(&line_pos) {
                log::trace!(target: "caret.line", "stop at {pos:?} on line {}", self.line);
                self.done = true;
                return None;
            }
            self.last_rect = rect;
            return Some(line_pos);
        }
    }
}

/// Accepts positions exactly `n` lines away from the start.
pub fn is_line(n: u32) -> impl Fn(&LinePosition) -> bool {
    move |lp| lp.line.unsigned_abs() == n
}

/// Accepts positions more than `n` lines away from the start.
pub fn is_above_line(n: u32) -> impl Fn(&LinePosition) -> bool {
    move |lp| lp.line.unsigned_abs() > n
}

/// The position whose rectangle edge is horizontally closest to `x`; ties
/// go to the first one in walk order.
pub fn find_closest_client_rect<I>(positions: I, x: f32) -> Option<LinePosition>
where
    I: IntoIterator<Item = LinePosition>,
{
    let mut best: Option<(f32, LinePosition)> = None;
    for candidate in positions {
        let distance = horizontal_distance(&candidate.rect, x);
        if best.is_none_or(|(d, _)| distance < d) {
            best = Some((distance, candidate));
        }
    }
    best.map(|(_, lp)| lp)
}
