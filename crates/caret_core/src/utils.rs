//! Range normalization and block helpers shared by the navigation layer.

use crate::CaretPosition;
use core_types::HDirection;
use dom::classify::{
    CARET_ATTR, is_block, is_caret_container_block, is_content_editable_false,
    is_content_editable_true, is_zwsp_text,
};
use dom::{Dom, DomRange, Id};

/// Map a boundary point inside a caret container onto the element
/// boundary the container stands for.
///
/// Block containers tagged `before` sit in front of an island, so their
/// boundary is the point after the block; `after` blocks map to the point
/// before the block. Inline zero width space containers map to the side in
/// the travel direction.
fn normalize_point(dom: &Dom, direction: HDirection, point: (Id, usize)) -> (Id, usize) {
    let (container, offset) = point;
    if let Some(block) = caret_container_block_of(dom, container) {
        let (Some(parent), Some(index)) = (dom.parent(block), dom.index_in_parent(block)) else {
            return point;
        };
        return match dom.attr(block, CARET_ATTR) {
            Some("before") => (parent, index + 1),
            _ => (parent, index),
        };
    }
    if is_zwsp_text(dom, container) {
        let (Some(parent), Some(index)) = (dom.parent(container), dom.index_in_parent(container))
        else {
            return point;
        };
        return match direction {
            HDirection::Forwards => (parent, index + 1),
            HDirection::Backwards => (parent, index),
        };
    }
    (container, offset)
}

fn caret_container_block_of(dom: &Dom, node: Id) -> Option<Id> {
    std::iter::once(node)
        .chain(dom.ancestors(node))
        .find(|&n| is_caret_container_block(dom, n))
}

pub fn normalize_range(dom: &Dom, direction: HDirection, range: &DomRange) -> DomRange {
    let (start_container, start_offset) = normalize_point(dom, direction, range.start());
    let (end_container, end_offset) = normalize_point(dom, direction, range.end());
    DomRange::new(start_container, start_offset, end_container, end_offset)
}

/// The endpoint navigation starts from: the start when moving backward,
/// the end when moving forward.
pub fn normalized_range_end_point(dom: &Dom, direction: HDirection, range: &DomRange) -> CaretPosition {
    let range = normalize_range(dom, direction, range);
    match direction {
        HDirection::Backwards => CaretPosition::from_range_start(&range),
        HDirection::Forwards => CaretPosition::from_range_end(&range),
    }
}

/// Move a position out of a caret container it landed in.
pub fn normalize_position(dom: &Dom, direction: HDirection, pos: CaretPosition) -> CaretPosition {
    let (container, offset) = normalize_point(dom, direction, (pos.container(), pos.offset()));
    CaretPosition::new(container, offset)
}

/// Nearest block containing `node` (inclusive for elements), or `root`.
pub fn parent_block(dom: &Dom, node: Id, root: Id) -> Id {
    std::iter::once(node)
        .chain(dom.ancestors(node))
        .take_while(|&n| n != root)
        .find(|&n| is_block(dom, n))
        .unwrap_or(root)
}

pub fn is_in_same_block(dom: &Dom, a: &CaretPosition, b: &CaretPosition, root: Id) -> bool {
    parent_block(dom, a.container(), root) == parent_block(dom, b.container(), root)
}

/// Same block, or `from` stands before a line break (moving over a break
/// keeps the caret on the visual run it came from).
pub fn is_move_inside_same_block(dom: &Dom, from: &CaretPosition, to: &CaretPosition, root: Id) -> bool {
    if is_in_same_block(dom, from, to, root) {
        return true;
    }
    dom::classify::is_br(dom, from.node(dom, false))
}

pub fn is_range_in_caret_container_block(dom: &Dom, range: &DomRange) -> bool {
    caret_container_block_of(dom, range.start_container).is_some()
}

/// Nearest ancestor-or-self carrying an explicit `contenteditable` flag,
/// below `root`.
pub fn content_editable_root(dom: &Dom, node: Id, root: Id) -> Option<Id> {
    std::iter::once(node)
        .chain(dom.ancestors(node))
        .take_while(|&n| n != root)
        .find(|&n| is_content_editable_false(dom, n) || is_content_editable_true(dom, n))
}

/// The editing host of `node`: its nearest `contenteditable="true"`
/// ancestor below `root`, else `root`.
pub fn editing_host(dom: &Dom, node: Id, root: Id) -> Id {
    std::iter::once(node)
        .chain(dom.ancestors(node))
        .take_while(|&n| n != root)
        .find(|&n| is_content_editable_true(dom, n))
        .unwrap_or(root)
}
