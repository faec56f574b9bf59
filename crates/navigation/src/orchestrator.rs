//! Direction-parametric caret movement around atomic boundaries.
//!
//! The same algorithm serves non-editable islands and media; a
//! [`BoundaryRule`] says which node kinds stop the caret and which kind is
//! selected or shown with a caret marker when reached.

use crate::EditorHost;
use crate::bridge::{render_range_caret, select_node, show_caret};
use caret_core::geometry::{LINE_EPSILON, is_above, is_below};
use caret_core::line_reader::{positions_until_next_line, positions_until_previous_line};
use caret_core::line_walker::{
    LinePosition, WalkStart, find_closest_client_rect, is_above_line, is_line, positions_until,
};
use caret_core::utils::{
    editing_host, is_move_inside_same_block, is_range_in_caret_container_block, normalize_position,
    normalized_range_end_point,
};
use caret_core::{AtomicKind, CaretPosition, CaretWalker};
use core_types::{HDirection, VDirection};
use dom::{Dom, DomRange, Id};
use layout::{ClientRects, Rectangle};

/// Which atomic kinds a movement treats as boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundaryRule {
    /// Kinds that stop the caret.
    pub kinds: &'static [AtomicKind],
    /// Kind that gets selected or shown with a caret marker.
    pub element: AtomicKind,
}

impl BoundaryRule {
    pub const NON_EDITABLE: Self = Self {
        kinds: &[AtomicKind::NonEditable],
        element: AtomicKind::NonEditable,
    };
    /// Vertical moves also stop beside tables.
    pub const NON_EDITABLE_VERTICAL: Self = Self {
        kinds: &[AtomicKind::NonEditable, AtomicKind::Table],
        element: AtomicKind::NonEditable,
    };
    pub const MEDIA: Self = Self {
        kinds: &[AtomicKind::Media],
        element: AtomicKind::Media,
    };

    pub fn is_before(&self, dom: &Dom, pos: &CaretPosition) -> bool {
        self.kinds.iter().any(|kind| kind.is_before(dom, pos))
    }

    pub fn is_after(&self, dom: &Dom, pos: &CaretPosition) -> bool {
        self.kinds.iter().any(|kind| kind.is_after(dom, pos))
    }

    pub fn is_element(&self, dom: &Dom, node: Id) -> bool {
        self.element.matches(dom, node)
    }

    /// A boundary lies in the travel direction.
    fn is_ahead(&self, dom: &Dom, pos: &CaretPosition, forwards: bool) -> bool {
        if forwards {
            self.is_before(dom, pos)
        } else {
            self.is_after(dom, pos)
        }
    }

    /// A boundary was just passed.
    fn is_behind(&self, dom: &Dom, pos: &CaretPosition, forwards: bool) -> bool {
        if forwards {
            self.is_after(dom, pos)
        } else {
            self.is_before(dom, pos)
        }
    }

    /// The boundary node a position stands beside, preferring the one after it.
    fn adjacent_node(&self, dom: &Dom, pos: &CaretPosition) -> Option<Id> {
        if self.is_before(dom, pos) {
            Some(pos.node(dom, false))
        } else if self.is_after(dom, pos) {
            Some(pos.node(dom, true))
        } else {
            None
        }
    }
}

/// What a movement decided, applied once the host is no longer borrowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Move {
    ShowCaret { node: Id, before: bool },
    SelectNode(Id),
    RenderCaret(DomRange),
    Keep(DomRange),
}

fn apply(host: &mut dyn EditorHost, direction: HDirection, mv: Move) -> Option<DomRange> {
    log::debug!(target: "navigation", "{direction:?}: {mv:?}");
    match mv {
        Move::ShowCaret { node, before } => show_caret(host, direction, node, before, false),
        Move::SelectNode(node) => select_node(host, node),
        Move::RenderCaret(range) => Some(render_range_caret(host, &range)),
        Move::Keep(range) => Some(range),
    }
}

/// Left/Right movement. `None` leaves the key to the host.
pub fn move_horizontally(
    host: &mut dyn EditorHost,
    direction: HDirection,
    range: &DomRange,
    rule: &BoundaryRule,
) -> Option<DomRange> {
    let mv = plan_horizontal(&*host, direction, range, rule)?;
    apply(host, direction, mv)
}

fn plan_horizontal(
    host: &dyn EditorHost,
    direction: HDirection,
    range: &DomRange,
    rule: &BoundaryRule,
) -> Option<Move> {
    let dom = host.dom();
    let root = host.editable_root();
    let rects = host.client_rects();
    let forwards = direction.is_forwards();

    if !range.is_collapsed() {
        if let Some(node) = range.selected_node(dom).filter(|&n| rule.is_element(dom, n)) {
            return Some(Move::ShowCaret {
                node,
                before: !forwards,
            });
        }
    }

    let pos = normalized_range_end_point(dom, direction, range);
    if rule.is_ahead(dom, &pos, forwards) {
        return Some(Move::SelectNode(pos.node(dom, !forwards)));
    }

    let in_caret_container = is_range_in_caret_container_block(dom, range);
    let walker = CaretWalker::new(dom, root);
    let Some(next) = walker.visual_step(direction, pos, rects) else {
        return in_caret_container.then_some(Move::Keep(*range));
    };
    let next = normalize_position(dom, direction, next);

    if rule.is_ahead(dom, &next, forwards) {
        return Some(Move::ShowCaret {
            node: next.node(dom, !forwards),
            before: forwards,
        });
    }
    if rule.is_behind(dom, &next, forwards) {
        return Some(Move::ShowCaret {
            node: next.node(dom, forwards),
            before: !forwards,
        });
    }

    if let Some(peek) = walker.rendered_step(direction, next, rects) {
        if rule.is_ahead(dom, &peek, forwards)
            && is_move_inside_same_block(dom, &next, &peek, root)
            && is_on_same_line(dom, rects, &next, &peek)
        {
            return Some(Move::ShowCaret {
                node: peek.node(dom, !forwards),
                before: forwards,
            });
        }
    }

    in_caret_container.then_some(Move::RenderCaret(next.to_range()))
}

/// Both positions render on one visual line.
fn is_on_same_line(
    dom: &Dom,
    rects: &dyn ClientRects,
    a: &CaretPosition,
    b: &CaretPosition,
) -> bool {
    match (a.caret_rect(dom, rects), b.caret_rect(dom, rects)) {
        (Some(a), Some(b)) => !is_above(&b, &a) && !is_below(&b, &a),
        _ => false,
    }
}

/// Up/Down movement. `None` leaves the key to the host.
pub fn move_vertically(
    host: &mut dyn EditorHost,
    direction: VDirection,
    range: &DomRange,
    rule: &BoundaryRule,
) -> Option<DomRange> {
    let mv = plan_vertical(&*host, direction, range, rule)?;
    apply(host, direction.to_horizontal(), mv)
}

fn plan_vertical(
    host: &dyn EditorHost,
    direction: VDirection,
    range: &DomRange,
    rule: &BoundaryRule,
) -> Option<Move> {
    let dom = host.dom();
    let root = host.editable_root();
    let rects = host.client_rects();
    let walker = CaretWalker::new(dom, root);

    let pos = normalized_range_end_point(dom, direction.to_horizontal(), range);
    let x = pos.caret_rect(dom, rects)?.left();

    let next_line: Vec<LinePosition> = positions_until(
        walker,
        rects,
        direction,
        is_above_line(1),
        WalkStart::Position(pos),
    )
    .filter(is_line(1))
    .collect();

    if let Some(closest) = find_closest_client_rect(next_line.iter().copied(), x) {
        if let Some(node) = rule
            .adjacent_node(dom, &closest.position)
            .filter(|&n| rule.is_element(dom, n))
        {
            let bounds = node_rect_on_line(rects, node, &closest);
            let to_left = (x - bounds.left()).abs();
            let to_right = (x - bounds.right()).abs();
            return Some(Move::ShowCaret {
                node,
                before: to_left < to_right,
            });
        }
    }

    let current_node = rule
        .adjacent_node(dom, &pos)
        .or_else(|| range.selected_node(dom));
    if let Some(node) = current_node {
        let positions: Vec<LinePosition> =
            positions_until(walker, rects, direction, is_above_line(1), WalkStart::Node(node))
                .collect();
        if let Some(closest) = find_closest_client_rect(positions.iter().copied().filter(is_line(1)), x)
        {
            return Some(Move::RenderCaret(closest.position.to_range()));
        }
        if let Some(last) = positions.iter().rev().find(|lp| lp.line == 0) {
            return Some(Move::RenderCaret(last.position.to_range()));
        }
    }

    if next_line.is_empty() {
        let forwards = direction.is_down();
        let end_point = line_end_point(dom, root, rects, range, forwards)?;
        let at_boundary = if forwards {
            rule.is_after(dom, &end_point)
        } else {
            rule.is_before(dom, &end_point)
        };
        if at_boundary {
            return Some(Move::RenderCaret(end_point.to_range()));
        }
    }

    None
}

/// Box of `node` on the line `target` was found on, else its first box.
fn node_rect_on_line(
    rects: &dyn ClientRects,
    node: Id,
    target: &LinePosition,
) -> Rectangle {
    let boxes = rects.node_rects(node);
    boxes
        .iter()
        .find(|r| (r.top() - target.rect.top()).abs() <= LINE_EPSILON)
        .or(boxes.first())
        .copied()
        .unwrap_or(target.rect)
}

/// Last stop of the caret's visual line (first stop when `forward` is
/// unset), walking inside the caret's editing host.
fn line_end_point(
    dom: &Dom,
    root: Id,
    rects: &dyn ClientRects,
    range: &DomRange,
    forward: bool,
) -> Option<CaretPosition> {
    let from = if forward {
        CaretPosition::from_range_end(range)
    } else {
        CaretPosition::from_range_start(range)
    };
    let walker = CaretWalker::new(dom, editing_host(dom, from.container(), root));
    if forward {
        positions_until_next_line(&walker, rects, from)
            .positions
            .last()
            .copied()
    } else {
        positions_until_previous_line(&walker, rects, from)
            .positions
            .first()
            .copied()
    }
}

/// Home/End: put the caret on the edge of its line when that edge
/// satisfies `is_boundary`. Returns whether the selection changed.
pub fn move_to_line_end_point<F>(host: &mut dyn EditorHost, forward: bool, is_boundary: F) -> bool
where
    F: Fn(&Dom, &CaretPosition) -> bool,
{
    let target = {
        let dom = host.dom();
        let range = host.selection();
        line_end_point(dom, host.editable_root(), host.client_rects(), &range, forward)
            .filter(|pos| is_boundary(dom, pos))
    };
    match target {
        Some(pos) => {
            log::debug!(target: "navigation", "line end point {pos:?}");
            host.set_selection(pos.to_range());
            true
        }
        None => false,
    }
}
