//! Logical caret stepping.
//!
//! The walker moves a [`CaretPosition`] one valid caret stop at a time in
//! document order. Valid stops are:
//! - every character boundary of non-empty text
//! - the two sides of an atomic node (media, replaced content, non-editable
//!   islands), never its interior
//! - the side of a `<br>` facing the travel direction
//! - the outside of a table the walk enters or leaves
//!
//! A walk never leaves the editable root: reaching either end of it yields
//! `None`.

use crate::CaretPosition;
use crate::candidate::{is_atomic, is_editable_caret_candidate, outermost_non_editable};
use core_types::HDirection;
use dom::classify::{is_br, is_table};
use dom::{Dom, Id};
use layout::{ClientRects, Rectangle};

/// Two caret rectangles closer than this render at the same spot.
const SAME_SPOT_EPSILON: f32 = 0.5;

#[derive(Clone, Copy, Debug)]
pub struct CaretWalker<'a> {
    dom: &'a Dom,
    root: Id,
}

impl<'a> CaretWalker<'a> {
    pub fn new(dom: &'a Dom, root: Id) -> Self {
        Self { dom, root }
    }

    pub fn dom(&self) -> &'a Dom {
        self.dom
    }

    pub fn root(&self) -> Id {
        self.root
    }

    pub fn step(&self, direction: HDirection, pos: CaretPosition) -> Option<CaretPosition> {
        let next = match direction {
            HDirection::Forwards => self.next(pos),
            HDirection::Backwards => self.prev(pos),
        };
        log::trace!(target: "caret.walker", "{direction:?} {pos:?} -> {next:?}");
        next
    }

    /// Next caret stop after `pos`.
    pub fn next(&self, pos: CaretPosition) -> Option<CaretPosition> {
        let dom = self.dom;
        if let Some(island) = outermost_non_editable(dom, pos.container(), self.root) {
            return CaretPosition::after(dom, island);
        }

        let container = pos.container();
        let offset = pos.offset();
        if dom.is_text(container) {
            if offset < dom.text_len(container) {
                return Some(CaretPosition::new(container, offset + 1));
            }
            return self.leave_forward(container);
        }
        match dom.child(container, offset) {
            Some(child) => self.enter_forward(child),
            None => self.leave_forward(container),
        }
    }

    /// Previous caret stop before `pos`.
    pub fn prev(&self, pos: CaretPosition) -> Option<CaretPosition> {
        let dom = self.dom;
        if let Some(island) = outermost_non_editable(dom, pos.container(), self.root) {
            return CaretPosition::before(dom, island);
        }

        let container = pos.container();
        if dom.is_text(container) {
            let offset = pos.offset().min(dom.text_len(container));
            if offset > 0 {
                return Some(CaretPosition::new(container, offset - 1));
            }
            return self.leave_backward(container);
        }
        let offset = pos.offset().min(dom.child_count(container));
        match offset.checked_sub(1).and_then(|i| dom.child(container, i)) {
            Some(child) => self.enter_backward(child),
            None => self.leave_backward(container),
        }
    }

    /// Step like [`CaretWalker::step`], skipping stops that do not render and
    /// stops whose caret renders exactly where the caret at `pos` does.
    pub fn visual_step(
        &self,
        direction: HDirection,
        pos: CaretPosition,
        rects: &dyn ClientRects,
    ) -> Option<CaretPosition> {
        let origin = pos.caret_rect(self.dom, rects);
        let mut current = pos;
        loop {
            let next = self.step(direction, current)?;
            match next.caret_rect(self.dom, rects) {
                Some(rect) if !origin.is_some_and(|o| same_spot(o, rect)) => return Some(next),
                _ => current = next,
            }
        }
    }

    /// Step like [`CaretWalker::step`], skipping only stops that do not render.
    pub fn rendered_step(
        &self,
        direction: HDirection,
        pos: CaretPosition,
        rects: &dyn ClientRects,
    ) -> Option<CaretPosition> {
        let mut current = pos;
        loop {
            let next = self.step(direction, current)?;
            if next.is_visible(self.dom, rects) {
                return Some(next);
            }
            current = next;
        }
    }

    // ===== forward =====

    /// Caret is just before `child`, moving forward.
    fn enter_forward(&self, child: Id) -> Option<CaretPosition> {
        let dom = self.dom;
        if dom.is_text(child) {
            if is_editable_caret_candidate(dom, child, self.root) {
                return Some(CaretPosition::new(child, 0));
            }
            return self.forward_candidate_position(child, false);
        }
        if is_br(dom, child) {
            return self.step_over_br(child);
        }
        if is_atomic(dom, child) {
            return CaretPosition::after(dom, child);
        }
        if is_table(dom, child) {
            return self
                .find_candidate_forward(child, false, child)
                .and_then(|n| self.candidate_position_forward(n))
                .or_else(|| CaretPosition::after(dom, child));
        }
        self.forward_candidate_position(child, false)
    }

    fn leave_forward(&self, container: Id) -> Option<CaretPosition> {
        if container == self.root {
            return None;
        }
        self.forward_candidate_position(container, true)
    }

    fn step_over_br(&self, br: Id) -> Option<CaretPosition> {
        let dom = self.dom;
        if let Some(next) = dom
            .next_sibling(br)
            .filter(|&n| is_editable_caret_candidate(dom, n, self.root))
        {
            return if dom.is_text(next) {
                Some(CaretPosition::new(next, 0))
            } else {
                CaretPosition::before(dom, next)
            };
        }
        self.next(CaretPosition::after(dom, br)?)
    }

    fn forward_candidate_position(&self, start: Id, skip_children: bool) -> Option<CaretPosition> {
        self.find_candidate_forward(start, skip_children, self.root)
            .and_then(|n| self.candidate_position_forward(n))
    }

    fn candidate_position_forward(&self, node: Id) -> Option<CaretPosition> {
        if self.dom.is_text(node) {
            Some(CaretPosition::new(node, 0))
        } else {
            CaretPosition::before(self.dom, node)
        }
    }

    /// First editable candidate after `start` in pre-order, staying inside
    /// `scope`.
    fn find_candidate_forward(&self, start: Id, skip_children: bool, scope: Id) -> Option<Id> {
        let mut node = self.next_in_order(start, skip_children)?;
        loop {
            if !self.dom.contains(scope, node) {
                return None;
            }
            if is_editable_caret_candidate(self.dom, node, self.root) {
                return Some(node);
            }
            node = self.next_in_order(node, false)?;
        }
    }

    /// Pre-order successor below the root. Atomic nodes are not entered.
    fn next_in_order(&self, node: Id, skip_children: bool) -> Option<Id> {
        let dom = self.dom;
        if !skip_children && !is_atomic(dom, node) {
            if let Some(first) = dom.first_child(node) {
                return Some(first);
            }
        }
        let mut current = node;
        loop {
            if current == self.root {
                return None;
            }
            if let Some(sibling) = dom.next_sibling(current) {
                return Some(sibling);
            }
            current = dom.parent(current)?;
        }
    }

    // ===== backward =====

    /// Caret is just after `child`, moving backward.
    fn enter_backward(&self, child: Id) -> Option<CaretPosition> {
        let dom = self.dom;
        if dom.is_text(child) && is_editable_caret_candidate(dom, child, self.root) {
            return Some(CaretPosition::new(child, dom.text_len(child)));
        }
        if is_br(dom, child) || is_atomic(dom, child) {
            return CaretPosition::before(dom, child);
        }

        let leaf = self.deepest_last(child);
        if is_table(dom, child) {
            let found = if leaf == child {
                None
            } else if is_editable_caret_candidate(dom, leaf, self.root) {
                Some(leaf)
            } else {
                self.find_candidate_backward(leaf, child)
            };
            return found
                .and_then(|n| self.candidate_position_backward(n, leaf))
                .or_else(|| CaretPosition::before(dom, child));
        }
        if is_editable_caret_candidate(dom, leaf, self.root) {
            return self.candidate_position_backward(leaf, leaf);
        }
        self.find_candidate_backward(leaf, self.root)
            .and_then(|n| self.candidate_position_backward(n, leaf))
    }

    fn leave_backward(&self, container: Id) -> Option<CaretPosition> {
        if container == self.root {
            return None;
        }
        self.find_candidate_backward(container, self.root)
            .and_then(|n| self.candidate_position_backward(n, container))
    }

    /// `origin` is the node the reverse search started from; a candidate
    /// containing it is an ancestor being exited.
    fn candidate_position_backward(&self, node: Id, origin: Id) -> Option<CaretPosition> {
        let dom = self.dom;
        if dom.is_text(node) {
            return Some(CaretPosition::new(node, dom.text_len(node)));
        }
        if is_br(dom, node) {
            return CaretPosition::before(dom, node);
        }
        if !is_atomic(dom, node) && dom.contains(node, origin) {
            return CaretPosition::before(dom, node);
        }
        CaretPosition::after(dom, node)
    }

    /// First editable candidate before `start` in reverse pre-order, stopping
    /// when `scope` itself is reached.
    fn find_candidate_backward(&self, start: Id, scope: Id) -> Option<Id> {
        let mut node = self.prev_in_order(start)?;
        loop {
            if node == scope {
                return None;
            }
            if is_editable_caret_candidate(self.dom, node, self.root) {
                return Some(node);
            }
            node = self.prev_in_order(node)?;
        }
    }

    /// Reverse pre-order predecessor below the root: the previous sibling's
    /// deepest last descendant, else the parent.
    fn prev_in_order(&self, node: Id) -> Option<Id> {
        if node == self.root {
            return None;
        }
        if let Some(sibling) = self.dom.previous_sibling(node) {
            return Some(self.deepest_last(sibling));
        }
        let parent = self.dom.parent(node)?;
        if parent == self.root {
            return None;
        }
        Some(parent)
    }

    fn deepest_last(&self, node: Id) -> Id {
        let mut current = node;
        while !is_atomic(self.dom, current) {
            match self.dom.last_child(current) {
                Some(child) => current = child,
                None => break,
            }
        }
        current
    }
}

fn same_spot(a: Rectangle, b: Rectangle) -> bool {
    (a.x - b.x).abs() < SAME_SPOT_EPSILON && (a.y - b.y).abs() < SAME_SPOT_EPSILON
}
