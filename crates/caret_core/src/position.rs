use crate::candidate::is_atomic;
use dom::classify::{is_br, is_table};
use dom::{Dom, DomRange, Id};
use layout::{ClientRects, Rectangle};
use std::cmp::Ordering;

/// A logical caret location.
///
/// Inside a text container `offset` counts characters; inside an element it
/// counts children, so `(parent, i)` sits just before the `i`th child.
/// Positions are plain values: create them per query and compare them
/// freely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CaretPosition {
    container: Id,
    offset: usize,
}

impl CaretPosition {
    #[inline]
    pub fn new(container: Id, offset: usize) -> Self {
        Self { container, offset }
    }

    #[inline]
    pub fn container(&self) -> Id {
        self.container
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Position immediately before `node`, in its parent.
    pub fn before(dom: &Dom, node: Id) -> Option<Self> {
        let parent = dom.parent(node)?;
        Some(Self::new(parent, dom.index_in_parent(node)?))
    }

    /// Position immediately after `node`, in its parent.
    pub fn after(dom: &Dom, node: Id) -> Option<Self> {
        let parent = dom.parent(node)?;
        Some(Self::new(parent, dom.index_in_parent(node)? + 1))
    }

    pub fn from_range_start(range: &DomRange) -> Self {
        Self::new(range.start_container, range.start_offset)
    }

    pub fn from_range_end(range: &DomRange) -> Self {
        Self::new(range.end_container, range.end_offset)
    }

    pub fn to_range(self) -> DomRange {
        DomRange::collapsed_at(self.container, self.offset)
    }

    #[inline]
    pub fn is_at_start(&self) -> bool {
        self.offset == 0
    }

    pub fn is_at_end(&self, dom: &Dom) -> bool {
        self.offset >= dom.node_length(self.container)
    }

    /// The node the position points at. Element containers resolve the
    /// child after the caret, or the child before it when `before` is set;
    /// the index is clamped to the existing children. Text containers and
    /// empty elements resolve to the container itself.
    pub fn node(&self, dom: &Dom, before: bool) -> Id {
        let count = dom.child_count(self.container);
        if dom.is_text(self.container) || count == 0 {
            return self.container;
        }
        let index = if before {
            self.offset.saturating_sub(1)
        } else {
            self.offset
        };
        dom.child(self.container, index.min(count - 1))
            .unwrap_or(self.container)
    }

    /// Child of an element container relative to the caret: `0` is the
    /// child after it, `-1` the child before it. `None` for text
    /// containers and out-of-range indices.
    pub fn child_at_relative(&self, dom: &Dom, relative: isize) -> Option<Id> {
        if dom.is_text(self.container) {
            return None;
        }
        let index = self.offset.checked_add_signed(relative)?;
        dom.child(self.container, index)
    }

    /// Document-order comparison.
    pub fn compare(&self, dom: &Dom, other: &CaretPosition) -> Ordering {
        dom.compare_boundary_points(
            (self.container, self.offset),
            (other.container, other.offset),
        )
    }

    /// Zero-width rectangles where the caret renders at this position.
    pub fn client_rects(&self, dom: &Dom, rects: &dyn ClientRects) -> Vec<Rectangle> {
        self.caret_geometry(dom, rects).into_iter().collect()
    }

    /// The rectangle the caret is drawn with, if the position renders.
    pub fn caret_rect(&self, dom: &Dom, rects: &dyn ClientRects) -> Option<Rectangle> {
        self.caret_geometry(dom, rects)
    }

    pub fn is_visible(&self, dom: &Dom, rects: &dyn ClientRects) -> bool {
        self.caret_geometry(dom, rects).is_some()
    }

    fn caret_geometry(&self, dom: &Dom, rects: &dyn ClientRects) -> Option<Rectangle> {
        let container = self.container;
        if dom.is_text(container) {
            return if self.offset > 0 {
                rects
                    .char_rect(container, self.offset - 1)
                    .map(|r| r.collapse(true))
            } else {
                rects.char_rect(container, 0).map(|r| r.collapse(false))
            };
        }

        let after = self.child_at_relative(dom, 0);
        let before = self.child_at_relative(dom, -1);

        if let Some(node) = after.filter(|&n| renders_as_box(dom, n)) {
            if let Some(rect) = rects.node_rects(node).first() {
                return Some(rect.collapse(false));
            }
        }
        if let Some(node) = before.filter(|&n| is_atomic(dom, n) || is_table(dom, n)) {
            if let Some(rect) = rects.node_rects(node).last() {
                return Some(rect.collapse(true));
            }
        }
        if let Some(text) = after.filter(|&n| dom.is_text(n)) {
            if let Some(rect) = rects.char_rect(text, 0) {
                return Some(rect.collapse(false));
            }
        }
        if let Some(text) = before.filter(|&n| dom.is_text(n)) {
            let len = dom.text_len(text);
            if len > 0 {
                if let Some(rect) = rects.char_rect(text, len - 1) {
                    return Some(rect.collapse(true));
                }
            }
        }
        if dom.child_count(container) == 0 {
            return rects.node_rects(container).first().map(|r| r.collapse(false));
        }
        None
    }
}

fn renders_as_box(dom: &Dom, node: Id) -> bool {
    is_atomic(dom, node) || is_br(dom, node) || is_table(dom, node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fixture, path};

    #[test]
    fn node_resolution_clamps_to_children() {
        let f = fixture("<p>ab<img>cd</p><p></p>", 400.0);
        let dom = &f.dom;
        let p = path(dom, f.root, &[0]);
        let ab = path(dom, p, &[0]);
        let img = path(dom, p, &[1]);
        let cd = path(dom, p, &[2]);
        let empty = path(dom, f.root, &[1]);

        assert_eq!(CaretPosition::new(p, 1).node(dom, false), img);
        assert_eq!(CaretPosition::new(p, 1).node(dom, true), ab);
        assert_eq!(CaretPosition::new(p, 3).node(dom, false), cd);
        assert_eq!(CaretPosition::new(p, 0).node(dom, true), ab);
        assert_eq!(CaretPosition::new(ab, 1).node(dom, true), ab);
        assert_eq!(CaretPosition::new(empty, 0).node(dom, false), empty);

        assert_eq!(CaretPosition::new(p, 3).child_at_relative(dom, 0), None);
        assert_eq!(CaretPosition::new(p, 0).child_at_relative(dom, -1), None);
        assert_eq!(CaretPosition::new(ab, 1).child_at_relative(dom, 0), None);
        assert_eq!(CaretPosition::after(dom, img), Some(CaretPosition::new(p, 2)));
        assert!(CaretPosition::new(p, 3).is_at_end(dom));
        assert!(!CaretPosition::new(ab, 1).is_at_end(dom));
    }

    #[test]
    fn caret_rects_follow_adjacent_content() {
        let f = fixture(r#"<p>ab<video width="50"></video>cd</p><p></p>"#, 400.0);
        let dom = &f.dom;
        let p = path(dom, f.root, &[0]);
        let ab = path(dom, p, &[0]);
        let empty = path(dom, f.root, &[1]);
        let rect = |pos: CaretPosition| pos.caret_rect(dom, &f.layout).map(|r| (r.x, r.y, r.width));

        assert_eq!(rect(CaretPosition::new(ab, 0)), Some((0.0, 0.0, 0.0)));
        assert_eq!(rect(CaretPosition::new(ab, 2)), Some((20.0, 0.0, 0.0)));
        assert_eq!(rect(CaretPosition::new(p, 1)), Some((20.0, 0.0, 0.0)));
        assert_eq!(rect(CaretPosition::new(p, 2)), Some((70.0, 0.0, 0.0)));
        assert_eq!(rect(CaretPosition::new(p, 3)), Some((90.0, 0.0, 0.0)));
        assert_eq!(rect(CaretPosition::new(empty, 0)), Some((0.0, 40.0, 0.0)));
    }

    #[test]
    fn trailing_break_position_is_invisible() {
        let f = fixture("<p>e<br></p>", 400.0);
        let p = path(&f.dom, f.root, &[0]);
        assert!(CaretPosition::new(p, 1).is_visible(&f.dom, &f.layout));
        assert!(!CaretPosition::new(p, 2).is_visible(&f.dom, &f.layout));
    }

    #[test]
    fn compares_in_document_order() {
        let f = fixture("<p>ab<img>cd</p>", 400.0);
        let dom = &f.dom;
        let p = path(dom, f.root, &[0]);
        let ab = path(dom, p, &[0]);
        let cd = path(dom, p, &[2]);
        let a = CaretPosition::new(ab, 2);
        let b = CaretPosition::new(p, 1);
        let c = CaretPosition::new(cd, 0);
        assert_eq!(a.compare(dom, &b), Ordering::Less);
        assert_eq!(c.compare(dom, &b), Ordering::Greater);
        assert_eq!(b.compare(dom, &b), Ordering::Equal);
    }
}
