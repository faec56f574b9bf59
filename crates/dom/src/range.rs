use crate::{Dom, Id};

/// A selection range between two boundary points, as a browser exposes it.
///
/// The range is not normalized: `start` may sit after `end` if the caller
/// built it that way. Offsets count characters in text containers and
/// children in element containers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DomRange {
    pub start_container: Id,
    pub start_offset: usize,
    pub end_container: Id,
    pub end_offset: usize,
}

impl DomRange {
    pub fn new(start_container: Id, start_offset: usize, end_container: Id, end_offset: usize) -> Self {
        Self {
            start_container,
            start_offset,
            end_container,
            end_offset,
        }
    }

    pub fn collapsed_at(container: Id, offset: usize) -> Self {
        Self::new(container, offset, container, offset)
    }

    /// Range wrapping exactly `node`, expressed in its parent.
    pub fn select_node(dom: &Dom, node: Id) -> Option<Self> {
        let parent = dom.parent(node)?;
        let index = dom.index_in_parent(node)?;
        Some(Self::new(parent, index, parent, index + 1))
    }

    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.start_container == self.end_container && self.start_offset == self.end_offset
    }

    pub fn start(&self) -> (Id, usize) {
        (self.start_container, self.start_offset)
    }

    pub fn end(&self) -> (Id, usize) {
        (self.end_container, self.end_offset)
    }

    /// Collapse to one of the endpoints.
    pub fn collapse(self, to_start: bool) -> Self {
        if to_start {
            Self::collapsed_at(self.start_container, self.start_offset)
        } else {
            Self::collapsed_at(self.end_container, self.end_offset)
        }
    }

    /// The single element a range wraps, if it wraps exactly one child.
    pub fn selected_node(&self, dom: &Dom) -> Option<Id> {
        if self.start_container != self.end_container
            || self.end_offset != self.start_offset + 1
            || dom.is_text(self.start_container)
        {
            return None;
        }
        dom.child(self.start_container, self.start_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_node_round_trips_through_selected_node() {
        let mut dom = Dom::new();
        let p = dom.create_element("p", Vec::new());
        let a = dom.create_text("a");
        let img = dom.create_element("img", Vec::new());
        dom.append_child(dom.document(), p).unwrap();
        dom.append_child(p, a).unwrap();
        dom.append_child(p, img).unwrap();

        let range = DomRange::select_node(&dom, img).unwrap();
        assert_eq!(range, DomRange::new(p, 1, p, 2));
        assert!(!range.is_collapsed());
        assert_eq!(range.selected_node(&dom), Some(img));
        assert_eq!(range.collapse(true), DomRange::collapsed_at(p, 1));
        assert_eq!(range.collapse(false), DomRange::collapsed_at(p, 2));
    }

    #[test]
    fn text_spans_select_no_node() {
        let mut dom = Dom::new();
        let t = dom.create_text("abc");
        let range = DomRange::new(t, 0, t, 1);
        assert_eq!(range.selected_node(&dom), None);
        assert!(DomRange::collapsed_at(t, 2).is_collapsed());
    }
}
