use crate::CaretPosition;
use dom::classify::{is_content_editable_false, is_media, is_table};
use dom::{Dom, Id};

/// Node categories the caret can stand beside but never enter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AtomicKind {
    /// `contenteditable="false"` islands.
    NonEditable,
    /// Embedded media: video, audio, iframe, object, embed.
    Media,
    Table,
}

impl AtomicKind {
    pub const ALL: [AtomicKind; 3] = [AtomicKind::NonEditable, AtomicKind::Media, AtomicKind::Table];

    pub fn matches(self, dom: &Dom, node: Id) -> bool {
        match self {
            AtomicKind::NonEditable => is_content_editable_false(dom, node),
            AtomicKind::Media => is_media(dom, node),
            AtomicKind::Table => is_table(dom, node),
        }
    }

    /// First category `node` belongs to, in declaration order.
    pub fn classify(dom: &Dom, node: Id) -> Option<AtomicKind> {
        Self::ALL.into_iter().find(|kind| kind.matches(dom, node))
    }

    /// The position sits directly before a node of this kind.
    pub fn is_before(self, dom: &Dom, pos: &CaretPosition) -> bool {
        pos.child_at_relative(dom, 0)
            .is_some_and(|node| self.matches(dom, node))
    }

    /// The position sits directly after a node of this kind.
    pub fn is_after(self, dom: &Dom, pos: &CaretPosition) -> bool {
        pos.child_at_relative(dom, -1)
            .is_some_and(|node| self.matches(dom, node))
    }
}
