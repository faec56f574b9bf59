//! Caret candidates: the nodes a caret can stop in or beside.

use dom::classify::{
    is_atomic_inline, is_br, is_content_editable_false, is_content_editable_true, is_table,
    is_zwsp_text,
};
use dom::{Dom, Id};

/// Nodes the caret may only sit beside, never inside.
pub fn is_atomic(dom: &Dom, node: Id) -> bool {
    is_atomic_inline(dom, node) || is_content_editable_false(dom, node)
}

/// Non-empty text (caret containers excluded), atomic nodes, line breaks
/// and tables.
pub fn is_caret_candidate(dom: &Dom, node: Id) -> bool {
    if dom.is_text(node) {
        return dom.text_len(node) > 0 && !is_zwsp_text(dom, node);
    }
    is_atomic(dom, node) || is_br(dom, node) || is_table(dom, node)
}

/// Whether the nearest content-editable ancestor below `root` allows editing.
pub fn is_in_editable(dom: &Dom, node: Id, root: Id) -> bool {
    for ancestor in dom.ancestors(node) {
        if ancestor == root {
            break;
        }
        if is_content_editable_false(dom, ancestor) {
            return false;
        }
        if is_content_editable_true(dom, ancestor) {
            return true;
        }
    }
    true
}

pub fn is_editable_caret_candidate(dom: &Dom, node: Id, root: Id) -> bool {
    is_caret_candidate(dom, node) && is_in_editable(dom, node, root)
}

/// The outermost non-editable element containing `node` (inclusive), below
/// `root`.
pub fn outermost_non_editable(dom: &Dom, node: Id, root: Id) -> Option<Id> {
    let mut found = None;
    let mut current = Some(node);
    while let Some(id) = current {
        if id == root {
            break;
        }
        if is_content_editable_false(dom, id) {
            found = Some(id);
        }
        current = dom.parent(id);
    }
    found
}
