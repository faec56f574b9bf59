//! Content classification used by the caret model.
//!
//! All predicates are pure functions of a node; non-elements answer `false`
//! unless stated otherwise.

use crate::{Dom, Id};

/// Zero width space, the content of inline caret containers.
pub const ZWSP: char = '\u{200B}';

/// Attribute marking a transient caret container block.
pub const CARET_ATTR: &str = "data-mce-caret";

/// Attribute marking editor-internal filler nodes.
pub const BOGUS_ATTR: &str = "data-mce-bogus";

const BLOCK_ELEMENTS: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "body",
    "caption",
    "dd",
    "div",
    "dl",
    "dt",
    "figcaption",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "li",
    "main",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "tbody",
    "td",
    "tfoot",
    "th",
    "thead",
    "tr",
    "ul",
];

const MEDIA_ELEMENTS: &[&str] = &["video", "audio", "iframe", "object", "embed"];

const ATOMIC_INLINE_ELEMENTS: &[&str] = &["img", "input", "textarea", "hr"];

pub(crate) const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

fn name_in(dom: &Dom, node: Id, names: &[&str]) -> bool {
    dom.name(node).is_some_and(|n| names.contains(&n))
}

fn is_named(dom: &Dom, node: Id, name: &str) -> bool {
    dom.name(node) == Some(name)
}

pub fn is_content_editable_false(dom: &Dom, node: Id) -> bool {
    dom.attr(node, "contenteditable")
        .is_some_and(|v| v.eq_ignore_ascii_case("false"))
}

pub fn is_content_editable_true(dom: &Dom, node: Id) -> bool {
    dom.attr(node, "contenteditable")
        .is_some_and(|v| v.is_empty() || v.eq_ignore_ascii_case("true"))
}

pub fn is_media(dom: &Dom, node: Id) -> bool {
    name_in(dom, node, MEDIA_ELEMENTS)
}

pub fn is_table(dom: &Dom, node: Id) -> bool {
    is_named(dom, node, "table")
}

pub fn is_br(dom: &Dom, node: Id) -> bool {
    is_named(dom, node, "br")
}

pub fn is_pre(dom: &Dom, node: Id) -> bool {
    is_named(dom, node, "pre")
}

pub fn is_block(dom: &Dom, node: Id) -> bool {
    name_in(dom, node, BLOCK_ELEMENTS)
}

/// Inline elements the caret can only sit beside: replaced content and
/// embedded media.
pub fn is_atomic_inline(dom: &Dom, node: Id) -> bool {
    name_in(dom, node, ATOMIC_INLINE_ELEMENTS) || is_media(dom, node)
}

/// Elements that render as a fixed-size box.
pub fn is_replaced(dom: &Dom, node: Id) -> bool {
    is_atomic_inline(dom, node) && !is_named(dom, node, "hr")
}

pub fn is_bogus(dom: &Dom, node: Id) -> bool {
    dom.has_attr(node, BOGUS_ATTR)
}

pub fn is_void(dom: &Dom, node: Id) -> bool {
    name_in(dom, node, VOID_ELEMENTS)
}

/// A block hosting the caret next to an island, tagged `data-mce-caret`
/// with `before` or `after`.
pub fn is_caret_container_block(dom: &Dom, node: Id) -> bool {
    dom.has_attr(node, CARET_ATTR) && is_block(dom, node)
}

/// A text node made only of zero width spaces.
pub fn is_zwsp_text(dom: &Dom, node: Id) -> bool {
    dom.text(node)
        .is_some_and(|t| !t.is_empty() && t.chars().all(|c| c == ZWSP))
}

pub fn is_caret_container(dom: &Dom, node: Id) -> bool {
    is_zwsp_text(dom, node) || is_caret_container_block(dom, node)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(dom: &mut Dom, name: &str, attrs: &[(&str, Option<&str>)]) -> Id {
        let attrs = attrs
            .iter()
            .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
            .collect();
        dom.create_element(name, attrs)
    }

    #[test]
    fn classifies_editability_flags() {
        let mut dom = Dom::new();
        let f = el(&mut dom, "span", &[("contenteditable", Some("FALSE"))]);
        let t = el(&mut dom, "div", &[("contenteditable", None)]);
        let plain = el(&mut dom, "div", &[]);
        assert!(is_content_editable_false(&dom, f));
        assert!(!is_content_editable_true(&dom, f));
        assert!(is_content_editable_true(&dom, t));
        assert!(!is_content_editable_false(&dom, plain));
        assert!(!is_content_editable_true(&dom, plain));
    }

    #[test]
    fn classifies_atomic_content() {
        let mut dom = Dom::new();
        let video = el(&mut dom, "video", &[]);
        let img = el(&mut dom, "img", &[]);
        let table = el(&mut dom, "table", &[]);
        let hr = el(&mut dom, "hr", &[]);
        assert!(is_media(&dom, video) && is_atomic_inline(&dom, video));
        assert!(!is_media(&dom, img) && is_atomic_inline(&dom, img));
        assert!(is_table(&dom, table) && !is_atomic_inline(&dom, table));
        assert!(is_atomic_inline(&dom, hr) && !is_replaced(&dom, hr) && is_block(&dom, hr));
    }

    #[test]
    fn detects_caret_containers() {
        let mut dom = Dom::new();
        let zwsp = dom.create_text("\u{200B}");
        let text = dom.create_text("a\u{200B}");
        let empty = dom.create_text("");
        let block = el(&mut dom, "p", &[(CARET_ATTR, Some("before"))]);
        let span = el(&mut dom, "span", &[(CARET_ATTR, Some("before"))]);
        assert!(is_caret_container(&dom, zwsp));
        assert!(!is_caret_container(&dom, text));
        assert!(!is_caret_container(&dom, empty));
        assert!(is_caret_container(&dom, block));
        assert!(!is_caret_container(&dom, span));
    }
}
