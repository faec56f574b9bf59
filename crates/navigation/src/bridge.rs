//! Writing navigation results back to the host selection.

use crate::{EditorHost, NavigationEvent};
use caret_core::CaretPosition;
use caret_core::utils::{content_editable_root, normalize_range};
use core_types::HDirection;
use dom::classify::{is_content_editable_false, is_media};
use dom::{Dom, DomRange, Id};

/// Nodes the host draws a caret marker beside instead of a native caret.
fn is_inline_fake_caret_target(dom: &Dom, node: Id) -> bool {
    is_content_editable_false(dom, node) || is_media(dom, node)
}

/// Show a caret marker beside `node` unless a `ShowCaret` listener vetoes
/// it. Returns the collapsed range the marker stands for.
pub fn show_caret(
    host: &mut dyn EditorHost,
    direction: HDirection,
    node: Id,
    before: bool,
    scroll: bool,
) -> Option<DomRange> {
    let outcome = host.fire(&NavigationEvent::ShowCaret {
        target: node,
        direction,
        before,
    });
    if outcome.is_default_prevented() {
        log::debug!(target: "navigation", "caret beside {node:?} prevented by listener");
        return None;
    }
    if scroll && host.config().scroll_into_view {
        host.scroll_node_into_view(node);
    }
    host.show_caret_indicator(direction, node, before)
}

/// Range wrapping `node`, unless a `BeforeObjectSelected` listener vetoes
/// the selection.
pub fn select_node(host: &mut dyn EditorHost, node: Id) -> Option<DomRange> {
    let outcome = host.fire(&NavigationEvent::BeforeObjectSelected { target: node });
    if outcome.is_default_prevented() {
        log::debug!(target: "navigation", "selecting {node:?} prevented by listener");
        return None;
    }
    DomRange::select_node(host.dom(), node)
}

/// Apply `range` as the selection and bring it into view.
pub fn move_to_range(host: &mut dyn EditorHost, range: DomRange) {
    host.set_selection(range);
    let applied = host.selection();
    if host.config().scroll_into_view {
        host.scroll_into_view(&applied);
    }
}

/// Show a caret marker when a collapsed range touches an island or media
/// element, or lies inside an island.
pub fn render_caret_at_range(host: &mut dyn EditorHost, range: &DomRange) -> Option<DomRange> {
    let (node, before, scroll) = {
        let dom = host.dom();
        let root = host.editable_root();
        let normalized = normalize_range(dom, HDirection::Forwards, range);
        let pos = CaretPosition::from_range_start(&normalized);
        let after_caret = pos.node(dom, false);
        let before_caret = pos.node(dom, true);

        if is_inline_fake_caret_target(dom, after_caret) {
            (after_caret, !pos.is_at_end(dom), false)
        } else if is_inline_fake_caret_target(dom, before_caret) {
            (before_caret, false, false)
        } else {
            let editable_root = content_editable_root(dom, after_caret, root)?;
            if !is_content_editable_false(dom, editable_root) {
                return None;
            }
            (editable_root, false, true)
        }
    };
    show_caret(host, HDirection::Forwards, node, before, scroll)
}

/// Collapsed ranges go through [`render_caret_at_range`]; anything it
/// declines is returned as given.
pub fn render_range_caret(host: &mut dyn EditorHost, range: &DomRange) -> DomRange {
    if !range.is_collapsed() {
        return *range;
    }
    render_caret_at_range(host, range).unwrap_or(*range)
}
