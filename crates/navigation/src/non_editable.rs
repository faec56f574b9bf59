//! Caret movement around `contenteditable="false"` islands.
//!
//! Reaching an island from either side selects it; pressing on while it is
//! selected puts a caret marker on its far side. A caret stuck at the edge
//! of a `<pre>` block leaves it through [`exit_pre_block`].

use crate::bridge::move_to_range;
use crate::pre::exit_pre_block;
use crate::{BoundaryRule, EditorHost, move_horizontally, move_vertically};
use caret_core::AtomicKind;
use core_types::{HDirection, VDirection};
use dom::DomRange;

fn finish(
    host: &mut dyn EditorHost,
    moved: Option<DomRange>,
    direction: HDirection,
    range: &DomRange,
) -> bool {
    if let Some(new_range) = moved {
        move_to_range(host, new_range);
        return true;
    }
    match exit_pre_block(host, direction, range) {
        Ok(exited) => exited,
        Err(err) => {
            log::warn!(target: "navigation", "failed to leave preformatted block: {err}");
            false
        }
    }
}

/// Left (`forward == false`) or Right.
pub fn move_h(host: &mut dyn EditorHost, forward: bool) -> bool {
    let direction = HDirection::from_forward(forward);
    let range = host.selection();
    let moved = move_horizontally(host, direction, &range, &BoundaryRule::NON_EDITABLE);
    finish(host, moved, direction, &range)
}

/// Up (`down == false`) or Down.
pub fn move_v(host: &mut dyn EditorHost, down: bool) -> bool {
    let direction = VDirection::from_down(down);
    let range = host.selection();
    let moved = move_vertically(host, direction, &range, &BoundaryRule::NON_EDITABLE_VERTICAL);
    finish(host, moved, direction.to_horizontal(), &range)
}

/// Home (`forward == false`) or End, when the line edge touches an island.
pub fn move_to_line_end_point(host: &mut dyn EditorHost, forward: bool) -> bool {
    crate::move_to_line_end_point(host, forward, |dom, pos| {
        if forward {
            AtomicKind::NonEditable.is_after(dom, pos)
        } else {
            AtomicKind::NonEditable.is_before(dom, pos)
        }
    })
}
