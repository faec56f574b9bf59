//! Caret movement around embedded media.

use crate::bridge::move_to_range;
use crate::{BoundaryRule, EditorHost, move_horizontally, move_vertically};
use caret_core::AtomicKind;
use core_types::{HDirection, VDirection};
use dom::DomRange;

fn apply(host: &mut dyn EditorHost, moved: Option<DomRange>) -> bool {
    match moved {
        Some(range) => {
            move_to_range(host, range);
            true
        }
        None => false,
    }
}

pub fn move_h(host: &mut dyn EditorHost, forward: bool) -> bool {
    let range = host.selection();
    let moved = move_horizontally(
        host,
        HDirection::from_forward(forward),
        &range,
        &BoundaryRule::MEDIA,
    );
    apply(host, moved)
}

pub fn move_v(host: &mut dyn EditorHost, down: bool) -> bool {
    let range = host.selection();
    let moved = move_vertically(host, VDirection::from_down(down), &range, &BoundaryRule::MEDIA);
    apply(host, moved)
}

pub fn move_to_line_end_point(host: &mut dyn EditorHost, forward: bool) -> bool {
    crate::move_to_line_end_point(host, forward, |dom, pos| {
        if forward {
            AtomicKind::Media.is_after(dom, pos)
        } else {
            AtomicKind::Media.is_before(dom, pos)
        }
    })
}
