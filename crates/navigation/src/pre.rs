//! Leaving a preformatted block at the edge of the document.

use crate::EditorHost;
use crate::bridge::move_to_range;
use caret_core::{CaretPosition, CaretWalker};
use core_types::HDirection;
use dom::classify::{BOGUS_ATTR, is_pre};
use dom::{DomError, DomRange, Placement};

/// When the caret sits in a `<pre>` with no caret stop left in `direction`,
/// insert an empty root block beside the `<pre>` and move the caret into it.
///
/// Returns `Ok(true)` when a block was inserted. Nothing happens for
/// expanded ranges or when no root block name is configured.
pub fn exit_pre_block(
    host: &mut dyn EditorHost,
    direction: HDirection,
    range: &DomRange,
) -> Result<bool, DomError> {
    let Some(block_name) = host.config().root_block_name().map(str::to_owned) else {
        return Ok(false);
    };
    if !range.is_collapsed() {
        return Ok(false);
    }

    let pre = {
        let dom = host.dom();
        let root = host.editable_root();
        let Some(pre) = std::iter::once(range.start_container)
            .chain(dom.ancestors(range.start_container))
            .take_while(|&n| n != root)
            .find(|&n| is_pre(dom, n))
        else {
            return Ok(false);
        };
        let walker = CaretWalker::new(dom, root);
        let start = CaretPosition::from_range_start(range);
        if walker
            .visual_step(direction, start, host.client_rects())
            .is_some()
        {
            return Ok(false);
        }
        pre
    };

    let block = host.create_element(&block_name, &[]);
    let filler = host.create_element("br", &[(BOGUS_ATTR, "1")]);
    host.append_child(block, filler)?;
    let placement = match direction {
        HDirection::Forwards => Placement::After,
        HDirection::Backwards => Placement::Before,
    };
    host.insert_adjacent(pre, block, placement)?;
    log::debug!(target: "navigation", "left <pre> {pre:?} into new <{block_name}> {block:?}");

    move_to_range(host, DomRange::collapsed_at(block, 0));
    Ok(true)
}
