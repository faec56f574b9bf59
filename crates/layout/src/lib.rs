//! # layout
//!
//! Geometry for caret navigation.
//!
//! - [`ClientRects`]: the rendered-geometry contract (node boxes and
//!   per-character boxes) the caret model queries
//! - [`FlowLayout`]: a deterministic flow engine implementing that contract
//!   for a [`dom::Dom`] subtree
//!
//! All coordinates are CSS px with the origin at the layout root's top-left.

mod flow;
mod geometry;
mod measure;

pub use flow::{FlowLayout, FlowLayoutOptions};
pub use geometry::Rectangle;
pub use measure::{FixedWidthMeasurer, TextMeasurer};

use dom::Id;

/// Rendered geometry of the content tree.
pub trait ClientRects {
    /// Border boxes of `node`, one per line fragment, in document order.
    /// Empty when the node is not rendered.
    fn node_rects(&self, node: Id) -> Vec<Rectangle>;

    /// Box of the `index`th character of a text node.
    fn char_rect(&self, text: Id, index: usize) -> Option<Rectangle>;
}
