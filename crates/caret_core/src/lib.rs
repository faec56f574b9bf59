//! # caret_core
//!
//! The logical caret model used by keyboard navigation.
//!
//! - [`CaretPosition`]: an immutable `(container, offset)` caret location
//!   with geometry queries
//! - [`AtomicKind`]: the closed set of node categories the caret can only
//!   sit beside (non-editable islands, media, tables)
//! - [`CaretWalker`]: steps a position to the next/previous valid caret stop
//!   inside an editable root, plus a visual variant that collapses stops
//!   rendering at the same spot
//! - [`line_walker`]: lazy sequences of positions ordered by visual line
//! - [`line_reader`]: the positions of the current visual line
//!
//! ## Design Principles
//!
//! Nothing here holds state between calls. Every query reads the current
//! [`dom::Dom`] and the current [`layout::ClientRects`]; if layout is stale
//! the answers are based on the most recent render.

pub mod candidate;
pub mod geometry;
pub mod line_reader;
pub mod line_walker;
mod position;
mod predicates;
pub mod utils;
mod walker;

pub use position::CaretPosition;
pub use predicates::AtomicKind;
pub use walker::CaretWalker;

#[cfg(test)]
pub(crate) mod test_support;
