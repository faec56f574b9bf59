//! # dom
//!
//! The live content tree consumed by the caret crates.
//!
//! - [`Dom`]: arena of nodes with parent/child links and insertion primitives
//! - [`DomRange`]: a native-style selection range over boundary points
//! - [`classify`]: content classification (editability, media, tables, blocks)
//! - [`Dom::parse_into`] / [`Dom::to_markup`]: a small markup parser and serializer
//!
//! Node handles are plain [`Id`] values. They stay valid for the lifetime of
//! the `Dom`; removing a node only detaches it.

mod arena;
pub mod classify;
mod error;
mod parse;
mod range;
mod serialize;
mod types;

pub use arena::{Ancestors, Dom, Placement};
pub use error::DomError;
pub use range::DomRange;
pub use types::{Id, NodeId, NodeKind};
