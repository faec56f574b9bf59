//! # navigation
//!
//! Arrow, Home and End key handling for a rich-text editing surface.
//!
//! Each key press runs one synchronous pass: read the host selection, compute
//! the next caret stop with [`caret_core`], then write one range back through
//! the host. Every entry point returns whether it handled the key; on `false`
//! the host applies its default behaviour.
//!
//! - [`non_editable`]: caret movement around `contenteditable="false"`
//!   islands, including the preformatted-block exit
//! - [`media`]: caret movement around embedded media
//! - [`keyboard::handle_key`]: ordered dispatch over both
//! - [`EditorHost`]: everything the core needs from the editor
//! - [`HeadlessEditor`]: an in-memory host with flow layout

pub mod bridge;
mod config;
mod events;
mod headless;
mod host;
pub mod keyboard;
pub mod media;
pub mod non_editable;
mod orchestrator;
pub mod pre;

pub use config::NavigationConfig;
pub use events::{EventOutcome, NavigationEvent};
pub use headless::{FakeCaret, HeadlessEditor, ScrollTarget};
pub use host::EditorHost;
pub use keyboard::{NavigationKey, UnknownKey};
pub use orchestrator::{BoundaryRule, move_horizontally, move_to_line_end_point, move_vertically};
