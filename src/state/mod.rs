//! State management modules for the dotdeck shell.
//!
//! This module contains state-only logic (no UI concerns):
//! - DOT source state (the shared current-value slot)
//! - Editor state (local buffer, word wrap, associated file)
//! - Preview state (version-stamped render cache)

mod dot_source;
mod editor;
mod preview;

pub use dot_source::{DotSourceState, DEFAULT_DOT_SOURCE};
pub use editor::EditorState;
pub use preview::{PreviewState, RenderOutcome};
