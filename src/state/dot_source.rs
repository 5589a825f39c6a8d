//! The shared current-DOT-source slot.
//!
//! The editor, the preview, and anything else interested in "the graph as
//! currently applied" coordinate through this single observable value. The
//! editor keeps its own local buffer and copies it here only on explicit
//! apply, so half-typed sources never hit the renderer.

use dotdeck::Observable;

/// Default source shown before the user writes anything.
pub const DEFAULT_DOT_SOURCE: &str = "graph G {\n  \n}";

/// Wrapper around the shared DOT source cell.
pub struct DotSourceState {
    slot: Observable<String>,
}

impl Default for DotSourceState {
    fn default() -> Self {
        Self::new()
    }
}

impl DotSourceState {
    pub fn new() -> Self {
        Self {
            slot: Observable::new(DEFAULT_DOT_SOURCE.to_string()),
        }
    }

    /// Returns a clone of the current source.
    pub fn current(&self) -> String {
        self.slot.get()
    }

    /// Replaces the source whole. Applying text equal to the current value
    /// is a no-op, so the version only moves on real change.
    pub fn apply(&self, text: &str) {
        self.slot.set(text.to_string());
    }

    /// Effective-replacement counter; drives the preview cache.
    pub fn version(&self) -> u64 {
        self.slot.version()
    }

    /// Byte length of the current source.
    pub fn byte_len(&self) -> usize {
        self.slot.with(|s| s.len())
    }
}
