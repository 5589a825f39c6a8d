//! Preview panel state: version-stamped render cache.
//!
//! The preview re-renders only when the shared DOT slot's version moves
//! past the version it last rendered; both success and failure are cached
//! against that version so a broken source is not re-rendered every frame.

use dotdeck::RenderedGraph;

/// Outcome of the last render pass.
pub enum RenderOutcome {
    Success {
        graph: RenderedGraph,
        render_millis: f64,
    },
    Error(String),
}

/// State related to the Preview.. panel.
#[derive(Default)]
pub struct PreviewState {
    /// Cached outcome of the last render, if any.
    outcome: Option<RenderOutcome>,
    /// Slot version the cached outcome corresponds to.
    rendered_version: Option<u64>,
}

impl PreviewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the slot has moved past what the cache reflects.
    pub fn needs_refresh(&self, slot_version: u64) -> bool {
        self.rendered_version != Some(slot_version)
    }

    pub fn store_success(&mut self, slot_version: u64, graph: RenderedGraph, render_millis: f64) {
        self.outcome = Some(RenderOutcome::Success {
            graph,
            render_millis,
        });
        self.rendered_version = Some(slot_version);
    }

    pub fn store_error(&mut self, slot_version: u64, message: String) {
        self.outcome = Some(RenderOutcome::Error(message));
        self.rendered_version = Some(slot_version);
    }

    pub fn outcome(&self) -> Option<&RenderOutcome> {
        self.outcome.as_ref()
    }

    /// Drops the cache so the next frame re-renders unconditionally.
    pub fn invalidate(&mut self) {
        self.outcome = None;
        self.rendered_version = None;
    }
}
