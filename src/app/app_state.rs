//! Centralized application state for the dotdeck shell.
//!
//! Composes focused state components, each owning one aspect of the app:
//! the panel registry (the engine's shared state), the DOT source slot,
//! the editor buffer, and the preview cache. Keeping them separate keeps
//! invariants local and borrow-checker friendly.

use dotdeck::{PanelRegistry, SplitAxis};

use crate::state::{DotSourceState, EditorState, PreviewState};

/// Main application state composed of focused state components.
pub struct AppState {
    /// The panel-group registry. A cloneable handle; the workspace widget
    /// and the remote control address it purely by group id.
    pub registry: PanelRegistry,

    /// The shared current-DOT-source slot.
    pub dot_source: DotSourceState,

    /// Editor buffer and preferences.
    pub editor: EditorState,

    /// Version-stamped render cache.
    pub preview: PreviewState,

    /// Preferred split axis, persisted across runs and used when the
    /// workspace group registers.
    pub preferred_axis: SplitAxis,

    /// Current error message to display (if any).
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self {
            registry: PanelRegistry::new(),
            dot_source: DotSourceState::new(),
            editor: EditorState::new(),
            preview: PreviewState::new(),
            preferred_axis: SplitAxis::default(),
            error_message: None,
        }
    }

    /// Creates a new AppState with settings restored from storage.
    pub fn with_settings(
        preferred_axis: SplitAxis,
        word_wrap: bool,
        saved_buffer: Option<String>,
    ) -> Self {
        Self {
            registry: PanelRegistry::new(),
            dot_source: DotSourceState::new(),
            editor: EditorState::with_restored(saved_buffer, word_wrap),
            preview: PreviewState::new(),
            preferred_axis,
            error_message: None,
        }
    }

    /// Records a shell-level failure for the header's error line.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}
