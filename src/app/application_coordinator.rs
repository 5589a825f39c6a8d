//! Application-level coordination and workflow management.
//!
//! Handles the workflows that cut across state components: workspace
//! registration, file open/save, sample loading, applying the editor
//! buffer to the shared slot, preview refresh, and the direct view jumps
//! offered by content panels. I/O failures land in the header's error
//! line; they never panic.

use std::path::PathBuf;
use std::time::Instant;

use dotdeck::{DotRenderer, GraphSketch, InitialSelection, SplitAxis, SAMPLES};
use tracing::{debug, info};

use crate::app::workspace::{
    workspace_fields, PREVIEW_TITLE, WORKSPACE_GROUP_ID, WRITE_TITLE,
};
use crate::app::AppState;
use crate::io;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Registers the workspace panel group. Called once at construction;
    /// the registry's idempotency guard absorbs accidental repeats.
    pub fn register_workspace(state: &AppState) {
        state.registry.register(
            WORKSPACE_GROUP_ID,
            &workspace_fields(),
            state.preferred_axis,
            InitialSelection::Single(0),
        );
    }

    /// Deregisters the workspace group on shutdown.
    pub fn deregister_workspace(state: &AppState) {
        state.registry.deregister(WORKSPACE_GROUP_ID);
    }

    /// Loads a DOT file into the editor and applies it to the slot.
    pub fn open_dot_file(state: &mut AppState, path: PathBuf) {
        match io::load_dot_file(&path) {
            Ok(source) => {
                info!(path = %path.display(), bytes = source.len(), "DOT file loaded");
                state.editor.set_buffer(source.clone());
                state.editor.set_file_path(Some(path));
                state.dot_source.apply(&source);
                state.editor.mark_applied();
                state.clear_error();
            }
            Err(e) => {
                state.set_error(format!("Error loading file: {:#}", e));
            }
        }
    }

    /// Saves the editor buffer to `path`.
    pub fn save_dot_file(state: &mut AppState, path: PathBuf) {
        match io::save_dot_file(&path, state.editor.buffer()) {
            Ok(()) => {
                info!(path = %path.display(), "DOT file saved");
                state.editor.set_file_path(Some(path));
                state.clear_error();
            }
            Err(e) => {
                state.set_error(format!("Error saving file: {:#}", e));
            }
        }
    }

    /// Copies the editor buffer into the shared slot, making it the
    /// current source the preview renders.
    pub fn apply_editor(state: &mut AppState) {
        let text = state.editor.buffer().to_string();
        state.dot_source.apply(&text);
        state.editor.mark_applied();
    }

    /// Resets the editor buffer to an empty graph skeleton.
    pub fn clear_editor(state: &mut AppState) {
        state.editor.set_buffer(crate::state::DEFAULT_DOT_SOURCE);
        state.editor.set_file_path(None);
    }

    /// Loads a curated sample into the editor and applies it.
    pub fn load_sample(state: &mut AppState, index: usize) {
        let Some(sample) = SAMPLES.get(index) else {
            state.set_error(format!("Sample {} does not exist", index));
            return;
        };
        info!(sample = sample.name, "curated sample loaded");
        state.editor.set_buffer(sample.source);
        state.editor.set_file_path(None);
        Self::apply_editor(state);
    }

    /// Generates a seeded random graph into the editor and applies it.
    /// The seed is embedded in the generated source, so any output can be
    /// reproduced later with `dotdeck-gen`.
    pub fn generate_sample(state: &mut AppState) {
        let sketch = GraphSketch {
            seed: rand::random(),
            ..GraphSketch::default()
        };
        info!(seed = sketch.seed, "sample graph generated");
        state.editor.set_buffer(sketch.generate());
        state.editor.set_file_path(None);
        Self::apply_editor(state);
    }

    /// Appends a snippet template to the editor buffer.
    pub fn insert_snippet(state: &mut AppState, snippet: &str) {
        state.editor.append_snippet(snippet);
    }

    /// Re-renders the preview when the slot has moved past the cached
    /// version. Called once per frame.
    pub fn refresh_preview(state: &mut AppState, renderer: &dyn DotRenderer) {
        let version = state.dot_source.version();
        if !state.preview.needs_refresh(version) {
            return;
        }

        let source = state.dot_source.current();
        let started = Instant::now();
        match renderer.render(&source) {
            Ok(graph) => {
                let millis = started.elapsed().as_secs_f64() * 1000.0;
                debug!(version, millis, "preview rendered");
                state.preview.store_success(version, graph, millis);
            }
            Err(e) => {
                debug!(version, error = %e, "preview render failed");
                state.preview.store_error(version, format!("{:#}", e));
            }
        }
    }

    /// Jumps the workspace straight to the editor/preview split, 3:2 on
    /// the column axis. The About panel's "show me" entry point.
    pub fn jump_to_write_and_preview(state: &AppState) {
        if let Some(handle) = state.registry.lookup(WORKSPACE_GROUP_ID) {
            let current = handle.get();
            if let Some(next) =
                current.jump_to_split(WRITE_TITLE, PREVIEW_TITLE, "3:2", SplitAxis::Column)
            {
                handle.set(next);
            }
        }
    }

    /// Jumps the workspace to a single panel by title.
    pub fn jump_to_single(state: &AppState, title: &str) {
        if let Some(handle) = state.registry.lookup(WORKSPACE_GROUP_ID) {
            let current = handle.get();
            if let Some(next) = current.jump_to_single(title) {
                handle.set(next);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotdeck::{DisplayMode, VirtualDotRenderer, WizardStep};

    #[test]
    fn test_register_workspace_is_idempotent() {
        let state = AppState::new();
        ApplicationCoordinator::register_workspace(&state);
        ApplicationCoordinator::register_workspace(&state);
        assert_eq!(state.registry.group_count(), 1);

        let group = state.registry.lookup(WORKSPACE_GROUP_ID).unwrap().get();
        assert_eq!(group.visible_titles(), (Some("About.."), None));
        assert_eq!(group.display_mode(), DisplayMode::Single);
    }

    #[test]
    fn test_apply_editor_moves_slot_version() {
        let mut state = AppState::new();
        state.editor.set_buffer("digraph A { x -> y; }");
        assert!(state.editor.is_dirty());

        ApplicationCoordinator::apply_editor(&mut state);
        assert_eq!(state.dot_source.current(), "digraph A { x -> y; }");
        assert!(!state.editor.is_dirty());
    }

    #[test]
    fn test_load_sample_applies_source() {
        let mut state = AppState::new();
        ApplicationCoordinator::load_sample(&mut state, 0);
        assert_eq!(state.dot_source.current(), SAMPLES[0].source);
        assert!(state.error_message.is_none());

        ApplicationCoordinator::load_sample(&mut state, 999);
        assert!(state.error_message.is_some());
    }

    #[test]
    fn test_refresh_preview_caches_by_version() {
        let mut state = AppState::new();
        let renderer = VirtualDotRenderer::new();

        ApplicationCoordinator::refresh_preview(&mut state, &renderer);
        assert!(!state.preview.needs_refresh(state.dot_source.version()));

        state.editor.set_buffer("graph Broken { a -- b");
        ApplicationCoordinator::apply_editor(&mut state);
        ApplicationCoordinator::refresh_preview(&mut state, &renderer);
        match state.preview.outcome() {
            Some(crate::state::RenderOutcome::Error(msg)) => {
                assert!(msg.contains("not well formed"));
            }
            _ => panic!("expected a cached render error"),
        }
    }

    #[test]
    fn test_jump_to_write_and_preview() {
        let mut state = AppState::new();
        ApplicationCoordinator::register_workspace(&state);
        ApplicationCoordinator::jump_to_write_and_preview(&mut state);

        let group = state.registry.lookup(WORKSPACE_GROUP_ID).unwrap().get();
        assert_eq!(group.display_mode(), DisplayMode::Split);
        assert_eq!(group.wizard_step(), WizardStep::Idle);
        assert_eq!(group.visible_titles(), (Some("Write.."), Some("Preview..")));
        assert_eq!(group.split_ratio(), "3:2");
    }
}
