//! dotdeck GUI Application
//!
//! An interactive DOT authoring workbench built on the egui framework.
//! The shell features:
//! - A keyed panel-group workspace (single panel or two-panel split)
//! - A detached remote control steering the workspace through shared state
//! - A DOT editor with file open/save and snippet insertion
//! - A schematic preview driven by a pluggable render engine
//! - Curated and seeded random sample graphs

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `io/` - DOT file loading and saving
//! - `state/` - Focused state components (source slot, editor, preview)
//! - `ui/` - UI panel rendering and interaction
//! - `utils/` - Utility functions for formatting

use eframe::egui;
use std::path::PathBuf;

mod app;
mod io;
mod state;
mod ui;
mod utils;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator};
use dotdeck::{DotRenderer, SplitAxis, VirtualDotRenderer};
use ui::panel_manager::{PanelInteraction, PanelManager};

const AXIS_KEY: &str = "preferred_axis";
const WORD_WRAP_KEY: &str = "word_wrap";
const EDITOR_BUFFER_KEY: &str = "editor_buffer";

/// Main application entry point that initializes and launches the dotdeck GUI.
fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Parse command-line arguments to check for an initial file to load
    let initial_file = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("dotdeck"),
        ..Default::default()
    };

    eframe::run_native(
        "dotdeck",
        options,
        Box::new(move |cc| Ok(Box::new(DotDeckApp::new(cc, initial_file)))),
    )
}

/// The main dotdeck application.
///
/// A thin shell delegating most functionality to coordinators:
/// - `ApplicationCoordinator` handles file I/O, samples, and view jumps
/// - `SettingsCoordinator` handles preference persistence
/// - `PanelManager` handles UI panel layout and rendering
struct DotDeckApp {
    /// Centralized application state
    state: AppState,
    /// The render engine behind the preview panel
    renderer: VirtualDotRenderer,
    /// Optional file to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl DotDeckApp {
    /// Creates a new shell instance with preferences restored from
    /// persistent storage. Optionally accepts an initial file path to load
    /// on startup.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Self {
        let preferred_axis: SplitAxis =
            SettingsCoordinator::load_setting_or(cc.storage, AXIS_KEY, SplitAxis::default());
        let word_wrap: bool =
            SettingsCoordinator::load_setting_or(cc.storage, WORD_WRAP_KEY, true);
        let saved_buffer: Option<String> =
            SettingsCoordinator::try_load_setting(cc.storage, EDITOR_BUFFER_KEY);

        let state = AppState::with_settings(preferred_axis, word_wrap, saved_buffer);
        ApplicationCoordinator::register_workspace(&state);

        Self {
            state,
            renderer: VirtualDotRenderer::new(),
            pending_file_load: initial_file,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_dot_file(&mut self.state, path);
            }
            PanelInteraction::SaveFileRequested(path) => {
                ApplicationCoordinator::save_dot_file(&mut self.state, path);
            }
            PanelInteraction::ApplyRequested => {
                ApplicationCoordinator::apply_editor(&mut self.state);
            }
            PanelInteraction::ClearRequested => {
                ApplicationCoordinator::clear_editor(&mut self.state);
            }
            PanelInteraction::GenerateSampleRequested => {
                ApplicationCoordinator::generate_sample(&mut self.state);
            }
            PanelInteraction::LoadSampleRequested(index) => {
                ApplicationCoordinator::load_sample(&mut self.state, index);
            }
            PanelInteraction::InsertSnippetRequested(snippet) => {
                ApplicationCoordinator::insert_snippet(&mut self.state, snippet);
            }
            PanelInteraction::JumpToWriteAndPreview => {
                ApplicationCoordinator::jump_to_write_and_preview(&self.state);
            }
            PanelInteraction::JumpToSingleRequested(title) => {
                ApplicationCoordinator::jump_to_single(&self.state, title);
            }
        }
    }
}

impl eframe::App for DotDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_dot_file(&mut self.state, path);
        }

        ApplicationCoordinator::refresh_preview(&mut self.state, &self.renderer);

        if let Some(interaction) =
            PanelManager::render_all_panels(ctx, &mut self.state, self.renderer.engine_name())
        {
            self.handle_panel_interaction(interaction);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let axis = self
            .state
            .registry
            .lookup(app::workspace::WORKSPACE_GROUP_ID)
            .map(|handle| handle.get().axis())
            .unwrap_or(self.state.preferred_axis);
        SettingsCoordinator::save_setting(storage, AXIS_KEY, &axis);
        SettingsCoordinator::save_setting(storage, WORD_WRAP_KEY, &self.state.editor.word_wrap());
        SettingsCoordinator::save_setting(
            storage,
            EDITOR_BUFFER_KEY,
            &self.state.editor.buffer(),
        );
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        ApplicationCoordinator::deregister_workspace(&self.state);
    }
}
