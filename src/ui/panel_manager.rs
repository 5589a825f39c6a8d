//! Panel orchestration and layout management.
//!
//! Coordinates the header, the workspace panel group, and the status bar,
//! funneling every panel's interaction into one enum the application
//! coordinator handles.

use eframe::egui;

use crate::app::workspace::{self, SectionKind, WORKSPACE_GROUP_ID};
use crate::app::AppState;
use crate::ui::{
    about_panel, edu_dot_panel, edu_graphs_panel, header, insert_panel, panel_group,
    preview_panel, status_bar, writer_panel,
};

/// Result of panel interactions that need to be handled by the
/// application coordinator.
pub enum PanelInteraction {
    /// User picked a DOT file to open
    OpenFileRequested(std::path::PathBuf),
    /// User picked a destination for the editor buffer
    SaveFileRequested(std::path::PathBuf),
    /// Apply the editor buffer to the shared slot
    ApplyRequested,
    /// Reset the editor buffer
    ClearRequested,
    /// Generate a random sample graph into the editor
    GenerateSampleRequested,
    /// Load a curated sample into the editor
    LoadSampleRequested(usize),
    /// Append a snippet template to the editor buffer
    InsertSnippetRequested(&'static str),
    /// Jump the workspace to the Write/Preview split
    JumpToWriteAndPreview,
    /// Jump the workspace to a single panel by title
    JumpToSingleRequested(&'static str),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called
    /// from the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        engine_name: &str,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header::HeaderInteraction::GenerateSampleRequested) =
                header::render_header(ui, state)
            {
                interaction = Some(PanelInteraction::GenerateSampleRequested);
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        let workspace_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default()
            .frame(workspace_frame)
            .show(ctx, |ui| {
                // The registry handle is cheap to clone and lets the draw
                // closure borrow the rest of the state mutably.
                let registry = state.registry.clone();
                let panels = workspace::workspace_panels();
                panel_group::render_panel_group(
                    ui,
                    &registry,
                    WORKSPACE_GROUP_ID,
                    &panels,
                    |ui, section| {
                        if let Some(i) = Self::render_section(ui, state, engine_name, *section) {
                            interaction = Some(i);
                        }
                    },
                );
            });

        interaction
    }

    /// Renders one workspace section's content and maps its interaction
    /// into the shared enum.
    fn render_section(
        ui: &mut egui::Ui,
        state: &mut AppState,
        engine_name: &str,
        section: SectionKind,
    ) -> Option<PanelInteraction> {
        match section {
            SectionKind::About => {
                about_panel::render_about_panel(ui).map(|i| match i {
                    about_panel::AboutInteraction::JumpToWriteAndPreview => {
                        PanelInteraction::JumpToWriteAndPreview
                    }
                    about_panel::AboutInteraction::JumpToDotGuide => {
                        PanelInteraction::JumpToSingleRequested(workspace::DOT_GUIDE_TITLE)
                    }
                })
            }
            SectionKind::Graphs => {
                edu_graphs_panel::render_graphs_panel(ui).map(|i| match i {
                    edu_graphs_panel::GraphsInteraction::LoadSampleRequested(index) => {
                        PanelInteraction::LoadSampleRequested(index)
                    }
                })
            }
            SectionKind::DotGuide => {
                edu_dot_panel::render_dot_guide_panel(ui);
                None
            }
            SectionKind::Insert => {
                insert_panel::render_insert_panel(ui).map(|i| match i {
                    insert_panel::InsertInteraction::InsertSnippetRequested(snippet) => {
                        PanelInteraction::InsertSnippetRequested(snippet)
                    }
                })
            }
            SectionKind::Write => {
                writer_panel::render_writer_panel(ui, state).map(|i| match i {
                    writer_panel::WriterInteraction::OpenFileRequested(path) => {
                        PanelInteraction::OpenFileRequested(path)
                    }
                    writer_panel::WriterInteraction::SaveFileRequested(path) => {
                        PanelInteraction::SaveFileRequested(path)
                    }
                    writer_panel::WriterInteraction::ApplyRequested => {
                        PanelInteraction::ApplyRequested
                    }
                    writer_panel::WriterInteraction::ClearRequested => {
                        PanelInteraction::ClearRequested
                    }
                })
            }
            SectionKind::Preview => {
                preview_panel::render_preview_panel(ui, state, engine_name);
                None
            }
        }
    }
}
