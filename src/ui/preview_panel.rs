//! Render inspector panel.
//!
//! Shows the outcome cached in [`PreviewState`]: engine name, render
//! time, the source outline, and the produced SVG text. The SVG is an
//! opaque payload; the shell inspects it as text and leaves layout to the
//! engine that made it.

use eframe::egui;
use egui::Color32;

use crate::app::AppState;
use crate::state::RenderOutcome;
use crate::utils::format_count;

pub fn render_preview_panel(ui: &mut egui::Ui, state: &AppState, engine_name: &str) {
    match state.preview.outcome() {
        None => {
            ui.weak("Waiting for the first render..");
        }
        Some(RenderOutcome::Error(message)) => {
            ui.label(format!("Engine: {}", engine_name));
            ui.separator();
            ui.colored_label(Color32::RED, format!("Render failed: {}", message));
        }
        Some(RenderOutcome::Success {
            graph,
            render_millis,
        }) => {
            ui.label(format!(
                "Engine: {} | rendered in {:.2} ms",
                engine_name, render_millis
            ));

            let outline = &graph.outline;
            let name = outline.name.as_deref().unwrap_or("(unnamed)");
            ui.label(format!(
                "{} {} | {} nodes | {} edges",
                outline.kind,
                name,
                format_count(outline.node_count()),
                format_count(outline.edge_count())
            ));

            ui.separator();
            egui::ScrollArea::vertical()
                .id_salt("preview_svg_scroll")
                .show(ui, |ui| {
                    ui.monospace(&graph.svg);
                });
        }
    }
}
