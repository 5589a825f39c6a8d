//! Graph-theory primer panel with loadable curated sample graphs.

use dotdeck::SAMPLES;
use eframe::egui;

/// Result of user interaction with the graphs panel.
pub enum GraphsInteraction {
    /// Load the curated sample at this index into the editor.
    LoadSampleRequested(usize),
}

pub fn render_graphs_panel(ui: &mut egui::Ui) -> Option<GraphsInteraction> {
    let mut interaction = None;

    egui::ScrollArea::vertical()
        .id_salt("graphs_scroll")
        .show(ui, |ui| {
            ui.heading("Graphs in brief");
            ui.label(
                "A graph is a set of nodes joined by edges. Edges may be \
                 undirected (a -- b) or directed (a -> b); a graph whose edges \
                 all have a direction is a digraph. Paths, cycles, hubs, and \
                 clusters are all just patterns in how the edges connect.",
            );
            ui.add_space(8.0);
            ui.label("Load a sample to see the shape in DOT:");
            ui.add_space(4.0);

            for (i, sample) in SAMPLES.iter().enumerate() {
                ui.horizontal(|ui| {
                    if ui.button(sample.name).clicked() {
                        interaction = Some(GraphsInteraction::LoadSampleRequested(i));
                    }
                    ui.weak(sample.description);
                });
            }
        });

    interaction
}
