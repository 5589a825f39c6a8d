//! Snippet templates appended to the editor buffer.

use eframe::egui;

/// Result of user interaction with the insert panel.
pub enum InsertInteraction {
    /// Append this snippet to the editor buffer.
    InsertSnippetRequested(&'static str),
}

const SNIPPETS: &[(&str, &str)] = &[
    ("Node", "  n1 [label=\"n1\"];"),
    ("Edge", "  a -> b;"),
    (
        "Subgraph",
        "  subgraph cluster_0 {\n    label=\"group\";\n  }",
    ),
    ("Attribute block", "  node [shape=box, style=rounded];"),
];

pub fn render_insert_panel(ui: &mut egui::Ui) -> Option<InsertInteraction> {
    let mut interaction = None;

    ui.label("Append a template to the editor buffer:");
    ui.add_space(4.0);
    for &(name, snippet) in SNIPPETS {
        ui.horizontal(|ui| {
            if ui.button(name).clicked() {
                interaction = Some(InsertInteraction::InsertSnippetRequested(snippet));
            }
            ui.code(snippet.lines().next().unwrap_or_default());
        });
    }

    interaction
}
