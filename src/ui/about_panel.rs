//! About panel: application summary, build info, and the direct view
//! jumps that demonstrate the external entry point into the panel engine.

use eframe::egui;

/// Result of user interaction with the about panel.
pub enum AboutInteraction {
    /// Jump straight to the Write/Preview split at 3:2.
    JumpToWriteAndPreview,
    /// Jump to the DOT quick reference in single view.
    JumpToDotGuide,
}

pub fn render_about_panel(ui: &mut egui::Ui) -> Option<AboutInteraction> {
    let mut interaction = None;

    egui::ScrollArea::vertical()
        .id_salt("about_scroll")
        .show(ui, |ui| {
            ui.heading("dotdeck");
            ui.label(format!(
                "Version {} | a graph-authoring workbench for the DOT language.",
                env!("CARGO_PKG_VERSION")
            ));
            ui.add_space(8.0);
            ui.label(
                "Write DOT on the left of your split, see the rendered result on \
                 the right, and rearrange the workspace panels any way you like \
                 with the controller in the header. The controller and the panels \
                 share no wiring beyond a group identifier; pages like this one \
                 can rearrange the workspace too:",
            );
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Show editor and preview side by side").clicked() {
                    interaction = Some(AboutInteraction::JumpToWriteAndPreview);
                }
                if ui.button("Open the DOT guide").clicked() {
                    interaction = Some(AboutInteraction::JumpToDotGuide);
                }
            });

            ui.add_space(8.0);
            ui.separator();
            ui.weak(
                "Rendering runs through a pluggable engine; the bundled engine is \
                 schematic and performs no graph layout.",
            );
        });

    interaction
}
