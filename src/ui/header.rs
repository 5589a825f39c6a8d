//! Header panel UI rendering.
//!
//! The top bar carries the app title, the panel-group remote control
//! (spatially detached from the workspace it steers), and the sample
//! generator button. Shell-level errors show underneath.

use eframe::egui;
use egui::Color32;

use crate::app::workspace::WORKSPACE_GROUP_ID;
use crate::app::AppState;
use crate::ui::remote_control;

/// Result of user interaction with the header panel.
pub enum HeaderInteraction {
    /// User clicked the sample generator button.
    GenerateSampleRequested,
}

pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.strong("dotdeck");
        ui.separator();

        remote_control::render_remote_control(ui, &state.registry, WORKSPACE_GROUP_ID);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button("🎲 Sample Graph")
                .on_hover_text("Generate a random graph into the editor")
                .clicked()
            {
                interaction = Some(HeaderInteraction::GenerateSampleRequested);
            }
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}
