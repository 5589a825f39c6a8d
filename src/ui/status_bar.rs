//! Status bar UI rendering.
//!
//! The bottom bar shows process memory, the outline of the current DOT
//! source, its size, and how many panel groups are registered.

use dotdeck::dot_outline;
use eframe::egui;
use egui::RichText;

use crate::app::AppState;
use crate::utils::{format_count, format_memory_mb, format_source_size, get_current_memory_mb};

pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());
        ui.label(RichText::new("|").strong());

        let source = state.dot_source.current();
        let outline = dot_outline::scan(&source);
        let name = outline.name.as_deref().unwrap_or("(unnamed)");
        ui.label(
            RichText::new(format!(
                "{} {} | Nodes: {} | Edges: {} | Source: {}",
                outline.kind,
                name,
                format_count(outline.node_count()),
                format_count(outline.edge_count()),
                format_source_size(state.dot_source.byte_len())
            ))
            .strong(),
        );

        ui.label(RichText::new("|").strong());
        ui.label(
            RichText::new(format!("Groups: {}", state.registry.group_count())).strong(),
        );
    });
}
