//! Panel group widget.
//!
//! Renders the declared panels according to the group's shared state: one
//! panel filling the container, or a split pair sized by the ratio along
//! the chosen axis. All layout decisions come from the pure
//! [`build_render_plan`]; this module only translates the plan into egui
//! regions. If the group is not registered yet, an initializing hint is
//! drawn instead; that is a normal transient during startup ordering.

use dotdeck::{build_render_plan, PanelDescriptor, PanelRegistry, RenderPlan, SplitAxis};
use eframe::egui;
use egui::Color32;

/// Renders the panel group `group_id` into `ui`, drawing each visible
/// panel's content through `draw_content`.
pub fn render_panel_group<C>(
    ui: &mut egui::Ui,
    registry: &PanelRegistry,
    group_id: &str,
    panels: &[PanelDescriptor<C>],
    mut draw_content: impl FnMut(&mut egui::Ui, &C),
) {
    let Some(handle) = registry.lookup(group_id) else {
        ui.weak("Initializing..");
        return;
    };
    let state = handle.get();

    match build_render_plan(panels, &state) {
        RenderPlan::Single { panel } => {
            draw_panel_region(ui, ui.available_size(), panel, &mut draw_content);
        }
        RenderPlan::Split {
            first,
            second,
            weights,
            axis,
        } => {
            let (w1, w2) = weights;
            // "0:0" parses fine but cannot size anything; treat it like
            // the malformed-ratio fallback.
            let total = if w1 + w2 > f32::EPSILON { w1 + w2 } else { 2.0 };
            let fraction = if w1 + w2 > f32::EPSILON { w1 / total } else { 0.5 };
            let avail = ui.available_size();

            match axis {
                SplitAxis::Row => {
                    let gap = ui.spacing().item_spacing.x;
                    let first_size =
                        egui::vec2(((avail.x - gap) * fraction).max(0.0), avail.y);
                    ui.horizontal(|ui| {
                        draw_panel_region(ui, first_size, first, &mut draw_content);
                        ui.separator();
                        draw_panel_region(
                            ui,
                            egui::vec2(ui.available_width(), avail.y),
                            second,
                            &mut draw_content,
                        );
                    });
                }
                SplitAxis::Column => {
                    let gap = ui.spacing().item_spacing.y;
                    let first_size =
                        egui::vec2(avail.x, ((avail.y - gap) * fraction).max(0.0));
                    ui.vertical(|ui| {
                        draw_panel_region(ui, first_size, first, &mut draw_content);
                        ui.separator();
                        draw_panel_region(
                            ui,
                            egui::vec2(avail.x, ui.available_height()),
                            second,
                            &mut draw_content,
                        );
                    });
                }
            }
        }
        RenderPlan::Missing { titles } => {
            ui.colored_label(
                Color32::RED,
                format!("Panel not found: {}", titles.join(", ")),
            );
        }
        RenderPlan::Placeholder => {
            ui.centered_and_justified(|ui| {
                ui.weak("Select a panel to display..");
            });
        }
    }
}

fn draw_panel_region<C>(
    ui: &mut egui::Ui,
    size: egui::Vec2,
    panel: &PanelDescriptor<C>,
    draw_content: &mut impl FnMut(&mut egui::Ui, &C),
) {
    ui.allocate_ui_with_layout(
        size,
        egui::Layout::top_down(egui::Align::Min),
        |ui| {
            ui.set_min_size(size);
            ui.set_max_size(size);
            ui.strong(&panel.title);
            ui.separator();
            draw_content(ui, &panel.content);
        },
    );
}
