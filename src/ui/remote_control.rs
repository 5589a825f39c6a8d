//! Remote-control binder for a panel group.
//!
//! A detached controller addressed purely by `(registry, group_id)`: it
//! can be mounted anywhere in the window chrome and stays synchronized
//! with its panel group through the shared state record alone. Every
//! action replaces the group's state whole via the transition methods;
//! the binder keeps no state of its own beyond the lookup result it is
//! rendering (plus egui's ephemeral widget memory for the free-form
//! ratio entry).

use dotdeck::{ControlView, DisplayMode, GroupState, Observable, PanelRegistry, SplitAxis, WizardStep};
use eframe::egui;

/// Ratios offered as one-click choices. The state machine accepts any
/// `"A:B"` string; this menu is a UI convenience only.
pub const RATIO_MENU: &[&str] = &[
    "1:1", "2:1", "1:2", "3:1", "1:3", "3:2", "2:3", "4:1", "1:4", "3:4", "4:3",
];

/// Renders the remote control for `group_id`. A lookup miss renders
/// nothing: the panel group simply has not finished mounting yet.
pub fn render_remote_control(ui: &mut egui::Ui, registry: &PanelRegistry, group_id: &str) {
    let Some(handle) = registry.lookup(group_id) else {
        return;
    };
    let state = handle.get();

    ui.horizontal(|ui| {
        if ui
            .button("☰")
            .on_hover_text("Open the panel controller")
            .clicked()
        {
            handle.set(state.toggle_control());
        }

        // Axis and ratio shortcuts are offered only for an open control
        // over an active split.
        if state.is_control_open() && state.display_mode() == DisplayMode::Split {
            let arrow = match state.axis() {
                SplitAxis::Column => "↵",
                SplitAxis::Row => "↴",
            };
            if ui.button(arrow).on_hover_text("Flip the split axis").clicked() {
                handle.set(state.toggle_axis());
            }
            if ui.button("◫").on_hover_text("Adjust the ratio").clicked() {
                handle.set(state.open_ratio_picker());
            }
        }
    });

    if state.is_control_open() {
        egui::Window::new("Display control")
            .id(egui::Id::new(("remote_control", group_id.to_string())))
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .show(ui.ctx(), |ui| {
                ui.horizontal(|ui| {
                    ui.strong("Display control");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("×").on_hover_text("Close").clicked() {
                            handle.set(state.toggle_control());
                        }
                    });
                });
                ui.separator();
                render_control_screen(ui, &handle, &state, group_id);
            });
    }
}

fn render_control_screen(
    ui: &mut egui::Ui,
    handle: &Observable<GroupState>,
    state: &GroupState,
    group_id: &str,
) {
    // The ratio screen serves both the wizard's final step and the direct
    // picker opened on a settled split; both confirm the same way.
    if state.wizard_step() == WizardStep::PickRatio
        || state.active_control_view() == ControlView::RatioPicker
    {
        render_ratio_screen(ui, handle, state, group_id);
    } else if state.wizard_step() == WizardStep::PickSecond {
        render_pick_second_screen(ui, handle, state);
    } else {
        render_main_screen(ui, handle, state);
    }
}

fn render_main_screen(ui: &mut egui::Ui, handle: &Observable<GroupState>, state: &GroupState) {
    ui.label("Pick a panel to display:");
    for title in state.panel_titles() {
        ui.horizontal(|ui| {
            if ui.button(title).clicked() {
                if let Some(next) = state.select_single(title) {
                    handle.set(next);
                }
            }
            if ui
                .button("|..")
                .on_hover_text(format!("Split view, \"{}\" first", title))
                .clicked()
            {
                if let Some(next) = state.start_split(title) {
                    handle.set(next);
                }
            }
        });
    }
}

fn render_pick_second_screen(
    ui: &mut egui::Ui,
    handle: &Observable<GroupState>,
    state: &GroupState,
) {
    let first = state.visible_titles().0.unwrap_or("?");
    ui.label(format!("First panel: [ {} ]", first));
    ui.label("Pick the second panel of the pair:");
    for title in state.panel_titles() {
        if title.as_str() == first {
            continue;
        }
        if ui.button(title).clicked() {
            if let Some(next) = state.pick_second(title) {
                handle.set(next);
            }
        }
    }
}

fn render_ratio_screen(
    ui: &mut egui::Ui,
    handle: &Observable<GroupState>,
    state: &GroupState,
    group_id: &str,
) {
    let (first, second) = state.visible_titles();
    ui.label(format!(
        "Set the ratio for [ {} ] and [ {} ]:",
        first.unwrap_or("?"),
        second.unwrap_or("?")
    ));

    egui::Grid::new(("remote_ratio_grid", group_id.to_string()))
        .num_columns(2)
        .show(ui, |ui| {
            for (i, ratio) in RATIO_MENU.iter().enumerate() {
                if ui.button(*ratio).clicked() {
                    handle.set(state.confirm_ratio(ratio));
                }
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });

    // Free-form entry: any non-negative pair is legal, not just the menu.
    ui.separator();
    let memory_id = egui::Id::new(("remote_ratio_free", group_id.to_string()));
    let (mut a, mut b) = ui
        .data_mut(|d| d.get_temp::<(u32, u32)>(memory_id))
        .unwrap_or((1, 1));
    ui.horizontal(|ui| {
        ui.add(egui::DragValue::new(&mut a).range(0..=99));
        ui.label(":");
        ui.add(egui::DragValue::new(&mut b).range(0..=99));
        if ui.button("Set").clicked() {
            handle.set(state.confirm_ratio(&format!("{}:{}", a, b)));
        }
    });
    ui.data_mut(|d| d.insert_temp(memory_id, (a, b)));
}
