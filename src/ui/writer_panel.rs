//! Editor panel UI rendering.
//!
//! The Write.. panel: a toolbar over a code-editor buffer. The buffer is
//! local until the user applies it; Open/Save go through native file
//! dialogs with `.dot`/`.gv` filters.

use std::path::PathBuf;

use eframe::egui;

use crate::app::AppState;

/// Result of user interaction with the writer panel.
pub enum WriterInteraction {
    /// User picked a file to load into the editor.
    OpenFileRequested(PathBuf),
    /// User picked a destination to save the buffer to.
    SaveFileRequested(PathBuf),
    /// Apply the buffer to the shared DOT slot.
    ApplyRequested,
    /// Reset the buffer to the empty graph skeleton.
    ClearRequested,
}

pub fn render_writer_panel(ui: &mut egui::Ui, state: &mut AppState) -> Option<WriterInteraction> {
    let mut interaction = None;

    ui.horizontal_wrapped(|ui| {
        if ui.button("📁 Open").clicked() {
            let mut dialog = rfd::FileDialog::new().add_filter("DOT graphs", &["dot", "gv"]);
            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }
            if let Some(path) = dialog.pick_file() {
                interaction = Some(WriterInteraction::OpenFileRequested(path));
            }
        }

        if ui.button("💾 Save").clicked() {
            let suggested = state
                .editor
                .file_path()
                .and_then(|p| p.file_name())
                .and_then(|n| n.to_str())
                .unwrap_or("graph.dot")
                .to_string();
            let dialog = rfd::FileDialog::new()
                .add_filter("DOT graphs", &["dot", "gv"])
                .set_file_name(suggested);
            if let Some(path) = dialog.save_file() {
                interaction = Some(WriterInteraction::SaveFileRequested(path));
            }
        }

        ui.separator();

        if ui
            .button("▶ Apply")
            .on_hover_text("Make this buffer the current source for the preview")
            .clicked()
        {
            interaction = Some(WriterInteraction::ApplyRequested);
        }

        if ui.button("📋 Copy").clicked() {
            ui.ctx().copy_text(state.editor.buffer().to_string());
        }

        if ui.button("✘ Clear").clicked() {
            interaction = Some(WriterInteraction::ClearRequested);
        }

        ui.separator();

        let mut wrap = state.editor.word_wrap();
        if ui.checkbox(&mut wrap, "Wrap").changed() {
            state.editor.set_word_wrap(wrap);
        }

        if state.editor.is_dirty() {
            ui.weak("● unapplied edits");
        }
        if let Some(path) = state.editor.file_path() {
            ui.weak(path.display().to_string());
        }
    });

    ui.separator();

    let wrap = state.editor.word_wrap();
    let scroll = if wrap {
        egui::ScrollArea::vertical()
    } else {
        egui::ScrollArea::both()
    };
    scroll.id_salt("writer_scroll").show(ui, |ui| {
        let desired_width = if wrap {
            ui.available_width()
        } else {
            f32::INFINITY
        };
        let response = ui.add(
            egui::TextEdit::multiline(state.editor.buffer_mut())
                .code_editor()
                .desired_rows(18)
                .desired_width(desired_width),
        );
        if response.changed() {
            state.editor.mark_edited();
        }
    });

    interaction
}
