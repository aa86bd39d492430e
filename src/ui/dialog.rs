// src/ui/dialog.rs
use eframe::egui;
use crate::state::{Action, AppState, DialogState};
use super::DANGER;

/// True while a modal is open and the rest of the window should ignore input.
pub fn is_blocking(state: &AppState) -> bool {
    state.alert.is_some() || state.current_dialog != DialogState::None
}

pub fn show(ctx: &egui::Context, state: &AppState, actions: &mut Vec<Action>) {
    if let Some(message) = &state.alert {
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message.as_str());
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    actions.push(Action::DismissAlert);
                }
            });
        return;
    }

    if let DialogState::ConfirmDelete { id } = state.current_dialog {
        let file_name = state.history.iter()
            .find(|r| r.id == id)
            .map(|r| r.file_name.as_str())
            .unwrap_or("this record");

        egui::Window::new("Confirm Delete")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(format!("Delete {}?", file_name));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button(egui::RichText::new("🗑 Delete").color(DANGER)).clicked() {
                        actions.push(Action::ConfirmDelete);
                    }
                    if ui.button("Cancel").clicked() {
                        actions.push(Action::CancelDelete);
                    }
                });
            });
    }
}
