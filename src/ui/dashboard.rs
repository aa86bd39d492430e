// src/ui/dashboard.rs
use eframe::egui;
use rfd::FileDialog;
use crate::state::{Action, AppState};
use super::HEADING;

pub fn show_dashboard_view(ui: &mut egui::Ui, state: &AppState, actions: &mut Vec<Action>) {
    egui::ScrollArea::vertical()
        .id_source("dashboard_scroll")
        .show(ui, |ui| {
            show_upload_card(ui, state, actions);
            ui.add_space(12.0);

            if let Some(summary) = &state.analytics {
                super::analytics::show_analytics_card(ui, summary);
                ui.add_space(12.0);
            }

            super::history::show_history_card(ui, state, actions);
        });
}

fn show_upload_card(ui: &mut egui::Ui, state: &AppState, actions: &mut Vec<Action>) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading(egui::RichText::new("Chemical Equipment Analytics").color(HEADING));
        ui.label(format!("Signed in as {}", state.session.username()));
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("Choose CSV...").clicked() {
                let file_dialog = FileDialog::new()
                    .add_filter("CSV files", &["csv"])
                    .set_title("Open CSV");

                if let Some(path) = file_dialog.pick_file() {
                    actions.push(Action::ChooseFile(path));
                }
            }

            match &state.selected_file {
                Some(path) => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    ui.label(name);
                }
                None => {
                    ui.weak("No file chosen");
                }
            }

            if ui.button("Upload & Analyze").clicked() {
                actions.push(Action::RequestUpload);
            }
        });
    });
}
