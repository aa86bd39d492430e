// src/ui/history.rs
use eframe::egui;
use crate::state::{Action, AppState};
use super::{DANGER, HEALTHY, WARNING};

pub fn show_history_card(ui: &mut egui::Ui, state: &AppState, actions: &mut Vec<Action>) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.heading("Server History");
            if ui.small_button("⟳ Refresh").clicked() {
                actions.push(Action::RefreshHistory);
            }
            if let Some(synced) = state.last_synced {
                ui.weak(format!("synced {}", synced.format("%H:%M:%S")));
            }
        });
        ui.add_space(8.0);

        if state.history.is_empty() {
            ui.label("No uploads yet");
        } else {
            egui::Grid::new("history_grid")
                .num_columns(3)
                .striped(true)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    ui.strong("File");
                    ui.strong("Date");
                    ui.strong("Action");
                    ui.end_row();

                    for record in &state.history {
                        ui.label(record.file_name.as_str());
                        ui.label(record.date.as_str());
                        ui.horizontal(|ui| {
                            let view = egui::Button::new(egui::RichText::new("View").color(egui::Color32::WHITE))
                                .fill(HEALTHY);
                            if ui.add(view).clicked() {
                                actions.push(Action::SelectHistoryItem(record.id));
                            }

                            let pdf = egui::Button::new(egui::RichText::new("PDF").color(egui::Color32::WHITE))
                                .fill(WARNING);
                            if ui.add(pdf).on_hover_text(record.report_file_name()).clicked() {
                                actions.push(Action::DownloadReport(record.id));
                            }

                            let delete = egui::Button::new(egui::RichText::new("Del").color(egui::Color32::WHITE))
                                .fill(DANGER);
                            if ui.add(delete).clicked() {
                                actions.push(Action::RequestDelete(record.id));
                            }
                        });
                        ui.end_row();
                    }
                });
        }

        if let Some(path) = &state.last_download {
            ui.add_space(8.0);
            ui.label(format!("Saved {}", path.display()));
        }
    });
}
