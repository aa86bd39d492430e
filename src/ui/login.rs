// src/ui/login.rs
use eframe::egui;
use crate::state::{Action, AppState};
use super::{HEADING, MUTED};

pub fn show_login_view(ui: &mut egui::Ui, state: &mut AppState, actions: &mut Vec<Action>) {
    let busy = state.is_busy();

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.2);
        ui.set_max_width(320.0);

        ui.group(|ui| {
            // Locked while a login attempt is in flight
            ui.set_enabled(!busy);
            ui.vertical_centered(|ui| {
                ui.heading(egui::RichText::new("Industrial Portal").color(HEADING));
                ui.label("Authorized Personnel Only");
                ui.add_space(12.0);

                let credentials = &mut state.session.credentials;
                ui.add(
                    egui::TextEdit::singleline(&mut credentials.username)
                        .hint_text("Username")
                        .desired_width(f32::INFINITY)
                );
                let password = ui.add(
                    egui::TextEdit::singleline(&mut credentials.password)
                        .password(true)
                        .hint_text("Password")
                        .desired_width(f32::INFINITY)
                );
                ui.add_space(12.0);

                let submitted_with_enter = password.lost_focus()
                    && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let ready = credentials.is_complete();

                let button = ui.add_enabled(
                    ready,
                    egui::Button::new("Secure Login").min_size(egui::vec2(ui.available_width(), 32.0))
                );
                if button.clicked() || (ready && !busy && submitted_with_enter) {
                    actions.push(Action::SubmitLogin);
                }

                ui.add_space(16.0);
                ui.label(egui::RichText::new("Chemical Equipment Analytics").small().color(MUTED));
            });
        });
    });
}
