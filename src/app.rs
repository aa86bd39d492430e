// src/app.rs
use eframe::egui;

use crate::state::{Action, AppState, Screen};
use crate::ui::{dashboard, dialog, login};
use crate::worker::Worker;

pub struct DashboardApp {
    state: AppState,
    worker: Worker,
}

impl DashboardApp {
    pub fn new(worker: Worker) -> Self {
        Self {
            state: AppState::new(),
            worker,
        }
    }

    fn dispatch(&mut self, action: Action) {
        if let Some(job) = self.state.update(action) {
            self.worker.submit(job);
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for outcome in self.worker.drain() {
            for action in outcome {
                self.dispatch(action);
            }
        }

        let mut actions = Vec::new();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("Equipment Analytics");
                if self.state.is_busy() {
                    ui.add(egui::Spinner::new());
                }
            });
        });

        let blocked = dialog::is_blocking(&self.state);
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.set_enabled(!blocked);
            match self.state.screen() {
                Screen::LoggedOut => login::show_login_view(ui, &mut self.state, &mut actions),
                Screen::LoggedIn => dashboard::show_dashboard_view(ui, &self.state, &mut actions),
            }
        });

        dialog::show(ctx, &self.state, &mut actions);

        for action in actions {
            self.dispatch(action);
        }
    }
}
