// src/ui/mod.rs
use eframe::egui::Color32;

pub mod login;
pub mod dashboard;
pub mod analytics;
pub mod history;
pub mod dialog;

pub const PRIMARY: Color32 = Color32::from_rgb(37, 99, 235);
pub const HEADING: Color32 = Color32::from_rgb(30, 58, 138);
pub const WARNING: Color32 = Color32::from_rgb(245, 158, 11);
pub const DANGER: Color32 = Color32::from_rgb(239, 68, 68);
pub const HEALTHY: Color32 = Color32::from_rgb(16, 185, 129);
pub const MUTED: Color32 = Color32::from_rgb(148, 163, 184);
