// src/ui/analytics.rs
use eframe::egui;
use egui_plot::{uniform_grid_spacer, Bar, BarChart, Legend, Plot};
use crate::config::AnalysisSummary;
use super::{DANGER, HEALTHY, PRIMARY, WARNING};

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
}

const MISSING: &str = "n/a";

pub fn health_label(summary: &AnalysisSummary) -> String {
    match summary.health_score {
        Some(score) => format!("Health: {}%", score),
        None => format!("Health: {}", MISSING),
    }
}

fn one_decimal(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{:.1}{}", v, unit),
        None => MISSING.to_string(),
    }
}

/// Axis label for plot coordinate `x`. Only whole positions carry a category.
pub fn category_label(categories: &[String], x: f64) -> String {
    let index = x.round();
    if (x - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    categories.get(index as usize).cloned().unwrap_or_default()
}

/// Stat card contents. Averages are shown to one decimal place.
pub fn stat_cards(summary: &AnalysisSummary) -> Vec<StatCard> {
    let mut cards = vec![
        StatCard {
            title: "Avg Temp",
            value: one_decimal(summary.avg_temp, "°C"),
        },
        StatCard {
            title: "Avg Press",
            value: one_decimal(summary.avg_pressure, " bar"),
        },
    ];

    if let Some(flowrate) = summary.avg_flowrate {
        cards.push(StatCard {
            title: "Avg Flow",
            value: one_decimal(Some(flowrate), ""),
        });
    }
    if let Some(total) = summary.total_count {
        cards.push(StatCard {
            title: "Units",
            value: total.to_string(),
        });
    }

    cards
}

pub fn distribution_bars(summary: &AnalysisSummary) -> Vec<Bar> {
    summary.chart_series()
        .into_iter()
        .enumerate()
        .map(|(i, (category, count))| {
            Bar::new(i as f64, count)
                .name(category)
                .width(0.6)
                .fill(PRIMARY)
        })
        .collect()
}

pub fn show_analytics_card(ui: &mut egui::Ui, summary: &AnalysisSummary) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.heading("Analysis Result");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let color = if summary.is_healthy() { HEALTHY } else { DANGER };
                ui.colored_label(color, health_label(summary));
            });
        });
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            for card in stat_cards(summary) {
                ui.group(|ui| {
                    ui.set_min_width(120.0);
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(card.title).strong());
                        ui.label(egui::RichText::new(card.value).size(20.0));
                    });
                });
            }
        });

        if !summary.alerts.is_empty() {
            ui.add_space(8.0);
            for alert in &summary.alerts {
                ui.colored_label(WARNING, alert.as_str());
            }
        }

        ui.add_space(8.0);
        let categories: Vec<String> = summary.type_distribution.keys().cloned().collect();
        Plot::new("type_distribution")
            .height(300.0)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .include_y(0.0)
            .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 1.0, 1.0]))
            .x_axis_formatter(move |x, _max_chars, _range| category_label(&categories, x))
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(distribution_bars(summary)).name("Units"));
            });
    });
}
