//! Read-only rendering of a prediction.

use client_core::{summary::DISCLAIMER, RiskSummary};
use eframe::egui;

const HIGH_RISK_COLOR: egui::Color32 = egui::Color32::from_rgb(226, 110, 80);
const LOW_RISK_COLOR: egui::Color32 = egui::Color32::from_rgb(86, 176, 120);

/// Returns true when "Make Another Prediction" was clicked.
pub fn show(ui: &mut egui::Ui, summary: &RiskSummary) -> bool {
    let accent = if summary.positive {
        HIGH_RISK_COLOR
    } else {
        LOW_RISK_COLOR
    };
    let mut reset_clicked = false;

    egui::Frame::NONE
        .fill(accent.gamma_multiply(0.12))
        .stroke(egui::Stroke::new(1.0, accent))
        .corner_radius(12.0)
        .inner_margin(egui::Margin::symmetric(20, 18))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                let icon = if summary.positive { "⚠" } else { "✔" };
                ui.label(egui::RichText::new(icon).size(40.0).color(accent));
                ui.label(
                    egui::RichText::new(summary.title)
                        .size(24.0)
                        .strong()
                        .color(accent),
                );
            });

            ui.add_space(14.0);
            ui.label(egui::RichText::new("Prediction Probability").strong());
            ui.label(
                egui::RichText::new(summary.probability_percent.as_str())
                    .size(28.0)
                    .strong(),
            );
            ui.add(
                egui::ProgressBar::new(summary.probability_fraction)
                    .fill(accent)
                    .desired_height(10.0),
            );

            ui.add_space(10.0);
            ui.label(egui::RichText::new("Confidence Level").strong());
            ui.label(egui::RichText::new(summary.confidence_percent.as_str()).size(20.0));

            ui.add_space(14.0);
            ui.label(summary.message.as_str());

            ui.add_space(14.0);
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new("Disclaimer:").strong());
                ui.label(egui::RichText::new(DISCLAIMER).weak());
            });

            ui.add_space(16.0);
            ui.vertical_centered(|ui| {
                let button =
                    egui::Button::new(egui::RichText::new("Make Another Prediction").strong())
                        .min_size(egui::vec2(260.0, 36.0));
                reset_clicked = ui.add(button).clicked();
            });
        });

    reset_clicked
}
