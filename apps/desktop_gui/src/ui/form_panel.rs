//! Eight labeled inputs, demo preset buttons and the submit control.

use client_core::{DemoPreset, PredictionForm};
use eframe::egui;
use shared::domain::FeatureField;

const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(224, 96, 96);
const INPUT_WIDTH: f32 = 220.0;

pub enum FormAction {
    Edit { field: FeatureField, text: String },
    LoadDemo(DemoPreset),
    Submit,
}

/// Renders the form from a snapshot and reports what the user did.
/// Nothing is mutated here; the caller applies the actions.
pub fn show(ui: &mut egui::Ui, form: &PredictionForm, loading: bool) -> Vec<FormAction> {
    let mut actions = Vec::new();
    let enabled = !loading;

    ui.horizontal(|ui| {
        ui.heading("Enter Health Information");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            for preset in [DemoPreset::AboveNormal, DemoPreset::Normal] {
                let (next, total) = form.demo_position(preset);
                let response = ui
                    .add_enabled(enabled, egui::Button::new(preset.label()))
                    .on_hover_text(format!(
                        "Fill with {} (Sample {next}/{total})",
                        preset.description()
                    ));
                if response.clicked() {
                    actions.push(FormAction::LoadDemo(preset));
                }
            }
        });
    });
    ui.label(
        egui::RichText::new("Please provide the following health metrics for diabetes prediction:")
            .weak(),
    );
    ui.add_space(10.0);

    let mut enter_submitted = false;
    egui::Grid::new("feature_grid")
        .num_columns(2)
        .spacing([24.0, 12.0])
        .show(ui, |ui| {
            for (position, field) in FeatureField::ALL.into_iter().enumerate() {
                ui.vertical(|ui| {
                    let (edit, submitted) = field_input(ui, form, field, enabled);
                    if let Some(edit) = edit {
                        actions.push(edit);
                    }
                    enter_submitted |= submitted;
                });
                if position % 2 == 1 {
                    ui.end_row();
                }
            }
        });

    ui.add_space(16.0);
    ui.horizontal(|ui| {
        let label = if loading {
            "Predicting..."
        } else {
            "Predict Diabetes Risk"
        };
        let button = egui::Button::new(egui::RichText::new(label).strong().size(16.0))
            .min_size(egui::vec2(INPUT_WIDTH * 2.0, 38.0));
        let clicked = ui.add_enabled(enabled, button).clicked();
        if loading {
            ui.add(egui::Spinner::new());
        }
        if enabled && (clicked || enter_submitted) {
            actions.push(FormAction::Submit);
        }
    });

    actions
}

fn field_input(
    ui: &mut egui::Ui,
    form: &PredictionForm,
    field: FeatureField,
    enabled: bool,
) -> (Option<FormAction>, bool) {
    let error = form.errors().message(field);
    let range = field.range();

    ui.label(egui::RichText::new(field.label()).strong());

    let mut buffer = form.value(field).to_string();
    let stroke = if error.is_some() {
        egui::Stroke::new(1.0, ERROR_COLOR)
    } else {
        egui::Stroke::NONE
    };
    let response = egui::Frame::NONE
        .stroke(stroke)
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.add_enabled(
                enabled,
                egui::TextEdit::singleline(&mut buffer)
                    .id_salt(field.name())
                    .hint_text(format!("{} to {}", range.min, range.max))
                    .desired_width(INPUT_WIDTH),
            )
        })
        .inner
        .on_hover_text(format!("Step {}", field.step()));

    if let Some(message) = error {
        ui.colored_label(ERROR_COLOR, message);
    }

    let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    let edit = response
        .changed()
        .then(|| FormAction::Edit { field, text: buffer });
    (edit, submitted)
}
