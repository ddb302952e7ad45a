use std::time::Duration;

use client_core::{PredictionSession, RiskSummary, SessionError, View};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorCategory, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::{
    form_panel::{self, FormAction},
    result_panel,
};

const CONTENT_MAX_WIDTH: f32 = 640.0;

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub endpoint: String,
}

pub struct PredictorApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    session: PredictionSession,
    banner_category: Option<UiErrorCategory>,

    status: String,
    endpoint: String,
}

impl PredictorApp {
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            session: PredictionSession::new(),
            banner_category: None,
            status: "Starting backend worker...".to_string(),
            endpoint: startup.endpoint,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::PredictionReady(result) => {
                    if self.session.complete(result) {
                        self.banner_category = None;
                        self.status = "Prediction received".to_string();
                    }
                }
                UiEvent::PredictionFailed(err) => {
                    self.fail_request(err);
                }
                UiEvent::Error(err) => {
                    tracing::error!(context = ?err.context(), "{}", err.message());
                    self.status = err.message().to_string();
                    if self.session.is_loading() {
                        self.fail_request(err);
                    }
                }
            }
        }
    }

    fn fail_request(&mut self, err: UiError) {
        if self.session.fail(err.message()) {
            self.banner_category = Some(err.category());
            self.status = format!("{} error", err.category().label());
        }
    }

    fn apply_form_action(&mut self, action: FormAction) {
        let outcome = match action {
            FormAction::Edit { field, text } => self.session.set_value(field, text),
            FormAction::LoadDemo(preset) => self.session.load_demo(preset).map(|()| {
                self.status = format!("Loaded {} sample", preset.label().to_ascii_lowercase());
            }),
            FormAction::Submit => {
                self.submit();
                Ok(())
            }
        };

        if let Err(SessionError::Busy) = outcome {
            tracing::debug!("ignored form input while a prediction is in flight");
        }
    }

    fn submit(&mut self) {
        match self.session.submit_form() {
            Ok(features) => {
                self.banner_category = None;
                self.status = "Predicting...".to_string();
                if let Err(err) = dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::Predict { features },
                ) {
                    self.fail_request(err);
                }
            }
            Err(SessionError::Invalid(errors)) => {
                self.status = format!("{} field(s) need attention", errors.len());
            }
            Err(SessionError::Busy) => {}
        }
    }

    fn reset(&mut self) {
        if self.session.reset().is_ok() {
            self.banner_category = None;
            self.status = "Ready".to_string();
        }
    }

    fn dismiss_error(&mut self) {
        self.session.dismiss_error();
        self.banner_category = None;
    }

    fn show_error_banner(&mut self, ui: &mut egui::Ui) {
        let Some(message) = self.session.error().map(str::to_owned) else {
            return;
        };
        let label = self
            .banner_category
            .unwrap_or(UiErrorCategory::Unknown)
            .label();

        egui::Frame::NONE
            .fill(egui::Color32::from_rgb(111, 53, 53))
            .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        egui::RichText::new(format!("{label}:"))
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                    ui.label(egui::RichText::new(&message).color(egui::Color32::WHITE));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("×").on_hover_text("Dismiss").clicked() {
                            self.dismiss_error();
                        }
                    });
                });
            });
        ui.add_space(10.0);
    }

    fn show_header(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("app_header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.heading("Diabetes Prediction System");
                ui.label(
                    egui::RichText::new(
                        "Predict diabetes risk using machine learning based on health metrics",
                    )
                    .weak(),
                );
            });
            ui.add_space(8.0);
        });
    }

    fn show_footer(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("app_footer").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal_wrapped(|ui| {
                ui.small("Status:");
                ui.small(egui::RichText::new(&self.status).weak());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(
                        egui::RichText::new("Model trained on Pima Indians Diabetes Dataset")
                            .weak(),
                    );
                });
            });
            ui.small(egui::RichText::new(format!("Service: {}", self.endpoint)).weak());
            ui.add_space(4.0);
        });
    }

    fn show_main(&mut self, ui: &mut egui::Ui) {
        self.show_error_banner(ui);

        match self.session.view() {
            View::Result(result) => {
                let summary = RiskSummary::from_result(result);
                if result_panel::show(ui, &summary) {
                    self.reset();
                }
            }
            View::Form => {
                let actions =
                    form_panel::show(ui, self.session.form(), self.session.is_loading());
                for action in actions {
                    self.apply_form_action(action);
                }
            }
        }
    }
}

impl eframe::App for PredictorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        self.show_header(ctx);
        self.show_footer(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(CONTENT_MAX_WIDTH);
                    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                        self.show_main(ui);
                    });
                });
            });
        });

        // Backend completions arrive over a channel, so keep polling while one is pending.
        if self.session.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(50));
        } else {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
