//! Backend worker: owns the tokio runtime and answers UI commands.

use std::thread;

use client_core::{PredictionClient, PredictionService};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(client: PredictionClient, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let _ = ui_tx.try_send(UiEvent::Info(format!(
            "Using prediction service at {}",
            client.endpoint()
        )));

        while let Ok(cmd) = cmd_rx.recv() {
            let event = match cmd {
                BackendCommand::Predict { features } => {
                    match runtime.block_on(client.predict(&features)) {
                        Ok(result) => UiEvent::PredictionReady(result),
                        Err(err) => UiEvent::PredictionFailed(UiError::from_predict_error(&err)),
                    }
                }
            };

            // Completion events are never dropped: the UI stays in loading until one arrives.
            if ui_tx.send(event).is_err() {
                tracing::debug!("ui event receiver closed; stopping backend worker");
                break;
            }
        }

        tracing::debug!("backend worker exiting");
    });
}
