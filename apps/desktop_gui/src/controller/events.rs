//! UI/backend events and error modeling for desktop GUI controller.

use client_core::PredictError;
use shared::protocol::PredictionResult;

pub enum UiEvent {
    Info(String),
    PredictionReady(PredictionResult),
    PredictionFailed(UiError),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Server,
    Transport,
    Validation,
    Unknown,
}

impl UiErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            UiErrorCategory::Server => "Server",
            UiErrorCategory::Transport => "Connection",
            UiErrorCategory::Validation => "Validation",
            UiErrorCategory::Unknown => "Error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Dispatch,
    Predict,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_predict_error(err: &PredictError) -> Self {
        let category = match err {
            PredictError::Server { status, .. } if (400..500).contains(status) => {
                UiErrorCategory::Validation
            }
            PredictError::Server { .. } => UiErrorCategory::Server,
            PredictError::Transport(_) => UiErrorCategory::Transport,
            PredictError::Decode(_) | PredictError::InvalidUrl(_) => UiErrorCategory::Unknown,
        };

        Self {
            category,
            context: UiErrorContext::Predict,
            message: err.user_message(),
        }
    }

    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("invalid")
            || message_lower.contains("missing")
            || message_lower.contains("must be")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("timeout")
            || message_lower.contains("timed out")
            || message_lower.contains("connection")
            || message_lower.contains("disconnected")
            || message_lower.contains("queue")
            || message_lower.contains("unavailable")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
