use thiserror::Error;

use crate::form::ValidationErrors;

/// Fallback when a non-2xx response carries no usable `error` message.
pub const PREDICTION_FAILED_MESSAGE: &str = "Prediction failed";
/// Fallback when a failure produced no message at all.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred while making the prediction";

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("prediction request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed prediction response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid prediction endpoint: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl PredictError {
    /// HTTP status for server rejections.
    pub fn status(&self) -> Option<u16> {
        match self {
            PredictError::Server { status, .. } => Some(*status),
            PredictError::Transport(err) => err.status().map(|status| status.as_u16()),
            PredictError::Decode(_) | PredictError::InvalidUrl(_) => None,
        }
    }

    /// Message shown in the error banner.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("a prediction request is already in flight")]
    Busy,
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(ValidationErrors),
}
