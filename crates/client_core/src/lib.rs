use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::FeatureInput,
    error::ApiError,
    protocol::{PredictRequest, PredictionResult, PREDICT_PATH},
};
use tracing::{debug, info, warn};
use url::Url;

pub mod config;
pub mod demo;
pub mod error;
pub mod form;
pub mod session;
pub mod summary;

pub use config::{load_settings, resolve_settings, ClientSettings, ConfigError};
pub use demo::DemoPreset;
pub use error::{PredictError, SessionError, PREDICTION_FAILED_MESSAGE};
pub use form::{FieldError, PredictionForm, ValidationErrors};
pub use session::{PredictionSession, RequestState, View};
pub use summary::RiskSummary;

/// Anything that can turn a feature vector into a classification.
#[async_trait]
pub trait PredictionService: Send + Sync {
    async fn predict(&self, features: &FeatureInput) -> Result<PredictionResult, PredictError>;
}

/// `{base}/predict`, keeping any path prefix on the base URL.
pub fn predict_endpoint(base: &Url) -> Result<Url, PredictError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base.join(PREDICT_PATH)?)
}

#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: Client,
    endpoint: Url,
}

impl PredictionClient {
    pub fn new(base_url: &Url) -> Result<Self, PredictError> {
        Ok(Self {
            http: Client::new(),
            endpoint: predict_endpoint(base_url)?,
        })
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self, PredictError> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            endpoint: predict_endpoint(&settings.predict_url)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PredictionService for PredictionClient {
    async fn predict(&self, features: &FeatureInput) -> Result<PredictionResult, PredictError> {
        let started = Instant::now();
        debug!(endpoint = %self.endpoint, "sending prediction request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&PredictRequest {
                features: *features,
            })
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ApiError>(&body)
                .ok()
                .and_then(|err| err.message().map(str::to_owned))
                .unwrap_or_else(|| PREDICTION_FAILED_MESSAGE.to_string());
            warn!(
                status = status.as_u16(),
                error = %message,
                "prediction request rejected"
            );
            return Err(PredictError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let result: PredictionResult = serde_json::from_slice(&body).map_err(|err| {
            warn!(status = status.as_u16(), "prediction response did not decode: {err}");
            err
        })?;
        info!(
            prediction = result.prediction,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "prediction received"
        );
        Ok(result)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
