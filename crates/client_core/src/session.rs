//! Request lifecycle owner: decides between the form and the result view.

use shared::{
    domain::{FeatureField, FeatureInput},
    protocol::PredictionResult,
};
use tracing::{debug, warn};

use crate::{
    demo::DemoPreset,
    error::{PredictError, SessionError},
    form::PredictionForm,
    PredictionService,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(PredictionResult),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View<'a> {
    Form,
    Result(&'a PredictionResult),
}

#[derive(Debug, Clone, Default)]
pub struct PredictionSession {
    form: PredictionForm,
    state: RequestState,
}

impl PredictionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(form: PredictionForm) -> Self {
        Self {
            form,
            state: RequestState::Idle,
        }
    }

    pub fn form(&self) -> &PredictionForm {
        &self.form
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, RequestState::Loading)
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        match &self.state {
            RequestState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn view(&self) -> View<'_> {
        match &self.state {
            RequestState::Success(result) => View::Result(result),
            _ => View::Form,
        }
    }

    fn ensure_not_loading(&self) -> Result<(), SessionError> {
        if self.is_loading() {
            Err(SessionError::Busy)
        } else {
            Ok(())
        }
    }

    pub fn set_value(
        &mut self,
        field: FeatureField,
        text: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.ensure_not_loading()?;
        self.form.set_value(field, text);
        Ok(())
    }

    pub fn load_demo(&mut self, preset: DemoPreset) -> Result<(), SessionError> {
        self.ensure_not_loading()?;
        self.form.load_demo(preset);
        Ok(())
    }

    /// Validates the form and, when it passes, enters loading and hands back
    /// the feature vector to dispatch.
    pub fn submit_form(&mut self) -> Result<FeatureInput, SessionError> {
        self.ensure_not_loading()?;
        let features = self.form.submit().map_err(SessionError::Invalid)?;
        self.begin()?;
        Ok(features)
    }

    /// Enters loading, dropping any stale result or error.
    pub fn begin(&mut self) -> Result<(), SessionError> {
        self.ensure_not_loading()?;
        self.state = RequestState::Loading;
        debug!("prediction request started");
        Ok(())
    }

    /// Stores a successful response. Ignored unless a request is in flight.
    pub fn complete(&mut self, result: PredictionResult) -> bool {
        if !self.is_loading() {
            warn!("dropping prediction result with no request in flight");
            return false;
        }
        self.state = RequestState::Success(result);
        true
    }

    /// Surfaces a failure message. Ignored unless a request is in flight.
    pub fn fail(&mut self, message: impl Into<String>) -> bool {
        if !self.is_loading() {
            warn!("dropping prediction failure with no request in flight");
            return false;
        }
        self.state = RequestState::Failed(message.into());
        true
    }

    pub fn finish(&mut self, outcome: Result<PredictionResult, PredictError>) -> bool {
        match outcome {
            Ok(result) => self.complete(result),
            Err(err) => self.fail(err.user_message()),
        }
    }

    /// Runs one request end to end; loading is released whatever the outcome.
    pub async fn predict_with<S>(
        &mut self,
        service: &S,
        features: FeatureInput,
    ) -> Result<&RequestState, SessionError>
    where
        S: PredictionService + ?Sized,
    {
        self.begin()?;
        let outcome = service.predict(&features).await;
        self.finish(outcome);
        Ok(&self.state)
    }

    /// Form submit followed by the request, as the CLI drives it.
    pub async fn submit_with<S>(&mut self, service: &S) -> Result<&RequestState, SessionError>
    where
        S: PredictionService + ?Sized,
    {
        let features = self.submit_form()?;
        let outcome = service.predict(&features).await;
        self.finish(outcome);
        Ok(&self.state)
    }

    /// Back to the form: clears result and error. Form values are kept.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.ensure_not_loading()?;
        self.state = RequestState::Idle;
        Ok(())
    }

    /// Closes the error banner. Leaves the form and any result untouched.
    pub fn dismiss_error(&mut self) {
        if matches!(self.state, RequestState::Failed(_)) {
            self.state = RequestState::Idle;
        }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
