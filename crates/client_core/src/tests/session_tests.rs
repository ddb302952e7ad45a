use super::*;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use crate::error::PREDICTION_FAILED_MESSAGE;
use tokio::sync::Mutex;

struct ScriptedService {
    outcome: Result<PredictionResult, (u16, String)>,
    calls: AtomicUsize,
    seen: Arc<Mutex<Vec<FeatureInput>>>,
}

impl ScriptedService {
    fn ok(result: PredictionResult) -> Self {
        Self {
            outcome: Ok(result),
            calls: AtomicUsize::new(0),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn failing(status: u16, message: impl Into<String>) -> Self {
        Self {
            outcome: Err((status, message.into())),
            calls: AtomicUsize::new(0),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl PredictionService for ScriptedService {
    async fn predict(&self, features: &FeatureInput) -> Result<PredictionResult, PredictError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().await.push(*features);
        match &self.outcome {
            Ok(result) => Ok(*result),
            Err((status, message)) => Err(PredictError::Server {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

fn high_risk() -> PredictionResult {
    PredictionResult {
        prediction: 1,
        probability: Some(0.82),
        confidence: Some(0.91),
    }
}

fn demo_session() -> PredictionSession {
    let mut session = PredictionSession::new();
    session.load_demo(DemoPreset::Normal).expect("idle");
    session
}

#[test]
fn starts_idle_on_the_form() {
    let session = PredictionSession::new();
    assert_eq!(session.state(), &RequestState::Idle);
    assert_eq!(session.view(), View::Form);
    assert!(!session.is_loading());
}

#[test]
fn invalid_form_never_enters_loading() {
    let mut session = PredictionSession::new();
    let err = session.submit_form().expect_err("empty form");

    match err {
        SessionError::Invalid(errors) => assert_eq!(errors.len(), 8),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(session.state(), &RequestState::Idle);
}

#[test]
fn loading_guards_every_mutation() {
    let mut session = demo_session();
    session.submit_form().expect("valid");
    assert!(session.is_loading());

    assert_eq!(
        session.set_value(FeatureField::Age, "40"),
        Err(SessionError::Busy)
    );
    assert_eq!(
        session.load_demo(DemoPreset::AboveNormal),
        Err(SessionError::Busy)
    );
    assert_eq!(session.submit_form(), Err(SessionError::Busy));
    assert_eq!(session.begin(), Err(SessionError::Busy));
    assert_eq!(session.reset(), Err(SessionError::Busy));
    assert_eq!(session.form().value(FeatureField::Age), "30");
}

#[test]
fn entering_loading_clears_previous_result_and_error() {
    let mut session = demo_session();
    session.begin().expect("begin");
    session.fail("boom");
    assert_eq!(session.error(), Some("boom"));

    session.begin().expect("begin again");
    assert_eq!(session.state(), &RequestState::Loading);
    assert_eq!(session.error(), None);

    session.complete(high_risk());
    session.begin().expect("begin after success");
    assert_eq!(session.result(), None);
}

#[tokio::test]
async fn success_ends_loading_with_result_only() {
    let service = ScriptedService::ok(high_risk());
    let mut session = demo_session();

    let state = session.submit_with(&service).await.expect("submitted");
    assert_eq!(state, &RequestState::Success(high_risk()));
    assert!(!session.is_loading());
    assert_eq!(session.error(), None);
    assert_eq!(session.view(), View::Result(&high_risk()));
    assert_eq!(service.calls.load(Ordering::SeqCst), 1);
    assert_eq!(service.seen.lock().await[0].glucose, 85.0);
}

#[tokio::test]
async fn failure_ends_loading_with_error_only() {
    let service = ScriptedService::failing(500, "prediction failed: model offline");
    let mut session = demo_session();

    session.submit_with(&service).await.expect("submitted");
    assert!(!session.is_loading());
    assert_eq!(session.result(), None);
    assert_eq!(session.error(), Some("prediction failed: model offline"));
    assert_eq!(session.view(), View::Form);
}

#[tokio::test]
async fn invalid_form_does_not_reach_the_service() {
    let service = ScriptedService::ok(high_risk());
    let mut session = demo_session();
    session.set_value(FeatureField::Bmi, "").expect("idle");

    let err = session.submit_with(&service).await.expect_err("invalid");
    assert!(matches!(err, SessionError::Invalid(_)));
    assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    assert_eq!(session.state(), &RequestState::Idle);
}

#[tokio::test]
async fn predict_with_takes_a_numeric_vector_directly() {
    let service = ScriptedService::ok(high_risk());
    let mut session = PredictionSession::new();
    let features = FeatureInput {
        glucose: 120.0,
        ..FeatureInput::default()
    };

    session
        .predict_with(&service, features)
        .await
        .expect("submitted");
    assert_eq!(session.result(), Some(&high_risk()));
    assert_eq!(service.seen.lock().await[0], features);
}

#[tokio::test]
async fn dismissing_the_error_keeps_form_values() {
    let service = ScriptedService::failing(400, "bad input");
    let mut session = demo_session();
    session.set_value(FeatureField::Insulin, "123").expect("idle");

    session.submit_with(&service).await.expect("submitted");
    assert_eq!(session.error(), Some("bad input"));

    session.dismiss_error();
    assert_eq!(session.error(), None);
    assert_eq!(session.state(), &RequestState::Idle);
    assert_eq!(session.form().value(FeatureField::Insulin), "123");
    assert_eq!(session.form().value(FeatureField::Glucose), "85");
}

#[test]
fn dismiss_error_leaves_a_result_alone() {
    let mut session = demo_session();
    session.begin().expect("begin");
    session.complete(high_risk());

    session.dismiss_error();
    assert_eq!(session.result(), Some(&high_risk()));
}

#[test]
fn reset_returns_to_the_form_and_keeps_values() {
    let mut session = demo_session();
    session.submit_form().expect("valid");
    session.complete(high_risk());
    assert!(matches!(session.view(), View::Result(_)));

    session.reset().expect("reset");
    assert_eq!(session.view(), View::Form);
    assert_eq!(session.state(), &RequestState::Idle);
    assert_eq!(session.form().value(FeatureField::Bmi), "24.5");
}

#[test]
fn completions_without_a_request_in_flight_are_ignored() {
    let mut session = PredictionSession::new();
    assert!(!session.complete(high_risk()));
    assert!(!session.fail("late"));
    assert_eq!(session.state(), &RequestState::Idle);
}

#[test]
fn finish_maps_errors_to_their_user_message() {
    let mut session = demo_session();
    session.begin().expect("begin");
    session.finish(Err(PredictError::Server {
        status: 503,
        message: PREDICTION_FAILED_MESSAGE.to_string(),
    }));
    assert_eq!(session.error(), Some(PREDICTION_FAILED_MESSAGE));
}
