//! Backend commands queued from UI to backend worker.

use shared::domain::FeatureInput;

pub enum BackendCommand {
    Predict { features: FeatureInput },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Predict { .. } => "predict",
        }
    }
}
