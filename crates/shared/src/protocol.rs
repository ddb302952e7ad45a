use serde::{Deserialize, Serialize};

use crate::domain::FeatureInput;

pub const PREDICT_PATH: &str = "predict";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub features: FeatureInput,
}

/// Classification returned by the prediction service. Unknown fields are ignored.
/// Only `prediction` is required; a bare `{"prediction": 1}` is a valid answer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl PredictionResult {
    pub fn is_positive(&self) -> bool {
        self.prediction == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_nests_features_by_wire_name() {
        let request = PredictRequest {
            features: FeatureInput {
                pregnancies: 1.0,
                glucose: 85.0,
                blood_pressure: 72.0,
                skin_thickness: 20.0,
                insulin: 80.0,
                bmi: 24.5,
                diabetes_pedigree_function: 0.35,
                age: 30.0,
            },
        };

        let value = serde_json::to_value(&request).expect("serialize");
        let features = value["features"].as_object().expect("features object");
        assert_eq!(features.len(), 8);
        assert_eq!(features["diabetes_pedigree_function"], 0.35);
        assert_eq!(features["blood_pressure"], 72.0);
    }

    #[test]
    fn result_ignores_extra_fields() {
        let result: PredictionResult = serde_json::from_str(
            r#"{"prediction":1,"probability":0.82,"confidence":0.91,"model":"rf"}"#,
        )
        .expect("deserialize");
        assert!(result.is_positive());
        assert_eq!(result.probability, Some(0.82));
    }

    #[test]
    fn bare_prediction_leaves_scores_unset() {
        let result: PredictionResult =
            serde_json::from_str(r#"{"prediction": 1}"#).expect("deserialize");
        assert!(result.is_positive());
        assert_eq!(result.probability, None);
        assert_eq!(result.confidence, None);

        let value = serde_json::to_value(result).expect("serialize");
        assert_eq!(value, serde_json::json!({ "prediction": 1 }));
    }

    #[test]
    fn result_requires_prediction() {
        let parsed =
            serde_json::from_str::<PredictionResult>(r#"{"probability":0.4,"confidence":0.5}"#);
        assert!(parsed.is_err());
    }
}
