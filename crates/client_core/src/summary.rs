//! Presentation-ready view of a prediction response.

use shared::protocol::PredictionResult;

pub const DISCLAIMER: &str = "This prediction is for educational purposes only and should not \
replace professional medical advice, diagnosis, or treatment. Always consult with qualified \
healthcare providers for medical concerns.";

/// Shown in place of a score the service did not report.
pub const MISSING_SCORE: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub struct RiskSummary {
    pub positive: bool,
    /// `probability` clamped to 0–1 for progress bars; 0 when not reported.
    pub probability_fraction: f32,
    /// "82.0%", or `MISSING_SCORE`.
    pub probability_percent: String,
    pub confidence_percent: String,
    pub title: &'static str,
    pub message: String,
}

impl RiskSummary {
    pub fn from_result(result: &PredictionResult) -> Self {
        let positive = result.is_positive();
        let probability_percent = format_score(result.probability);
        let confidence_percent = format_score(result.confidence);

        let (title, advice) = if positive {
            (
                "High Risk of Diabetes",
                "It is recommended to consult with a healthcare professional for further evaluation.",
            )
        } else {
            (
                "Low Risk of Diabetes",
                "However, regular health check-ups are still recommended.",
            )
        };
        let message = match result.probability {
            Some(_) => format!(
                "Based on the provided health metrics, there is a {probability_percent} probability of diabetes. {advice}"
            ),
            None => format!(
                "Based on the provided health metrics, the model did not report a probability. {advice}"
            ),
        };

        Self {
            positive,
            probability_fraction: result
                .probability
                .map_or(0.0, |p| p.clamp(0.0, 1.0) as f32),
            probability_percent,
            confidence_percent,
            title,
            message,
        }
    }
}

/// Fraction in 0–1 as a percentage with one decimal place, without the sign.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}", fraction * 100.0)
}

fn format_score(score: Option<f64>) -> String {
    match score {
        Some(fraction) if fraction.is_finite() => format!("{}%", format_percent(fraction)),
        _ => MISSING_SCORE.to_string(),
    }
}
