//! Mapping a prediction onto the result modal's presentational fields.

use shared::{domain::RiskLevel, protocol::PredictionResult};

use crate::decimal::to_fixed;

const HIGH_RISK_GRADIENT: &str = "linear-gradient(90deg, #F87171, #EF4444)";
const LOW_RISK_GRADIENT: &str = "linear-gradient(90deg, #34D399, #10B981)";

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub risk: RiskLevel,
    pub label: &'static str,
    pub label_class: &'static str,
    pub icon_html: &'static str,
    /// Probability as a percentage with one decimal, e.g. `73.0%`.
    pub percentage: String,
    pub fill_width: String,
    pub fill_gradient: &'static str,
}

impl ResultView {
    pub fn from_result(result: &PredictionResult, threshold: f64) -> Self {
        Self::from_probability(result.probability, threshold)
    }

    pub fn from_probability(probability: f64, threshold: f64) -> Self {
        let risk = RiskLevel::classify(probability, threshold);
        let percentage = format_percentage(probability);
        let (label, label_class, icon_html, fill_gradient) = match risk {
            RiskLevel::High => (
                "High Risk",
                "risk-high",
                r#"<i class="fa-solid fa-heart-crack risk-high"></i>"#,
                HIGH_RISK_GRADIENT,
            ),
            RiskLevel::Low => (
                "Low Risk",
                "risk-low",
                r#"<i class="fa-solid fa-heart-circle-check risk-low"></i>"#,
                LOW_RISK_GRADIENT,
            ),
        };

        Self {
            risk,
            label,
            label_class,
            icon_html,
            fill_width: percentage.clone(),
            percentage,
            fill_gradient,
        }
    }
}

pub fn format_percentage(probability: f64) -> String {
    format!("{}%", to_fixed(probability * 100.0, 1))
}
