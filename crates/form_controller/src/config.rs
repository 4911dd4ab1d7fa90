use client_core::DEFAULT_PREDICT_PATH;
use serde::Deserialize;

pub const DEFAULT_LOADING_LABEL: &str = r#"<i class="fa-solid fa-spinner fa-spin"></i> Analyzing..."#;
pub const DEFAULT_ALERT_MESSAGE: &str = "An error occurred during analysis. Please try again.";
pub const DEFAULT_RISK_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ControllerSettings {
    pub endpoint_path: String,
    pub loading_label: String,
    pub alert_message: String,
    /// Probabilities strictly above this render as high risk.
    pub risk_threshold: f64,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            endpoint_path: DEFAULT_PREDICT_PATH.into(),
            loading_label: DEFAULT_LOADING_LABEL.into(),
            alert_message: DEFAULT_ALERT_MESSAGE.into(),
            risk_threshold: DEFAULT_RISK_THRESHOLD,
        }
    }
}
