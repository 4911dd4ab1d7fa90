use std::{fs, path::Path};

use anyhow::Context;
use form_controller::ControllerSettings;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "predict.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server_url: String,
    #[serde(flatten)]
    pub controller: ControllerSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:10000".into(),
            controller: ControllerSettings::default(),
        }
    }
}

/// File settings first (a missing file is fine), then environment overrides.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    load_settings_with_env(path, |key| std::env::var(key).ok())
}

pub fn load_settings_with_env(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = match fs::read_to_string(path) {
        Ok(raw) => toml::from_str::<Settings>(&raw)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))?,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Settings::default(),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", path.display()))
        }
    };

    if let Some(v) = env("PREDICT_SERVER_URL") {
        settings.server_url = v;
    }
    if let Some(v) = env("PREDICT__SERVER_URL") {
        settings.server_url = v;
    }
    if let Some(v) = env("PREDICT__ENDPOINT_PATH") {
        settings.controller.endpoint_path = v;
    }
    if let Some(v) = env("PREDICT__RISK_THRESHOLD") {
        if let Ok(parsed) = v.parse::<f64>() {
            settings.controller.risk_threshold = parsed;
        }
    }

    Ok(settings)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
