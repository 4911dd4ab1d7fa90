use super::{load_settings_with_env, Settings};

use std::{
    collections::HashMap,
    env, fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

fn temp_config(contents: &str) -> PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("predict_cli_config_test_{suffix}.toml"));
    fs::write(&path, contents).expect("write config");
    path
}

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let path = env::temp_dir().join("predict_cli_config_test_does_not_exist.toml");
    let settings = load_settings_with_env(&path, no_env).expect("defaults");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.controller.endpoint_path, "/predict");
}

#[test]
fn file_values_override_defaults() {
    let path = temp_config(
        r#"
server_url = "https://cvd.example.org"
alert_message = "Service unavailable."
risk_threshold = 0.4
"#,
    );

    let settings = load_settings_with_env(&path, no_env).expect("settings");
    assert_eq!(settings.server_url, "https://cvd.example.org");
    assert_eq!(settings.controller.alert_message, "Service unavailable.");
    assert_eq!(settings.controller.risk_threshold, 0.4);
    assert_eq!(settings.controller.endpoint_path, "/predict");

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn environment_overrides_file() {
    let path = temp_config(r#"server_url = "https://from-file.example.org""#);
    let vars: HashMap<&str, &str> = HashMap::from([
        ("PREDICT__SERVER_URL", "http://10.0.0.5:10000"),
        ("PREDICT__ENDPOINT_PATH", "/api/predict"),
        ("PREDICT__RISK_THRESHOLD", "not-a-number"),
    ]);

    let settings =
        load_settings_with_env(&path, |key| vars.get(key).map(|v| v.to_string())).expect("settings");
    assert_eq!(settings.server_url, "http://10.0.0.5:10000");
    assert_eq!(settings.controller.endpoint_path, "/api/predict");
    assert_eq!(settings.controller.risk_threshold, 0.5);

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn malformed_file_is_an_error() {
    let path = temp_config("server_url = [");
    let err = load_settings_with_env(&path, no_env).expect_err("bad toml");
    assert!(err.to_string().contains("failed to parse config file"));
    fs::remove_file(path).expect("cleanup");
}
