use serde::{Deserialize, Serialize};

/// Failure body returned by the prediction backend, e.g. `{"error": "Model not loaded"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

impl ApiErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// Parses a response body, returning `None` when it is not an error object.
    pub fn parse(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_error_body() {
        let body = ApiErrorBody::parse(r#"{"error":"Model not loaded"}"#).expect("error body");
        assert_eq!(body, ApiErrorBody::new("Model not loaded"));
    }

    #[test]
    fn non_error_body_is_none() {
        assert!(ApiErrorBody::parse("<html>bad gateway</html>").is_none());
        assert!(ApiErrorBody::parse(r#"{"probability":0.2}"#).is_none());
    }
}
