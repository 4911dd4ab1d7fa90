use async_trait::async_trait;
use reqwest::Client;
use shared::{
    error::ApiErrorBody,
    protocol::{FormPayload, PredictionResult},
};
use tracing::{debug, info, warn};
use url::Url;

pub mod error;

pub use error::ClientError;

pub const DEFAULT_PREDICT_PATH: &str = "/predict";

/// Anything that can turn a submitted form into a prediction.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait PredictionBackend {
    async fn predict(&self, payload: &FormPayload) -> Result<PredictionResult, ClientError>;
}

#[derive(Debug, Clone)]
pub struct PredictClient {
    http: Client,
    endpoint: Url,
}

impl PredictClient {
    pub fn new(base_url: &str, endpoint_path: &str) -> Result<Self, ClientError> {
        let endpoint = resolve_endpoint(base_url, endpoint_path)?;
        Ok(Self::with_endpoint(endpoint))
    }

    pub fn with_endpoint(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl PredictionBackend for PredictClient {
    async fn predict(&self, payload: &FormPayload) -> Result<PredictionResult, ClientError> {
        debug!(endpoint = %self.endpoint, fields = payload.len(), "posting prediction request");
        let res = self
            .http
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            let detail = ApiErrorBody::parse(&body).map(|body| body.error);
            warn!(
                status = status.as_u16(),
                detail = detail.as_deref().unwrap_or(""),
                "prediction endpoint rejected request"
            );
            return Err(ClientError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        let result: PredictionResult = serde_json::from_str(&body)?;
        info!(probability = result.probability, "prediction received");
        Ok(result)
    }
}

/// Joins an endpoint path onto a base URL. An absolute path replaces the base path,
/// the same way a page-relative `fetch('/predict')` resolves against the page origin.
pub fn resolve_endpoint(base_url: &str, endpoint_path: &str) -> Result<Url, ClientError> {
    let base = Url::parse(base_url.trim()).map_err(|source| ClientError::InvalidUrl {
        url: base_url.to_string(),
        source,
    })?;
    base.join(endpoint_path)
        .map_err(|source| ClientError::InvalidUrl {
            url: format!("{base_url}{endpoint_path}"),
            source,
        })
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
