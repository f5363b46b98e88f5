use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::json;
use tracing::warn;

use crate::error::ApiError;

/// Narrow contract to the external recognition service. The route relays
/// whatever the service answers, so the result is the raw status and body.
#[async_trait]
pub trait Recognizer: Send + Sync {
    async fn predict(&self, image_url: &str) -> Result<(StatusCode, String), ApiError>;
}

#[derive(Clone)]
pub struct ClarifaiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl ClarifaiClient {
    pub fn new(endpoint: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn payload(image_url: &str) -> serde_json::Value {
        json!({
            "inputs": [{
                "data": { "image": { "url": image_url } }
            }]
        })
    }
}

#[async_trait]
impl Recognizer for ClarifaiClient {
    async fn predict(&self, image_url: &str) -> Result<(StatusCode, String), ApiError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Key {}", self.api_key),
            )
            .json(&Self::payload(image_url))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "recognition api unreachable");
                ApiError::Upstream(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::Upstream)?;
        Ok((status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_wraps_the_url_clarifai_style() {
        let p = ClarifaiClient::payload("https://example.com/cat.jpg");
        assert_eq!(
            p["inputs"][0]["data"]["image"]["url"],
            "https://example.com/cat.jpg"
        );
    }

    #[test]
    fn payload_carries_exactly_one_input() {
        let p = ClarifaiClient::payload("https://example.com/cat.jpg");
        assert_eq!(p["inputs"].as_array().map(Vec::len), Some(1));
    }
}
