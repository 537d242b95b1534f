use crate::models::ResearchResponse;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Number of sources the upstream is asked to consult. Fixed, not configurable.
pub const MAX_SOURCES: u32 = 3;
/// PRD generation always runs the upstream in pro mode. Fixed, not configurable.
pub const PRO_MODE: bool = true;

/// Errors that can occur when calling the PRD generator
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Upstream was reachable but answered with a non-2xx status.
    /// `detail` is the optional error message from its body.
    #[error("upstream returned status {status}")]
    Api { status: u16, detail: Option<String> },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

/// Body sent to the upstream deep-research endpoint
#[derive(Debug, Serialize)]
struct UpstreamRequest<'a> {
    query: &'a str,
    max_sources: u32,
    pro_mode: bool,
}

/// Client for the upstream OpenDeepSearch PRD generator
///
/// Issues a single POST per call; no retries and no timeout beyond the
/// transport defaults.
pub struct UpstreamClient {
    base_url: String,
    client: Client,
}

impl UpstreamClient {
    /// Create a new upstream client for the given base URL
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    /// Forward a query to `<base>/api/deep-research` with the fixed parameters
    pub async fn deep_research(&self, query: &str) -> Result<ResearchResponse, UpstreamError> {
        let url = format!("{}/api/deep-research", self.base_url.trim_end_matches('/'));

        let body = UpstreamRequest {
            query,
            max_sources: MAX_SOURCES,
            pro_mode: PRO_MODE,
        };

        tracing::debug!("Forwarding deep-research query to {}", url);

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            // Error bodies carry an optional `detail` field; anything else
            // (non-JSON, missing field) is reported without a detail.
            let detail = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|v| v.get("detail").and_then(Value::as_str).map(String::from));

            return Err(UpstreamError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json::<ResearchResponse>()
            .await
            .map_err(|e| UpstreamError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_upstream_client_creation() {
        let client = UpstreamClient::new("http://localhost:8000".to_string());
        assert_eq!(client.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_upstream_request_carries_fixed_parameters() {
        let body = UpstreamRequest {
            query: "build a todo app",
            max_sources: MAX_SOURCES,
            pro_mode: PRO_MODE,
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "query": "build a todo app",
                "max_sources": 3,
                "pro_mode": true,
            })
        );
    }
}
