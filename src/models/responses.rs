use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Successful deep-research response, relayed to the caller as-is
///
/// Mirrors the upstream body: `result` is opaque to the proxy, and a missing
/// `sources` field defaults to an empty list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchResponse {
    pub result: Value,
    #[serde(default)]
    pub sources: Vec<Value>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_sources_defaults_to_empty() {
        let resp: ResearchResponse = serde_json::from_str(r#"{"result": "X"}"#).unwrap();
        assert_eq!(resp.result, json!("X"));
        assert!(resp.sources.is_empty());
    }

    #[test]
    fn test_sources_are_opaque() {
        let resp: ResearchResponse =
            serde_json::from_str(r#"{"result": "X", "sources": [1, {"url": "a"}]}"#).unwrap();
        assert_eq!(resp.sources.len(), 2);
        assert_eq!(serde_json::to_value(&resp).unwrap()["sources"], json!([1, {"url": "a"}]));
    }
}
