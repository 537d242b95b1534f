use serde::{Deserialize, Serialize};

/// Request to generate a PRD via deep research
///
/// `query` is optional at the deserialization layer so that an absent field,
/// an explicit `null`, and an empty string are all rejected with the same
/// fixed message by the handler instead of a serde error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchRequest {
    #[serde(default)]
    pub query: Option<String>,
}

impl ResearchRequest {
    /// Returns the query if it is present and non-empty
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_null_and_empty_query_are_equivalent() {
        for raw in [r#"{}"#, r#"{"query": null}"#, r#"{"query": ""}"#] {
            let req: ResearchRequest = serde_json::from_str(raw).unwrap();
            assert!(req.query().is_none(), "expected no query for {}", raw);
        }
    }

    #[test]
    fn test_present_query() {
        let req: ResearchRequest = serde_json::from_str(r#"{"query": "build a todo app"}"#).unwrap();
        assert_eq!(req.query(), Some("build a todo app"));
    }
}
