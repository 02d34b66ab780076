use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: u64,
    pub name: String,
    pub html_url: String,
}

impl SearchResult {
    #[allow(dead_code)]
    pub fn new(id: u64, name: impl Into<String>, html_url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            html_url: html_url.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    total_count: Option<u64>,
    #[serde(default)]
    items: Option<Vec<SearchResult>>,
}

/// Decodes a repository search response body into its `items`.
///
/// A body without an `items` array is rejected rather than treated as an
/// empty result set, so the caller keeps whatever it was showing before.
pub fn parse_search_response(body: &str) -> Result<Vec<SearchResult>> {
    let response: SearchResponse =
        serde_json::from_str(body).context("Malformed search response body")?;

    if let Some(total_count) = response.total_count {
        log::debug!("[SEARCH_RESULT] Response reports {} total matches", total_count);
    }

    response
        .items
        .ok_or_else(|| anyhow::anyhow!("Search response is missing the items field"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_response_extracts_items() {
        let body = r#"{
            "total_count": 1,
            "incomplete_results": false,
            "items": [
                {"id": 1, "name": "a", "html_url": "http://x", "full_name": "o/a", "stargazers_count": 3}
            ]
        }"#;

        let items = parse_search_response(body).unwrap();

        assert_eq!(items, vec![SearchResult::new(1, "a", "http://x")]);
    }

    #[test]
    fn test_parse_search_response_accepts_empty_items() {
        let items = parse_search_response(r#"{"total_count": 0, "items": []}"#).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_parse_search_response_rejects_missing_items() {
        let error = parse_search_response(r#"{"message": "Validation Failed"}"#).unwrap_err();
        assert!(error.to_string().contains("missing the items field"));
    }

    #[test]
    fn test_parse_search_response_rejects_null_items() {
        assert!(parse_search_response(r#"{"items": null}"#).is_err());
    }

    #[test]
    fn test_parse_search_response_rejects_wrongly_shaped_items() {
        let error = parse_search_response(r#"{"items": [{"id": "one", "name": 5}]}"#).unwrap_err();
        assert!(error.to_string().contains("Malformed search response body"));
    }

    #[test]
    fn test_parse_search_response_rejects_non_json_body() {
        assert!(parse_search_response("<html>rate limited</html>").is_err());
    }
}
