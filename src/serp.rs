//! Search Provider client.
//!
//! Talks to a SerpAPI-compatible endpoint: `GET
//! {endpoint}/search.json?q=...&engine=...&api_key=...` returning a JSON
//! body with an `organic_results` array. Only the organic results are
//! consumed; everything else in the payload is ignored.

use crate::config::SerpConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum SerpError {
    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("search provider returned status {status} for query '{query}'")]
    Status {
        status: reqwest::StatusCode,
        query: String,
    },

    #[error("failed to decode search provider response: {0}")]
    MalformedPayload(#[source] reqwest::Error),
}

/// One natural (non-paid) search listing. Fields the provider omits
/// default to empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub snippet: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
}

/// HTTP client for the search provider. Built once per run from config;
/// the API key is injected, never read from the environment here.
pub struct SerpClient {
    client: reqwest::Client,
    endpoint: String,
    engine: String,
    api_key: String,
}

impl SerpClient {
    pub fn new(config: &SerpConfig, api_key: String, user_agent: &str) -> Result<Self, SerpError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            engine: config.engine.clone(),
            api_key,
        })
    }

    /// Run one search query and return its organic results, empty if the
    /// provider returned none. Any transport, status, or decode failure is
    /// a `SerpError` — the caller treats all of them as fatal to the audit.
    pub async fn search(&self, query: &str) -> Result<Vec<OrganicResult>, SerpError> {
        let url = format!("{}/search.json", self.endpoint);
        debug!("Searching provider for query: {}", query);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("engine", self.engine.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SerpError::Status {
                status,
                query: query.to_string(),
            });
        }

        let body: SearchResponse = response.json().await.map_err(SerpError::MalformedPayload)?;
        debug!(
            "Provider returned {} organic results for query: {}",
            body.organic_results.len(),
            query
        );
        Ok(body.organic_results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let json = r#"{"organic_results": [{"title": "Acme"}, {"link": "https://acme.com"}]}"#;
        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.organic_results.len(), 2);
        assert_eq!(parsed.organic_results[0].title, "Acme");
        assert_eq!(parsed.organic_results[0].link, "");
        assert_eq!(parsed.organic_results[1].snippet, "");
    }

    #[test]
    fn test_missing_organic_results_is_empty() {
        let parsed: SearchResponse = serde_json::from_str(r#"{"search_metadata": {}}"#).unwrap();
        assert!(parsed.organic_results.is_empty());
    }
}
