//! Mailing list subscription for audit submitters.
//!
//! Adds the submitter to the configured mailing list through a
//! Benchmark-compatible contact API (`POST
//! {endpoint}/Contact/{list_id}/ContactDetails` with an `AuthToken`
//! header). Fire-and-forget: a failure is logged once and never fails
//! the audit.

use crate::config::SubscribeConfig;
use anyhow::{anyhow, Result};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Serialize)]
struct ContactRequest {
    #[serde(rename = "Data")]
    data: ContactData,
}

#[derive(Serialize)]
struct ContactData {
    #[serde(rename = "Email")]
    email: String,
    #[serde(rename = "FirstName")]
    first_name: String,
    #[serde(rename = "LastName")]
    last_name: String,
    /// "1" marks the contact as opted in
    #[serde(rename = "EmailPerm")]
    email_perm: String,
}

/// Client for the mailing list API.
pub struct SubscribeClient {
    client: reqwest::Client,
    endpoint: String,
    auth_token: String,
    list_id: String,
}

impl SubscribeClient {
    pub fn new(
        config: &SubscribeConfig,
        auth_token: String,
        list_id: String,
        user_agent: &str,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            auth_token,
            list_id,
        })
    }

    /// Add one contact to the mailing list. One attempt, no retry.
    pub async fn subscribe(&self, name: &str, email: &str) -> Result<()> {
        let (first_name, last_name) = split_name(name);
        debug!("Subscribing {} to mailing list {}", email, self.list_id);

        let request = ContactRequest {
            data: ContactData {
                email: email.to_string(),
                first_name,
                last_name,
                email_perm: "1".to_string(),
            },
        };

        let url = format!("{}/Contact/{}/ContactDetails", self.endpoint, self.list_id);
        let response = self
            .client
            .post(&url)
            .header("AuthToken", &self.auth_token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("subscribe API returned {}: {}", status, body));
        }

        info!("Subscribed {} to mailing list", email);
        Ok(())
    }
}

/// Split a full name into (first, last): first whitespace token vs. the
/// rest. Either side may be empty.
fn split_name(name: &str) -> (String, String) {
    let mut parts = name.trim().split_whitespace();
    let first = parts.next().unwrap_or("").to_string();
    let last = parts.collect::<Vec<_>>().join(" ");
    (first, last)
}
