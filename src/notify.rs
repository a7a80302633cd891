//! Transactional email notification for completed audits.
//!
//! Sends the rendered report to the configured sales address through a
//! Resend-compatible API (`POST {endpoint}/emails`, bearer auth, JSON body
//! with base64 attachments). This is a best-effort side channel: a failure
//! here is logged and must never discard the already-computed report.

use crate::audit::Submission;
use crate::config::NotifyConfig;
use anyhow::{anyhow, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Serialize)]
struct EmailRequest {
    from: String,
    to: String,
    subject: String,
    html: String,
    attachments: Vec<Attachment>,
}

#[derive(Serialize)]
struct Attachment {
    filename: String,
    /// Base64-encoded file content
    content: String,
    content_type: String,
}

/// Client for the transactional email API.
pub struct NotifyClient {
    client: reqwest::Client,
    endpoint: String,
    from: String,
    to: String,
    api_key: String,
}

impl NotifyClient {
    pub fn new(config: &NotifyConfig, api_key: String, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            from: config.from.clone(),
            to: config.to.clone(),
            api_key,
        })
    }

    /// Email the rendered report with the submitter's details. One attempt,
    /// no retry; the caller decides whether to swallow the error.
    pub async fn send_report(&self, submission: &Submission, report_html: &str) -> Result<()> {
        let filename = format!("{}-brand-audit.html", submission.company);
        debug!(
            "Sending report email for {} ({} bytes attached)",
            submission.company,
            report_html.len()
        );

        let request = EmailRequest {
            from: self.from.clone(),
            to: self.to.clone(),
            subject: format!("New Brand Audit Report: {}", submission.company),
            html: submitter_summary_html(submission),
            attachments: vec![Attachment {
                filename,
                content: BASE64.encode(report_html.as_bytes()),
                content_type: "text/html".to_string(),
            }],
        };

        let response = self
            .client
            .post(format!("{}/emails", self.endpoint))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("notify API returned {}: {}", status, body));
        }

        info!("Report email sent for {}", submission.company);
        Ok(())
    }
}

/// Plain HTML body listing the submitter's details; the report itself
/// travels as an attachment.
fn submitter_summary_html(submission: &Submission) -> String {
    format!(
        "<h2>New Brand Audit Completed</h2>\
         <p><strong>Name:</strong> {}</p>\
         <p><strong>Email:</strong> {}</p>\
         <p><strong>Company:</strong> {}</p>\
         <p><strong>Phone:</strong> {}</p>\
         <p><strong>Website:</strong> {}</p>\
         <p>The audit report is attached.</p>",
        submission.name, submission.email, submission.company, submission.phone, submission.website
    )
}
