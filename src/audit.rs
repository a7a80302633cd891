//! Audit data model and orchestration.
//!
//! One audit runs three fixed searches (company name, business address,
//! phone number) against the search provider, classifies every organic
//! result against the business identity, and assembles the per-query
//! sections into a report. The whole report is built in memory per run;
//! nothing is persisted.

use crate::aggregate::CategoryBreakdown;
use crate::classify::ClassifiedResult;
use crate::serp::SerpClient;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One audit submission: the business identity under audit plus the
/// submitter's contact details for the report email and mailing list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub address: String,
    pub phone: String,
    pub website: String,
}

impl Submission {
    /// Validate that every field is present. All problems are reported at
    /// once so the submitter can fix the form in one pass.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        for (field, value) in [
            ("Name", &self.name),
            ("Email", &self.email),
            ("Company name", &self.company),
            ("Address", &self.address),
            ("Phone number", &self.phone),
            ("Website URL", &self.website),
        ] {
            if value.trim().is_empty() {
                errors.push(format!("{} is required.", field));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// One of the three fixed searches an audit performs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuerySpec {
    /// Human-readable section heading
    pub label: String,
    /// Literal search text sent to the provider
    pub query: String,
}

/// The three audit queries, in report order.
pub fn audit_queries(submission: &Submission) -> Vec<QuerySpec> {
    vec![
        QuerySpec {
            label: "Company Name Search".to_string(),
            query: submission.company.clone(),
        },
        QuerySpec {
            label: "Business Address Search".to_string(),
            query: submission.address.clone(),
        },
        QuerySpec {
            label: "Phone Number Search".to_string(),
            query: submission.phone.clone(),
        },
    ]
}

/// Classified results plus breakdown for one query. Assembled once,
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditSection {
    pub label: String,
    pub query: String,
    pub results: Vec<ClassifiedResult>,
    #[serde(flatten)]
    pub breakdown: CategoryBreakdown,
}

/// A completed audit: one section per query, in query declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub company: String,
    pub website: String,
    pub sections: Vec<AuditSection>,
}

/// Run a full audit for one submission.
///
/// Queries run strictly in order; every organic result is classified
/// against the company name and official website regardless of which
/// identifier was searched. Any provider failure aborts the whole audit —
/// no partial report is returned and nothing is retried.
pub async fn run_audit(submission: &Submission, serp: &SerpClient) -> Result<AuditReport> {
    let mut sections = Vec::new();

    for spec in audit_queries(submission) {
        debug!("Running audit query '{}': {}", spec.label, spec.query);
        let organic = serp
            .search(&spec.query)
            .await
            .context("could not complete audit")?;

        let results: Vec<ClassifiedResult> = organic
            .into_iter()
            .map(|r| ClassifiedResult::from_organic(r, &submission.company, &submission.website))
            .collect();

        let breakdown = CategoryBreakdown::from_results(&results);
        info!(
            "{}: {} results classified for query '{}'",
            spec.label,
            results.len(),
            spec.query
        );

        sections.push(AuditSection {
            label: spec.label,
            query: spec.query,
            results,
            breakdown,
        });
    }

    Ok(AuditReport {
        company: submission.company.clone(),
        website: submission.website.clone(),
        sections,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> Submission {
        Submission {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            company: "Acme Corp".to_string(),
            address: "1 Main St".to_string(),
            phone: "555-1234".to_string(),
            website: "https://acme.com".to_string(),
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        assert!(submission().validate().is_ok());
    }

    #[test]
    fn test_all_missing_fields_reported_at_once() {
        let mut s = submission();
        s.name = String::new();
        s.phone = "   ".to_string();
        let errors = s.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&"Name is required.".to_string()));
        assert!(errors.contains(&"Phone number is required.".to_string()));
    }

    #[test]
    fn test_audit_queries_order_and_content() {
        let specs = audit_queries(&submission());
        assert_eq!(specs.len(), 3);
        assert_eq!(specs[0].label, "Company Name Search");
        assert_eq!(specs[0].query, "Acme Corp");
        assert_eq!(specs[1].label, "Business Address Search");
        assert_eq!(specs[1].query, "1 Main St");
        assert_eq!(specs[2].label, "Phone Number Search");
        assert_eq!(specs[2].query, "555-1234");
    }
}
