//! Control classification of organic search results.
//!
//! Every listing returned for a brand query is owned by exactly one of four
//! parties: the business itself (its official site), a third-party platform
//! the business can claim a profile on, an unaffiliated page that mentions
//! the business, or a page with no connection at all. The classifier maps a
//! result to exactly one of those categories; it is total over its inputs
//! and never fails.

use crate::domain::normalize_domain;
use crate::serp::OrganicResult;
use serde::{Deserialize, Serialize};

/// Third-party platforms where a business can control its own profile
/// without controlling the domain. Matched as substrings of the normalized
/// result host.
pub const PARTIAL_CONTROL_SITES: &[&str] = &[
    "facebook.com",
    "instagram.com",
    "linkedin.com",
    "twitter.com",
    "x.com",
    "youtube.com",
    "yelp.com",
    "google.com",
    "maps.google.com",
    "bbb.org",
    "yellowpages.com",
    "tripadvisor.com",
    "chamberofcommerce.com",
    "clutch.co",
    "designrush.com",
];

/// How much the audited business controls a given search listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlType {
    /// The listing is on the business's own official domain.
    FullControl,
    /// The listing is on a known third-party platform (social, review,
    /// directory) where the business can claim and manage its presence.
    PartialControl,
    /// An unaffiliated page that mentions the business by name.
    NoControl,
    /// The listing neither belongs to the business nor mentions it.
    MissedOpportunity,
}

impl ControlType {
    /// All categories, in report display order.
    pub const ALL: [ControlType; 4] = [
        ControlType::FullControl,
        ControlType::PartialControl,
        ControlType::NoControl,
        ControlType::MissedOpportunity,
    ];

    /// Human-readable label used in exports and the console summary.
    pub fn label(&self) -> &'static str {
        match self {
            ControlType::FullControl => "Full Control",
            ControlType::PartialControl => "Partial Control",
            ControlType::NoControl => "No Control",
            ControlType::MissedOpportunity => "Missed Opportunity",
        }
    }
}

impl std::fmt::Display for ControlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An organic result together with its control classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedResult {
    pub title: String,
    pub link: String,
    pub snippet: String,
    pub control_type: ControlType,
}

impl ClassifiedResult {
    /// Classify a raw organic result against the audited business identity.
    pub fn from_organic(result: OrganicResult, business_name: &str, official_site: &str) -> Self {
        let control_type = classify_result(
            &result.title,
            &result.snippet,
            &result.link,
            business_name,
            official_site,
        );
        Self {
            title: result.title,
            link: result.link,
            snippet: result.snippet,
            control_type,
        }
    }
}

/// Classify a single search result. First matching rule wins:
///
/// 1. Result host contains the normalized official site → `FullControl`.
/// 2. Result host contains a known third-party platform → `PartialControl`.
/// 3. Title or snippet mentions the business name → `NoControl`.
/// 4. Otherwise → `MissedOpportunity`.
pub fn classify_result(
    title: &str,
    snippet: &str,
    link: &str,
    business_name: &str,
    official_site: &str,
) -> ControlType {
    let domain = normalize_domain(link);
    let official = normalize_domain(official_site);

    if !official.is_empty() && domain.contains(&official) {
        return ControlType::FullControl;
    }

    if PARTIAL_CONTROL_SITES.iter().any(|site| domain.contains(site)) {
        return ControlType::PartialControl;
    }

    // An empty business name would match every title/snippet via the
    // vacuous substring test; treat it as never matching instead.
    let name = business_name.trim().to_lowercase();
    if !name.is_empty() {
        let title = title.to_lowercase();
        let snippet = snippet.to_lowercase();
        if title.contains(&name) || snippet.contains(&name) {
            return ControlType::NoControl;
        }
    }

    ControlType::MissedOpportunity
}
