//! Combined contact/location quality score for one lead.

use leadscope_core::{BusinessLead, SearchContext};
use serde::Serialize;

use crate::completeness::{evaluate_completeness, ContactField};
use crate::relevance::{evaluate_location, LocationMatch, MISSING_ADDRESS_RELEVANCE};
use crate::tier::{Tier, TierThresholds};

// ---------------------------------------------------------------------------
// Weight constants (percent, must sum to exactly 100)
// ---------------------------------------------------------------------------

/// Share of the score taken from contact completeness.
pub const CONTACT_WEIGHT: u32 = 60;
/// Share of the score taken from location relevance.
pub const LOCATION_WEIGHT: u32 = 40;

const _: () = assert!(
    CONTACT_WEIGHT + LOCATION_WEIGHT == 100,
    "quality weights must sum to exactly 100"
);

/// Tiering and defaulting rules a view scores with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringPolicy {
    pub thresholds: TierThresholds,
    pub missing_address_relevance: u8,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            thresholds: TierThresholds::default(),
            missing_address_relevance: MISSING_ADDRESS_RELEVANCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualityResult {
    /// Weighted score in `0..=100`.
    pub score: u8,
    pub tier: Tier,
    pub label: String,
    /// One entry per contribution, in a fixed order: email, phone, website,
    /// location, then business type.
    pub reasons: Vec<String>,
    pub contact_completeness: u8,
    pub location_relevance: u8,
}

impl ScoringPolicy {
    #[must_use]
    pub fn score(&self, lead: &BusinessLead, search: &SearchContext) -> QualityResult {
        let completeness = evaluate_completeness(lead);
        let location = evaluate_location(lead, &search.location, self.missing_address_relevance);

        let weighted = CONTACT_WEIGHT * u32::from(completeness.percentage)
            + LOCATION_WEIGHT * u32::from(location.percentage);
        let score = u8::try_from(((weighted + 50) / 100).min(100)).unwrap_or(100);
        let tier = self.thresholds.classify(score);

        let mut reasons: Vec<String> = ContactField::ALL
            .into_iter()
            .map(|field| {
                if completeness.missing_fields.contains(&field) {
                    format!("Missing {}", field.label())
                } else {
                    format!("Has {}", field.label())
                }
            })
            .collect();

        reasons.push(
            match location.matched {
                LocationMatch::Full => "Located in target area",
                LocationMatch::Partial => "Partially in target area",
                LocationMatch::Outside => "Outside target area",
                LocationMatch::NoAddress => "No address listed",
            }
            .to_string(),
        );

        if matches_business_type(lead, search) {
            reasons.push("Matches business type".to_string());
        }

        QualityResult {
            score,
            tier,
            label: tier.label().to_string(),
            reasons,
            contact_completeness: completeness.percentage,
            location_relevance: location.percentage,
        }
    }
}

/// Score `lead` against `search` with the default policy.
#[must_use]
pub fn score_lead(lead: &BusinessLead, search: &SearchContext) -> QualityResult {
    ScoringPolicy::default().score(lead, search)
}

fn matches_business_type(lead: &BusinessLead, search: &SearchContext) -> bool {
    match (search.business_type(), lead.category()) {
        (Some(wanted), Some(category)) => category
            .to_lowercase()
            .contains(&wanted.to_lowercase()),
        _ => false,
    }
}
