//! Textual proximity of a lead's address to the searched location.
//!
//! No geocoding. The search location is split on commas into components
//! (city first, then region, country and so on); each component is compared
//! against the address by whole lower-cased alphanumeric tokens.

use std::collections::BTreeSet;

use leadscope_core::BusinessLead;

/// Relevance assigned when a lead has no usable address.
///
/// A missing address is a data-quality gap, not a location mismatch, so it
/// sits between "no overlap" and "full match".
pub const MISSING_ADDRESS_RELEVANCE: u8 = 50;

/// Share of a partial match carried by the leading (city) component when the
/// search names further components. The rest is split across those.
pub const CITY_COMPONENT_WEIGHT: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationMatch {
    /// The address contains the searched city, or no location was searched.
    Full,
    Partial,
    Outside,
    NoAddress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationRelevance {
    pub percentage: u8,
    pub matched: LocationMatch,
}

/// Relevance of `lead` to `search_location` as a percentage in `0..=100`.
#[must_use]
pub fn location_relevance(lead: &BusinessLead, search_location: &str) -> u8 {
    evaluate_location(lead, search_location, MISSING_ADDRESS_RELEVANCE).percentage
}

/// Like [`location_relevance`] with an explicit value for address-less leads.
///
/// A city contained in the address scores 100. Otherwise each component
/// contributes the share of its tokens found in the address, the city
/// weighted by [`CITY_COMPONENT_WEIGHT`], capped below 100. Matching only the
/// region or country is therefore never a full match.
#[must_use]
pub fn evaluate_location(
    lead: &BusinessLead,
    search_location: &str,
    missing_address_relevance: u8,
) -> LocationRelevance {
    let address_tokens = lead.address().map(tokens).unwrap_or_default();
    if address_tokens.is_empty() {
        return LocationRelevance {
            percentage: missing_address_relevance.min(100),
            matched: LocationMatch::NoAddress,
        };
    }

    let components: Vec<BTreeSet<String>> = search_location
        .split(',')
        .map(tokens)
        .filter(|component| !component.is_empty())
        .collect();

    let Some((city, rest)) = components.split_first() else {
        return LocationRelevance {
            percentage: 100,
            matched: LocationMatch::Full,
        };
    };

    if city.is_subset(&address_tokens) {
        return LocationRelevance {
            percentage: 100,
            matched: LocationMatch::Full,
        };
    }

    let coverage = |component: &BTreeSet<String>| -> (u32, u32) {
        let found = component.intersection(&address_tokens).count();
        (
            u32::try_from(found).unwrap_or(u32::MAX),
            u32::try_from(component.len()).unwrap_or(u32::MAX).max(1),
        )
    };

    // Weighted shares in per-mille to keep the arithmetic integral.
    let (city_found, city_len) = coverage(city);
    let weighted = if rest.is_empty() {
        city_found * 1000 / city_len
    } else {
        let rest_len = u32::try_from(rest.len()).unwrap_or(u32::MAX);
        let rest_share: u32 = rest
            .iter()
            .map(|component| {
                let (found, len) = coverage(component);
                found * 1000 / len
            })
            .sum::<u32>()
            / rest_len;
        (CITY_COMPONENT_WEIGHT * city_found * 1000 / city_len
            + (100 - CITY_COMPONENT_WEIGHT) * rest_share)
            / 100
    };

    // The city did not match, so the result stays below a full match.
    let pct = ((weighted + 5) / 10).min(99);
    if pct == 0 {
        return LocationRelevance {
            percentage: 0,
            matched: LocationMatch::Outside,
        };
    }

    LocationRelevance {
        percentage: u8::try_from(pct).unwrap_or(99),
        matched: LocationMatch::Partial,
    }
}

fn tokens(text: &str) -> BTreeSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}
