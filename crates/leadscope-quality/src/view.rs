//! Filtering and sorting shared by every lead table.

use std::cmp::Ordering;
use std::str::FromStr;

use leadscope_core::BusinessLead;

use crate::completeness::{evaluate_completeness, has_email, has_phone, has_website};

/// Row filter for a lead table. The default filter keeps everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadFilter {
    /// Case-insensitive substring matched against name, category and address.
    pub query: Option<String>,
    pub require_email: bool,
    pub require_phone: bool,
    pub require_website: bool,
    /// Leads without a rating never pass a minimum-rating filter.
    pub min_rating: Option<f64>,
    /// Case-insensitive exact match on the lead's source directory.
    pub source: Option<String>,
}

impl LeadFilter {
    #[must_use]
    pub fn matches(&self, lead: &BusinessLead) -> bool {
        if let Some(query) = self.query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            let needle = query.to_lowercase();
            let hit = [Some(lead.name.as_str()), lead.category(), lead.address()]
                .into_iter()
                .flatten()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        if (self.require_email && !has_email(lead))
            || (self.require_phone && !has_phone(lead))
            || (self.require_website && !has_website(lead))
        {
            return false;
        }

        if let Some(min) = self.min_rating {
            if !lead.rating.is_some_and(|rating| rating >= min) {
                return false;
            }
        }

        if let Some(source) = self.source.as_deref() {
            if !lead
                .source()
                .is_some_and(|s| s.eq_ignore_ascii_case(source.trim()))
            {
                return false;
            }
        }

        true
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Case-insensitive name, ascending.
    #[default]
    Name,
    /// Highest rating first; unrated leads last.
    Rating,
    /// Most complete contact info first.
    Completeness,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "rating" => Ok(SortKey::Rating),
            "completeness" => Ok(SortKey::Completeness),
            other => Err(format!("unknown sort key '{other}'")),
        }
    }
}

fn by_name(a: &BusinessLead, b: &BusinessLead) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

/// Filter then stably sort `leads` for display. Ties always fall back to
/// name order so repeated renders agree.
#[must_use]
pub fn apply_view<'a>(
    leads: &'a [BusinessLead],
    filter: &LeadFilter,
    sort: SortKey,
) -> Vec<&'a BusinessLead> {
    let mut rows: Vec<&'a BusinessLead> = leads.iter().filter(|lead| filter.matches(lead)).collect();

    match sort {
        SortKey::Name => rows.sort_by(|a, b| by_name(a, b)),
        SortKey::Rating => rows.sort_by(|a, b| match (a.rating, b.rating) {
            (Some(ra), Some(rb)) => rb.total_cmp(&ra).then_with(|| by_name(a, b)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => by_name(a, b),
        }),
        SortKey::Completeness => rows.sort_by_cached_key(|lead| {
            (
                std::cmp::Reverse(evaluate_completeness(lead).score),
                lead.name.to_lowercase(),
            )
        }),
    }

    rows
}
