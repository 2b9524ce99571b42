//! Whole-result-set grouping by tier and summary statistics.

use std::cmp::Ordering;

use leadscope_core::{BusinessLead, SearchContext};
use serde::Serialize;

use crate::completeness::{has_email, has_phone, has_website};
use crate::scorer::{QualityResult, ScoringPolicy};
use crate::tier::Tier;

/// A lead paired with the result it scored in this run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredLead<'a> {
    pub lead: &'a BusinessLead,
    pub quality: QualityResult,
}

/// Scored leads bucketed by tier, each bucket sorted best first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupedLeads<'a> {
    pub excellent: Vec<ScoredLead<'a>>,
    pub okay: Vec<ScoredLead<'a>>,
    pub poor: Vec<ScoredLead<'a>>,
}

impl<'a> GroupedLeads<'a> {
    #[must_use]
    pub fn tier(&self, tier: Tier) -> &[ScoredLead<'a>] {
        match tier {
            Tier::Excellent => &self.excellent,
            Tier::Okay => &self.okay,
            Tier::Poor => &self.poor,
        }
    }

    /// Total number of leads across all tiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.excellent.len() + self.okay.len() + self.poor.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every scored lead in display order: Excellent, Okay, then Poor.
    pub fn iter(&self) -> impl Iterator<Item = &ScoredLead<'a>> + '_ {
        Tier::ALL.into_iter().flat_map(move |tier| self.tier(tier).iter())
    }

    fn bucket_mut(&mut self, tier: Tier) -> &mut Vec<ScoredLead<'a>> {
        match tier {
            Tier::Excellent => &mut self.excellent,
            Tier::Okay => &mut self.okay,
            Tier::Poor => &mut self.poor,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QualityStats {
    pub excellent: usize,
    pub okay: usize,
    pub poor: usize,
    /// Rounded mean score; 0 when there are no leads.
    pub average_score: u8,
    pub total_with_email: usize,
    pub total_with_phone: usize,
    pub total_with_website: usize,
}

/// Ordering used wherever leads are ranked: higher score first, then
/// case-insensitive name.
pub(crate) fn rank_order(
    score_a: u8,
    name_a: &str,
    score_b: u8,
    name_b: &str,
) -> Ordering {
    score_b
        .cmp(&score_a)
        .then_with(|| name_a.to_lowercase().cmp(&name_b.to_lowercase()))
}

impl ScoringPolicy {
    /// Score every lead once and bucket it by tier.
    #[must_use]
    pub fn group<'a>(&self, leads: &'a [BusinessLead], search: &SearchContext) -> GroupedLeads<'a> {
        let mut grouped = GroupedLeads::default();

        for lead in leads {
            let quality = self.score(lead, search);
            grouped
                .bucket_mut(quality.tier)
                .push(ScoredLead { lead, quality });
        }

        for tier in Tier::ALL {
            grouped.bucket_mut(tier).sort_by(|a, b| {
                rank_order(a.quality.score, &a.lead.name, b.quality.score, &b.lead.name)
            });
        }

        tracing::debug!(
            total = leads.len(),
            excellent = grouped.excellent.len(),
            okay = grouped.okay.len(),
            poor = grouped.poor.len(),
            "grouped leads by tier"
        );

        grouped
    }

    /// Tier counts, mean score and raw contact coverage for `leads`.
    #[must_use]
    pub fn stats(&self, leads: &[BusinessLead], search: &SearchContext) -> QualityStats {
        let mut stats = QualityStats::default();
        let mut score_sum: u64 = 0;

        for lead in leads {
            let quality = self.score(lead, search);
            score_sum += u64::from(quality.score);
            match quality.tier {
                Tier::Excellent => stats.excellent += 1,
                Tier::Okay => stats.okay += 1,
                Tier::Poor => stats.poor += 1,
            }
            stats.total_with_email += usize::from(has_email(lead));
            stats.total_with_phone += usize::from(has_phone(lead));
            stats.total_with_website += usize::from(has_website(lead));
        }

        if !leads.is_empty() {
            let count = leads.len() as u64;
            let mean = (score_sum + count / 2) / count;
            stats.average_score = u8::try_from(mean.min(100)).unwrap_or(100);
        }

        stats
    }
}

/// Group `leads` with the default policy.
#[must_use]
pub fn group_by_tier<'a>(leads: &'a [BusinessLead], search: &SearchContext) -> GroupedLeads<'a> {
    ScoringPolicy::default().group(leads, search)
}

/// Summarize `leads` with the default policy.
#[must_use]
pub fn quality_stats(leads: &[BusinessLead], search: &SearchContext) -> QualityStats {
    ScoringPolicy::default().stats(leads, search)
}
