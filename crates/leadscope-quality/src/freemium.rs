//! Bounded, quality-biased free preview of a result set.

use leadscope_core::BusinessLead;
use serde::Serialize;

use crate::aggregate::rank_order;
use crate::completeness::evaluate_completeness;

/// Share of the result set shown for free, in percent (floored).
pub const PREVIEW_PERCENT: usize = 10;
pub const MIN_PREVIEW_SIZE: usize = 5;
pub const MAX_PREVIEW_SIZE: usize = 15;

/// Leads covered by one pricing block; partial blocks round up.
pub const LEADS_PER_PRICE_BLOCK: usize = 100;
pub const PRICE_UNITS_PER_BLOCK: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreemiumPolicy {
    pub preview_percent: usize,
    pub min_preview: usize,
    pub max_preview: usize,
    pub leads_per_price_block: usize,
    pub price_units_per_block: u32,
}

impl Default for FreemiumPolicy {
    fn default() -> Self {
        Self {
            preview_percent: PREVIEW_PERCENT,
            min_preview: MIN_PREVIEW_SIZE,
            max_preview: MAX_PREVIEW_SIZE,
            leads_per_price_block: LEADS_PER_PRICE_BLOCK,
            price_units_per_block: PRICE_UNITS_PER_BLOCK,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FreemiumPreview<'a> {
    pub preview: Vec<&'a BusinessLead>,
    pub hidden_count: usize,
    pub unlock_price_units: u32,
}

impl FreemiumPolicy {
    /// `clamp(floor(total * percent / 100), min, max)`, never above `total`.
    #[must_use]
    pub fn preview_size(&self, total: usize) -> usize {
        let proportional = total * self.preview_percent / 100;
        proportional
            .max(self.min_preview)
            .min(self.max_preview.max(self.min_preview))
            .min(total)
    }

    /// Price to unlock `total` leads: one block per `leads_per_price_block`
    /// leads or part thereof.
    #[must_use]
    pub fn unlock_price(&self, total: usize) -> u32 {
        let block = self.leads_per_price_block.max(1);
        let blocks = u32::try_from(total.div_ceil(block)).unwrap_or(u32::MAX);
        blocks.saturating_mul(self.price_units_per_block)
    }

    /// Rank `leads` by contact completeness and keep the preview slice.
    #[must_use]
    pub fn select<'a>(&self, leads: &'a [BusinessLead]) -> FreemiumPreview<'a> {
        let mut ranked: Vec<(u8, &'a BusinessLead)> = leads
            .iter()
            .map(|lead| (evaluate_completeness(lead).score, lead))
            .collect();
        ranked.sort_by(|(score_a, a), (score_b, b)| rank_order(*score_a, &a.name, *score_b, &b.name));

        let preview_size = self.preview_size(leads.len());
        let preview: Vec<&'a BusinessLead> = ranked
            .into_iter()
            .take(preview_size)
            .map(|(_, lead)| lead)
            .collect();

        let hidden_count = leads.len().saturating_sub(preview.len());
        let unlock_price_units = self.unlock_price(leads.len());

        tracing::debug!(
            total = leads.len(),
            preview = preview.len(),
            hidden = hidden_count,
            unlock_price_units,
            "selected freemium preview"
        );

        FreemiumPreview {
            preview,
            hidden_count,
            unlock_price_units,
        }
    }
}

/// Select the free preview with the default policy.
#[must_use]
pub fn select_preview(leads: &[BusinessLead]) -> FreemiumPreview<'_> {
    FreemiumPolicy::default().select(leads)
}
