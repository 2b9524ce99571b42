//! Lead quality scoring, tiering and freemium preview selection.
//!
//! Every entry point is a pure function of its inputs: a slice of
//! [`BusinessLead`](leadscope_core::BusinessLead)s, the
//! [`SearchContext`](leadscope_core::SearchContext) they were found for, and a
//! policy. Nothing is cached between calls. The only stateful piece is
//! [`SelectionManager`], which a single view owns.

pub mod aggregate;
pub mod completeness;
pub mod export;
pub mod freemium;
pub mod relevance;
pub mod scorer;
pub mod selection;
pub mod tier;
pub mod view;

pub use aggregate::{group_by_tier, quality_stats, GroupedLeads, QualityStats, ScoredLead};
pub use completeness::{evaluate_completeness, ContactField, CompletenessResult};
pub use export::export_leads;
pub use freemium::{select_preview, FreemiumPolicy, FreemiumPreview};
pub use relevance::location_relevance;
pub use scorer::{score_lead, QualityResult, ScoringPolicy};
pub use selection::SelectionManager;
pub use tier::{classify, Tier, TierThresholds};
pub use view::{apply_view, LeadFilter, SortKey};
