//! Shared data model, configuration and collaborator seams for Leadscope.

pub mod app_config;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod leads;
pub mod searches;

pub use app_config::{AppConfig, Environment};
pub use collaborators::{ExportArtifact, LeadExporter, Notice, NoticeLevel, Notifier, SearchStore};
pub use config::{load_app_config, load_app_config_from_env, validate_tier_thresholds};
pub use error::{ConfigError, CoreError, ExportError, StoreError};
pub use leads::{parse_leads, BusinessLead, LeadKey, SearchContext};
pub use searches::{SavedSearch, YamlSearchStore};
