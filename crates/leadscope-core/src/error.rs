use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("failed to parse leads: {0}")]
    LeadParse(#[from] serde_json::Error),

    #[error("lead at index {index} is invalid: {reason}")]
    InvalidLead { index: usize, reason: String },
}

/// Failures raised by a [`crate::SearchStore`] implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access saved searches at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse saved searches: {0}")]
    Parse(#[source] serde_yaml::Error),

    #[error("failed to serialize saved searches: {0}")]
    Serialize(#[source] serde_yaml::Error),
}

/// Failures raised by a [`crate::LeadExporter`] or the export action.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no leads to export")]
    NoLeads,

    #[error("failed to write export to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode export: {0}")]
    Encode(String),
}
