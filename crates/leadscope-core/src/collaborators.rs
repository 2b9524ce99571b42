//! Seams to the services the engine calls out to.
//!
//! Export, saved-search persistence and user notifications are side effects
//! owned by the host application. They are passed in as trait objects so the
//! scoring code stays pure.

use std::path::PathBuf;

use uuid::Uuid;

use crate::error::{ExportError, StoreError};
use crate::leads::BusinessLead;
use crate::searches::SavedSearch;

/// The file produced by a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub path: PathBuf,
    pub lead_count: usize,
}

/// Serializes an ordered list of leads into a downloadable artifact.
pub trait LeadExporter {
    /// # Errors
    ///
    /// Returns [`ExportError`] when the artifact cannot be encoded or written.
    fn export(
        &self,
        leads: &[&BusinessLead],
        filename: Option<&str>,
    ) -> Result<ExportArtifact, ExportError>;
}

/// Persists named searches.
pub trait SearchStore {
    /// All saved searches, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing store cannot be read.
    fn list(&self) -> Result<Vec<SavedSearch>, StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing store cannot be read.
    fn get(&self, id: Uuid) -> Result<Option<SavedSearch>, StoreError>;

    /// Insert or replace (by id) a saved search.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing store cannot be read or written.
    fn save(&self, search: &SavedSearch) -> Result<(), StoreError>;

    /// Returns `true` when a search with `id` existed and was removed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing store cannot be read or written.
    fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A short user-facing message (a toast, in the browser front end).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

pub trait Notifier {
    fn notify(&self, notice: Notice);
}
