//! Named saved searches and a YAML file-backed store for them.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::collaborators::SearchStore;
use crate::error::StoreError;
use crate::leads::SearchContext;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSearch {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub business_type: Option<String>,
    /// Number of leads the search returned when it was saved.
    pub lead_count: usize,
    pub saved_at: DateTime<Utc>,
}

impl SavedSearch {
    #[must_use]
    pub fn new(name: impl Into<String>, search: &SearchContext, lead_count: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            location: search.location.clone(),
            business_type: search.business_type.clone(),
            lead_count,
            saved_at: Utc::now(),
        }
    }

    /// The search context this entry re-runs.
    #[must_use]
    pub fn context(&self) -> SearchContext {
        SearchContext {
            location: self.location.clone(),
            business_type: self.business_type.clone(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SearchesFile {
    #[serde(default)]
    searches: Vec<SavedSearch>,
}

/// Stores saved searches in a single YAML document.
///
/// A missing file reads as an empty list; the file and its parent directory
/// are created on the first save.
#[derive(Debug, Clone)]
pub struct YamlSearchStore {
    path: PathBuf,
}

impl YamlSearchStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<SearchesFile, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(SearchesFile::default())
            }
            Err(e) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(SearchesFile::default());
        }

        serde_yaml::from_str(&content).map_err(StoreError::Parse)
    }

    fn write(&self, file: &SearchesFile) -> Result<(), StoreError> {
        let content = serde_yaml::to_string(file).map_err(StoreError::Serialize)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        std::fs::write(&self.path, content).map_err(|e| StoreError::Io {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl SearchStore for YamlSearchStore {
    fn list(&self) -> Result<Vec<SavedSearch>, StoreError> {
        let mut searches = self.read()?.searches;
        searches.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        Ok(searches)
    }

    fn get(&self, id: Uuid) -> Result<Option<SavedSearch>, StoreError> {
        Ok(self.read()?.searches.into_iter().find(|s| s.id == id))
    }

    fn save(&self, search: &SavedSearch) -> Result<(), StoreError> {
        let mut file = self.read()?;
        match file.searches.iter_mut().find(|s| s.id == search.id) {
            Some(existing) => *existing = search.clone(),
            None => file.searches.push(search.clone()),
        }
        self.write(&file)
    }

    fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut file = self.read()?;
        let before = file.searches.len();
        file.searches.retain(|s| s.id != id);
        if file.searches.len() == before {
            return Ok(false);
        }
        self.write(&file)?;
        Ok(true)
    }
}
