//! Business lead records and the identity/search types derived from them.

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// A business contact record produced by a directory search.
///
/// Only `name` is guaranteed. Every other field may be absent or blank and
/// must be treated as unknown rather than as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessLead {
    pub name: String,
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub instagram: Option<String>,
    pub category: Option<String>,
    pub rating: Option<f64>,
    /// Directory or provider the record came from.
    pub source: Option<String>,
}

impl BusinessLead {
    /// Create a lead with only a name; all optional fields are `None`.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
            email: None,
            phone: None,
            website: None,
            instagram: None,
            category: None,
            rating: None,
            source: None,
        }
    }

    #[must_use]
    pub fn address(&self) -> Option<&str> {
        non_blank(self.address.as_deref())
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        non_blank(self.email.as_deref())
    }

    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        non_blank(self.phone.as_deref())
    }

    #[must_use]
    pub fn website(&self) -> Option<&str> {
        non_blank(self.website.as_deref())
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        non_blank(self.category.as_deref())
    }

    #[must_use]
    pub fn source(&self) -> Option<&str> {
        non_blank(self.source.as_deref())
    }

    /// Compute the content-derived identity of this lead.
    #[must_use]
    pub fn key(&self) -> LeadKey {
        LeadKey::for_lead(self)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Stable identity for a lead, derived from its immutable contact content.
///
/// SHA-256 over `name || address || email || phone || website`, each
/// trimmed and lower-cased, NUL separated. Hex-encoded. Leads with identical
/// contact content share a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadKey(String);

impl LeadKey {
    #[must_use]
    pub fn for_lead(lead: &BusinessLead) -> Self {
        use sha2::{Digest, Sha256};

        let normalized = |value: Option<&str>| value.unwrap_or("").trim().to_lowercase();
        let input = format!(
            "{}\x00{}\x00{}\x00{}\x00{}",
            lead.name.trim().to_lowercase(),
            normalized(lead.address.as_deref()),
            normalized(lead.email.as_deref()),
            normalized(lead.phone.as_deref()),
            normalized(lead.website.as_deref()),
        );
        Self(format!("{:x}", Sha256::digest(input.as_bytes())))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 12 hex characters, enough to address a row from the CLI.
    #[must_use]
    pub fn short(&self) -> &str {
        self.0.get(..12).unwrap_or(&self.0)
    }
}

impl std::fmt::Display for LeadKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The free-form search a result set was produced for.
///
/// Both fields are plain text used for relevance comparison; nothing here is
/// geocoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchContext {
    pub location: String,
    pub business_type: Option<String>,
}

impl SearchContext {
    #[must_use]
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            business_type: None,
        }
    }

    #[must_use]
    pub fn with_business_type(mut self, business_type: impl Into<String>) -> Self {
        self.business_type = Some(business_type.into());
        self
    }

    #[must_use]
    pub fn business_type(&self) -> Option<&str> {
        non_blank(self.business_type.as_deref())
    }
}

/// Parse a JSON array of leads and check that every record has a name.
///
/// # Errors
///
/// Returns [`CoreError::LeadParse`] for malformed JSON and
/// [`CoreError::InvalidLead`] when a record has a blank name.
pub fn parse_leads(json: &str) -> Result<Vec<BusinessLead>, CoreError> {
    let leads: Vec<BusinessLead> = serde_json::from_str(json)?;

    if let Some(index) = leads.iter().position(|lead| lead.name.trim().is_empty()) {
        return Err(CoreError::InvalidLead {
            index,
            reason: "lead name must be non-empty".to_string(),
        });
    }

    Ok(leads)
}
