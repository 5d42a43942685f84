//! Specialty entity types.
//!
//! A specialty is a medical specialization (e.g. Cardiology) identified by
//! an opaque id minted by the backend. The admin frontend never interprets
//! the id beyond equality comparison.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An opaque specialty identifier.
///
/// The backend uses UUID strings, but nothing in this workspace depends on
/// that — ids are compared for equality and passed back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpecialtyId(pub String);

impl SpecialtyId {
    /// Construct a specialty id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SpecialtyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A specialty catalog entry as served by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specialty {
    /// Backend-assigned identifier.
    pub id: SpecialtyId,
    /// Display title (e.g. "Cardiology").
    pub title: String,
    /// URL of the specialty icon asset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Backend record timestamps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Specialty {
    /// Build a minimal catalog entry. Timestamps and icon are left unset —
    /// the backend fills them in.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: SpecialtyId::new(id),
            title: title.into(),
            icon: None,
            created_at: None,
            updated_at: None,
        }
    }
}
