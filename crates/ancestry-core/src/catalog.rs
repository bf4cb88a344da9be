//! Race and lineage catalog.
//!
//! The catalog is loaded once before any interaction and is read-only
//! afterwards. Identifiers are opaque strings; nothing here checks that they
//! are unique.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Catalog loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog not found: {0}")]
    NotFound(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Fetch error: {0}")]
    Fetch(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Identifier of a race.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RaceId(String);

/// Identifier of a lineage, unique within its owning race.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineageId(String);

macro_rules! string_id {
    ($name:ident) => {
        impl $name {
            /// Create an identifier from any string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// The identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(RaceId);
string_id!(LineageId);

/// A lineage sub-option of a race.
///
/// Only `id` is required; missing text fields load as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lineage {
    pub id: LineageId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A selectable race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub id: RaceId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Whether the race presents a lineage picker.
    #[serde(default)]
    pub has_lineages: bool,
    /// Lineages in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lineages: Option<Vec<Lineage>>,
}

impl Race {
    /// Whether a lineage picker should be shown for this race.
    ///
    /// Requires both the flag and a lineage list; an empty list still counts.
    pub fn offers_lineages(&self) -> bool {
        self.has_lineages && self.lineages.is_some()
    }

    /// Lineages in catalog order (empty when none are declared).
    pub fn lineages(&self) -> &[Lineage] {
        self.lineages.as_deref().unwrap_or_default()
    }

    /// Find a lineage of this race by ID.
    pub fn lineage(&self, id: &LineageId) -> Option<&Lineage> {
        self.lineages().iter().find(|l| &l.id == id)
    }
}

/// The full race catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub races: Vec<Race>,
}

impl Catalog {
    /// Create a catalog from races in display order.
    pub fn new(races: Vec<Race>) -> Self {
        Self { races }
    }

    /// Parse a catalog document.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))
    }

    /// Serialize the catalog to pretty JSON.
    pub fn to_json(&self) -> CatalogResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CatalogError::Parse(e.to_string()))
    }

    /// All races in catalog order.
    pub fn races(&self) -> &[Race] {
        &self.races
    }

    /// Find a race by ID. The first match wins if IDs repeat.
    pub fn race(&self, id: &RaceId) -> Option<&Race> {
        self.races.iter().find(|r| &r.id == id)
    }

    /// Find a lineage within a specific race.
    pub fn lineage(&self, race: &RaceId, lineage: &LineageId) -> Option<&Lineage> {
        self.race(race).and_then(|r| r.lineage(lineage))
    }

    pub fn len(&self) -> usize {
        self.races.len()
    }

    pub fn is_empty(&self) -> bool {
        self.races.is_empty()
    }
}
