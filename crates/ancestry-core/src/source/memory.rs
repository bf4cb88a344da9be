//! In-memory catalog source.

use super::{BoxFuture, CatalogSource};
use crate::catalog::{Catalog, CatalogResult};

/// Catalog source backed by a JSON document held in memory.
///
/// Parsing happens on every load, so a malformed document fails the same way
/// a fetched one would.
#[derive(Debug, Clone)]
pub struct MemoryCatalogSource {
    json: String,
}

impl MemoryCatalogSource {
    /// Create a source from catalog JSON.
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }

    /// Create a source serving an already-built catalog.
    pub fn from_catalog(catalog: &Catalog) -> CatalogResult<Self> {
        Ok(Self::new(catalog.to_json()?))
    }
}

impl CatalogSource for MemoryCatalogSource {
    fn load(&self) -> BoxFuture<'_, CatalogResult<Catalog>> {
        Box::pin(async move { Catalog::from_json(&self.json) })
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
