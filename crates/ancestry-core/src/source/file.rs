//! File-based catalog source for native platforms.

use super::{BoxFuture, CatalogSource};
use crate::catalog::{Catalog, CatalogError, CatalogResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads the catalog from a JSON file.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileCatalogSource {
    fn load(&self) -> BoxFuture<'_, CatalogResult<Catalog>> {
        Box::pin(async move {
            if !self.path.exists() {
                return Err(CatalogError::NotFound(self.path.display().to_string()));
            }

            let json = fs::read_to_string(&self.path).map_err(|e| {
                CatalogError::Io(format!("Failed to read {}: {}", self.path.display(), e))
            })?;

            Catalog::from_json(&json)
        })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
