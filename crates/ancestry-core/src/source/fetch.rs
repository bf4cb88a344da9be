//! Browser `fetch` catalog source for WebAssembly.

use super::{BoxFuture, CatalogSource};
use crate::catalog::{Catalog, CatalogError, CatalogResult};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Fetches the catalog over HTTP from the hosting page.
pub struct FetchCatalogSource {
    url: String,
}

impl FetchCatalogSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    async fn fetch_text(&self) -> CatalogResult<String> {
        let window = web_sys::window()
            .ok_or_else(|| CatalogError::Fetch("No window object".to_string()))?;

        let response = JsFuture::from(window.fetch_with_str(&self.url))
            .await
            .map_err(|e| CatalogError::Fetch(format!("Request failed: {:?}", e)))?;
        let response: web_sys::Response = response
            .dyn_into()
            .map_err(|_| CatalogError::Fetch("Unexpected fetch result".to_string()))?;

        if response.status() == 404 {
            return Err(CatalogError::NotFound(self.url.clone()));
        }
        if !response.ok() {
            return Err(CatalogError::Fetch(format!(
                "HTTP {} for {}",
                response.status(),
                self.url
            )));
        }

        let text = response
            .text()
            .map_err(|e| CatalogError::Fetch(format!("Failed to read body: {:?}", e)))?;
        let text = JsFuture::from(text)
            .await
            .map_err(|e| CatalogError::Fetch(format!("Failed to read body: {:?}", e)))?;

        text.as_string()
            .ok_or_else(|| CatalogError::Fetch("Response body is not text".to_string()))
    }
}

impl CatalogSource for FetchCatalogSource {
    fn load(&self) -> BoxFuture<'_, CatalogResult<Catalog>> {
        Box::pin(async move {
            let json = self.fetch_text().await?;
            Catalog::from_json(&json)
        })
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}
