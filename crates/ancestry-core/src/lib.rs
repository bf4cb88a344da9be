//! Ancestry Core Library
//!
//! Platform-agnostic catalog, selection state and view model for the
//! Ancestry character-creation screen.

pub mod catalog;
pub mod creation;
pub mod selection;
pub mod source;
pub mod summary;
pub mod view;

pub use catalog::{Catalog, CatalogError, CatalogResult, Lineage, LineageId, Race, RaceId};
pub use creation::CharacterCreation;
pub use selection::{ObserverError, ObserverId, ObserverResult, SelectionState};
pub use source::{CatalogSource, MemoryCatalogSource, DEFAULT_CATALOG};
pub use summary::{CharacterSummary, NONE_LABEL, UNKNOWN_LABEL};
pub use view::{CreationView, LineageOption, LineagePicker, RaceCard, LINEAGE_PLACEHOLDER};

#[cfg(not(target_arch = "wasm32"))]
pub use source::FileCatalogSource;

#[cfg(target_arch = "wasm32")]
pub use source::FetchCatalogSource;
