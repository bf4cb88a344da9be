//! Ancestry Application
//!
//! The application shell providing windowing, catalog loading and the egui
//! character-creation screen.

mod app;
mod ui;

pub use app::{App, AppConfig};
pub use ui::{render_ui, UiAction};

#[cfg(not(target_arch = "wasm32"))]
pub use app::DEFAULT_NATIVE_CATALOG;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
