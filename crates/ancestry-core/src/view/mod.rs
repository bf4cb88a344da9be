//! View binding for the race selection screen.
//!
//! This module holds the platform-agnostic model a GUI renders each frame:
//! - One card per race, in catalog order
//! - A lineage picker on cards whose race offers lineages
//! - The summary kept current by a selection observer
//!
//! User interaction is translated into [`SelectionState`](crate::SelectionState)
//! mutations here, never in the GUI layer.

mod binding;
mod card;

pub use binding::CreationView;
pub use card::{LineageOption, LineagePicker, RaceCard, LINEAGE_PLACEHOLDER};
