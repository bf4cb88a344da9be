//! Reusable egui widget components for the character-creation screen.
//!
//! - **Card**: selectable race card with a footer slot
//! - **Dropdown**: lineage picker with placeholder and disabled styling
//! - **Summary**: current selection readout
//! - **Layout**: frames, separators, section labels

pub mod card;
pub mod dropdown;
pub mod layout;
pub mod summary;

pub use card::RaceCard;
pub use dropdown::{DropdownOption, LineageDropdown, DISABLED_OPACITY};
pub use layout::{card_frame, panel_frame, section_label, separator};
pub use summary::summary_panel;

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Width of a race card's content area
    pub const CARD_WIDTH: f32 = 220.0;
    /// Width of the lineage dropdown
    pub const DROPDOWN_WIDTH: f32 = 200.0;
    /// Width of the summary panel
    pub const SUMMARY_WIDTH: f32 = 240.0;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Card background
    pub const CARD_BG: Color32 = Color32::WHITE;
    /// Selected background
    pub const SELECTED_BG: Color32 = Color32::from_rgb(235, 245, 255);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}
