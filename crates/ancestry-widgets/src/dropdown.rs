//! Lineage dropdown.

use egui::Ui;

use crate::sizing;

/// Opacity applied to a disabled dropdown.
pub const DISABLED_OPACITY: f32 = 0.5;

/// One choice in a [`LineageDropdown`].
#[derive(Debug, Clone, Copy)]
pub struct DropdownOption<'a> {
    /// Value reported when chosen; must not be empty.
    pub value: &'a str,
    pub label: &'a str,
    /// Hover text.
    pub hint: &'a str,
}

/// A combo box whose first entry is an empty placeholder.
pub struct LineageDropdown<'a> {
    id_salt: &'a str,
    placeholder: &'a str,
    options: &'a [DropdownOption<'a>],
    enabled: bool,
    width: f32,
}

impl<'a> LineageDropdown<'a> {
    /// Create a new dropdown. `id_salt` must be unique among dropdowns.
    pub fn new(id_salt: &'a str, placeholder: &'a str, options: &'a [DropdownOption<'a>]) -> Self {
        Self {
            id_salt,
            placeholder,
            options,
            enabled: true,
            width: sizing::DROPDOWN_WIDTH,
        }
    }

    /// Set whether the dropdown accepts input.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the dropdown width.
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Show the dropdown bound to `value` and return true if it changed.
    ///
    /// An empty `value` shows the placeholder.
    pub fn show(self, ui: &mut Ui, value: &mut String) -> bool {
        let before = value.clone();
        let selected_text = self
            .options
            .iter()
            .find(|o| o.value == value.as_str())
            .map(|o| o.label)
            .unwrap_or(self.placeholder);

        ui.add_enabled_ui(self.enabled, |ui| {
            if !self.enabled {
                ui.multiply_opacity(DISABLED_OPACITY);
            }

            egui::ComboBox::from_id_salt(self.id_salt)
                .selected_text(selected_text)
                .width(self.width)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut *value, String::new(), self.placeholder);
                    for option in self.options {
                        ui.selectable_value(&mut *value, option.value.to_string(), option.label)
                            .on_hover_text(option.hint);
                    }
                });
        });

        *value != before
    }
}
