//! Card and picker models.

use crate::catalog::{LineageId, Race, RaceId};

/// Text of the empty picker option.
pub const LINEAGE_PLACEHOLDER: &str = "Choose lineage...";

/// One selectable entry of a lineage picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineageOption {
    pub id: LineageId,
    pub label: String,
    /// Shown on hover.
    pub hint: String,
}

/// Lineage dropdown attached to a race card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineagePicker {
    race: RaceId,
    options: Vec<LineageOption>,
    enabled: bool,
    /// Value currently shown in the dropdown; empty is the placeholder.
    pending: String,
}

impl LineagePicker {
    fn for_race(race: &Race) -> Self {
        let options = race
            .lineages()
            .iter()
            .map(|l| LineageOption {
                id: l.id.clone(),
                label: l.name.clone(),
                hint: l.description.clone(),
            })
            .collect();

        Self {
            race: race.id.clone(),
            options,
            enabled: false,
            pending: String::new(),
        }
    }

    /// Race this picker belongs to.
    pub fn race(&self) -> &RaceId {
        &self.race
    }

    /// Options in catalog order, placeholder excluded.
    pub fn options(&self) -> &[LineageOption] {
        &self.options
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Raw dropdown value (empty string for the placeholder).
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Label to show in the closed dropdown.
    pub fn selected_text(&self) -> &str {
        self.options
            .iter()
            .find(|o| o.id.as_str() == self.pending)
            .map(|o| o.label.as_str())
            .unwrap_or(LINEAGE_PLACEHOLDER)
    }

    pub(crate) fn set_pending(&mut self, value: &str) {
        self.pending = value.to_string();
    }

    /// Enable, or disable and reset to the placeholder.
    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.pending.clear();
        }
    }
}

/// A race card on the selection screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceCard {
    pub race: RaceId,
    pub title: String,
    pub description: String,
    selected: bool,
    picker: Option<LineagePicker>,
}

impl RaceCard {
    pub(crate) fn from_race(race: &Race) -> Self {
        Self {
            race: race.id.clone(),
            title: race.name.clone(),
            description: race.description.clone(),
            selected: false,
            picker: race.offers_lineages().then(|| LineagePicker::for_race(race)),
        }
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// The lineage picker, if this race offers lineages.
    pub fn picker(&self) -> Option<&LineagePicker> {
        self.picker.as_ref()
    }

    pub(crate) fn picker_mut(&mut self) -> Option<&mut LineagePicker> {
        self.picker.as_mut()
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample;

    #[test]
    fn test_card_without_lineages_has_no_picker() {
        let catalog = sample();
        let human = RaceCard::from_race(catalog.race(&"human".into()).unwrap());
        assert!(human.picker().is_none());
        assert!(!human.is_selected());

        let dwarf = RaceCard::from_race(catalog.race(&"dwarf".into()).unwrap());
        assert!(dwarf.picker().is_none());
    }

    #[test]
    fn test_picker_starts_disabled_on_placeholder() {
        let catalog = sample();
        let elf = RaceCard::from_race(catalog.race(&"elf".into()).unwrap());
        let picker = elf.picker().unwrap();

        assert!(!picker.is_enabled());
        assert_eq!(picker.pending(), "");
        assert_eq!(picker.selected_text(), LINEAGE_PLACEHOLDER);
        let labels: Vec<&str> = picker.options().iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["High Elf", "Wood Elf"]);
        assert_eq!(picker.options()[1].hint, "Swift and stealthy.");
    }

    #[test]
    fn test_disabling_resets_pending() {
        let catalog = sample();
        let mut elf = RaceCard::from_race(catalog.race(&"elf".into()).unwrap());
        let picker = elf.picker_mut().unwrap();

        picker.set_enabled(true);
        picker.set_pending("wood-elf");
        assert_eq!(picker.selected_text(), "Wood Elf");

        picker.set_enabled(false);
        assert_eq!(picker.pending(), "");
        assert_eq!(picker.selected_text(), LINEAGE_PLACEHOLDER);
    }
}
