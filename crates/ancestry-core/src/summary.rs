//! Human-readable summary of the current selection.

use crate::catalog::Catalog;
use crate::selection::SelectionState;

/// Race label shown when nothing is selected.
pub const NONE_LABEL: &str = "None";
/// Race label shown when the selected race is not in the catalog.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// What the summary panel displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSummary {
    /// Race name, or a sentinel label.
    pub race: String,
    /// Lineage name; `None` hides the lineage line.
    pub lineage: Option<String>,
}

impl Default for CharacterSummary {
    fn default() -> Self {
        Self {
            race: NONE_LABEL.to_string(),
            lineage: None,
        }
    }
}

impl CharacterSummary {
    /// Resolve the selection against the catalog.
    ///
    /// The lineage is only shown when it belongs to the selected race.
    pub fn from_selection(state: &SelectionState, catalog: &Catalog) -> Self {
        let Some(race_id) = state.selected_race() else {
            return Self::default();
        };

        let race = catalog.race(race_id);
        let race_label = race
            .map(|r| r.name.clone())
            .unwrap_or_else(|| UNKNOWN_LABEL.to_string());

        let lineage = match (race, state.selected_lineage()) {
            (Some(race), Some(lineage_id)) => race.lineage(lineage_id).map(|l| l.name.clone()),
            _ => None,
        };

        Self {
            race: race_label,
            lineage,
        }
    }

    /// Whether the lineage line is visible.
    pub fn shows_lineage(&self) -> bool {
        self.lineage.is_some()
    }
}
