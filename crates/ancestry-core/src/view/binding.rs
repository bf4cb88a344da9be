//! Translates screen interaction into selection changes.

use std::cell::RefCell;
use std::rc::Rc;

use super::card::RaceCard;
use crate::catalog::{Catalog, RaceId};
use crate::selection::{ObserverId, SelectionState};
use crate::summary::CharacterSummary;

/// Screen model for race selection.
///
/// The view does not own the [`SelectionState`]; every operation that
/// mutates it takes the state by reference from whoever owns it.
#[derive(Debug)]
pub struct CreationView {
    catalog: Rc<Catalog>,
    cards: Vec<RaceCard>,
    /// Written by the summary observer.
    summary: Rc<RefCell<CharacterSummary>>,
    subscription: Option<ObserverId>,
}

impl CreationView {
    /// Build one card per race, in catalog order.
    pub fn build(catalog: Rc<Catalog>) -> Self {
        let cards = catalog.races().iter().map(RaceCard::from_race).collect();
        Self {
            catalog,
            cards,
            summary: Rc::new(RefCell::new(CharacterSummary::default())),
            subscription: None,
        }
    }

    /// Register the summary observer on `state`.
    ///
    /// Only one observer is ever registered per view; calling this again while
    /// attached does nothing.
    pub fn attach(&mut self, state: &mut SelectionState) {
        if self.subscription.is_some() {
            return;
        }

        *self.summary.borrow_mut() = CharacterSummary::from_selection(state, &self.catalog);

        let catalog = Rc::clone(&self.catalog);
        let summary = Rc::clone(&self.summary);
        let id = state.add_observer(move |state| {
            let mut summary = summary
                .try_borrow_mut()
                .map_err(|e| format!("summary busy: {}", e))?;
            *summary = CharacterSummary::from_selection(state, &catalog);
            Ok(())
        });
        self.subscription = Some(id);
    }

    /// Remove the summary observer from `state`.
    pub fn detach(&mut self, state: &mut SelectionState) {
        if let Some(id) = self.subscription.take() {
            state.remove_observer(id);
        }
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Handle a click on a race card.
    pub fn select_race(&mut self, state: &mut SelectionState, race: &RaceId) {
        for card in &mut self.cards {
            card.set_selected(&card.race == race);
        }

        state.set_race(race.clone());

        self.update_pickers(race);
    }

    /// Handle a change of the lineage dropdown on `race`'s card.
    ///
    /// The placeholder (empty value) only updates the dropdown. Input on a
    /// disabled dropdown, or on a card without one, is ignored.
    pub fn choose_lineage(&mut self, state: &mut SelectionState, race: &RaceId, value: &str) {
        let Some(picker) = self
            .cards
            .iter_mut()
            .find(|c| &c.race == race)
            .and_then(RaceCard::picker_mut)
        else {
            log::debug!("No lineage picker for race {}", race);
            return;
        };

        if !picker.is_enabled() {
            return;
        }

        picker.set_pending(value);
        if !value.is_empty() {
            state.set_lineage(value);
        }
    }

    /// Enable the picker of `selected` and disable every other one.
    fn update_pickers(&mut self, selected: &RaceId) {
        for card in &mut self.cards {
            let enabled = &card.race == selected;
            if let Some(picker) = card.picker_mut() {
                picker.set_enabled(enabled);
            }
        }
    }

    /// Cards in catalog order.
    pub fn cards(&self) -> &[RaceCard] {
        &self.cards
    }

    /// Card for a race.
    pub fn card(&self, race: &RaceId) -> Option<&RaceCard> {
        self.cards.iter().find(|c| &c.race == race)
    }

    /// Card currently marked as selected.
    pub fn selected_card(&self) -> Option<&RaceCard> {
        self.cards.iter().find(|c| c.is_selected())
    }

    /// Summary as of the last notification.
    pub fn summary(&self) -> CharacterSummary {
        self.summary.borrow().clone()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample;

    fn setup() -> (CreationView, SelectionState) {
        let mut state = SelectionState::new();
        let mut view = CreationView::build(Rc::new(sample()));
        view.attach(&mut state);
        (view, state)
    }

    fn picker_enabled(view: &CreationView, race: &str) -> bool {
        view.card(&race.into())
            .and_then(|c| c.picker())
            .map(|p| p.is_enabled())
            .unwrap_or(false)
    }

    #[test]
    fn test_build_follows_catalog_order() {
        let view = CreationView::build(Rc::new(sample()));
        let titles: Vec<&str> = view.cards().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Human", "Elf", "Dwarf"]);
        assert!(view.selected_card().is_none());
        assert!(!view.is_attached());
    }

    #[test]
    fn test_attach_registers_one_observer() {
        let (mut view, mut state) = setup();
        view.attach(&mut state);
        assert_eq!(state.observer_count(), 1);
        assert!(view.is_attached());
        assert_eq!(view.summary(), CharacterSummary::default());
    }

    #[test]
    fn test_select_race_updates_cards_and_summary() {
        let (mut view, mut state) = setup();

        view.select_race(&mut state, &"elf".into());

        assert_eq!(state.selected_race(), Some(&"elf".into()));
        assert_eq!(view.selected_card().map(|c| c.title.as_str()), Some("Elf"));
        assert_eq!(view.summary().race, "Elf");
        assert!(picker_enabled(&view, "elf"));

        view.select_race(&mut state, &"human".into());
        assert_eq!(view.selected_card().map(|c| c.title.as_str()), Some("Human"));
        assert!(!view.card(&"elf".into()).unwrap().is_selected());
        assert!(!picker_enabled(&view, "elf"));
    }

    #[test]
    fn test_select_unknown_race() {
        let (mut view, mut state) = setup();
        view.select_race(&mut state, &"elf".into());
        view.select_race(&mut state, &"orc".into());

        assert_eq!(state.selected_race(), Some(&"orc".into()));
        assert!(view.selected_card().is_none());
        assert!(!picker_enabled(&view, "elf"));
        assert_eq!(view.summary().race, "Unknown");
    }

    #[test]
    fn test_choose_lineage() {
        let (mut view, mut state) = setup();
        view.select_race(&mut state, &"elf".into());
        view.choose_lineage(&mut state, &"elf".into(), "wood-elf");

        assert_eq!(state.selected_lineage(), Some(&"wood-elf".into()));
        assert_eq!(view.summary().lineage.as_deref(), Some("Wood Elf"));
        let picker = view.card(&"elf".into()).unwrap().picker().unwrap();
        assert_eq!(picker.selected_text(), "Wood Elf");
    }

    #[test]
    fn test_placeholder_does_not_mutate() {
        let (mut view, mut state) = setup();
        view.select_race(&mut state, &"elf".into());
        view.choose_lineage(&mut state, &"elf".into(), "high-elf");

        let notifications = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&notifications);
        state.add_observer(move |_| {
            *counter.borrow_mut() += 1;
            Ok(())
        });

        view.choose_lineage(&mut state, &"elf".into(), "");

        assert_eq!(*notifications.borrow(), 0);
        assert_eq!(state.selected_lineage(), Some(&"high-elf".into()));
        let picker = view.card(&"elf".into()).unwrap().picker().unwrap();
        assert_eq!(picker.pending(), "");
    }

    #[test]
    fn test_disabled_picker_ignores_input() {
        let (mut view, mut state) = setup();

        // Nothing selected yet: every picker is disabled
        view.choose_lineage(&mut state, &"elf".into(), "high-elf");
        assert!(state.selected_lineage().is_none());

        view.select_race(&mut state, &"human".into());
        view.choose_lineage(&mut state, &"elf".into(), "high-elf");
        assert!(state.selected_lineage().is_none());
        assert_eq!(view.card(&"elf".into()).unwrap().picker().unwrap().pending(), "");
    }

    #[test]
    fn test_switching_race_resets_picker_and_lineage() {
        let (mut view, mut state) = setup();
        view.select_race(&mut state, &"elf".into());
        view.choose_lineage(&mut state, &"elf".into(), "high-elf");

        view.select_race(&mut state, &"dwarf".into());

        assert!(state.selected_lineage().is_none());
        let picker = view.card(&"elf".into()).unwrap().picker().unwrap();
        assert!(!picker.is_enabled());
        assert_eq!(picker.pending(), "");
        assert_eq!(view.summary().race, "Dwarf");
        assert!(view.summary().lineage.is_none());
    }

    #[test]
    fn test_reselecting_race_keeps_picker_value() {
        let (mut view, mut state) = setup();
        view.select_race(&mut state, &"elf".into());
        view.choose_lineage(&mut state, &"elf".into(), "high-elf");

        view.select_race(&mut state, &"elf".into());

        // State clears the lineage; the still-enabled dropdown keeps its value
        assert!(state.selected_lineage().is_none());
        assert!(view.summary().lineage.is_none());
        let picker = view.card(&"elf".into()).unwrap().picker().unwrap();
        assert_eq!(picker.pending(), "high-elf");
    }

    #[test]
    fn test_incomplete_entry_keeps_other_cards() {
        let catalog = Catalog::from_json(
            r#"{
                "races": [
                    { "id": "human", "name": "Human", "description": "Adaptable." },
                    { "id": "elf", "name": "Elf" },
                    { "id": "dwarf", "name": "Dwarf", "description": "Hardy." }
                ]
            }"#,
        )
        .unwrap();
        let mut state = SelectionState::new();
        let mut view = CreationView::build(Rc::new(catalog));
        view.attach(&mut state);

        let titles: Vec<&str> = view.cards().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Human", "Elf", "Dwarf"]);
        assert!(view.card(&"elf".into()).unwrap().description.is_empty());

        view.select_race(&mut state, &"elf".into());
        assert_eq!(view.summary().race, "Elf");
    }

    #[test]
    fn test_detach_stops_summary_updates() {
        let (mut view, mut state) = setup();
        view.select_race(&mut state, &"elf".into());
        view.detach(&mut state);

        assert_eq!(state.observer_count(), 0);
        state.set_race("dwarf");
        assert_eq!(view.summary().race, "Elf");

        view.attach(&mut state);
        assert_eq!(view.summary().race, "Dwarf");
    }
}
