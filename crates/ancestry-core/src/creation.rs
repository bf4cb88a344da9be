//! Character creation controller.
//!
//! Owns the catalog, the selection state and the view bound to it. This is
//! the surface the application and external callers talk to.

use std::rc::Rc;

use crate::catalog::{Catalog, CatalogResult, LineageId, RaceId};
use crate::selection::{ObserverId, ObserverResult, SelectionState};
use crate::source::CatalogSource;
use crate::summary::CharacterSummary;
use crate::view::CreationView;

/// A character-creation session.
#[derive(Debug)]
pub struct CharacterCreation {
    catalog: Rc<Catalog>,
    state: SelectionState,
    view: CreationView,
}

impl CharacterCreation {
    /// Build the screen for an already loaded catalog.
    pub fn new(catalog: Catalog) -> Self {
        let catalog = Rc::new(catalog);
        let mut state = SelectionState::new();
        let mut view = CreationView::build(Rc::clone(&catalog));
        view.attach(&mut state);

        Self {
            catalog,
            state,
            view,
        }
    }

    /// Load the catalog from `source` and build the screen.
    ///
    /// Nothing is built when loading fails.
    pub async fn initialize(source: &dyn CatalogSource) -> CatalogResult<Self> {
        let catalog = source.load().await?;
        log::info!(
            "Loaded {} races from {}",
            catalog.len(),
            source.location()
        );
        Ok(Self::new(catalog))
    }

    /// Select a race as if its card was clicked.
    pub fn set_race(&mut self, race: impl Into<RaceId>) {
        let race = race.into();
        self.view.select_race(&mut self.state, &race);
    }

    /// Select a lineage directly, bypassing the pickers.
    pub fn set_lineage(&mut self, lineage: impl Into<LineageId>) {
        self.state.set_lineage(lineage);
    }

    /// Apply a lineage dropdown change on `race`'s card.
    pub fn choose_lineage(&mut self, race: &RaceId, value: &str) {
        self.view.choose_lineage(&mut self.state, race, value);
    }

    /// Register an additional selection observer.
    pub fn add_observer<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&SelectionState) -> ObserverResult + 'static,
    {
        self.state.add_observer(observer)
    }

    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.state.remove_observer(id)
    }

    /// The live selection state.
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn view(&self) -> &CreationView {
        &self.view
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn summary(&self) -> CharacterSummary {
        self.view.summary()
    }
}
