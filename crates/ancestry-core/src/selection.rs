//! Observable race/lineage selection state.
//!
//! A two-field record with push-based change notification. Every mutation
//! fans out to all registered observers, synchronously and in registration
//! order. Changing the race always clears the lineage.

use crate::catalog::{LineageId, RaceId};
use thiserror::Error;

/// Failure reported by an observer callback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ObserverError(pub String);

impl From<&str> for ObserverError {
    fn from(message: &str) -> Self {
        Self(message.to_string())
    }
}

impl From<String> for ObserverError {
    fn from(message: String) -> Self {
        Self(message)
    }
}

/// Result returned by observer callbacks.
pub type ObserverResult = Result<(), ObserverError>;

/// Handle identifying a registered observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

impl ObserverId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

type Observer = Box<dyn FnMut(&SelectionState) -> ObserverResult>;

/// The user's in-progress race and lineage choice.
///
/// Identifiers are stored as given; checking them against the catalog is the
/// caller's job.
#[derive(Default)]
pub struct SelectionState {
    selected_race: Option<RaceId>,
    selected_lineage: Option<LineageId>,
    observers: Vec<(ObserverId, Observer)>,
    next_observer_id: u64,
}

impl SelectionState {
    /// Create an empty selection with no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected race, if any.
    pub fn selected_race(&self) -> Option<&RaceId> {
        self.selected_race.as_ref()
    }

    /// Currently selected lineage, if any.
    pub fn selected_lineage(&self) -> Option<&LineageId> {
        self.selected_lineage.as_ref()
    }

    /// Select a race. Clears the lineage, even when the race is unchanged.
    pub fn set_race(&mut self, race: impl Into<RaceId>) {
        let race = race.into();
        log::debug!("Race selected: {}", race);
        self.selected_race = Some(race);
        self.selected_lineage = None;
        self.notify();
    }

    /// Select a lineage.
    ///
    /// Does not require a race to be selected, nor that the lineage belongs
    /// to the selected race.
    pub fn set_lineage(&mut self, lineage: impl Into<LineageId>) {
        let lineage = lineage.into();
        log::debug!("Lineage selected: {}", lineage);
        self.selected_lineage = Some(lineage);
        self.notify();
    }

    /// Register an observer called after every mutation.
    ///
    /// No deduplication: registering the same behaviour twice runs it twice.
    pub fn add_observer<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&SelectionState) -> ObserverResult + 'static,
    {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Unregister an observer. Returns false if it was not registered.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify(&mut self) {
        // Observers get a shared borrow of the live state, so the list is
        // moved out for the duration of the fan-out.
        let observers = std::mem::take(&mut self.observers);
        let mut fan_out = FanOut { state: self, observers };
        for (id, observer) in fan_out.observers.iter_mut() {
            if let Err(e) = observer(&*fan_out.state) {
                log::warn!("Selection observer {} failed: {}", id.0, e);
            }
        }
    }
}

/// Puts the observer list back on drop, including while unwinding from a
/// panicking observer.
struct FanOut<'a> {
    state: &'a mut SelectionState,
    observers: Vec<(ObserverId, Observer)>,
}

impl Drop for FanOut<'_> {
    fn drop(&mut self) {
        self.state.observers = std::mem::take(&mut self.observers);
    }
}

impl std::fmt::Debug for SelectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionState")
            .field("selected_race", &self.selected_race)
            .field("selected_lineage", &self.selected_lineage)
            .field("observers", &self.observers.len())
            .finish()
    }
}
