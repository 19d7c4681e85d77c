//! # Filter State Store
//!
//! Owns the single [`FilterState`] of a listing view. The state is readable
//! from outside but only replaced through [`FilterStore::dispatch`], which runs
//! the pure [`reduce`] function and swaps in the result.
//!
//! A store lives exactly as long as its view and is never persisted.

use crate::predicate::FacetStrategy;
use crate::state::{reduce, Action, FilterState};
use tracing::{debug, trace};

#[derive(Debug, Clone)]
pub struct FilterStore<F: FacetStrategy> {
    state: FilterState<F>,
}

impl<F: FacetStrategy> Default for FilterStore<F> {
    fn default() -> Self {
        Self::new(FilterState::default())
    }
}

impl<F: FacetStrategy> FilterStore<F> {
    pub fn new(initial: FilterState<F>) -> Self {
        Self { state: initial }
    }

    pub fn state(&self) -> &FilterState<F> {
        &self.state
    }

    /// Applies `action` and reports whether the state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let next = reduce(&self.state, &action);
        let changed = next != self.state;

        if changed {
            debug!(action = action.name(), "filter state changed");
            trace!(state = ?next, "new filter state");
            self.state = next;
        } else if matches!(action, Action::Unknown) {
            debug!("ignoring unrecognized action");
        } else {
            trace!(action = action.name(), "action left state unchanged");
        }

        changed
    }

    /// Applies actions in order, returning whether any of them changed the state.
    pub fn dispatch_all<A: IntoIterator<Item = Action>>(&mut self, actions: A) -> bool {
        actions
            .into_iter()
            .fold(false, |changed, action| self.dispatch(action) || changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{AnyOf, Equals};
    use crate::state::{SortOrder, ViewMode};

    #[test]
    fn dispatch_reports_change() {
        let mut store = FilterStore::<AnyOf>::default();
        assert!(store.dispatch(Action::SetViewMode(ViewMode::List)));
        assert!(!store.dispatch(Action::SetViewMode(ViewMode::List)));
        assert_eq!(store.state().view_mode, ViewMode::List);
    }

    #[test]
    fn unknown_action_changes_nothing() {
        let mut store = FilterStore::<Equals>::default();
        store.dispatch(Action::SetFacet("Web".into()));
        let before = store.state().clone();
        assert!(!store.dispatch(Action::Unknown));
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn clearing_twice_is_a_noop() {
        let mut store = FilterStore::<AnyOf>::default();
        store.dispatch(Action::SetSearchTerm("go".into()));
        assert!(store.dispatch(Action::ClearFilters));
        assert!(!store.dispatch(Action::ClearFilters));
    }

    #[test]
    fn dispatch_all_applies_in_order() {
        let mut store = FilterStore::<AnyOf>::default();
        let changed = store.dispatch_all([
            Action::SetSortOrder(SortOrder::Oldest),
            Action::SetSearchTerm("a".into()),
            Action::SetSearchTerm("ab".into()),
        ]);
        assert!(changed);
        assert_eq!(store.state().search_term, "ab");
        assert_eq!(store.state().sort_order, SortOrder::Oldest);
    }
}
