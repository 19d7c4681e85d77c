//! # Listing Facade
//!
//! A [`Listing`] is what a render adapter talks to: the loaded items of one
//! section, that section's [`ListingConfig`], and the filter store of the view
//! currently showing them.
//!
//! The facade holds no logic of its own. It forwards actions to the store,
//! recomputes the projection on demand, and routes search keystrokes through
//! [`DeferredSearch`] so typing never waits on recomputation.
//!
//! ```rust
//! use folio::listing::BlogListing;
//! use folio::projection::ListingConfig;
//! use folio::state::Action;
//!
//! let posts = Vec::new();
//! let mut listing = BlogListing::new(&posts, ListingConfig::flat());
//! listing.dispatch(Action::SetSearchTerm("rust".into()));
//! assert!(listing.projection().is_empty());
//! ```

use crate::deferred::{DeferredSearch, SearchTicket};
use crate::item::ContentItem;
use crate::model::{Post, Project};
use crate::predicate::{AnyOf, Equals, FacetStrategy};
use crate::projection::{project, ListingConfig, Projection};
use crate::state::{Action, FilterState};
use crate::store::FilterStore;
use std::collections::HashSet;
use tracing::trace;

pub struct Listing<'a, I: ContentItem, F: FacetStrategy> {
    items: &'a [I],
    config: ListingConfig,
    store: FilterStore<F>,
    search: DeferredSearch,
}

/// Blog posts, filtered by tags with any-of semantics.
pub type BlogListing<'a> = Listing<'a, Post, AnyOf>;

/// Projects, filtered by a single category.
pub type ProjectListing<'a> = Listing<'a, Project, Equals>;

impl<'a, I: ContentItem, F: FacetStrategy> Listing<'a, I, F> {
    pub fn new(items: &'a [I], config: ListingConfig) -> Self {
        Self::with_state(items, config, FilterState::default())
    }

    pub fn with_state(items: &'a [I], config: ListingConfig, initial: FilterState<F>) -> Self {
        Self {
            items,
            config,
            store: FilterStore::new(initial),
            search: DeferredSearch::new(),
        }
    }

    pub fn items(&self) -> &'a [I] {
        self.items
    }

    pub fn state(&self) -> &FilterState<F> {
        self.store.state()
    }

    pub fn dispatch(&mut self, action: Action) -> bool {
        self.store.dispatch(action)
    }

    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = Action>) -> bool {
        self.store.dispatch_all(actions)
    }

    /// The current derived view.
    pub fn projection(&self) -> Projection<'a, I> {
        let view = project(self.items, self.store.state(), &self.config);
        trace!(
            total = self.items.len(),
            shown = view.all.len(),
            featured = view.featured.len(),
            "projection computed"
        );
        view
    }

    /// Distinct facet values across all items, in first-seen order.
    pub fn facet_options(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let values = self
            .items
            .iter()
            .flat_map(|item| item.facets())
            .filter(|value| seen.insert(*value))
            .map(str::to_string)
            .collect();
        F::options(values)
    }

    /// Records a search keystroke without touching the filter state yet.
    pub fn defer_search(&mut self, term: impl Into<String>) -> SearchTicket {
        self.search.submit(term)
    }

    /// Applies a deferred search if `ticket` is still the latest one.
    /// Returns whether the filter state changed.
    pub fn settle_search(&mut self, ticket: SearchTicket) -> bool {
        match self.search.settle(ticket) {
            Some(term) => self.store.dispatch(Action::SetSearchTerm(term)),
            None => false,
        }
    }

    /// Applies whatever search input is pending.
    pub fn flush_search(&mut self) -> bool {
        match self.search.flush() {
            Some(term) => self.store.dispatch(Action::SetSearchTerm(term)),
            None => false,
        }
    }

    pub fn has_pending_search(&self) -> bool {
        self.search.has_pending()
    }
}
