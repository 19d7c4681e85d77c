//! # Folio Architecture
//!
//! Folio is the listing engine behind a personal portfolio site: a blog and a
//! projects page, each showing a searchable, facet-filtered, sortable list of
//! content items. The engine is a library; the `folio` binary is one client of
//! it that renders listings in the terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Render adapter: grid, list and empty-state views         │
//! │  - Turns user input into Actions and dispatches them        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Listing Facade (listing.rs)                                │
//! │  - Items + per-listing config + one FilterStore             │
//! │  - Deferred search keystrokes (deferred.rs)                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Filter Core                                                │
//! │  - state.rs / store.rs: FilterState, Action, reduce         │
//! │  - predicate.rs: text match + pluggable facet strategy      │
//! │  - ordering.rs: date sort keys, newest/oldest               │
//! │  - projection.rs: filter → sort → featured/regular split    │
//! │  Pure and synchronous: no I/O, no errors, no mutation       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Item Model (model.rs, item.rs)                             │
//! │  - Post / Project records                                   │
//! │  - ContentItem: the fields the core reads                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Collaborators that sit beside the core: [`loader`] (JSON collections and
//! their validation), [`config`] (folio.json), [`i18n`] (display labels) and
//! [`routes`] (item URLs).
//!
//! ## One Engine, Two Facet Semantics
//!
//! Blog posts carry many tags and match a tag selection if they share *any*
//! tag with it. Projects carry one category and match only that exact
//! category, with `"All"` meaning no restriction. Rather than two engines, the
//! core is generic over a [`predicate::FacetStrategy`]:
//!
//! - [`listing::BlogListing`] = `Listing<Post, AnyOf>`
//! - [`listing::ProjectListing`] = `Listing<Project, Equals>`
//!
//! ## Key Principle: The Core Never Fails
//!
//! Everything from [`listing`] inward degrades instead of erroring:
//! - an unparsable date sorts as the oldest item
//! - an unrecognized action leaves the state unchanged
//! - an empty result is a state the renderer shows, with a way back
//!   (`CLEAR_FILTERS`)
//!
//! Only the collaborators return [`error::Result`].
//!
//! ## Testing Strategy
//!
//! 1. **Core** (`state`, `predicate`, `ordering`, `projection`): unit tests of
//!    transitions and derived views. This is where most tests live.
//! 2. **Collaborators** (`loader`, `config`, `i18n`): parsing, defaults and
//!    validation against temp files.
//! 3. **CLI** (`tests/`): the binary end to end, via `assert_cmd`.

pub mod config;
pub mod deferred;
pub mod error;
pub mod i18n;
pub mod item;
pub mod listing;
pub mod loader;
pub mod model;
pub mod ordering;
pub mod predicate;
pub mod projection;
pub mod routes;
pub mod state;
pub mod store;

#[cfg(test)]
pub(crate) mod test_utils;
