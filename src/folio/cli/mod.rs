//! # CLI Behavior
//!
//! This is **one possible UI client** for folio, not the engine itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting.
//!
//! ## One-shot Listings
//!
//! `folio blog --items posts.json --search cache --tag go --view list`
//!
//! Flags are translated into the same actions an interactive user would
//! dispatch (`SET_SEARCH_TERM`, `SET_FACETS`, `SET_VIEW_MODE`,
//! `SET_SORT_ORDER`), applied to a fresh listing, and the result is printed
//! once.
//!
//! ## Interactive Browsing
//!
//! `folio browse blog --items posts.json` reads one command per line from
//! stdin (`/search go`, `/tag rust`, `/view list`, `/sort`, `/clear`, or a raw
//! JSON action) and re-renders after every change.
//!
//! ## Module Structure
//!
//! - `commands`: context setup and per-command handlers
//! - `browse`: line parsing and the dispatch loop
//! - `render`: grid, list and empty-state output
//! - `setup`: argument parsing via clap
//! - `styles`: terminal styling
//! - `logger`: tracing subscriber setup

mod browse;
mod commands;
#[cfg(test)]
mod fixtures;
mod logger;
mod render;
mod setup;
mod styles;

pub use commands::run;
