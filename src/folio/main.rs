//! # Folio CLI
//!
//! The binary is a terminal render adapter for the folio listing engine. This
//! file only invokes `cli::run()` and handles process termination; everything
//! user-facing lives in `cli/`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/folio/cli/)                                 │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + per-command handlers (commands.rs)      │
//! │  - Grid / list / empty-state rendering (render.rs)          │
//! │  - Interactive dispatch loop (browse.rs)                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Listing Facade (folio::listing)                            │
//! │  - dispatch(Action), projection(), facet_options()          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The CLI never filters or sorts anything itself. It turns arguments and typed
//! lines into `Action`s, hands them to the listing, and renders whatever
//! projection comes back.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
