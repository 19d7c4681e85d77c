//! Interactive browsing: one input line per user gesture.
//!
//! Lines map onto listing actions:
//!
//! | input                     | action                          |
//! |---------------------------|---------------------------------|
//! | `some words`, `/search x` | search keystrokes (deferred)    |
//! | `/tag x`, `/category x`   | `SET_FACET`                     |
//! | `/tags a,b`               | `SET_FACETS`                    |
//! | `/view grid`, `/list`     | `SET_VIEW_MODE`                 |
//! | `/sort oldest`, `/sort`   | `SET_SORT_ORDER`, `TOGGLE_SORT_ORDER` |
//! | `/clear`                  | `CLEAR_FILTERS`                 |
//! | `{"type": ...}`           | the JSON action as-is           |
//!
//! Anything unrecognized becomes [`Action::Unknown`], which the reducer
//! ignores.

use super::render::{render_listing, Card, RenderOptions};
use super::styles;
use folio::listing::Listing;
use folio::predicate::FacetStrategy;
use folio::state::{Action, ViewMode};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

pub const CLEAR_HINT: &str = "/clear";

const HELP: &str = "\
Type words to search, or:
  /tag <value>       toggle a tag (blog) or pick a category (projects)
  /tags <a,b>        replace the facet selection
  /view grid|list    switch view (also /grid, /list)
  /sort [newest|oldest]  set or flip the sort order
  /clear             clear search and facets
  /help              this text
  /quit              leave";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Search input, applied one keystroke at a time.
    Search(String),
    Dispatch(Action),
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if line.starts_with('{') {
        let action = serde_json::from_str::<Action>(line).unwrap_or_else(|e| {
            warn!(error = %e, "unreadable action, ignoring");
            Action::Unknown
        });
        return Some(Command::Dispatch(action));
    }

    let Some(command) = line.strip_prefix('/') else {
        return Some(Command::Search(line.to_string()));
    };

    let (name, rest) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };

    let parsed = match name.to_lowercase().as_str() {
        "search" | "s" => Command::Search(rest.to_string()),
        "tag" | "category" | "facet" | "t" | "c" if !rest.is_empty() => {
            Command::Dispatch(Action::SetFacet(rest.to_string()))
        }
        "tags" | "categories" => Command::Dispatch(Action::SetFacets(
            rest.split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect(),
        )),
        "view" | "v" => rest
            .parse()
            .map(|mode| Command::Dispatch(Action::SetViewMode(mode)))
            .unwrap_or(Command::Dispatch(Action::Unknown)),
        "grid" => Command::Dispatch(Action::SetViewMode(ViewMode::Grid)),
        "list" => Command::Dispatch(Action::SetViewMode(ViewMode::List)),
        "sort" if rest.is_empty() => Command::Dispatch(Action::ToggleSortOrder),
        "sort" => rest
            .parse()
            .map(|order| Command::Dispatch(Action::SetSortOrder(order)))
            .unwrap_or(Command::Dispatch(Action::Unknown)),
        "clear" => Command::Dispatch(Action::ClearFilters),
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Dispatch(Action::Unknown),
    };
    Some(parsed)
}

/// Every prefix of `text`, as a user typing it would produce.
fn keystrokes(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }
    text.char_indices()
        .map(|(i, c)| text[..i + c.len_utf8()].to_string())
        .collect()
}

/// Feeds `text` through the deferred search one keystroke at a time and
/// settles the tickets in order. Only the last one is still current.
pub fn type_search<I: Card, F: FacetStrategy>(listing: &mut Listing<'_, I, F>, text: &str) -> bool {
    let tickets: Vec<_> = keystrokes(text)
        .into_iter()
        .map(|prefix| listing.defer_search(prefix))
        .collect();
    tickets
        .into_iter()
        .fold(false, |changed, ticket| listing.settle_search(ticket) || changed)
}

/// Renders the listing, then reads commands until `/quit` or end of input.
pub fn run_browse<I, F, R, W>(
    listing: &mut Listing<'_, I, F>,
    opts: &RenderOptions<'_>,
    input: R,
    out: &mut W,
) -> io::Result<()>
where
    I: Card,
    F: FacetStrategy,
    R: BufRead,
    W: Write,
{
    write!(out, "{}", render_listing(listing, opts, CLEAR_HINT))?;

    for line in input.lines() {
        let line = line?;
        let Some(command) = parse_line(&line) else {
            continue;
        };
        debug!(?command, "browse input");

        let changed = match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            Command::Search(text) => type_search(listing, &text),
            Command::Dispatch(Action::Unknown) => {
                listing.dispatch(Action::Unknown);
                writeln!(
                    out,
                    "{}",
                    opts.painter
                        .paint(&styles::HINT, &format!("Unrecognized input: {} (/help)", line.trim()))
                )?;
                continue;
            }
            Command::Dispatch(action) => listing.dispatch(action),
        };

        if changed {
            writeln!(out)?;
            write!(out, "{}", render_listing(listing, opts, CLEAR_HINT))?;
        } else {
            writeln!(out, "{}", opts.painter.paint(&styles::HINT, "(no change)"))?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::fixtures::sample_posts;
    use crate::cli::render::LINE_WIDTH;
    use crate::cli::styles::Painter;
    use folio::i18n::Labels;
    use folio::listing::BlogListing;
    use folio::model::{Post, Section};
    use folio::projection::ListingConfig;
    use folio::state::SortOrder;
    use std::io::Cursor;

    fn browse<'a>(posts: &'a [Post], input: &str) -> (String, BlogListing<'a>) {
        let labels = Labels::english();
        let opts = RenderOptions {
            labels: &labels,
            lang: "en",
            section: Section::Blog,
            grid_columns: 2,
            summary_chars: 120,
            width: LINE_WIDTH,
            painter: Painter::new(false),
        };
        let mut listing = BlogListing::new(posts, ListingConfig::flat());
        let mut out = Vec::new();
        run_browse(&mut listing, &opts, Cursor::new(input.to_string()), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), listing)
    }

    #[test]
    fn parses_slash_commands() {
        assert_eq!(
            parse_line("/tag rust"),
            Some(Command::Dispatch(Action::SetFacet("rust".into())))
        );
        assert_eq!(
            parse_line("/tags rust, go ,"),
            Some(Command::Dispatch(Action::SetFacets(vec![
                "rust".into(),
                "go".into()
            ])))
        );
        assert_eq!(
            parse_line("/sort"),
            Some(Command::Dispatch(Action::ToggleSortOrder))
        );
        assert_eq!(
            parse_line("/sort oldest"),
            Some(Command::Dispatch(Action::SetSortOrder(SortOrder::Oldest)))
        );
        assert_eq!(
            parse_line("/list"),
            Some(Command::Dispatch(Action::SetViewMode(ViewMode::List)))
        );
        assert_eq!(parse_line("/q"), Some(Command::Quit));
        assert_eq!(parse_line("   "), None);
    }

    #[test]
    fn plain_text_is_search_input() {
        assert_eq!(
            parse_line("  go cache "),
            Some(Command::Search("go cache".into()))
        );
        assert_eq!(parse_line("/search"), Some(Command::Search(String::new())));
    }

    #[test]
    fn unrecognized_input_becomes_unknown() {
        assert_eq!(
            parse_line("/frobnicate"),
            Some(Command::Dispatch(Action::Unknown))
        );
        assert_eq!(
            parse_line("/view table"),
            Some(Command::Dispatch(Action::Unknown))
        );
        assert_eq!(
            parse_line(r#"{"type":"FROBNICATE"}"#),
            Some(Command::Dispatch(Action::Unknown))
        );
        assert_eq!(parse_line("{not json"), Some(Command::Dispatch(Action::Unknown)));
        assert_eq!(
            parse_line(r#"{"type":"SET_THEME","payload":"dark"}"#),
            Some(Command::Dispatch(Action::Unknown))
        );
    }

    #[test]
    fn json_lines_dispatch_as_is() {
        assert_eq!(
            parse_line(r#"{"type":"SET_CATEGORY","payload":"Web"}"#),
            Some(Command::Dispatch(Action::SetFacet("Web".into())))
        );
    }

    #[test]
    fn keystrokes_cover_every_prefix() {
        assert_eq!(keystrokes("gö"), vec!["g", "gö"]);
        assert_eq!(keystrokes(""), vec![""]);
    }

    #[test]
    fn typed_search_settles_on_full_term() {
        let posts = sample_posts();
        let (out, listing) = browse(&posts, "go\n/quit\n");
        assert_eq!(listing.state().search_term, "go");
        assert!(!listing.has_pending_search());
        let after = out.rsplit("> go\n").next().unwrap();
        assert!(after.contains("Go Cache"));
        assert!(!after.contains("Rust Parser"));
    }

    #[test]
    fn empty_result_then_clear_restores() {
        let posts = sample_posts();
        let (out, listing) = browse(&posts, "zzz\n/clear\n");
        assert!(out.contains("No posts match your filters."));
        assert!(out.contains("Clear filters: /clear"));
        assert!(listing.state().is_unfiltered());
        assert!(out.ends_with(&format!("{}\n", "/en/blog/go-cache")));
    }

    #[test]
    fn unknown_input_leaves_state_alone() {
        let posts = sample_posts();
        let (out, listing) = browse(&posts, "/tag rust\n/bogus\n");
        assert!(out.contains("Unrecognized input: /bogus"));
        assert_eq!(listing.state().selected_facets.len(), 1);
    }

    #[test]
    fn repeated_action_reports_no_change() {
        let posts = sample_posts();
        let (out, _) = browse(&posts, "/grid\n");
        assert!(out.contains("(no change)"));
    }
}
