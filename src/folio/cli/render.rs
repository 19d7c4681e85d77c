//! # Rendering Module
//!
//! Turns a [`Listing`] into terminal text. Nothing here filters or orders
//! items: the projection arrives finished and is only laid out.
//!
//! Layout math (column widths, truncation, wrapping) is done on plain strings
//! with `unicode-width`; styles are applied last so ANSI codes never count
//! toward a width.
//!
//! Three shapes of output:
//! - **grid**: cards side by side, `grid_columns` per row
//! - **list**: one entry per item with the date right-aligned
//! - **empty**: the no-results label plus how to clear filters

use super::styles::{self, Painter};
use chrono::{DateTime, Utc};
use folio::i18n::Labels;
use folio::item::ContentItem;
use folio::listing::Listing;
use folio::model::{Post, Project, Section};
use folio::predicate::FacetStrategy;
use folio::routes::item_url;
use folio::state::{FilterState, ViewMode};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const FEATURED_MARKER: &str = "★";
const GUTTER: usize = 3;
const MIN_CARD_WIDTH: usize = 20;
const GRID_SUMMARY_LINES: usize = 3;
const LIST_SUMMARY_LINES: usize = 2;
const LIST_INDENT: usize = 4;
const TIME_WIDTH: usize = 16;

/// Section-specific card details on top of what the engine reads.
pub trait Card: ContentItem {
    /// Secondary text next to the date.
    fn byline(&self) -> Option<String>;

    /// Outbound links, already labelled.
    fn links(&self, labels: &Labels) -> Vec<String>;
}

impl Card for Post {
    fn byline(&self) -> Option<String> {
        Some(format!("{} · {}", self.author, self.read_time))
    }

    fn links(&self, _labels: &Labels) -> Vec<String> {
        Vec::new()
    }
}

impl Card for Project {
    fn byline(&self) -> Option<String> {
        self.status.clone()
    }

    fn links(&self, labels: &Labels) -> Vec<String> {
        let mut links = Vec::new();
        if let Some(repo) = &self.repository {
            links.push(format!("{}: {}", labels.source_code, repo));
        }
        if let Some(demo) = &self.demo {
            links.push(format!("{}: {}", labels.live_demo, demo));
        }
        links
    }
}

pub struct RenderOptions<'a> {
    pub labels: &'a Labels,
    pub lang: &'a str,
    pub section: Section,
    pub grid_columns: usize,
    /// Summary characters kept before wrapping.
    pub summary_chars: usize,
    pub width: usize,
    pub painter: Painter,
}

/// A rendered line and its visible width.
struct Line {
    text: String,
    width: usize,
}

impl Line {
    fn styled(painter: Painter, style: &console::Style, plain: String) -> Self {
        Self {
            width: plain.width(),
            text: painter.paint(style, &plain),
        }
    }

    fn plain(plain: String) -> Self {
        Self {
            width: plain.width(),
            text: plain,
        }
    }
}

/// Header, facet bar, then either the projection or the empty state.
pub fn render_listing<I: Card, F: FacetStrategy>(
    listing: &Listing<'_, I, F>,
    opts: &RenderOptions<'_>,
    empty_hint: &str,
) -> String {
    let state = listing.state();
    let view = listing.projection();

    let mut out = render_header(state, view.len(), listing.items().len(), opts);
    out.push_str(&render_facet_bar::<F>(
        &listing.facet_options(),
        &state.selected_facets,
        opts.painter,
    ));
    out.push('\n');

    if view.is_empty() {
        out.push_str(&render_empty(opts, empty_hint));
        return out;
    }

    if !view.featured.is_empty() {
        out.push_str(&heading(&opts.labels.featured, opts.painter));
        out.push_str(&render_items(&view.featured, state.view_mode, opts));
        if view.regular.is_empty() {
            return out;
        }
        out.push('\n');
        out.push_str(&heading(&opts.labels.all_items, opts.painter));
    }
    out.push_str(&render_items(&view.regular, state.view_mode, opts));
    out
}

fn render_header<F: FacetStrategy>(
    state: &FilterState<F>,
    shown: usize,
    total: usize,
    opts: &RenderOptions<'_>,
) -> String {
    let painter = opts.painter;
    let search = if state.search_term.is_empty() {
        painter.paint(&styles::HINT, &opts.labels.search_placeholder)
    } else {
        state.search_term.clone()
    };

    format!(
        "{}  {}\n> {}\n",
        painter.paint(&styles::HEADING, opts.labels.title(opts.section)),
        painter.paint(
            &styles::DATE,
            &format!(
                "{}/{} · {} · {}",
                shown, total, state.view_mode, state.sort_order
            )
        ),
        search
    )
}

/// Facet options on one line, the selected ones bracketed.
pub fn render_facet_bar<F: FacetStrategy>(
    options: &[String],
    selection: &F::Selection,
    painter: Painter,
) -> String {
    if options.is_empty() {
        return String::new();
    }
    let parts: Vec<String> = options
        .iter()
        .map(|option| {
            if F::is_selected(selection, option) {
                painter.paint(&styles::FACET_SELECTED, &format!("[{}]", option))
            } else {
                painter.paint(&styles::FACET, option)
            }
        })
        .collect();
    format!("{}\n", parts.join(" "))
}

pub fn render_empty(opts: &RenderOptions<'_>, hint: &str) -> String {
    format!(
        "  {}\n  {}\n",
        opts.painter
            .paint(&styles::TITLE, opts.labels.no_results(opts.section)),
        opts.painter.paint(
            &styles::HINT,
            &format!("{}: {}", opts.labels.clear_filters, hint)
        )
    )
}

fn heading(text: &str, painter: Painter) -> String {
    format!("{}\n", painter.paint(&styles::HEADING, text))
}

fn render_items<I: Card>(items: &[&I], mode: ViewMode, opts: &RenderOptions<'_>) -> String {
    match mode {
        ViewMode::Grid => render_grid(items, opts),
        ViewMode::List => render_list(items, opts),
    }
}

/// Effective column count and card width for a line width. Narrow terminals
/// get fewer columns rather than unreadable cards.
fn grid_geometry(width: usize, columns: usize) -> (usize, usize) {
    let fit = ((width + GUTTER) / (MIN_CARD_WIDTH + GUTTER)).max(1);
    let columns = columns.clamp(1, fit);
    let card_width = (width.saturating_sub(GUTTER * (columns - 1)) / columns).max(1);
    (columns, card_width)
}

pub fn render_grid<I: Card>(items: &[&I], opts: &RenderOptions<'_>) -> String {
    let (columns, card_width) = grid_geometry(opts.width, opts.grid_columns);
    let mut out = String::new();

    for (row_index, row) in items.chunks(columns).enumerate() {
        if row_index > 0 {
            out.push('\n');
        }
        let cards: Vec<Vec<Line>> = row
            .iter()
            .map(|item| card_lines(*item, card_width, opts))
            .collect();
        let height = cards.iter().map(Vec::len).max().unwrap_or(0);

        for i in 0..height {
            let mut line = String::new();
            for (c, card) in cards.iter().enumerate() {
                if c > 0 {
                    line.push_str(&" ".repeat(GUTTER));
                }
                let (text, width) = card
                    .get(i)
                    .map(|l| (l.text.as_str(), l.width))
                    .unwrap_or(("", 0));
                line.push_str(text);
                line.push_str(&" ".repeat(card_width.saturating_sub(width)));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }
    out
}

fn card_lines<I: Card>(item: &I, width: usize, opts: &RenderOptions<'_>) -> Vec<Line> {
    let painter = opts.painter;
    let mut lines = Vec::new();

    if item.is_featured() {
        let title = format!("{} {}", FEATURED_MARKER, item.title());
        lines.push(Line::styled(
            painter,
            &styles::FEATURED,
            truncate_to_width(&title, width),
        ));
    } else {
        lines.push(Line::styled(
            painter,
            &styles::TITLE,
            truncate_to_width(item.title(), width),
        ));
    }

    let dated = match item.byline() {
        Some(byline) => format!("{} · {}", item.date_label(), byline),
        None => item.date_label(),
    };
    lines.push(Line::styled(
        painter,
        &styles::DATE,
        truncate_to_width(&dated, width),
    ));

    let summary = clip_chars(item.summary(), opts.summary_chars);
    lines.extend(
        wrap(&summary, width, GRID_SUMMARY_LINES)
            .into_iter()
            .map(Line::plain),
    );

    let facets = hashtags(&item.facets());
    if !facets.is_empty() {
        lines.push(Line::styled(
            painter,
            &styles::FACET,
            truncate_to_width(&facets, width),
        ));
    }
    for link in item.links(opts.labels) {
        lines.push(Line::styled(
            painter,
            &styles::URL,
            truncate_to_width(&link, width),
        ));
    }
    lines.push(Line::styled(
        painter,
        &styles::URL,
        truncate_to_width(&item_url(opts.lang, item), width),
    ));
    lines
}

pub fn render_list<I: Card>(items: &[&I], opts: &RenderOptions<'_>) -> String {
    let painter = opts.painter;
    let indent = " ".repeat(LIST_INDENT);
    let body_width = opts.width.saturating_sub(LIST_INDENT);
    let mut out = String::new();

    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }

        let (prefix, title_style) = if item.is_featured() {
            (format!("{} ", FEATURED_MARKER), &*styles::FEATURED)
        } else {
            ("  ".to_string(), &*styles::TITLE)
        };
        let available = opts
            .width
            .saturating_sub(prefix.width() + TIME_WIDTH + 1);
        let title = truncate_to_width(item.title(), available);
        let padding = " ".repeat(available.saturating_sub(title.width()) + 1);
        let when = format!(
            "{:>width$}",
            list_date(*item),
            width = TIME_WIDTH
        );

        out.push_str(&format!(
            "{}{}{}{}\n",
            painter.paint(title_style, &prefix),
            painter.paint(title_style, &title),
            padding,
            painter.paint(&styles::DATE, &when)
        ));

        let summary = clip_chars(item.summary(), opts.summary_chars);
        for line in wrap(&summary, body_width, LIST_SUMMARY_LINES) {
            out.push_str(&format!("{}{}\n", indent, line));
        }

        let facets = hashtags(&item.facets());
        let url = item_url(opts.lang, *item);
        let meta = if facets.is_empty() {
            url
        } else {
            format!("{}  {}", facets, url)
        };
        out.push_str(&format!(
            "{}{}\n",
            indent,
            painter.paint(&styles::URL, &truncate_to_width(&meta, body_width))
        ));
        for link in item.links(opts.labels) {
            out.push_str(&format!(
                "{}{}\n",
                indent,
                painter.paint(&styles::URL, &truncate_to_width(&link, body_width))
            ));
        }
    }
    out
}

/// Relative age for dated posts, the display label for everything else.
fn list_date<I: ContentItem>(item: &I) -> String {
    match (item.section(), item.sort_key().datetime()) {
        (Section::Blog, Some(dt)) => format_time_ago(dt),
        _ => item.date_label(),
    }
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}

fn hashtags(values: &[&str]) -> String {
    values
        .iter()
        .map(|v| format!("#{}", v))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cuts `text` to at most `max_chars` characters, marking the cut with `…`.
pub fn clip_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let limit = max_width - 1;
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// Word-wraps `text` into at most `max_lines` lines of `width` columns.
/// Overflow ends the last line with `…`.
pub fn wrap(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word = truncate_to_width(word, width);
        if current.is_empty() {
            current = word;
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::replace(&mut current, word));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            *last = with_ellipsis(last, width);
        }
    }
    lines
}

fn with_ellipsis(line: &str, width: usize) -> String {
    if line.ends_with('…') {
        return line.to_string();
    }
    if line.width() < width {
        return format!("{}…", line);
    }
    truncate_to_width(&format!("{}…", line), width)
}
