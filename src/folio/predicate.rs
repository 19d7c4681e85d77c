//! # Predicate Engine
//!
//! Decides whether a single item belongs in the current view. The predicate is
//! the conjunction of a text match and a facet match.
//!
//! The facet half is pluggable. Listings with multi-valued facets (blog tags)
//! use [`AnyOf`]; listings with a single category per item (projects) use
//! [`Equals`]. Both share the same text match and the same engine.

use crate::item::ContentItem;
use crate::state::FilterState;
use std::collections::BTreeSet;
use std::fmt::{self, Debug};

/// Sentinel category meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "All";

/// How a facet selection is stored, edited and matched.
///
/// Implementors are zero-sized markers; the supertraits let states that carry
/// the marker type derive their own impls.
pub trait FacetStrategy: Clone + Debug + PartialEq {
    type Selection: Clone + Debug + Default + PartialEq;

    /// Applies a single facet click.
    fn toggle(selection: &Self::Selection, value: &str) -> Self::Selection;

    /// Replaces the whole selection.
    fn replace(values: &[String]) -> Self::Selection;

    /// Whether an item with these facet values passes the selection.
    fn matches(selection: &Self::Selection, facets: &[&str]) -> bool;

    /// Currently selected values, for display.
    fn selected(selection: &Self::Selection) -> Vec<&str>;

    /// Whether `value` is part of the selection.
    fn is_selected(selection: &Self::Selection, value: &str) -> bool {
        Self::selected(selection).contains(&value)
    }

    /// Facet values offered to the user, derived from the item facets.
    fn options(values: Vec<String>) -> Vec<String> {
        values
    }
}

/// Multi-valued facets: an item matches when it carries any selected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnyOf;

impl FacetStrategy for AnyOf {
    type Selection = BTreeSet<String>;

    fn toggle(selection: &Self::Selection, value: &str) -> Self::Selection {
        let mut next = selection.clone();
        if !next.remove(value) {
            next.insert(value.to_string());
        }
        next
    }

    fn replace(values: &[String]) -> Self::Selection {
        values.iter().cloned().collect()
    }

    fn matches(selection: &Self::Selection, facets: &[&str]) -> bool {
        selection.is_empty() || facets.iter().any(|f| selection.contains(*f))
    }

    fn selected(selection: &Self::Selection) -> Vec<&str> {
        selection.iter().map(String::as_str).collect()
    }
}

/// Single-valued facet selection with an explicit "All" state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Only(String),
}

impl CategorySelection {
    pub fn as_str(&self) -> &str {
        match self {
            CategorySelection::All => ALL_CATEGORIES,
            CategorySelection::Only(c) => c,
        }
    }

    fn from_value(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategorySelection::All
        } else {
            CategorySelection::Only(value.to_string())
        }
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-valued facets: an item matches when its category equals the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Equals;

impl FacetStrategy for Equals {
    type Selection = CategorySelection;

    fn toggle(_selection: &Self::Selection, value: &str) -> Self::Selection {
        CategorySelection::from_value(value)
    }

    fn replace(values: &[String]) -> Self::Selection {
        values
            .first()
            .map(|v| CategorySelection::from_value(v))
            .unwrap_or_default()
    }

    fn matches(selection: &Self::Selection, facets: &[&str]) -> bool {
        match selection {
            CategorySelection::All => true,
            CategorySelection::Only(category) => facets.iter().any(|f| *f == category.as_str()),
        }
    }

    fn selected(selection: &Self::Selection) -> Vec<&str> {
        vec![selection.as_str()]
    }

    fn options(values: Vec<String>) -> Vec<String> {
        std::iter::once(ALL_CATEGORIES.to_string())
            .chain(values.into_iter().filter(|v| v != ALL_CATEGORIES))
            .collect()
    }
}

/// Case-insensitive substring match over title, summary and keywords.
/// An empty (or blank) term matches everything.
pub fn matches_text<I: ContentItem>(item: &I, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    item.title().to_lowercase().contains(&needle)
        || item.summary().to_lowercase().contains(&needle)
        || item
            .keywords()
            .iter()
            .any(|k| k.to_lowercase().contains(&needle))
}

pub fn matches_facets<I: ContentItem, F: FacetStrategy>(item: &I, selection: &F::Selection) -> bool {
    F::matches(selection, &item.facets())
}

/// The combined inclusion test.
pub fn matches<I: ContentItem, F: FacetStrategy>(item: &I, state: &FilterState<F>) -> bool {
    matches_text(item, &state.search_term) && matches_facets::<I, F>(item, &state.selected_facets)
}
