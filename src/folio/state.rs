//! # Filter State
//!
//! [`FilterState`] is everything a listing view needs to derive what to show.
//! It only changes through [`reduce`], an explicit transition function over the
//! [`Action`] tagged union.
//!
//! `reduce` is total. Actions it does not recognize (anything that
//! deserialized to [`Action::Unknown`]) leave the state untouched.
//!
//! ## Wire format
//!
//! Actions use the same shape the site's UI dispatched:
//!
//! ```json
//! {"type": "SET_SEARCH_TERM", "payload": "rust"}
//! {"type": "SET_VIEW_MODE", "payload": "list"}
//! {"type": "CLEAR_FILTERS"}
//! ```

use crate::predicate::FacetStrategy;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Grid => write!(f, "grid"),
            ViewMode::List => write!(f, "list"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            other => Err(format!("Invalid view mode: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Newest => SortOrder::Oldest,
            SortOrder::Oldest => SortOrder::Newest,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Newest => write!(f, "newest"),
            SortOrder::Oldest => write!(f, "oldest"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            other => Err(format!("Invalid sort order: {}", other)),
        }
    }
}

/// Live filter, sort and view configuration of one listing view.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState<F: FacetStrategy> {
    pub search_term: String,
    pub selected_facets: F::Selection,
    pub view_mode: ViewMode,
    pub sort_order: SortOrder,
}

impl<F: FacetStrategy> Default for FilterState<F> {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            selected_facets: F::Selection::default(),
            view_mode: ViewMode::default(),
            sort_order: SortOrder::default(),
        }
    }
}

impl<F: FacetStrategy> FilterState<F> {
    /// Default filters with a preferred presentation.
    pub fn with_presentation(view_mode: ViewMode, sort_order: SortOrder) -> Self {
        Self {
            view_mode,
            sort_order,
            ..Self::default()
        }
    }

    /// True when neither a search term nor a facet restricts the view.
    pub fn is_unfiltered(&self) -> bool {
        self.search_term.trim().is_empty() && self.selected_facets == F::Selection::default()
    }
}

/// A discrete, named state transition.
///
/// Deserialization accepts `SET_CATEGORY` and `SET_SELECTED_TAGS` as aliases.
/// Any other `type`, with or without a payload, becomes [`Action::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    SetSearchTerm(String),
    /// Toggle (multi-valued) or replace (single-valued) one facet value.
    SetFacet(String),
    /// Replace the whole facet selection.
    SetFacets(Vec<String>),
    SetViewMode(ViewMode),
    SetSortOrder(SortOrder),
    ToggleSortOrder,
    ClearFilters,
    Unknown,
}

#[derive(Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Option<Value>,
}

fn payload<T, E>(raw: Option<Value>, kind: &str) -> Result<T, E>
where
    T: DeserializeOwned,
    E: serde::de::Error,
{
    serde_json::from_value(raw.unwrap_or(Value::Null))
        .map_err(|e| E::custom(format!("bad payload for {}: {}", kind, e)))
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let RawAction { kind, payload: raw } = RawAction::deserialize(deserializer)?;
        match kind.as_str() {
            "SET_SEARCH_TERM" => payload(raw, &kind).map(Action::SetSearchTerm),
            "SET_FACET" | "SET_CATEGORY" => payload(raw, &kind).map(Action::SetFacet),
            "SET_FACETS" | "SET_SELECTED_TAGS" => payload(raw, &kind).map(Action::SetFacets),
            "SET_VIEW_MODE" => payload(raw, &kind).map(Action::SetViewMode),
            "SET_SORT_ORDER" => payload(raw, &kind).map(Action::SetSortOrder),
            "TOGGLE_SORT_ORDER" => Ok(Action::ToggleSortOrder),
            "CLEAR_FILTERS" => Ok(Action::ClearFilters),
            _ => Ok(Action::Unknown),
        }
    }
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetSearchTerm(_) => "SET_SEARCH_TERM",
            Action::SetFacet(_) => "SET_FACET",
            Action::SetFacets(_) => "SET_FACETS",
            Action::SetViewMode(_) => "SET_VIEW_MODE",
            Action::SetSortOrder(_) => "SET_SORT_ORDER",
            Action::ToggleSortOrder => "TOGGLE_SORT_ORDER",
            Action::ClearFilters => "CLEAR_FILTERS",
            Action::Unknown => "UNKNOWN",
        }
    }
}

/// Pure transition function. Only the fields an action touches change.
pub fn reduce<F: FacetStrategy>(state: &FilterState<F>, action: &Action) -> FilterState<F> {
    match action {
        Action::SetSearchTerm(term) => FilterState {
            search_term: term.clone(),
            ..state.clone()
        },
        Action::SetFacet(value) => FilterState {
            selected_facets: F::toggle(&state.selected_facets, value),
            ..state.clone()
        },
        Action::SetFacets(values) => FilterState {
            selected_facets: F::replace(values),
            ..state.clone()
        },
        Action::SetViewMode(view_mode) => FilterState {
            view_mode: *view_mode,
            ..state.clone()
        },
        Action::SetSortOrder(sort_order) => FilterState {
            sort_order: *sort_order,
            ..state.clone()
        },
        Action::ToggleSortOrder => FilterState {
            sort_order: state.sort_order.toggled(),
            ..state.clone()
        },
        Action::ClearFilters => FilterState {
            search_term: String::new(),
            selected_facets: F::Selection::default(),
            ..state.clone()
        },
        Action::Unknown => state.clone(),
    }
}
