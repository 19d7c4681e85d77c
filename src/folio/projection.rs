//! # Projection
//!
//! The derived view of a listing: filter, then sort, then (optionally) split
//! featured items from the rest.
//!
//! ```text
//! items ──► matches() ──► sort_items() ──► partition ──► { featured, regular, all }
//! ```
//!
//! The projection borrows the items it was computed from. It never clones or
//! mutates them, so `all` is always a subset of the input by identity.
//!
//! Whether a listing distinguishes featured items, and how many it shows in the
//! featured group, is listing configuration ([`ListingConfig`]), not filter
//! state. When partitioning is off, `featured` stays empty and `regular`
//! equals `all`, so renderers can always walk `featured` then `regular`.

use crate::item::ContentItem;
use crate::ordering::sort_items;
use crate::predicate::{matches, FacetStrategy};
use crate::state::FilterState;
use serde::{Deserialize, Serialize};

/// Featured/regular split settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Partition {
    /// Maximum number of items in the featured group. `None` means unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_cap: Option<usize>,
}

/// Per-listing configuration that shapes the projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition: Option<Partition>,
}

impl ListingConfig {
    /// No featured grouping.
    pub fn flat() -> Self {
        Self { partition: None }
    }

    pub fn partitioned(featured_cap: Option<usize>) -> Self {
        Self {
            partition: Some(Partition { featured_cap }),
        }
    }
}

#[derive(Debug)]
pub struct Projection<'a, I> {
    pub featured: Vec<&'a I>,
    pub regular: Vec<&'a I>,
    pub all: Vec<&'a I>,
}

impl<'a, I> Projection<'a, I> {
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }
}

/// Computes the derived view for `state` over `items`.
pub fn project<'a, I: ContentItem, F: FacetStrategy>(
    items: &'a [I],
    state: &FilterState<F>,
    config: &ListingConfig,
) -> Projection<'a, I> {
    let filtered: Vec<&'a I> = items.iter().filter(|item| matches(*item, state)).collect();
    let all = sort_items(filtered, state.sort_order);

    let (featured, regular) = match config.partition {
        Some(partition) => split_featured(&all, partition.featured_cap),
        None => (Vec::new(), all.clone()),
    };

    Projection {
        featured,
        regular,
        all,
    }
}

fn split_featured<'a, I: ContentItem>(
    sorted: &[&'a I],
    cap: Option<usize>,
) -> (Vec<&'a I>, Vec<&'a I>) {
    let limit = cap.unwrap_or(usize::MAX);
    let mut featured = Vec::new();
    let mut regular = Vec::with_capacity(sorted.len());

    for item in sorted {
        if item.is_featured() && featured.len() < limit {
            featured.push(*item);
        } else {
            regular.push(*item);
        }
    }

    (featured, regular)
}
