//! # Item Field Adapter
//!
//! The filter engine never looks at [`Post`] or [`Project`] directly. It reads
//! items through [`ContentItem`], which names the handful of fields filtering,
//! ordering and partitioning need. Adding a new kind of listing means
//! implementing this trait, not copying the engine.

use crate::model::{Post, Project, Section, Year};
use crate::ordering::SortKey;

/// Read-only view of a content entity for the filter engine.
pub trait ContentItem {
    /// Stable unique key within a listing.
    fn id(&self) -> &str;

    /// Slug used for the item URL. Defaults to the id.
    fn slug(&self) -> &str {
        self.id()
    }

    fn title(&self) -> &str;

    fn summary(&self) -> &str;

    /// Values the facet strategy matches the selection against.
    fn facets(&self) -> Vec<&str>;

    /// Extra values searched by the text match besides title and summary.
    fn keywords(&self) -> Vec<&str> {
        self.facets()
    }

    fn sort_key(&self) -> SortKey;

    /// Human-readable date or year for display.
    fn date_label(&self) -> String;

    fn is_featured(&self) -> bool;

    fn section(&self) -> Section;
}

impl ContentItem for Post {
    fn id(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn summary(&self) -> &str {
        &self.excerpt
    }

    fn facets(&self) -> Vec<&str> {
        self.tags.iter().map(String::as_str).collect()
    }

    fn sort_key(&self) -> SortKey {
        SortKey::parse(&self.date)
    }

    fn date_label(&self) -> String {
        match self.sort_key().datetime() {
            Some(dt) => dt.format("%B %-d, %Y").to_string(),
            None => self.date.clone(),
        }
    }

    fn is_featured(&self) -> bool {
        self.featured
    }

    fn section(&self) -> Section {
        Section::Blog
    }
}

impl ContentItem for Project {
    fn id(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn summary(&self) -> &str {
        &self.description
    }

    fn facets(&self) -> Vec<&str> {
        vec![self.category.as_str()]
    }

    fn keywords(&self) -> Vec<&str> {
        std::iter::once(self.category.as_str())
            .chain(self.tech.iter().map(String::as_str))
            .collect()
    }

    fn sort_key(&self) -> SortKey {
        match &self.year {
            Year::Number(n) => i32::try_from(*n)
                .map(SortKey::from_year)
                .unwrap_or(SortKey::UNKNOWN),
            Year::Text(s) => SortKey::parse(s),
        }
    }

    fn date_label(&self) -> String {
        self.year.to_string()
    }

    fn is_featured(&self) -> bool {
        self.featured
    }

    fn section(&self) -> Section {
        Section::Projects
    }
}
