//! Display strings for listing views.
//!
//! Labels are opaque to the filter engine; they are looked up here and handed
//! straight to the renderer. Missing keys fall back to English, and unknown
//! languages get the English table.

use crate::error::{FolioError, Result};
use crate::model::Section;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const DEFAULT_LANG: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Labels {
    pub blog_title: String,
    pub projects_title: String,
    pub search_placeholder: String,
    pub featured: String,
    pub all_items: String,
    pub no_posts_match: String,
    pub no_projects_match: String,
    pub clear_filters: String,
    pub source_code: String,
    pub live_demo: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self::english()
    }
}

impl Labels {
    pub fn english() -> Self {
        Self {
            blog_title: "Blog".into(),
            projects_title: "Projects".into(),
            search_placeholder: "Search articles, topics, or keywords...".into(),
            featured: "Featured".into(),
            all_items: "All".into(),
            no_posts_match: "No posts match your filters.".into(),
            no_projects_match: "No projects match your filters.".into(),
            clear_filters: "Clear filters".into(),
            source_code: "Source code".into(),
            live_demo: "Live demo".into(),
        }
    }

    pub fn spanish() -> Self {
        Self {
            blog_title: "Blog".into(),
            projects_title: "Proyectos".into(),
            search_placeholder: "Buscar artículos, temas o palabras clave...".into(),
            featured: "Destacado".into(),
            all_items: "Todos".into(),
            no_posts_match: "Ningún artículo coincide con tus filtros.".into(),
            no_projects_match: "Ningún proyecto coincide con tus filtros.".into(),
            clear_filters: "Limpiar filtros".into(),
            source_code: "Código fuente".into(),
            live_demo: "Demo en vivo".into(),
        }
    }

    /// Built-in table for `lang`, English when there is none.
    pub fn builtin(lang: &str) -> Self {
        match lang {
            "es" => Self::spanish(),
            _ => Self::english(),
        }
    }

    /// Reads a `{ "<lang>": { ...labels } }` file and picks `lang`.
    pub fn load<P: AsRef<Path>>(path: P, lang: &str) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(FolioError::Io)?;
        let mut tables: HashMap<String, Labels> =
            serde_json::from_str(&content).map_err(FolioError::Serialization)?;

        Ok(tables
            .remove(lang)
            .or_else(|| tables.remove(DEFAULT_LANG))
            .unwrap_or_else(|| Self::builtin(lang)))
    }

    pub fn title(&self, section: Section) -> &str {
        match section {
            Section::Blog => &self.blog_title,
            Section::Projects => &self.projects_title,
        }
    }

    pub fn no_results(&self, section: Section) -> &str {
        match section {
            Section::Blog => &self.no_posts_match,
            Section::Projects => &self.no_projects_match,
        }
    }
}
