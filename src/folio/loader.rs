//! # Content Loader
//!
//! Reads post and project collections from JSON files and checks the record
//! invariants the filter engine relies on. Once a collection passes here the
//! engine trusts it and never validates again.
//!
//! A collection file is a JSON array:
//!
//! ```json
//! [
//!   {"slug": "en/go-cache", "title": "Go Cache", "excerpt": "...",
//!    "date": "2024-01-01", "tags": ["go", "cache"], "featured": true}
//! ]
//! ```
//!
//! Defaults (`featured: false`, `language: "en"`, `author: "Anonymous"`,
//! `readTime: "5 min"`) come from the serde model.

use crate::error::{FolioError, Result};
use crate::item::ContentItem;
use crate::model::{Language, Post, Project};
use crate::routes::slugify;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Longest excerpt a post may carry.
pub const MAX_EXCERPT_CHARS: usize = 200;

pub fn load_posts<P: AsRef<Path>>(path: P, language: Option<Language>) -> Result<Vec<Post>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(FolioError::Io)?;
    let posts = parse_posts(&content, &path.display().to_string())?;
    let total = posts.len();

    let posts: Vec<Post> = match language {
        Some(lang) => posts.into_iter().filter(|p| p.language == lang).collect(),
        None => posts,
    };

    debug!(
        path = %path.display(),
        total,
        kept = posts.len(),
        "loaded posts"
    );
    Ok(posts)
}

pub fn load_projects<P: AsRef<Path>>(path: P) -> Result<Vec<Project>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(FolioError::Io)?;
    let projects = parse_projects(&content, &path.display().to_string())?;
    debug!(path = %path.display(), total = projects.len(), "loaded projects");
    Ok(projects)
}

pub fn parse_posts(content: &str, source_name: &str) -> Result<Vec<Post>> {
    let posts: Vec<Post> = serde_json::from_str(content).map_err(FolioError::Serialization)?;
    validate_posts(&posts, source_name)?;
    Ok(posts)
}

pub fn parse_projects(content: &str, source_name: &str) -> Result<Vec<Project>> {
    let mut projects: Vec<Project> =
        serde_json::from_str(content).map_err(FolioError::Serialization)?;

    for project in &mut projects {
        if project.slug.trim().is_empty() {
            project.slug = match project.id {
                Some(id) => format!("{}-{}", id, slugify(&project.title)),
                None => slugify(&project.title),
            };
        }
    }

    validate_projects(&projects, source_name)?;
    Ok(projects)
}

pub fn validate_posts(posts: &[Post], source_name: &str) -> Result<()> {
    for post in posts {
        let label = record_label(post);
        if post.slug.trim().is_empty() {
            return Err(FolioError::validation(source_name, format!("{}: missing slug", label)));
        }
        if post.title.trim().is_empty() {
            return Err(FolioError::validation(source_name, format!("{}: empty title", label)));
        }
        let excerpt_len = post.excerpt.chars().count();
        if excerpt_len > MAX_EXCERPT_CHARS {
            return Err(FolioError::validation(
                source_name,
                format!(
                    "{}: excerpt is {} characters, the limit is {}",
                    label, excerpt_len, MAX_EXCERPT_CHARS
                ),
            ));
        }
        if post.tags.is_empty() {
            return Err(FolioError::validation(source_name, format!("{}: no tags", label)));
        }
        warn_on_unparsable_date(post, source_name);
    }

    check_unique_ids(posts, source_name)
}

pub fn validate_projects(projects: &[Project], source_name: &str) -> Result<()> {
    for project in projects {
        let label = record_label(project);
        if project.title.trim().is_empty() {
            return Err(FolioError::validation(source_name, format!("{}: empty title", label)));
        }
        if project.category.trim().is_empty() {
            return Err(FolioError::validation(
                source_name,
                format!("{}: missing category", label),
            ));
        }
        warn_on_unparsable_date(project, source_name);
    }

    check_unique_ids(projects, source_name)
}

fn record_label<I: ContentItem>(item: &I) -> String {
    if item.id().is_empty() {
        format!("\"{}\"", item.title())
    } else {
        item.id().to_string()
    }
}

// Unparsable dates are not fatal; the item just sorts as the oldest.
fn warn_on_unparsable_date<I: ContentItem>(item: &I, source_name: &str) {
    if !item.sort_key().is_known() {
        warn!(
            source = source_name,
            item = item.id(),
            date = %item.date_label(),
            "unparsable date, item will sort as oldest"
        );
    }
}

fn check_unique_ids<I: ContentItem>(items: &[I], source_name: &str) -> Result<()> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id()) {
            return Err(FolioError::validation(
                source_name,
                format!("duplicate id {}", item.id()),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSTS: &str = r#"[
        {"slug": "en/go-cache", "title": "Go Cache", "excerpt": "LRU in Go",
         "date": "2024-01-01", "tags": ["go", "cache"], "featured": true},
        {"slug": "es/parser", "title": "Parser", "excerpt": "Un parser",
         "date": "2024-06-01", "tags": ["rust"], "language": "es"}
    ]"#;

    #[test]
    fn parses_valid_posts() {
        let posts = parse_posts(POSTS, "posts.json").unwrap();
        assert_eq!(posts.len(), 2);
        assert!(posts[0].featured);
        assert!(!posts[1].featured);
    }

    #[test]
    fn rejects_long_excerpt() {
        let long = "x".repeat(MAX_EXCERPT_CHARS + 1);
        let json = format!(
            r#"[{{"slug":"a","title":"A","excerpt":"{}","date":"2024-01-01","tags":["t"]}}]"#,
            long
        );
        let err = parse_posts(&json, "posts.json").unwrap_err();
        assert!(matches!(err, FolioError::Validation { .. }));
        assert!(err.to_string().contains("excerpt"));
    }

    #[test]
    fn rejects_missing_tags_and_empty_title() {
        let no_tags = r#"[{"slug":"a","title":"A","excerpt":"e","date":"2024-01-01","tags":[]}]"#;
        assert!(parse_posts(no_tags, "p").is_err());
        let no_title = r#"[{"slug":"a","title":"  ","excerpt":"e","date":"2024-01-01","tags":["t"]}]"#;
        assert!(parse_posts(no_title, "p").is_err());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let dupes = r#"[
            {"slug":"a","title":"A","excerpt":"e","date":"2024-01-01","tags":["t"]},
            {"slug":"a","title":"B","excerpt":"e","date":"2024-01-02","tags":["t"]}
        ]"#;
        let err = parse_posts(dupes, "p").unwrap_err();
        assert!(err.to_string().contains("duplicate id a"));
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let err = parse_posts("{not json", "p").unwrap_err();
        assert!(matches!(err, FolioError::Serialization(_)));
    }

    #[test]
    fn unparsable_date_is_accepted() {
        let json = r#"[{"slug":"a","title":"A","excerpt":"e","date":"soon","tags":["t"]}]"#;
        assert_eq!(parse_posts(json, "p").unwrap().len(), 1);
    }

    #[test]
    fn project_slug_derived_from_title() {
        let json = r#"[
            {"title":"Map Tiler","description":"d","category":"Web","year":2022},
            {"id":7,"title":"Shell","description":"d","category":"CLI","year":"2023"},
            {"slug":"custom","title":"X","description":"d","category":"CLI","year":2020}
        ]"#;
        let projects = parse_projects(json, "projects.json").unwrap();
        assert_eq!(projects[0].slug, "map-tiler");
        assert_eq!(projects[1].slug, "7-shell");
        assert_eq!(projects[2].slug, "custom");
    }

    #[test]
    fn rejects_project_without_category() {
        let json = r#"[{"title":"A","description":"d","category":"","year":2022}]"#;
        assert!(parse_projects(json, "p").is_err());
    }

    #[test]
    fn load_posts_filters_language() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.json");
        fs::write(&path, POSTS).unwrap();

        let all = load_posts(&path, None).unwrap();
        assert_eq!(all.len(), 2);
        let es = load_posts(&path, Some(Language::Es)).unwrap();
        assert_eq!(es.len(), 1);
        assert_eq!(es[0].title, "Parser");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_projects(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, FolioError::Io(_)));
    }
}
