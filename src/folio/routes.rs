//! URL construction for listing entries.
//!
//! Content slugs may carry a language prefix (`en/my-post`); only the last
//! segment ends up in the URL.

use crate::item::ContentItem;
use crate::model::Section;

/// Last `/`-separated segment of a slug, ignoring trailing slashes.
pub fn slug_tail(slug: &str) -> &str {
    slug.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
}

/// `/{lang}/{section}/{slug-tail}`
pub fn item_url<I: ContentItem>(lang: &str, item: &I) -> String {
    section_url(lang, item.section(), item.slug())
}

pub fn section_url(lang: &str, section: Section, slug: &str) -> String {
    format!("/{}/{}/{}", lang, section.as_str(), slug_tail(slug))
}

/// Lower-case, ASCII-alphanumeric slug with single hyphens between words.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{post, project};

    #[test]
    fn tail_drops_language_prefix() {
        assert_eq!(slug_tail("en/go-cache"), "go-cache");
        assert_eq!(slug_tail("go-cache"), "go-cache");
        assert_eq!(slug_tail("blog/en/go-cache/"), "go-cache");
    }

    #[test]
    fn post_url() {
        let p = post("Go Cache", &["go"], "2024-01-01", false);
        assert_eq!(item_url("es", &p), "/es/blog/go-cache");
    }

    #[test]
    fn project_url() {
        let p = project("My Tiler!", "Web", &[], 2022, false);
        assert_eq!(item_url("en", &p), "/en/projects/my-tiler");
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("  Hello,   World  "), "hello-world");
        assert_eq!(slugify("C++ & Rust 2024"), "c-rust-2024");
        assert_eq!(slugify("¡Olé!"), "ol");
    }
}
