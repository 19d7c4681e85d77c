use crate::model::{Language, Post, Project, Year};
use crate::routes::slugify;

pub fn post(title: &str, tags: &[&str], date: &str, featured: bool) -> Post {
    Post {
        slug: format!("en/{}", slugify(title)),
        title: title.to_string(),
        excerpt: format!("About {}", title.to_lowercase()),
        date: date.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        featured,
        language: Language::En,
        author: "Anonymous".to_string(),
        read_time: "5 min".to_string(),
        image: None,
    }
}

pub fn project(title: &str, category: &str, tech: &[&str], year: i64, featured: bool) -> Project {
    Project {
        id: None,
        slug: slugify(title),
        title: title.to_string(),
        description: format!("{} project", title),
        tech: tech.iter().map(|t| t.to_string()).collect(),
        category: category.to_string(),
        year: Year::Number(year),
        featured,
        status: None,
        repository: None,
        demo: None,
        image: None,
    }
}

/// The two posts used throughout the listing scenarios.
pub fn sample_posts() -> Vec<Post> {
    vec![
        post("Go Cache", &["go", "cache"], "2024-01-01", true),
        post("Rust Parser", &["rust"], "2024-06-01", false),
    ]
}
