use folio::model::{Language, Post, Project, Year};

pub fn post(title: &str, tags: &[&str], date: &str, featured: bool) -> Post {
    Post {
        slug: format!("en/{}", title.to_lowercase().replace(' ', "-")),
        title: title.to_string(),
        excerpt: format!("About {}", title.to_lowercase()),
        date: date.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        featured,
        language: Language::En,
        author: "Ana".to_string(),
        read_time: "4 min".to_string(),
        image: None,
    }
}

pub fn project(title: &str, category: &str, year: i64, featured: bool) -> Project {
    Project {
        id: None,
        slug: title.to_lowercase().replace(' ', "-"),
        title: title.to_string(),
        description: format!("{} description", title),
        tech: vec!["rust".to_string()],
        category: category.to_string(),
        year: Year::Number(year),
        featured,
        status: None,
        repository: Some("https://github.com/ana/tool".to_string()),
        demo: None,
        image: None,
    }
}

pub fn sample_posts() -> Vec<Post> {
    vec![
        post("Go Cache", &["go", "cache"], "2024-01-01", true),
        post("Rust Parser", &["rust"], "2024-06-01", false),
    ]
}
