use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The listing a content item belongs to. Also the second URL segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Blog,
    Projects,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Blog => "blog",
            Section::Projects => "projects",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "blog" | "posts" => Ok(Section::Blog),
            "projects" => Ok(Section::Projects),
            other => Err(format!("Unknown section: {}", other)),
        }
    }
}

/// Languages a post can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Ru,
    Ge,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Ru => "ru",
            Language::Ge => "ge",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            "ru" => Ok(Language::Ru),
            "ge" => Ok(Language::Ge),
            other => Err(format!("Unsupported language: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

/// A blog post as produced by the content loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    #[serde(default, alias = "publishDate")]
    pub date: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default = "default_read_time")]
    pub read_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

fn default_author() -> String {
    "Anonymous".to_string()
}

fn default_read_time() -> String {
    "5 min".to_string()
}

/// Project years show up both as numbers and as strings in content files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    Text(String),
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Number(n) => write!(f, "{}", n),
            Year::Text(s) => f.write_str(s),
        }
    }
}

/// A portfolio project as produced by the content loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    // Filled from the title by the loader when missing.
    #[serde(default)]
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(default, alias = "technologies")]
    pub tech: Vec<String>,
    pub category: String,
    pub year: Year,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, alias = "linkRepository", alias = "github")]
    pub repository: Option<String>,
    #[serde(default, alias = "linkDemo")]
    pub demo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_defaults_apply() {
        let json = r#"{"slug":"en/hello","title":"Hello","excerpt":"Hi","date":"2024-01-01","tags":["rust"]}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert!(!post.featured);
        assert_eq!(post.language, Language::En);
        assert_eq!(post.author, "Anonymous");
        assert_eq!(post.read_time, "5 min");
    }

    #[test]
    fn post_accepts_front_matter_names() {
        let json = r#"{"slug":"a","title":"A","excerpt":"x","publishDate":"2024-02-03","tags":["t"],"readTime":"3 min","language":"es"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.date, "2024-02-03");
        assert_eq!(post.read_time, "3 min");
        assert_eq!(post.language, Language::Es);
    }

    #[test]
    fn project_year_number_or_string() {
        let a: Project = serde_json::from_str(
            r#"{"title":"A","description":"d","category":"Web","year":2023}"#,
        )
        .unwrap();
        let b: Project = serde_json::from_str(
            r#"{"title":"B","description":"d","category":"Web","year":"2021","technologies":["go"],"linkDemo":"https://b.dev"}"#,
        )
        .unwrap();
        assert_eq!(a.year, Year::Number(2023));
        assert_eq!(b.year, Year::Text("2021".into()));
        assert_eq!(b.tech, vec!["go".to_string()]);
        assert_eq!(b.demo.as_deref(), Some("https://b.dev"));
        assert!(a.slug.is_empty());
    }

    #[test]
    fn section_parses_aliases() {
        assert_eq!("Blog".parse::<Section>().unwrap(), Section::Blog);
        assert_eq!("posts".parse::<Section>().unwrap(), Section::Blog);
        assert_eq!("projects".parse::<Section>().unwrap(), Section::Projects);
        assert!("home".parse::<Section>().is_err());
    }
}
