use crate::error::{FolioError, Result};
use crate::model::Section;
use crate::projection::ListingConfig;
use crate::state::{SortOrder, ViewMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "folio.json";
const DEFAULT_LANG: &str = "en";
const DEFAULT_GRID_COLUMNS: usize = 3;
const DEFAULT_SUMMARY_CHARS: usize = 120;
const DEFAULT_BLOG_FEATURED_CAP: usize = 5;

/// How one section groups featured items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionConfig {
    /// Show featured items in their own group.
    #[serde(default = "default_true")]
    pub partition: bool,

    /// Upper bound on the featured group. `None` shows every featured item.
    #[serde(default)]
    pub featured_cap: Option<usize>,
}

impl SectionConfig {
    pub fn listing(&self) -> ListingConfig {
        if self.partition {
            ListingConfig::partitioned(self.featured_cap)
        } else {
            ListingConfig::flat()
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_blog() -> SectionConfig {
    SectionConfig {
        partition: true,
        featured_cap: Some(DEFAULT_BLOG_FEATURED_CAP),
    }
}

fn default_projects() -> SectionConfig {
    SectionConfig {
        partition: true,
        featured_cap: None,
    }
}

fn default_lang() -> String {
    DEFAULT_LANG.to_string()
}

fn default_grid_columns() -> usize {
    DEFAULT_GRID_COLUMNS
}

fn default_summary_chars() -> usize {
    DEFAULT_SUMMARY_CHARS
}

/// Configuration for folio, stored in folio.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FolioConfig {
    /// Language used for URLs, labels and post filtering
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Cards per row in grid view
    #[serde(default = "default_grid_columns")]
    pub grid_columns: usize,

    /// Characters of summary shown per card line
    #[serde(default = "default_summary_chars")]
    pub summary_chars: usize,

    /// View mode a listing starts in
    #[serde(default)]
    pub view_mode: ViewMode,

    /// Sort order a listing starts in
    #[serde(default)]
    pub sort_order: SortOrder,

    #[serde(default = "default_blog")]
    pub blog: SectionConfig,

    #[serde(default = "default_projects")]
    pub projects: SectionConfig,

    /// Optional label override file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<PathBuf>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            lang: default_lang(),
            grid_columns: DEFAULT_GRID_COLUMNS,
            summary_chars: DEFAULT_SUMMARY_CHARS,
            view_mode: ViewMode::default(),
            sort_order: SortOrder::default(),
            blog: default_blog(),
            projects: default_projects(),
            labels: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub const CONFIG_KEYS: &[&str] = &[
    "lang",
    "grid-columns",
    "summary-chars",
    "view",
    "sort",
    "blog.partition",
    "blog.featured-cap",
    "projects.partition",
    "projects.featured-cap",
    "labels",
];

impl FolioConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FolioError::Io)?;
        let config: FolioConfig =
            serde_json::from_str(&content).map_err(FolioError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FolioError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FolioError::Serialization)?;
        fs::write(config_path, content).map_err(FolioError::Io)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_columns == 0 {
            return Err(FolioError::Config("grid_columns must be at least 1".into()));
        }
        if self.summary_chars < 4 {
            return Err(FolioError::Config("summary_chars must be at least 4".into()));
        }
        Ok(())
    }

    pub fn section(&self, section: Section) -> &SectionConfig {
        match section {
            Section::Blog => &self.blog,
            Section::Projects => &self.projects,
        }
    }

    fn section_mut(&mut self, section: Section) -> &mut SectionConfig {
        match section {
            Section::Blog => &mut self.blog,
            Section::Projects => &mut self.projects,
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "lang" => Some(self.lang.clone()),
            "grid-columns" => Some(self.grid_columns.to_string()),
            "summary-chars" => Some(self.summary_chars.to_string()),
            "view" => Some(self.view_mode.to_string()),
            "sort" => Some(self.sort_order.to_string()),
            "labels" => Some(
                self.labels
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "none".to_string()),
            ),
            _ => {
                let (section, field) = split_section_key(key)?;
                let cfg = self.section(section);
                match field {
                    "partition" => Some(cfg.partition.to_string()),
                    "featured-cap" => Some(
                        cfg.featured_cap
                            .map(|n| n.to_string())
                            .unwrap_or_else(|| "none".to_string()),
                    ),
                    _ => None,
                }
            }
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "lang" => {
                let lang = value.trim().to_lowercase();
                if lang.is_empty() {
                    return Err("lang cannot be empty".to_string());
                }
                self.lang = lang;
            }
            "grid-columns" => {
                self.grid_columns = parse_at_least(value, 1, key)?;
            }
            "summary-chars" => {
                self.summary_chars = parse_at_least(value, 4, key)?;
            }
            "view" => self.view_mode = value.parse()?,
            "sort" => self.sort_order = value.parse()?,
            "labels" => {
                self.labels = match value.trim() {
                    "" | "none" => None,
                    path => Some(PathBuf::from(path)),
                };
            }
            _ => {
                let (section, field) =
                    split_section_key(key).ok_or_else(|| format!("Unknown config key: {}", key))?;
                let cfg = self.section_mut(section);
                match field {
                    "partition" => {
                        cfg.partition = value
                            .trim()
                            .parse()
                            .map_err(|_| format!("{} expects true or false", key))?;
                    }
                    "featured-cap" => {
                        cfg.featured_cap = match value.trim() {
                            "none" | "" => None,
                            n => Some(
                                n.parse()
                                    .map_err(|_| format!("{} expects a number or none", key))?,
                            ),
                        };
                    }
                    _ => return Err(format!("Unknown config key: {}", key)),
                }
            }
        }
        Ok(())
    }
}

fn split_section_key(key: &str) -> Option<(Section, &str)> {
    let (section, field) = key.split_once('.')?;
    Some((section.parse().ok()?, field))
}

fn parse_at_least(value: &str, min: usize, key: &str) -> std::result::Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(n) if n >= min => Ok(n),
        _ => Err(format!("{} expects a number >= {}", key, min)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FolioConfig::default();
        assert_eq!(config.lang, "en");
        assert_eq!(config.grid_columns, 3);
        assert_eq!(config.blog.listing(), ListingConfig::partitioned(Some(5)));
        assert_eq!(config.projects.listing(), ListingConfig::partitioned(None));
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = FolioConfig::load(dir.path()).unwrap();
        assert_eq!(config, FolioConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();

        let mut config = FolioConfig::default();
        config.set("lang", "es").unwrap();
        config.set("projects.featured-cap", "3").unwrap();
        config.set("blog.partition", "false").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = FolioConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.lang, "es");
        assert_eq!(loaded.projects.featured_cap, Some(3));
        assert_eq!(loaded.blog.listing(), ListingConfig::flat());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"grid_columns": 2}"#).unwrap();
        let loaded = FolioConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.grid_columns, 2);
        assert_eq!(loaded.blog.featured_cap, Some(5));
    }

    #[test]
    fn test_zero_columns_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"grid_columns": 0}"#).unwrap();
        assert!(matches!(
            FolioConfig::load(dir.path()),
            Err(FolioError::Config(_))
        ));
    }

    #[test]
    fn test_get_and_set_keys() {
        let mut config = FolioConfig::default();
        assert_eq!(config.get("view").as_deref(), Some("grid"));
        config.set("view", "list").unwrap();
        config.set("sort", "oldest").unwrap();
        config.set("blog.featured-cap", "none").unwrap();
        assert_eq!(config.get("view").as_deref(), Some("list"));
        assert_eq!(config.get("sort").as_deref(), Some("oldest"));
        assert_eq!(config.get("blog.featured-cap").as_deref(), Some("none"));
        assert_eq!(config.get("nope"), None);
        assert!(config.set("grid-columns", "0").is_err());
        assert!(config.set("home.partition", "true").is_err());
    }

    #[test]
    fn test_every_key_is_readable() {
        let config = FolioConfig::default();
        for key in CONFIG_KEYS {
            assert!(config.get(key).is_some(), "missing getter for {}", key);
        }
    }
}
