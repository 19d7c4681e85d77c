use clap::{Args, Parser, Subcommand};
use folio::model::Section;
use folio::state::{SortOrder, ViewMode};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "folio", bin_name = "folio", version = get_version())]
#[command(about = "Browse portfolio posts and projects from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding folio.json
    #[arg(long, global = true, value_name = "DIR")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List blog posts
    Blog(ListingArgs),

    /// List projects
    Projects(ListingArgs),

    /// Browse a section interactively, one command per line
    Browse {
        /// blog or projects
        section: Section,

        #[command(flatten)]
        listing: ListingArgs,
    },

    /// List the facet values of a section (tags or categories)
    #[command(alias = "facets")]
    Tags {
        /// blog or projects
        section: Section,

        /// Content collection (JSON array)
        #[arg(short, long)]
        items: PathBuf,

        /// Language of the posts to read facets from
        #[arg(long)]
        lang: Option<String>,

        /// Read facets from posts of every language
        #[arg(long)]
        all_languages: bool,
    },

    /// Get or set configuration values
    Config {
        /// Configuration key (e.g. grid-columns, blog.featured-cap)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ListingArgs {
    /// Content collection (JSON array)
    #[arg(short, long)]
    pub items: PathBuf,

    /// Initial search term
    #[arg(short, long)]
    pub search: Option<String>,

    /// Facet to select (a tag for the blog, a category for projects)
    #[arg(short = 't', long = "tag", visible_alias = "category")]
    pub facets: Vec<String>,

    /// Initial view mode (grid or list)
    #[arg(long)]
    pub view: Option<ViewMode>,

    /// Initial sort order (newest or oldest)
    #[arg(long)]
    pub sort: Option<SortOrder>,

    /// Language of posts and labels (overrides config)
    #[arg(long)]
    pub lang: Option<String>,

    /// Keep posts of every language
    #[arg(long)]
    pub all_languages: bool,
}
