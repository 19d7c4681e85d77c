use super::browse::run_browse;
use super::logger::init_logger;
use super::render::{render_listing, Card, RenderOptions, LINE_WIDTH};
use super::setup::{Cli, Commands, ListingArgs};
use super::styles::Painter;
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use folio::config::{ConfigAction, FolioConfig, CONFIG_FILENAME, CONFIG_KEYS};
use folio::error::{FolioError, Result};
use folio::i18n::Labels;
use folio::listing::{BlogListing, Listing, ProjectListing};
use folio::loader::{load_posts, load_projects};
use folio::model::{Language, Post, Section};
use folio::predicate::FacetStrategy;
use folio::state::{Action, FilterState};
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const ONE_SHOT_HINT: &str = "run again without --search or --tag";

struct AppContext {
    config: FolioConfig,
    config_dir: PathBuf,
    color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if cli.no_color {
        console::set_colors_enabled(false);
        colored::control::set_override(false);
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Blog(args) => handle_listing(&ctx, Section::Blog, &args, false),
        Commands::Projects(args) => handle_listing(&ctx, Section::Projects, &args, false),
        Commands::Browse { section, listing } => handle_listing(&ctx, section, &listing, true),
        Commands::Tags {
            section,
            items,
            lang,
            all_languages,
        } => handle_tags(&ctx, section, &items, lang, all_languages),
        Commands::Config { key, value } => handle_config(&mut ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = resolve_config_dir(cli.config.as_deref());
    debug!(dir = %config_dir.display(), "using config directory");
    let config = FolioConfig::load(&config_dir)?;

    Ok(AppContext {
        config,
        config_dir,
        color: !cli.no_color && console::colors_enabled(),
    })
}

/// `--config`, else the working directory when it holds folio.json, else the
/// platform config directory.
fn resolve_config_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    if cwd.join(CONFIG_FILENAME).exists() {
        return cwd;
    }

    ProjectDirs::from("dev", "folio", "folio")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or(cwd)
}

fn load_labels(ctx: &AppContext, lang: &str) -> Labels {
    match &ctx.config.labels {
        Some(path) => Labels::load(path, lang).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "label file unreadable, using built-in labels");
            Labels::builtin(lang)
        }),
        None => Labels::builtin(lang),
    }
}

/// Posts are read in one language unless `all` is set. A language code
/// posts can't carry disables the filter.
fn post_language(lang: &str, all: bool) -> Option<Language> {
    if all {
        return None;
    }
    lang.parse()
        .map_err(|e: String| warn!(lang, "{}; showing posts of every language", e))
        .ok()
}

fn load_blog(path: &Path, lang: &str, all_languages: bool) -> Result<Vec<Post>> {
    load_posts(path, post_language(lang, all_languages))
}

fn handle_listing(
    ctx: &AppContext,
    section: Section,
    args: &ListingArgs,
    interactive: bool,
) -> Result<()> {
    let lang = args.lang.clone().unwrap_or_else(|| ctx.config.lang.clone());
    let labels = load_labels(ctx, &lang);
    let opts = RenderOptions {
        labels: &labels,
        lang: &lang,
        section,
        grid_columns: ctx.config.grid_columns,
        summary_chars: ctx.config.summary_chars,
        width: terminal_width(),
        painter: Painter::new(ctx.color),
    };
    let listing_config = ctx.config.section(section).listing();

    match section {
        Section::Blog => {
            let posts = load_blog(&args.items, &lang, args.all_languages)?;
            let listing = BlogListing::with_state(&posts, listing_config, initial_state(ctx, args));
            show(listing, args, &opts, interactive)
        }
        Section::Projects => {
            let ignored = ignored_categories(&args.facets);
            if !ignored.is_empty() {
                warn!(
                    kept = %args.facets[0],
                    ignored = ?ignored,
                    "projects filter by one category; ignoring the others"
                );
            }
            let projects = load_projects(&args.items)?;
            let listing =
                ProjectListing::with_state(&projects, listing_config, initial_state(ctx, args));
            show(listing, args, &opts, interactive)
        }
    }
}

fn initial_state<F: FacetStrategy>(ctx: &AppContext, args: &ListingArgs) -> FilterState<F> {
    FilterState::with_presentation(
        args.view.unwrap_or(ctx.config.view_mode),
        args.sort.unwrap_or(ctx.config.sort_order),
    )
}

/// Categories are single-valued, so only the first `--category` applies.
fn ignored_categories(facets: &[String]) -> &[String] {
    facets.get(1..).unwrap_or(&[])
}

/// Flags become the same actions a user would dispatch by hand.
fn flag_actions(args: &ListingArgs) -> Vec<Action> {
    let mut actions = Vec::new();
    if let Some(term) = &args.search {
        actions.push(Action::SetSearchTerm(term.clone()));
    }
    if !args.facets.is_empty() {
        actions.push(Action::SetFacets(args.facets.clone()));
    }
    actions
}

fn show<I: Card, F: FacetStrategy>(
    mut listing: Listing<'_, I, F>,
    args: &ListingArgs,
    opts: &RenderOptions<'_>,
    interactive: bool,
) -> Result<()> {
    listing.dispatch_all(flag_actions(args));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if interactive {
        let stdin = io::stdin();
        run_browse(&mut listing, opts, stdin.lock(), &mut out)?;
    } else {
        write!(out, "{}", render_listing(&listing, opts, ONE_SHOT_HINT))?;
    }
    Ok(())
}

fn terminal_width() -> usize {
    if !io::stdout().is_terminal() {
        return LINE_WIDTH;
    }
    console::Term::stdout()
        .size_checked()
        .map(|(_, cols)| usize::from(cols).min(LINE_WIDTH))
        .unwrap_or(LINE_WIDTH)
}

fn handle_tags(
    ctx: &AppContext,
    section: Section,
    items: &Path,
    lang: Option<String>,
    all_languages: bool,
) -> Result<()> {
    let lang = lang.unwrap_or_else(|| ctx.config.lang.clone());
    let options = match section {
        Section::Blog => {
            let posts = load_blog(items, &lang, all_languages)?;
            BlogListing::new(&posts, ctx.config.blog.listing()).facet_options()
        }
        Section::Projects => {
            let projects = load_projects(items)?;
            ProjectListing::new(&projects, ctx.config.projects.listing()).facet_options()
        }
    };

    if options.is_empty() {
        println!("{}", "No facets found.".dimmed());
    }
    for option in options {
        println!("{}", option);
    }
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    match action {
        ConfigAction::ShowAll => {
            for key in CONFIG_KEYS {
                if let Some(value) = ctx.config.get(key) {
                    println!("{} = {}", key, value);
                }
            }
        }
        ConfigAction::ShowKey(key) => match ctx.config.get(&key) {
            Some(value) => println!("{} = {}", key, value),
            None => return Err(FolioError::Api(format!("Unknown config key: {}", key))),
        },
        ConfigAction::Set(key, value) => {
            ctx.config.set(&key, &value).map_err(FolioError::Api)?;
            ctx.config.save(&ctx.config_dir)?;
            let shown = ctx.config.get(&key).unwrap_or(value);
            println!("{}", format!("{} = {}", key, shown).green());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(search: Option<&str>, facets: &[&str]) -> ListingArgs {
        ListingArgs {
            items: PathBuf::from("posts.json"),
            search: search.map(str::to_string),
            facets: facets.iter().map(|f| f.to_string()).collect(),
            view: None,
            sort: None,
            lang: None,
            all_languages: false,
        }
    }

    #[test]
    fn flags_map_to_actions() {
        assert!(flag_actions(&args(None, &[])).is_empty());
        assert_eq!(
            flag_actions(&args(Some("go"), &["rust", "go"])),
            vec![
                Action::SetSearchTerm("go".into()),
                Action::SetFacets(vec!["rust".into(), "go".into()]),
            ]
        );
    }

    #[test]
    fn only_first_category_is_kept() {
        let facets = vec!["Web".to_string(), "CLI".to_string(), "AI".to_string()];
        assert_eq!(ignored_categories(&facets), ["CLI", "AI"]);
        assert!(ignored_categories(&facets[..1]).is_empty());
        assert!(ignored_categories(&[]).is_empty());
    }

    #[test]
    fn post_language_filter() {
        assert_eq!(post_language("es", false), Some(Language::Es));
        assert_eq!(post_language("es", true), None);
        assert_eq!(post_language("fr", false), None);
    }

    #[test]
    fn explicit_config_dir_wins() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(resolve_config_dir(Some(dir.path())), dir.path());
    }
}
