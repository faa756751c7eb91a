// src/bin/cli.rs

//! Biblioteca sin Censura CLI
//!
//! Renders the library and course pages from a local directory or a
//! served site, and edits the catalog file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use biblioteca::{
    config,
    error::Result,
    models::{Config, LoggingConfig},
    pipeline::{self, BrowseOptions, CoursesOptions, EditAction, OutputFormat, PageOutput},
    services::{Fetcher, ItemDraft, SortOrder, SourceFetcher},
    utils::http,
};
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

/// Biblioteca sin Censura - catalog viewer
#[derive(Parser, Debug)]
#[command(
    name = "biblioteca",
    version,
    about = "Browse and edit the Biblioteca sin Censura catalog"
)]
struct Cli {
    /// Path to the configuration file (default: data/config.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Site location to load from, overriding `loader.base` (URL or directory)
    #[arg(short, long, global = true)]
    base: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a catalog section
    Browse {
        /// Address fragment selecting the section, e.g. "#/libros"
        #[arg(long, default_value = "")]
        fragment: String,

        /// Title sort order: asc or desc
        #[arg(long, default_value = "asc")]
        sort: SortOrder,

        /// Search text matched against titles and descriptions
        #[arg(short, long, default_value = "")]
        query: String,

        /// Render the menu as seen from the about page
        #[arg(long)]
        about: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Render the course carousel
    Courses {
        /// Search text matched against titles and keywords
        #[arg(short, long, default_value = "")]
        query: String,

        /// Carousel clicks to replay: positive for next, negative for previous
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        steps: i32,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List catalog sections and item counts
    Sections,

    /// Validate configuration and catalog
    Validate,

    /// Edit a catalog file
    Edit {
        /// Catalog file to edit
        file: PathBuf,

        #[command(subcommand)]
        action: EditCommand,
    },
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output format: text or html
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Write the page to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum EditCommand {
    /// List sections
    Sections,
    /// Add a section
    AddSection { name: String },
    /// List the items of a section
    Items { section: String },
    /// Add an item to a section
    Add {
        section: String,
        #[command(flatten)]
        item: ItemArgs,
    },
    /// Replace the item at an index
    Update {
        section: String,
        index: usize,
        #[command(flatten)]
        item: ItemArgs,
    },
    /// Remove the item at an index
    Remove { section: String, index: usize },
}

#[derive(Args, Debug)]
struct ItemArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    description: String,
    #[arg(long)]
    link: String,
    /// Cover image filename (optional)
    #[arg(long)]
    cover: Option<String>,
}

impl From<ItemArgs> for ItemDraft {
    fn from(args: ItemArgs) -> Self {
        ItemDraft {
            title: args.title,
            description: args.description,
            link: args.link,
            cover_image: args.cover,
        }
    }
}

impl From<EditCommand> for EditAction {
    fn from(command: EditCommand) -> Self {
        match command {
            EditCommand::Sections => EditAction::ListSections,
            EditCommand::AddSection { name } => EditAction::AddSection { name },
            EditCommand::Items { section } => EditAction::ListItems { section },
            EditCommand::Add { section, item } => EditAction::AddItem {
                section,
                draft: item.into(),
            },
            EditCommand::Update {
                section,
                index,
                item,
            } => EditAction::EditItem {
                section,
                index,
                draft: item.into(),
            },
            EditCommand::Remove { section, index } => EditAction::RemoveItem { section, index },
        }
    }
}

/// Initialize logging before anything else can log.
///
/// `RUST_LOG` or `--verbose` fix the level. Otherwise the logger passes
/// every record and the global max level, info until the configuration
/// is read, decides. Returns whether the level is fixed.
fn init_logging(verbose: bool) -> bool {
    let from_env = std::env::var_os("RUST_LOG").is_some();
    let default = if verbose { "debug" } else { "trace" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp_secs()
        .init();
    if !from_env && !verbose {
        log::set_max_level(LevelFilter::Info);
    }
    from_env || verbose
}

/// Apply `logging.level` from the configuration.
fn apply_config_level(logging: &LoggingConfig) {
    match logging.level_filter() {
        Ok(level) => log::set_max_level(level),
        Err(e) => log::warn!("{e}; keeping the info level"),
    }
}

fn create_fetcher(config: &Config) -> Result<Arc<dyn Fetcher>> {
    let client = http::create_client(&config.loader)?;
    Ok(Arc::new(SourceFetcher::new(client)))
}

/// Write a rendered page, then report the load failure it shows.
fn emit(output: PageOutput, path: Option<&Path>) -> Result<()> {
    let (body, failure) = match output.into_result() {
        Ok(body) => (body, None),
        Err((body, e)) => (body, Some(e)),
    };

    match path {
        Some(path) => {
            std::fs::write(path, body)?;
            log::info!("Page written to {}", path.display());
        }
        None => print!("{body}"),
    }

    match failure {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let level_fixed = init_logging(cli.verbose);

    let mut config = config::load_config(cli.config.as_deref())?;
    if !level_fixed {
        apply_config_level(&config.logging);
    }
    if let Some(base) = cli.base {
        config.loader.base = base;
    }

    match cli.command {
        Command::Browse {
            fragment,
            sort,
            query,
            about,
            output,
        } => {
            let options = BrowseOptions {
                fragment,
                order: sort,
                query,
                about_page: about,
                format: output.format,
            };
            let page = pipeline::run_browse(&config, create_fetcher(&config)?, &options).await?;
            emit(page, output.output.as_deref())?;
        }

        Command::Courses {
            query,
            steps,
            output,
        } => {
            let options = CoursesOptions {
                query,
                steps,
                format: output.format,
            };
            let page = pipeline::run_courses(&config, create_fetcher(&config)?, &options).await?;
            emit(page, output.output.as_deref())?;
        }

        Command::Sections => {
            let sections = pipeline::run_sections(&config, create_fetcher(&config)?).await?;
            for (name, count) in sections {
                println!("{name}\t{count}");
            }
        }

        Command::Validate => {
            pipeline::run_validate(&config, create_fetcher(&config)?).await?;
            log::info!("All validations passed!");
        }

        Command::Edit { file, action } => {
            let listing = pipeline::run_edit(&file, action.into())?;
            print!("{listing}");
        }
    }

    Ok(())
}
