use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error as ThisError;
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

use recipe_discovery_backend::app_config::{self, AppConfig, DEFAULT_CONFIG_PATH};
use recipe_discovery_backend::{
    browser, collection, EncodedFilters, PageSize, RecipeBrowser, RecipeCollection,
};
use recipe_discovery_model::RecipeId;

mod render;

#[derive(Debug, ThisError)]
enum Error {
    #[error("recipe-discovery failed to write output with io error: {0}")]
    IO(#[from] io::Error),
    #[error("recipe-discovery failed to load config, {0}")]
    Config(#[from] app_config::Error),
    #[error("recipe-discovery failed to load recipes, {0}")]
    Collection(#[from] collection::Error),
    #[error("recipe-discovery {0}")]
    Browser(#[from] browser::Error),
}
type Result<T> = std::result::Result<T, Error>;

/// Browse, filter and page through a recipe collection.
#[derive(Debug, Parser)]
#[clap(name = "recipe-discovery", version)]
struct Cli {
    /// TOML config file; missing files are ignored.
    #[clap(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: String,
    /// Recipe JSON file, overriding the configured one.
    #[clap(long, global = true)]
    data: Option<PathBuf>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print one page of recipes matching the filters.
    List(ListArgs),
    /// Print every detail of one recipe.
    Show { id: String },
    /// Print the cuisines available for filtering.
    Cuisines,
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Case-insensitive substring of the title.
    #[clap(long, default_value = "")]
    title: String,
    /// Cuisine label, or "all".
    #[clap(long, default_value = "all")]
    cuisine: String,
    /// Rating constraint such as ">4.5", or "all".
    #[clap(long, default_value = "all")]
    rating: String,
    /// Total time constraint in minutes such as "<30", or "all".
    #[clap(long, default_value = "all")]
    total_time: String,
    /// Calories constraint such as "<400", or "all".
    #[clap(long, default_value = "all")]
    calories: String,
    #[clap(long, default_value_t = 1)]
    page: usize,
    /// 15, 25 or 50; defaults to the configured page size.
    #[clap(long)]
    page_size: Option<PageSize>,
}

impl ListArgs {
    fn filters(&self) -> EncodedFilters {
        EncodedFilters {
            title: self.title.clone(),
            cuisine: self.cuisine.clone(),
            rating: self.rating.clone(),
            total_time: self.total_time.clone(),
            calories: self.calories.clone(),
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn load_collection(conf: &AppConfig, data: Option<PathBuf>) -> Result<RecipeCollection> {
    match data.or_else(|| conf.data.path.clone()) {
        Some(path) => Ok(RecipeCollection::load(&path)?),
        None => {
            info!("using bundled sample recipes");
            Ok(RecipeCollection::sample()?)
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let conf = AppConfig::load(&cli.config)?;
    let collection = load_collection(&conf, cli.data)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::List(args) => {
            let page_size = args.page_size.unwrap_or(conf.browse.page_size);
            let mut browser = RecipeBrowser::new(collection, page_size);
            browser.set_criteria(args.filters().to_criteria());
            browser.set_page(args.page);
            render::list(&mut out, &browser)?;
        }
        Command::Show { id } => {
            let mut browser = RecipeBrowser::new(collection, conf.browse.page_size);
            let recipe = browser.select(&RecipeId(id))?;
            render::detail(&mut out, recipe)?;
        }
        Command::Cuisines => {
            let browser = RecipeBrowser::new(collection, conf.browse.page_size);
            render::cuisines(&mut out, &browser.cuisines())?;
        }
    }
    out.flush()?;
    Ok(())
}
