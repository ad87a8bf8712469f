use clap::{Parser, Subcommand};
use jokes::controllers::{favorites::FavoritesController, jokes::JokeController};
use jokes::domain::favorites::FavoritesStore;
use jokes::domain::joke::{Category, JokeFetcher};
use jokes::error::AppResult;
use jokes::infrastructure::config::{Config, LogFormat};
use jokes::infrastructure::repositories::{FileKeyValueRepository, HttpJokeRepository};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jokes")]
#[command(about = "Fetch random jokes and keep your favorites")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a random joke
    Fetch {
        /// Joke category (general, knock_knock, programming, anime, food, dad)
        #[arg(short, long)]
        category: Option<Category>,
        /// Also add the joke to favorites
        #[arg(short, long)]
        favorite: bool,
    },
    /// List favorite jokes
    Favorites,
    /// Remove favorites by index, as shown by `favorites`
    Remove {
        #[arg(required = true)]
        indices: Vec<usize>,
    },
    /// List joke categories
    Categories,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    if let Err(err) = run(cli, &config).await {
        tracing::error!(error = %err, "Command failed");
        eprintln!("{}", err.user_message());
        std::process::exit(err.exit_code());
    }

    Ok(())
}

async fn run(cli: Cli, config: &Config) -> AppResult<()> {
    tracing::debug!(
        base_url = %config.base_url,
        data_dir = %config.data_dir.display(),
        "Starting jokes"
    );

    // Repositories
    let joke_repo = Arc::new(HttpJokeRepository::new(config.http_timeout())?);
    let kv_repo = Arc::new(FileKeyValueRepository::new(config.data_dir.clone()));

    // Services
    let fetcher = Arc::new(
        JokeFetcher::new(joke_repo, config.base_url.clone())
            .with_category(config.default_category),
    );
    let favorites = Arc::new(FavoritesStore::load(kv_repo).await);
    if let Some(err) = favorites.load_error() {
        eprintln!("Warning: {}. Starting with an empty favorites list.", err);
    }

    // Controllers
    let joke_controller = JokeController::new(fetcher, favorites.clone());
    let favorites_controller = FavoritesController::new(favorites);

    let mut out = std::io::stdout().lock();
    match cli.command {
        Commands::Fetch { category, favorite } => {
            joke_controller.fetch(&mut out, category, favorite).await
        }
        Commands::Favorites => favorites_controller.list(&mut out).await,
        Commands::Remove { indices } => favorites_controller.remove(&mut out, indices).await,
        Commands::Categories => joke_controller.categories(&mut out),
    }
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "jokes=warn".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
