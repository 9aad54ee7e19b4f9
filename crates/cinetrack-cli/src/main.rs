use clap::{ArgAction, Parser, Subcommand};
use cinetrack_models::{DiscoverFilters, ListKind, PageQuery};
use commands::{browse, clear, config, lists, movie};

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "cinetrack")]
#[command(about = "CineTrack - Discover movies and keep your watchlist and favorites close")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse popular movies
    #[command(long_about = "Browse popular movies. Each extra page is fetched the way the scroll trigger would: one page at a time, in order.")]
    Popular {
        /// Number of result pages to fetch
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// Search movies by title
    Search {
        /// Free-text query
        query: String,

        /// Number of result pages to fetch
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// Discover movies with filters
    #[command(long_about = "Discover movies filtered by genre, release year, minimum rating, and original language, sorted by the given key.")]
    Discover {
        /// Genre id (e.g. 878 for Science Fiction), comma-separated for several
        #[arg(long)]
        genre: Option<String>,

        /// Primary release year
        #[arg(long)]
        year: Option<u32>,

        /// Minimum vote average (0-10)
        #[arg(long, value_name = "RATING")]
        min_rating: Option<f32>,

        /// Original-language code (e.g. en, ja)
        #[arg(long)]
        language: Option<String>,

        /// Sort key
        #[arg(long, default_value = "popularity.desc")]
        sort_by: String,

        /// Number of result pages to fetch
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// Show details, cast, and trailers for a movie
    Movie {
        /// TMDB movie id
        id: u64,
    },
    /// Manage the watchlist
    Watchlist {
        #[command(subcommand)]
        cmd: ListCommands,
    },
    /// Manage favorites
    Favorites {
        #[command(subcommand)]
        cmd: ListCommands,
    },
    /// Clear persisted lists
    Clear {
        /// Clear the watchlist
        #[arg(long, action = ArgAction::SetTrue)]
        watchlist: bool,

        /// Clear favorites
        #[arg(long, action = ArgAction::SetTrue)]
        favorites: bool,

        /// Clear every persisted list
        #[arg(long, action = ArgAction::SetTrue, conflicts_with_all = ["watchlist", "favorites"])]
        all: bool,
    },
    /// View or create configuration
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum ListCommands {
    /// Show the list's entries
    Show,
    /// Toggle a movie in or out of the list
    Toggle {
        /// TMDB movie id
        id: u64,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration (masks the API key)
    Show,
    /// Write a starter config file
    Init,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Popular { pages } => browse::run_browse(PageQuery::Popular, pages, &output).await,
        Commands::Search { query, pages } => {
            browse::run_browse(PageQuery::Search { query }, pages, &output).await
        }
        Commands::Discover {
            genre,
            year,
            min_rating,
            language,
            sort_by,
            pages,
        } => {
            let filters = DiscoverFilters {
                with_genres: genre,
                primary_release_year: year,
                vote_average_gte: min_rating,
                with_original_language: language,
                sort_by,
                include_adult: false,
            };
            browse::run_browse(PageQuery::Discover(filters), pages, &output).await
        }
        Commands::Movie { id } => movie::run_movie(id, &output).await,
        Commands::Watchlist { cmd } => lists::run_list(ListKind::Watchlist, cmd, &output).await,
        Commands::Favorites { cmd } => lists::run_list(ListKind::Favorites, cmd, &output).await,
        Commands::Clear {
            watchlist,
            favorites,
            all,
        } => clear::run_clear(watchlist, favorites, all, &output),
        Commands::Config { cmd } => {
            let cmd = cmd.unwrap_or(ConfigCommands::Show);
            config::run_config(cmd, &output)
        }
    }
}
