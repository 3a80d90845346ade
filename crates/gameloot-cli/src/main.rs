mod deals;
mod games;
mod render;
mod wishlist;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::deals::DealsCommands;
use crate::wishlist::WishlistCommands;

#[derive(Debug, Parser)]
#[command(name = "gameloot")]
#[command(about = "Search games, find the cheapest current deal, keep a wishlist")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search RAWG for games by title
    Search {
        /// Title to search for
        query: String,
    },
    /// Show details, screenshots and the best current deal for a game
    Game {
        /// RAWG game id or slug
        id: String,
    },
    /// Price lookups against CheapShark
    Deals {
        #[command(subcommand)]
        command: DealsCommands,
    },
    /// Manage the local wishlist
    Wishlist {
        #[command(subcommand)]
        command: WishlistCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = gameloot_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?config, "configuration loaded");

    match command {
        Commands::Search { query } => games::run_search(&config, &query).await?,
        Commands::Game { id } => games::run_game(&config, &id).await?,
        Commands::Deals { command } => deals::run(&config, command).await?,
        Commands::Wishlist { command } => wishlist::run(&config, command).await?,
    }

    Ok(())
}
