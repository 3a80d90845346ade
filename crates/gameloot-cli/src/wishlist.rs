//! `wishlist` command handlers.

use clap::Subcommand;
use gameloot_core::{AppConfig, WishlistEntry};

use crate::games::{open_wishlist, rawg_client};
use crate::render;

#[derive(Debug, Subcommand)]
pub enum WishlistCommands {
    /// Show every saved game
    List,
    /// Save a game; details are fetched from RAWG unless --name is given
    Add {
        /// RAWG game id
        id: i64,
        /// Save under this name without contacting RAWG
        #[arg(long)]
        name: Option<String>,
    },
    /// Remove a saved game
    Remove {
        /// RAWG game id
        id: i64,
    },
    /// Report whether a game is saved
    Contains {
        /// RAWG game id
        id: i64,
    },
    /// Remove every saved game
    Clear,
}

pub(crate) async fn run(config: &AppConfig, command: WishlistCommands) -> anyhow::Result<()> {
    let wishlist = open_wishlist(config)?;

    match command {
        WishlistCommands::List => print!("{}", render::wishlist(&wishlist.list())),
        WishlistCommands::Add { id, name } => {
            let entry = match name {
                Some(name) => WishlistEntry::new(id, name),
                None => {
                    let game = rawg_client(config)?.get_by_id(&id.to_string()).await?;
                    WishlistEntry::from(&game)
                }
            };
            let label = entry.name.clone();
            if wishlist.add(entry)? {
                println!("Added to wishlist: {label}");
            } else {
                println!("Already in wishlist: {id}");
            }
        }
        WishlistCommands::Remove { id } => {
            if wishlist.remove(id)? {
                println!("Removed from wishlist: {id}");
            } else {
                println!("Not in wishlist: {id}");
            }
        }
        WishlistCommands::Contains { id } => {
            println!("{}", if wishlist.contains(id) { "yes" } else { "no" });
        }
        WishlistCommands::Clear => {
            wishlist.clear()?;
            println!("Wishlist cleared.");
        }
    }

    Ok(())
}
