//! `deals` command handlers.

use clap::Subcommand;
use gameloot_cheapshark::StoreDirectory;
use gameloot_core::AppConfig;
use rust_decimal::Decimal;

use crate::games::cheapshark_client;
use crate::render;

#[derive(Debug, Subcommand)]
pub enum DealsCommands {
    /// List the biggest current discounts
    Top {
        /// Number of deals to show
        #[arg(long, default_value = "20")]
        limit: u32,
        /// Only include deals at or below this price (e.g., 60)
        #[arg(long)]
        upper_price: Option<Decimal>,
    },
    /// Find the cheapest current deal for a title
    Best {
        /// Title to look up
        title: String,
    },
}

pub(crate) async fn run(config: &AppConfig, command: DealsCommands) -> anyhow::Result<()> {
    let client = cheapshark_client(config)?;

    match command {
        DealsCommands::Top { limit, upper_price } => {
            let deals = client.top_deals(limit, upper_price).await?;
            if deals.is_empty() {
                println!("No deals found right now. Try again later.");
                return Ok(());
            }

            // One directory fetch covers every card; if it fails the cards
            // fall back to the raw store id.
            let directory = match client.store_directory().await {
                Ok(directory) => Some(directory),
                Err(e) => {
                    tracing::warn!(error = %e, "store directory lookup failed");
                    None
                }
            };

            for deal in &deals {
                let store_name = store_label(directory.as_deref(), &deal.store_id);
                print!("{}", render::deal_card(deal, &store_name));
            }
        }
        DealsCommands::Best { title } => match client.best_deal_for_title(&title).await? {
            Some(best) => print!("{}", render::best_deal(&best)),
            None => println!("No deals found on CheapShark."),
        },
    }

    Ok(())
}

fn store_label(directory: Option<&StoreDirectory>, store_id: &str) -> String {
    directory.map_or_else(
        || format!("Store #{store_id}"),
        |d| d.name_for(store_id).to_owned(),
    )
}

#[cfg(test)]
mod tests {
    use gameloot_cheapshark::StoreInfo;

    use super::*;

    #[test]
    fn store_label_uses_directory_name() {
        let directory: StoreDirectory = [StoreInfo {
            store_id: "7".to_owned(),
            store_name: "GOG".to_owned(),
            is_active: Some(1),
        }]
        .into_iter()
        .collect();
        assert_eq!(store_label(Some(&directory), "7"), "GOG");
        assert_eq!(store_label(Some(&directory), "99"), "Unknown store");
    }

    #[test]
    fn store_label_without_directory_shows_id() {
        assert_eq!(store_label(None, "25"), "Store #25");
    }
}
