//! `search` and `game` command handlers.

use gameloot_cheapshark::CheapsharkClient;
use gameloot_core::AppConfig;
use gameloot_rawg::RawgClient;
use gameloot_store::{FileStore, WishlistStore};

use crate::render;

/// Builds a RAWG client from config, failing early when no API key is set.
pub(crate) fn rawg_client(config: &AppConfig) -> anyhow::Result<RawgClient> {
    let api_key = config
        .rawg_api_key
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("RAWG_API_KEY is not set; cannot query RAWG"))?;

    RawgClient::with_base_url(
        api_key,
        config.request_timeout_secs,
        &config.user_agent,
        &config.rawg_base_url,
    )
    .map_err(|e| anyhow::anyhow!("failed to build RAWG client: {e}"))
}

pub(crate) fn cheapshark_client(config: &AppConfig) -> anyhow::Result<CheapsharkClient> {
    CheapsharkClient::with_base_url(
        config.request_timeout_secs,
        &config.user_agent,
        &config.cheapshark_base_url,
    )
    .map_err(|e| anyhow::anyhow!("failed to build CheapShark client: {e}"))
}

pub(crate) fn open_wishlist(config: &AppConfig) -> anyhow::Result<WishlistStore<FileStore>> {
    let store = FileStore::open(&config.data_dir)?;
    Ok(WishlistStore::new(store))
}

pub(crate) async fn run_search(config: &AppConfig, query: &str) -> anyhow::Result<()> {
    let query = query.trim();
    if query.is_empty() {
        tracing::info!("empty query, nothing to search");
        return Ok(());
    }

    let client = rawg_client(config)?;
    let results = client.search(query).await?;
    tracing::debug!(query, count = results.len(), "search results");
    print!("{}", render::game_list(&results));
    Ok(())
}

/// Shows one game. The deal panel degrades to a message when CheapShark
/// fails; only a RAWG failure aborts the command.
pub(crate) async fn run_game(config: &AppConfig, id: &str) -> anyhow::Result<()> {
    let rawg = rawg_client(config)?;
    let page = rawg.get_game_page(id).await?;

    let wishlist = open_wishlist(config)?;
    print!(
        "{}",
        render::game_detail(&page, wishlist.contains(page.game.id))
    );

    if page.game.name.is_empty() {
        tracing::warn!(id = page.game.id, "game has no name; skipping deal lookup");
        return Ok(());
    }

    let cheapshark = cheapshark_client(config)?;
    match cheapshark.best_deal_for_title(&page.game.name).await {
        Ok(Some(best)) => print!("{}", render::best_deal(&best)),
        Ok(None) => println!("No deals found on CheapShark."),
        Err(e) => {
            tracing::warn!(error = %e, title = %page.game.name, "deal lookup failed");
            println!("There was a problem loading deals from CheapShark.");
        }
    }

    Ok(())
}
