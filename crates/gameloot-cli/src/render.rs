//! Plain-text rendering for terminal output. Every function returns the
//! text so it can be tested without capturing stdout.

use std::fmt::Write as _;

use gameloot_cheapshark::redirect_url;
use gameloot_core::{BestDeal, CatalogItem, DealRecord, GamePage, WishlistEntry};
use rust_decimal::Decimal;

const NOT_AVAILABLE: &str = "N/A";

pub(crate) fn format_price(price: Option<Decimal>) -> String {
    price.map_or_else(|| "Unknown price".to_string(), |p| format!("${p:.2}"))
}

fn join_or_na(values: &[String]) -> String {
    if values.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        values.join(", ")
    }
}

pub(crate) fn game_list(games: &[CatalogItem]) -> String {
    if games.is_empty() {
        return "No games found. Try another search.\n".to_string();
    }

    let mut out = String::new();
    for game in games {
        let rating = game
            .rating
            .map_or_else(|| NOT_AVAILABLE.to_string(), |r| r.to_string());
        let _ = writeln!(out, "[{}] {}  (rating: {rating})", game.id, game.name);
    }
    out
}

pub(crate) fn game_detail(page: &GamePage, in_wishlist: bool) -> String {
    let game = &page.game;
    let released = game
        .release_date
        .map_or_else(|| "Unknown release date".to_string(), |d| d.to_string());

    let mut out = String::new();
    let _ = writeln!(out, "{}", game.name);
    let _ = writeln!(
        out,
        "Released: {released} | Genres: {} | Platforms: {}",
        join_or_na(&game.genres),
        join_or_na(&game.platforms)
    );
    if !game.image.is_empty() {
        let _ = writeln!(out, "Cover: {}", game.image);
    }
    let _ = writeln!(
        out,
        "Wishlist: {}",
        if in_wishlist { "saved" } else { "not saved" }
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}",
        game.description_text
            .as_deref()
            .unwrap_or("No description available.")
    );
    let _ = writeln!(out);

    if page.screenshots.is_empty() {
        let _ = writeln!(out, "No screenshots available.");
    } else {
        let _ = writeln!(out, "Screenshots:");
        for shot in &page.screenshots {
            let _ = writeln!(out, "  {}", shot.image);
        }
    }
    out
}

pub(crate) fn best_deal(best: &BestDeal) -> String {
    let deal = &best.deal;
    let normal = deal
        .normal_price
        .map_or_else(|| "Unknown".to_string(), |p| format!("${p:.2}"));

    let mut out = String::new();
    let _ = writeln!(out, "Store: {}", best.store_name);
    let _ = writeln!(
        out,
        "Sale Price: {} (Normal: {normal})",
        format_price(deal.sale_price)
    );
    let _ = writeln!(out, "You save: {}%", best.savings_percent);
    let _ = writeln!(out, "{}", redirect_url(&deal.deal_id));
    out
}

pub(crate) fn deal_card(deal: &DealRecord, store_name: &str) -> String {
    let title = if deal.title.is_empty() {
        "Unknown game"
    } else {
        deal.title.as_str()
    };

    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "  Store: {store_name}");
    let _ = writeln!(
        out,
        "  Sale: {} (Normal: {})",
        format_price(deal.sale_price),
        format_price(deal.normal_price)
    );
    let _ = writeln!(
        out,
        "  You save: {}%",
        gameloot_core::effective_savings_percent(deal)
    );
    let _ = writeln!(out, "  {}", redirect_url(&deal.deal_id));
    out
}

pub(crate) fn wishlist(entries: &[WishlistEntry]) -> String {
    if entries.is_empty() {
        return "Your wishlist is empty. Search for games and add some!\n".to_string();
    }

    let mut out = String::new();
    for entry in entries {
        let name = if entry.name.is_empty() {
            "(untitled)"
        } else {
            entry.name.as_str()
        };
        let _ = writeln!(out, "[{}] {name}", entry.id);
    }
    out
}
