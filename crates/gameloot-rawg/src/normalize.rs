//! Normalization of RAWG API types into [`gameloot_core`] domain types.

use chrono::NaiveDate;
use gameloot_core::{CatalogItem, Screenshot};

use crate::types::{RawgGame, RawgScreenshot};

/// Parses a `"YYYY-MM-DD"` date string into a [`NaiveDate`].
///
/// Returns `None` if the string does not match the expected format.
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Converts a [`RawgGame`] into a [`CatalogItem`].
///
/// Empty names, genres and platforms are dropped. The plain-text description
/// is preferred over the HTML one.
#[must_use]
pub fn normalize_game(game: RawgGame) -> CatalogItem {
    let genres = game
        .genres
        .unwrap_or_default()
        .into_iter()
        .filter_map(|g| g.name)
        .filter(|name| !name.is_empty())
        .collect();

    let platforms = game
        .platforms
        .unwrap_or_default()
        .into_iter()
        .filter_map(|p| p.platform.and_then(|inner| inner.name))
        .filter(|name| !name.is_empty())
        .collect();

    let description_text = non_empty(game.description_raw).or_else(|| non_empty(game.description));

    CatalogItem {
        id: game.id,
        name: game.name.unwrap_or_default(),
        slug: game.slug.unwrap_or_default(),
        image: game.background_image.unwrap_or_default(),
        rating: game.rating,
        genres,
        platforms,
        release_date: game.released.as_deref().and_then(parse_date),
        description_text,
    }
}

#[must_use]
pub fn normalize_screenshot(shot: RawgScreenshot) -> Screenshot {
    Screenshot {
        id: shot.id,
        image: shot.image,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_from(json: serde_json::Value) -> RawgGame {
        serde_json::from_value(json).expect("fixture should deserialize")
    }

    #[test]
    fn normalize_game_maps_nested_fields() {
        let game = game_from(serde_json::json!({
            "id": 3498,
            "slug": "grand-theft-auto-v",
            "name": "Grand Theft Auto V",
            "background_image": "https://media.rawg.io/gta5.jpg",
            "rating": 4.47,
            "released": "2013-09-17",
            "genres": [{ "id": 4, "name": "Action" }, { "id": 3, "name": "Adventure" }],
            "platforms": [
                { "platform": { "id": 4, "name": "PC" } },
                { "platform": { "id": 187, "name": "PlayStation 5" } }
            ],
            "description": "<p>Rockstar Games went bigger</p>",
            "description_raw": "Rockstar Games went bigger"
        }));

        let item = normalize_game(game);
        assert_eq!(item.id, 3498);
        assert_eq!(item.name, "Grand Theft Auto V");
        assert_eq!(item.image, "https://media.rawg.io/gta5.jpg");
        assert_eq!(item.genres, vec!["Action", "Adventure"]);
        assert_eq!(item.platforms, vec!["PC", "PlayStation 5"]);
        assert_eq!(item.release_date, NaiveDate::from_ymd_opt(2013, 9, 17));
        assert_eq!(
            item.description_text.as_deref(),
            Some("Rockstar Games went bigger")
        );
    }

    #[test]
    fn normalize_game_handles_nulls() {
        let game = game_from(serde_json::json!({
            "id": 1,
            "name": null,
            "background_image": null,
            "rating": null,
            "released": null,
            "genres": null,
            "platforms": null
        }));

        let item = normalize_game(game);
        assert_eq!(item.name, "");
        assert_eq!(item.image, "");
        assert!(item.rating.is_none());
        assert!(item.release_date.is_none());
        assert!(item.genres.is_empty());
        assert!(item.platforms.is_empty());
        assert!(item.description_text.is_none());
    }

    #[test]
    fn normalize_game_falls_back_to_html_description() {
        let game = game_from(serde_json::json!({
            "id": 1,
            "description": "<p>Only HTML</p>",
            "description_raw": ""
        }));
        assert_eq!(
            normalize_game(game).description_text.as_deref(),
            Some("<p>Only HTML</p>")
        );
    }

    #[test]
    fn normalize_game_skips_platform_without_name() {
        let game = game_from(serde_json::json!({
            "id": 1,
            "platforms": [{ "platform": null }, { "platform": { "name": "Xbox One" } }]
        }));
        assert_eq!(normalize_game(game).platforms, vec!["Xbox One"]);
    }

    #[test]
    fn parse_date_rejects_partial_dates() {
        assert!(parse_date("2013").is_none());
        assert!(parse_date("TBA").is_none());
    }
}
