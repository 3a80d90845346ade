//! RAWG API response types.
//!
//! Only the fields gameloot reads are modelled; everything else in the
//! payload is ignored. RAWG sends `null` for many list fields, so lists are
//! `Option<Vec<_>>` and flattened during normalization.

use serde::Deserialize;

/// Paginated list envelope used by `/games` and `/games/{id}/screenshots`.
#[derive(Debug, Deserialize)]
pub struct RawgPage<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// A game as returned by search results and by `/games/{id}`.
///
/// Search results omit the description fields.
#[derive(Debug, Deserialize)]
pub struct RawgGame {
    pub id: i64,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    /// Release date in `"YYYY-MM-DD"` format.
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub genres: Option<Vec<RawgNamed>>,
    #[serde(default)]
    pub platforms: Option<Vec<RawgPlatformEntry>>,
    /// HTML description.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_raw: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawgNamed {
    #[serde(default)]
    pub name: Option<String>,
}

/// Platforms are nested one level: `{ "platform": { "name": "PC" } }`.
#[derive(Debug, Deserialize)]
pub struct RawgPlatformEntry {
    #[serde(default)]
    pub platform: Option<RawgNamed>,
}

#[derive(Debug, Deserialize)]
pub struct RawgScreenshot {
    #[serde(default)]
    pub id: Option<i64>,
    pub image: String,
}
