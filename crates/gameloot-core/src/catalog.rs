use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A game as presented by the metadata service, normalized for display.
///
/// An immutable snapshot of a single fetch; nothing here is persisted except
/// the subset copied into a [`crate::WishlistEntry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: i64,
    pub name: String,
    /// URL slug, e.g. `"the-witcher-3-wild-hunt"`. Empty when not supplied.
    pub slug: String,
    /// Cover image URL, or an empty string when the service has none.
    pub image: String,
    pub rating: Option<f64>,
    pub genres: Vec<String>,
    pub platforms: Vec<String>,
    pub release_date: Option<NaiveDate>,
    /// Plain-text description. HTML descriptions are passed through as-is
    /// when no plain-text variant exists.
    pub description_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screenshot {
    pub id: Option<i64>,
    pub image: String,
}

/// Everything a game detail view needs from the metadata service.
#[derive(Debug, Clone, PartialEq)]
pub struct GamePage {
    pub game: CatalogItem,
    pub screenshots: Vec<Screenshot>,
}
