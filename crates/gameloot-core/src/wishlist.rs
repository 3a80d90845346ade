use serde::{Deserialize, Deserializer, Serialize};

use crate::CatalogItem;

/// A saved title in the wishlist document.
///
/// Only `id` is required when reading; every other field falls back to an
/// empty string or `None`, including when the stored value is `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistEntry {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Older documents stored the cover under `background_image`.
    #[serde(default, alias = "background_image", deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
}

impl WishlistEntry {
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: String::new(),
            rating: None,
            slug: String::new(),
        }
    }
}

impl From<&CatalogItem> for WishlistEntry {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            image: item.image.clone(),
            rating: item.rating,
            slug: item.slug.clone(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
