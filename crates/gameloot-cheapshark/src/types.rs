//! CheapShark API response types.
//!
//! CheapShark sends ids and prices as strings, but not consistently, so id
//! fields accept either a JSON string or number.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// A title match from `/games?title=`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealsGame {
    #[serde(rename = "gameID", deserialize_with = "string_or_number")]
    pub game_id: String,
    /// Display title, e.g. `"LEGO Batman"`.
    #[serde(default)]
    pub external: Option<String>,
    #[serde(rename = "internalName", default)]
    pub internal_name: Option<String>,
    /// Lowest current price as a decimal string.
    #[serde(default)]
    pub cheapest: Option<String>,
    #[serde(rename = "cheapestDealID", default)]
    pub cheapest_deal_id: Option<String>,
    #[serde(default)]
    pub thumb: Option<String>,
}

impl DealsGame {
    #[must_use]
    pub fn cheapest_price(&self) -> Option<Decimal> {
        self.cheapest
            .as_deref()
            .and_then(gameloot_core::parse_decimal)
    }
}

/// One row of `/stores`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreInfo {
    #[serde(rename = "storeID", deserialize_with = "string_or_number")]
    pub store_id: String,
    #[serde(rename = "storeName")]
    pub store_name: String,
    #[serde(rename = "isActive", default)]
    pub is_active: Option<i64>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
