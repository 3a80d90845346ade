//! Maps raw CheapShark deal objects onto [`DealRecord`].
//!
//! Depending on the endpoint, CheapShark names the sale price `salePrice`,
//! `price` or `dealPrice`, and the list price `normalPrice`, `retailPrice` or
//! `msrp`; values may be JSON strings or numbers. This is the only place that
//! knows about those variations.

use gameloot_core::{parse_decimal, DealRecord};
use rust_decimal::Decimal;
use serde_json::Value;

const SALE_PRICE_FIELDS: &[&str] = &["salePrice", "price", "dealPrice"];
const NORMAL_PRICE_FIELDS: &[&str] = &["normalPrice", "retailPrice", "msrp"];

/// Normalizes one raw deal object. Returns `None` if `raw` is not an object.
#[must_use]
pub fn normalize_deal(raw: &Value) -> Option<DealRecord> {
    if !raw.is_object() {
        return None;
    }

    Some(DealRecord {
        deal_id: text_field(raw, &["dealID"]).unwrap_or_default(),
        title: text_field(raw, &["title", "external"]).unwrap_or_default(),
        sale_price: decimal_field(raw, SALE_PRICE_FIELDS),
        normal_price: decimal_field(raw, NORMAL_PRICE_FIELDS),
        savings_percent: decimal_field(raw, &["savings"]),
        store_id: text_field(raw, &["storeID"]).unwrap_or_default(),
        game_id: text_field(raw, &["gameID"]),
    })
}

/// Normalizes a list of raw deals, skipping entries that are not objects.
#[must_use]
pub fn normalize_deals(raw: &[Value]) -> Vec<DealRecord> {
    raw.iter().filter_map(normalize_deal).collect()
}

/// First non-null value among `names`.
fn first_present<'a>(raw: &'a Value, names: &[&str]) -> Option<&'a Value> {
    names
        .iter()
        .filter_map(|name| raw.get(*name))
        .find(|v| !v.is_null())
}

fn text_field(raw: &Value, names: &[&str]) -> Option<String> {
    match first_present(raw, names)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// The first present field decides; an unparsable value is `None` rather than
/// falling through to the next name.
fn decimal_field(raw: &Value, names: &[&str]) -> Option<Decimal> {
    match first_present(raw, names)? {
        Value::String(s) => parse_decimal(s),
        Value::Number(n) => parse_decimal(&n.to_string()),
        _ => None,
    }
}
