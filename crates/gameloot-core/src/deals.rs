//! Deal records and best-deal selection.
//!
//! Prices are [`Decimal`]s. Upstream price fields that are missing or fail to
//! parse are carried as `None` and never win a price comparison.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Label used when a store id cannot be resolved to a name.
pub const UNKNOWN_STORE: &str = "Unknown store";

/// One price quote for a title at one storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealRecord {
    pub deal_id: String,
    pub title: String,
    pub sale_price: Option<Decimal>,
    pub normal_price: Option<Decimal>,
    /// Savings percentage as reported upstream, e.g. `37.512506`.
    pub savings_percent: Option<Decimal>,
    pub store_id: String,
    pub game_id: Option<String>,
}

/// The winning deal for a title, with its store resolved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestDeal {
    pub deal: DealRecord,
    pub store_name: String,
    pub savings_percent: u32,
}

/// Parses a decimal price such as `"19.99"`, `"0"` or `"1.5e1"`.
///
/// Returns `None` for empty or unparsable input.
#[must_use]
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Returns the deal with the lowest sale price.
///
/// Exact ties keep the earliest record in input order. Records without a
/// sale price lose to any priced record; if none are priced the first record
/// is returned.
///
/// # Errors
///
/// Returns [`CoreError::InvalidArgument`] when `deals` is empty.
pub fn select_best_deal(deals: &[DealRecord]) -> Result<&DealRecord, CoreError> {
    let (first, rest) = deals.split_first().ok_or_else(|| {
        CoreError::InvalidArgument("cannot select a best deal from an empty list".to_string())
    })?;

    let best = rest
        .iter()
        .fold(first, |best, candidate| match (candidate.sale_price, best.sale_price) {
            (Some(price), Some(best_price)) if price < best_price => candidate,
            (Some(_), None) => candidate,
            _ => best,
        });

    Ok(best)
}

/// Savings for `deal` as a whole percentage in `0..=100`.
///
/// Derived from the sale and normal prices when both are present and the
/// normal price is positive; otherwise the upstream savings figure is used;
/// otherwise `0`.
#[must_use]
pub fn effective_savings_percent(deal: &DealRecord) -> u32 {
    let derived = match (deal.sale_price, deal.normal_price) {
        (Some(sale), Some(normal)) if normal > Decimal::ZERO => normal
            .checked_sub(sale)
            .and_then(|diff| diff.checked_mul(Decimal::ONE_HUNDRED))
            .and_then(|scaled| scaled.checked_div(normal)),
        _ => None,
    };

    derived.or(deal.savings_percent).map_or(0, whole_percent)
}

fn whole_percent(value: Decimal) -> u32 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
        .to_u32()
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "deals_test.rs"]
mod tests;
