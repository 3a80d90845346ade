use rust_decimal::Decimal;

use super::*;

fn deal(id: &str, sale: Option<&str>) -> DealRecord {
    DealRecord {
        deal_id: id.to_owned(),
        title: "Hollow Knight".to_owned(),
        sale_price: sale.and_then(parse_decimal),
        normal_price: None,
        savings_percent: None,
        store_id: "1".to_owned(),
        game_id: Some("42".to_owned()),
    }
}

fn dec(raw: &str) -> Decimal {
    parse_decimal(raw).expect("valid decimal literal")
}

// -----------------------------------------------------------------------
// parse_decimal
// -----------------------------------------------------------------------

#[test]
fn parse_decimal_accepts_plain_and_padded_values() {
    assert_eq!(parse_decimal("19.99"), Some(Decimal::new(1999, 2)));
    assert_eq!(parse_decimal("  4.5 "), Some(Decimal::new(45, 1)));
    assert_eq!(parse_decimal("0"), Some(Decimal::ZERO));
}

#[test]
fn parse_decimal_accepts_scientific_notation() {
    assert_eq!(parse_decimal("1.5e1"), Some(Decimal::new(15, 0)));
}

#[test]
fn parse_decimal_rejects_garbage() {
    assert_eq!(parse_decimal(""), None);
    assert_eq!(parse_decimal("free"), None);
    assert_eq!(parse_decimal("NaN"), None);
}

// -----------------------------------------------------------------------
// select_best_deal
// -----------------------------------------------------------------------

#[test]
fn select_best_deal_picks_global_minimum() {
    let deals = vec![
        deal("a", Some("19.99")),
        deal("b", Some("9.99")),
        deal("c", Some("14.99")),
    ];
    let best = select_best_deal(&deals).unwrap();
    assert_eq!(best.deal_id, "b");
}

#[test]
fn select_best_deal_first_occurrence_wins_on_tie() {
    let deals = vec![
        deal("a", Some("19.99")),
        deal("b", Some("9.99")),
        deal("c", Some("9.99")),
    ];
    let best = select_best_deal(&deals).unwrap();
    assert!(std::ptr::eq(best, &deals[1]));
}

#[test]
fn select_best_deal_tie_compares_numerically_not_textually() {
    let deals = vec![deal("a", Some("9.990")), deal("b", Some("9.99"))];
    assert_eq!(select_best_deal(&deals).unwrap().deal_id, "a");
}

#[test]
fn select_best_deal_never_picks_unpriced_when_priced_exists() {
    let deals = vec![
        deal("unpriced", None),
        deal("garbage", Some("n/a")),
        deal("priced", Some("59.99")),
    ];
    assert_eq!(select_best_deal(&deals).unwrap().deal_id, "priced");
}

#[test]
fn select_best_deal_all_unpriced_returns_first() {
    let deals = vec![deal("x", None), deal("y", None)];
    assert_eq!(select_best_deal(&deals).unwrap().deal_id, "x");
}

#[test]
fn select_best_deal_free_game_beats_paid() {
    let deals = vec![deal("paid", Some("4.99")), deal("free", Some("0.00"))];
    assert_eq!(select_best_deal(&deals).unwrap().deal_id, "free");
}

#[test]
fn select_best_deal_empty_is_invalid_argument() {
    let err = select_best_deal(&[]).unwrap_err();
    assert!(matches!(err, CoreError::InvalidArgument(_)));
}

// -----------------------------------------------------------------------
// effective_savings_percent
// -----------------------------------------------------------------------

#[test]
fn savings_derived_from_prices() {
    let mut d = deal("a", Some("25"));
    d.normal_price = Some(dec("50"));
    d.savings_percent = Some(dec("10"));
    assert_eq!(effective_savings_percent(&d), 50);
}

#[test]
fn savings_rounds_half_away_from_zero() {
    let mut d = deal("a", Some("12.50"));
    d.normal_price = Some(dec("20"));
    assert_eq!(effective_savings_percent(&d), 38); // 37.5
}

#[test]
fn savings_zero_normal_price_falls_back_to_upstream() {
    let mut d = deal("a", Some("25"));
    d.normal_price = Some(Decimal::ZERO);
    d.savings_percent = Some(dec("37.512506"));
    assert_eq!(effective_savings_percent(&d), 38);
}

#[test]
fn savings_absent_normal_price_falls_back_to_upstream() {
    let mut d = deal("a", Some("25"));
    d.savings_percent = Some(dec("12.2"));
    assert_eq!(effective_savings_percent(&d), 12);
}

#[test]
fn savings_no_data_reports_zero() {
    let d = deal("a", Some("25"));
    assert_eq!(effective_savings_percent(&d), 0);
}

#[test]
fn savings_free_sale_is_full_discount() {
    let mut d = deal("a", Some("0"));
    d.normal_price = Some(dec("19.99"));
    assert_eq!(effective_savings_percent(&d), 100);
}

#[test]
fn savings_markup_clamps_to_zero() {
    let mut d = deal("a", Some("30"));
    d.normal_price = Some(dec("20"));
    assert_eq!(effective_savings_percent(&d), 0);
}

#[test]
fn savings_out_of_range_upstream_value_is_clamped() {
    let mut d = deal("a", None);
    d.savings_percent = Some(dec("250"));
    assert_eq!(effective_savings_percent(&d), 100);
}
