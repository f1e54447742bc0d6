use chrono::{DateTime, TimeZone, Utc};
use pantry_common::product::{parse_snapshot, Product};

/// Product-list response captured from the backend, with a mix of active,
/// expired, malformed, absent-end and null-end discounts, plus a product
/// with no offers.
pub const PRODUCT_LIST: &str = include_str!("../fixtures/product_list.json");

pub fn product_list() -> Vec<Product> {
    parse_snapshot(PRODUCT_LIST).expect("fixture should parse")
}

/// Evaluation instant the fixture's windows are laid out around.
pub fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}
