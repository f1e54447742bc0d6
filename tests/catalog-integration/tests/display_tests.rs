use chrono::Duration;
use pantry_catalog_integration::{fixture_now, product_list};
use pantry_common::countdown::CountdownTier;
use pantry_common::discount::{evaluate_offers, select_display_discount, DiscountStatus};
use pantry_common::display::DisplayBoard;
use pantry_common::price::Price;
use pantry_common::pricing::resolve_price;
use pantry_common::product::{ProductId, StockStatus};

#[test]
fn board_for_fixture_snapshot() {
    let products = product_list();
    let board = DisplayBoard::compute(&products, fixture_now());
    assert_eq!(board.len(), 6);

    // Later active discount beats the earlier expired one; price still comes
    // from the flagged offer.
    let milk = board.get(ProductId(101)).unwrap();
    assert_eq!(milk.display_price, Some(Price::from("2.80")));
    assert_eq!(milk.strike_price, Some(Price::from("3.50")));
    assert_eq!(milk.discount_badge_text.as_deref(), Some("-$0.40"));
    assert_eq!(milk.countdown_text.as_deref(), Some("1 day, 2 hours"));
    assert_eq!(milk.countdown_tier, Some(CountdownTier::Critical));

    let cheddar = board.get(ProductId(102)).unwrap();
    assert_eq!(cheddar.display_price, Some(Price::from("6.90")));
    assert_eq!(cheddar.countdown_text.as_deref(), Some("Expired"));
    assert_eq!(cheddar.countdown_tier, Some(CountdownTier::Neutral));

    let bread = board.get(ProductId(103)).unwrap();
    assert_eq!(bread.countdown_text.as_deref(), Some("10 days"));
    assert_eq!(bread.countdown_tier, Some(CountdownTier::Normal));
    assert_eq!(bread.discount_badge_text.as_deref(), Some("10% OFF"));

    assert!(board.get(ProductId(104)).unwrap().is_empty());
}

#[test]
fn first_discounted_offer_reported_once_everything_expires() {
    let products = product_list();
    let later = fixture_now() + Duration::hours(26);
    let board = DisplayBoard::compute(&products, later);

    let milk = board.get(ProductId(101)).unwrap();
    assert_eq!(milk.discount_badge_text.as_deref(), Some("20% OFF"));
    assert_eq!(milk.countdown_text.as_deref(), Some("Expired"));

    let picked = select_display_discount(&products[0].offers, later).unwrap();
    assert_eq!(picked.index, 1);
    assert_eq!(picked.offer.supplier_name, "Small");
}

#[test]
fn countdown_tightens_as_time_passes() {
    let products = product_list();
    let tier_at = |hours: i64| {
        DisplayBoard::compute(&products, fixture_now() + Duration::hours(hours))
            .get(ProductId(101))
            .and_then(|b| b.countdown_tier)
    };
    assert_eq!(tier_at(0), Some(CountdownTier::Critical));
    assert_eq!(tier_at(2), Some(CountdownTier::Normal)); // exactly "1 day"
    assert_eq!(tier_at(23), Some(CountdownTier::Warning));
    assert_eq!(tier_at(30), Some(CountdownTier::Neutral));
}

#[test]
fn evaluator_reports_every_discounted_offer() {
    let products = product_list();
    let statuses = evaluate_offers(&products[0].offers, fixture_now());
    let indices: Vec<usize> = statuses.iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![1, 2]);
    assert_eq!(statuses[0].status, DiscountStatus::Expired);
    assert_eq!(
        statuses[1].status,
        DiscountStatus::Active {
            remaining: Duration::hours(26)
        }
    );
}

#[test]
fn unflagged_product_falls_back_to_first_offer() {
    let products = product_list();
    let resolved = resolve_price(&products[1].offers).unwrap();
    assert_eq!(resolved.supplier_name, "Ramstore");
    assert_eq!(resolved.stock_status, StockStatus::OutOfStock);
    assert!(resolve_price(&products[3].offers).is_none());
}

#[test]
fn discount_without_end_shows_expired() {
    let products = product_list();
    let board = DisplayBoard::compute(&products, fixture_now());

    let yogurt = board.get(ProductId(105)).unwrap();
    assert_eq!(yogurt.display_price, Some(Price::from("2.00")));
    assert_eq!(yogurt.discount_badge_text.as_deref(), Some("-$0.50"));
    assert_eq!(yogurt.countdown_text.as_deref(), Some("Expired"));
    assert_eq!(yogurt.countdown_tier, Some(CountdownTier::Neutral));

    let butter = board.get(ProductId(106)).unwrap();
    assert_eq!(butter.discount_badge_text.as_deref(), Some("15% OFF"));
    assert_eq!(butter.countdown_text.as_deref(), Some("Expired"));
    assert_eq!(butter.countdown_tier, Some(CountdownTier::Neutral));
}
