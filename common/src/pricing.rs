use serde::Serialize;

use crate::price::Price;
use crate::product::{StockStatus, SupplierOffer};

/// The price a product card shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPrice {
    pub supplier_name: String,
    pub display_price: Price,
    /// Pre-discount price, present only when the offer carries a discount.
    pub strike_price: Option<Price>,
    pub stock_status: StockStatus,
}

/// Pick the offer whose price represents the product.
///
/// The backend-flagged lowest-price offer wins. Without a flag the first
/// offer is used, even when it is out of stock or not the cheapest.
/// Returns `None` for an empty offer list.
pub fn select_offer(offers: &[SupplierOffer]) -> Option<&SupplierOffer> {
    offers
        .iter()
        .find(|o| o.is_lowest_price)
        .or_else(|| offers.first())
}

/// Resolve the display and strikethrough prices for a product card.
pub fn resolve_price(offers: &[SupplierOffer]) -> Option<ResolvedPrice> {
    let offer = select_offer(offers)?;
    Some(ResolvedPrice {
        supplier_name: offer.supplier_name.clone(),
        display_price: offer.final_price.clone(),
        strike_price: offer.discount.as_ref().map(|_| offer.price.clone()),
        stock_status: offer.stock_status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::{Discount, DiscountKind};

    fn offer(price: &str, lowest: bool, stock: StockStatus) -> SupplierOffer {
        SupplierOffer {
            supplier_name: format!("supplier-{price}"),
            price: Price::from(price),
            stock_status: stock,
            discount: None,
            final_price: Price::from(price),
            is_lowest_price: lowest,
        }
    }

    #[test]
    fn flagged_lowest_offer_wins() {
        let offers = vec![
            offer("10", false, StockStatus::InStock),
            offer("8", true, StockStatus::InStock),
            offer("9", false, StockStatus::InStock),
        ];
        let resolved = resolve_price(&offers).unwrap();
        assert_eq!(resolved.display_price, Price::from("8"));
        assert_eq!(resolved.supplier_name, "supplier-8");
    }

    #[test]
    fn falls_back_to_first_even_out_of_stock() {
        let offers = vec![offer("10", false, StockStatus::OutOfStock)];
        let resolved = resolve_price(&offers).unwrap();
        assert_eq!(resolved.display_price, Price::from("10"));
        assert_eq!(resolved.stock_status, StockStatus::OutOfStock);
    }

    #[test]
    fn fallback_ignores_cheaper_later_offers() {
        let offers = vec![
            offer("12", false, StockStatus::InStock),
            offer("3", false, StockStatus::InStock),
        ];
        assert_eq!(
            resolve_price(&offers).unwrap().display_price,
            Price::from("12")
        );
    }

    #[test]
    fn strike_price_only_with_discount() {
        let mut discounted = offer("10.00", true, StockStatus::InStock);
        discounted.final_price = Price::from("8.00");
        discounted.discount = Some(Discount {
            kind: DiscountKind::Fixed,
            value: "2.00".into(),
            valid_until: Some("2025-01-01T00:00:00Z".into()),
        });
        let resolved = resolve_price(&[discounted]).unwrap();
        assert_eq!(resolved.display_price, Price::from("8.00"));
        assert_eq!(resolved.strike_price, Some(Price::from("10.00")));

        let plain = resolve_price(&[offer("5", false, StockStatus::InStock)]).unwrap();
        assert!(plain.strike_price.is_none());
    }

    #[test]
    fn empty_offer_list_resolves_to_none() {
        assert!(resolve_price(&[]).is_none());
        assert!(select_offer(&[]).is_none());
    }
}
