use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::countdown::{format_countdown, CountdownTier};
use crate::discount::select_display_discount;
use crate::price::Price;
use crate::pricing::resolve_price;
use crate::product::{Product, ProductId};

/// Everything a product card needs to draw its price and discount area.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayBundle {
    pub display_price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike_price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_badge_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countdown_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countdown_tier: Option<CountdownTier>,
}

impl DisplayBundle {
    /// Build the bundle for one product at `now`.
    ///
    /// A product with no offers yields an empty bundle.
    pub fn for_product(product: &Product, now: DateTime<Utc>) -> Self {
        let mut bundle = DisplayBundle::default();

        if let Some(resolved) = resolve_price(&product.offers) {
            bundle.display_price = Some(resolved.display_price);
            bundle.strike_price = resolved.strike_price;
        }

        if let Some(picked) = select_display_discount(&product.offers, now) {
            let countdown = format_countdown(picked.status);
            bundle.discount_badge_text = Some(picked.discount.badge_text());
            bundle.countdown_text = Some(countdown.text);
            bundle.countdown_tier = Some(countdown.tier);
        }

        bundle
    }

    pub fn is_empty(&self) -> bool {
        *self == DisplayBundle::default()
    }
}

/// Display state for a whole screen, rebuilt from scratch on every tick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DisplayBoard {
    bundles: BTreeMap<ProductId, DisplayBundle>,
}

impl DisplayBoard {
    pub fn compute(products: &[Product], now: DateTime<Utc>) -> Self {
        let bundles = products
            .iter()
            .map(|p| (p.id, DisplayBundle::for_product(p, now)))
            .collect();
        DisplayBoard { bundles }
    }

    /// Compute against the wall clock.
    #[cfg(feature = "std")]
    pub fn compute_now(products: &[Product]) -> Self {
        Self::compute(products, Utc::now())
    }

    pub fn get(&self, id: ProductId) -> Option<&DisplayBundle> {
        self.bundles.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ProductId, &DisplayBundle)> {
        self.bundles.iter()
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}
