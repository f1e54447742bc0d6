use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::product::SupplierOffer;
use crate::timestamp::parse_timestamp;

/// How a discount's `value` is applied by the backend. Anything other
/// than a percentage is shown as a fixed amount off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountKind {
    Percentage,
    #[serde(other)]
    Fixed,
}

/// A supplier discount as delivered by the backend.
///
/// Only the end of the window is known to the client; there is no start
/// bound to check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    #[serde(rename = "type")]
    pub kind: DiscountKind,
    pub value: String,
    /// Raw end-of-window timestamp. Kept unparsed, and optional, so a bad
    /// or missing value only affects this discount and never the whole
    /// snapshot.
    #[serde(default)]
    pub valid_until: Option<String>,
}

impl Discount {
    /// End of the discount window, or `None` when the backend sent
    /// nothing or something unparseable.
    pub fn valid_until(&self) -> Option<DateTime<Utc>> {
        self.valid_until.as_deref().and_then(parse_timestamp)
    }

    /// Badge text for a product card: `20% OFF` or `-$1.50`.
    pub fn badge_text(&self) -> String {
        let value = self.value.trim();
        match self.kind {
            DiscountKind::Percentage => format!("{value}% OFF"),
            DiscountKind::Fixed => format!("-${value}"),
        }
    }
}

/// Whether a discount still applies at the evaluation instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountStatus {
    Active { remaining: Duration },
    Expired,
}

impl DiscountStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, DiscountStatus::Active { .. })
    }
}

/// The evaluated discount of one offer, with the offer's position in the
/// product's supplier list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OfferDiscount<'a> {
    pub index: usize,
    pub offer: &'a SupplierOffer,
    pub discount: &'a Discount,
    pub status: DiscountStatus,
}

/// Evaluate a single discount against `now`.
///
/// A window ending exactly at `now` is already expired. A malformed
/// or missing `valid_until` is treated as expired.
pub fn evaluate_discount(discount: &Discount, now: DateTime<Utc>) -> DiscountStatus {
    let Some(end) = discount.valid_until() else {
        tracing::debug!(
            valid_until = ?discount.valid_until,
            "unparseable discount end, treating as expired"
        );
        return DiscountStatus::Expired;
    };
    let remaining = end - now;
    if remaining > Duration::zero() {
        DiscountStatus::Active { remaining }
    } else {
        DiscountStatus::Expired
    }
}

/// Evaluate every offer that carries a discount, in list order.
/// Offers without a discount produce no entry.
pub fn evaluate_offers(offers: &[SupplierOffer], now: DateTime<Utc>) -> Vec<OfferDiscount<'_>> {
    offers
        .iter()
        .enumerate()
        .filter_map(|(index, offer)| {
            let discount = offer.discount.as_ref()?;
            Some(OfferDiscount {
                index,
                offer,
                discount,
                status: evaluate_discount(discount, now),
            })
        })
        .collect()
}

/// Pick the one discount a product card shows.
///
/// The first offer in list order with an active discount wins. If none is
/// active, the first offer with any discount is reported as expired. Price
/// plays no part in the choice.
pub fn select_display_discount(
    offers: &[SupplierOffer],
    now: DateTime<Utc>,
) -> Option<OfferDiscount<'_>> {
    let evaluated = evaluate_offers(offers, now);
    evaluated
        .iter()
        .find(|d| d.status.is_active())
        .or_else(|| evaluated.first())
        .copied()
}

/// True when at least one offer has a discount that is still running.
pub fn has_active_discount(offers: &[SupplierOffer], now: DateTime<Utc>) -> bool {
    offers
        .iter()
        .filter_map(|o| o.discount.as_ref())
        .any(|d| evaluate_discount(d, now).is_active())
}
