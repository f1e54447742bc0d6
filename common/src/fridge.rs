use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::{User, UserId};
use crate::product::Product;
use crate::timestamp::parse_timestamp;

/// How many shared-with avatars a list row shows before collapsing to `+N`.
pub const AVATAR_PREVIEW: usize = 4;

/// A product placed on a shopping list, later tracked in the fridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: u64,
    pub product: Product,
    pub quantity: u32,
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub is_checked: bool,
}

impl ShoppingItem {
    /// Parsed expiration date. Missing and malformed dates both give `None`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expiration_date.as_deref().and_then(parse_timestamp)
    }

    /// True only for a known expiration date strictly before `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|at| at < now)
    }
}

/// A named list, optionally shared with contacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: u64,
    pub name: String,
    pub owner: UserId,
    #[serde(default)]
    pub shared_with: Vec<User>,
    pub created_at: String,
    pub uuid: String,
    #[serde(default)]
    pub is_shared: bool,
    #[serde(default)]
    pub items: Vec<ShoppingItem>,
}

impl ShoppingList {
    /// Users to draw as avatars, and how many more are hidden behind `+N`.
    pub fn avatar_preview(&self) -> (&[User], usize) {
        let shown = self.shared_with.len().min(AVATAR_PREVIEW);
        (&self.shared_with[..shown], self.shared_with.len() - shown)
    }
}

/// Sort orders offered by the fridge screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FridgeSort {
    #[default]
    Name,
    DateAsc,
    DateDesc,
    Expired,
}

/// Items whose expiration date has passed.
pub fn expired_only(items: &[ShoppingItem], now: DateTime<Utc>) -> Vec<&ShoppingItem> {
    items.iter().filter(|i| i.is_expired(now)).collect()
}

/// Dated items compare by date; undated items always go last.
fn by_date(a: &ShoppingItem, b: &ShoppingItem, descending: bool) -> Ordering {
    match (a.expires_at(), b.expires_at()) {
        (Some(x), Some(y)) if descending => y.cmp(&x),
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort items in place. All orders are stable.
pub fn sort_items(items: &mut [ShoppingItem], order: FridgeSort, now: DateTime<Utc>) {
    match order {
        FridgeSort::Name => items.sort_by(|a, b| a.product.name.cmp(&b.product.name)),
        FridgeSort::DateAsc => items.sort_by(|a, b| by_date(a, b, false)),
        FridgeSort::DateDesc => items.sort_by(|a, b| by_date(a, b, true)),
        FridgeSort::Expired => items.sort_by_key(|i| !i.is_expired(now)),
    }
}
