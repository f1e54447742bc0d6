use serde::{Deserialize, Serialize};

use crate::discount::Discount;
use crate::error::SnapshotError;
use crate::price::Price;

/// Backend product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

/// Stock state reported per supplier. Anything the client does not
/// recognise is shown as out of stock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    #[default]
    #[serde(other)]
    OutOfStock,
}

impl StockStatus {
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

/// One supplier's price, stock and discount for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierOffer {
    pub supplier_name: String,
    /// Pre-discount price.
    pub price: Price,
    #[serde(default)]
    pub stock_status: StockStatus,
    #[serde(default)]
    pub discount: Option<Discount>,
    /// Price after discount, computed by the backend.
    pub final_price: Price,
    /// Set by the backend on the cheapest in-stock offer.
    #[serde(default)]
    pub is_lowest_price: bool,
}

/// A catalog entry with every supplier's offer for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "suppliers_info", default)]
    pub offers: Vec<SupplierOffer>,
}

/// Decode a product-list response body.
pub fn parse_snapshot(body: &str) -> Result<Vec<Product>, SnapshotError> {
    Ok(serde_json::from_str(body)?)
}

/// Read and decode a product-list snapshot saved to disk.
#[cfg(feature = "std")]
pub fn read_snapshot(path: impl AsRef<std::path::Path>) -> Result<Vec<Product>, SnapshotError> {
    let body = std::fs::read_to_string(path)?;
    parse_snapshot(&body)
}
