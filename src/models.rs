//! Frontend Models
//!
//! Product records and category labels.

use serde::{Deserialize, Serialize};

/// Selection value meaning "no filtering"
pub const ALL_CATEGORIES: &str = "All";

/// Category buttons, in display order (sentinel first)
pub const CATEGORIES: &[&str] = &[ALL_CATEGORIES, "Sneakers", "Running", "Casual", "Sports", "High-top"];

/// Product record; serializes with camelCase keys (`originalPrice`, `isNew`, `isSale`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: u32,
    /// Pre-discount price, only set for discounted items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u32>,
    pub image: String,
    pub category: String,
    /// 0.0 ..= 5.0
    pub rating: f32,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_sale: bool,
}
