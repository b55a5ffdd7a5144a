//! Regional stock availability types.

use serde::{Deserialize, Serialize};

/// Body of a stock availability call.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StockAvailabilityRequest {
    /// Product UIDs to check.
    pub products: Vec<String>,
}

/// Stock state of a product in one region.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AvailabilityStatus {
    InStock,
    OutOfStockReplenishable,
    OutOfStock,
    NonStockable,
    NotSupported,
    /// A value this SDK does not know yet.
    #[serde(other)]
    Unknown,
}

/// Availability of a product in one stock region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub stock_region_uid: String,
    pub status: AvailabilityStatus,
    /// Expected restock date, for replenishable products.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replenishment_date: Option<String>,
}

/// Availability of one product across regions.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductAvailability {
    pub product_uid: String,
    #[serde(default)]
    pub availability: Vec<Availability>,
}

/// Result of a stock availability call.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StockAvailabilityResponse {
    #[serde(default)]
    pub products_availability: Vec<ProductAvailability>,
}
