//! Product price types.

use serde::{Deserialize, Serialize};

/// Query for listing the prices of a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuery {
    /// ISO code of the country the product is sold in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// ISO code of the price currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Required for multipage products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
}

/// The price of a product at one quantity.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub product_uid: String,
    #[serde(default)]
    pub country: String,
    pub quantity: u32,
    pub price: f64,
    #[serde(default)]
    pub currency: String,
    /// Set for multipage products only.
    #[serde(default)]
    pub page_count: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_price_list_deserializes() {
        let prices: Vec<Price> = serde_json::from_value(json!([
            { "productUid": "p", "country": "US", "quantity": 1, "price": 4.5, "currency": "USD", "pageCount": null },
            { "productUid": "p", "country": "US", "quantity": 10, "price": 40, "currency": "USD", "pageCount": 24 }
        ]))
        .unwrap();

        assert_eq!(prices.len(), 2);
        assert!(prices[0].page_count.is_none());
        assert_eq!(prices[1].page_count, Some(24));
    }
}
