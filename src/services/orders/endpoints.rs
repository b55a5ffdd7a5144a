//! URLs of the orders API (`v4`).

use crate::urls::{combine_urls, encode_id};

/// Root of the orders API.
pub const ORDERS_API_ROOT: &str = "https://order.gelatoapis.com/v4/";

/// `orders`
#[must_use]
pub fn orders_url() -> String {
    combine_urls(ORDERS_API_ROOT, "orders")
}

/// `orders:search`
#[must_use]
pub fn orders_search_url() -> String {
    combine_urls(ORDERS_API_ROOT, "orders:search")
}

/// `orders:quote`
#[must_use]
pub fn order_quote_url() -> String {
    combine_urls(ORDERS_API_ROOT, "orders:quote")
}

/// `orders/{id}`
#[must_use]
pub fn order_url(order_id: &str) -> String {
    combine_urls(&orders_url(), &encode_id(order_id))
}

/// `orders/{id}:cancel`
#[must_use]
pub fn order_cancel_url(order_id: &str) -> String {
    format!("{}:cancel", order_url(order_id))
}
