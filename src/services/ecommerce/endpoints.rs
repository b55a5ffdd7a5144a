//! URLs of the e-commerce API (`v1`).

use crate::urls::{combine_urls, encode_id};

/// Root of the e-commerce API.
pub const ECOMMERCE_API_ROOT: &str = "https://ecommerce.gelatoapis.com/v1/";

/// `stores/{store}/products`
#[must_use]
pub fn store_products_url(store_id: &str) -> String {
    let store = combine_urls(
        &combine_urls(ECOMMERCE_API_ROOT, "stores"),
        &encode_id(store_id),
    );
    combine_urls(&store, "products")
}

/// `stores/{store}/products/{id}`
#[must_use]
pub fn store_product_url(store_id: &str, product_id: &str) -> String {
    combine_urls(&store_products_url(store_id), &encode_id(product_id))
}

/// `stores/{store}/products:create-from-template`
#[must_use]
pub fn create_from_template_url(store_id: &str) -> String {
    format!("{}:create-from-template", store_products_url(store_id))
}

/// `templates/{id}`
#[must_use]
pub fn template_url(template_id: &str) -> String {
    combine_urls(
        &combine_urls(ECOMMERCE_API_ROOT, "templates"),
        &encode_id(template_id),
    )
}
