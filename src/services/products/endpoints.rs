//! URLs of the product API (`v3`).

use crate::urls::{combine_urls, encode_id};

/// Root of the product API.
pub const PRODUCTS_API_ROOT: &str = "https://product.gelatoapis.com/v3/";

/// `catalogs`
#[must_use]
pub fn catalogs_url() -> String {
    combine_urls(PRODUCTS_API_ROOT, "catalogs")
}

/// `catalogs/{id}`
#[must_use]
pub fn catalog_url(catalog_id: &str) -> String {
    combine_urls(&catalogs_url(), &encode_id(catalog_id))
}

/// `catalogs/{id}/products:search`
#[must_use]
pub fn catalog_products_url(catalog_id: &str) -> String {
    combine_urls(&catalog_url(catalog_id), "products:search")
}

/// `products/{id}`
#[must_use]
pub fn product_url(product_id: &str) -> String {
    combine_urls(
        &combine_urls(PRODUCTS_API_ROOT, "products"),
        &encode_id(product_id),
    )
}

/// `products/{id}/prices`
#[must_use]
pub fn product_prices_url(product_id: &str) -> String {
    combine_urls(&product_url(product_id), "prices")
}

/// `products/{id}/cover-dimensions`
#[must_use]
pub fn product_cover_dimensions_url(product_id: &str) -> String {
    combine_urls(&product_url(product_id), "cover-dimensions")
}

/// `stock/region-availability`
#[must_use]
pub fn stock_availability_url() -> String {
    combine_urls(
        &combine_urls(PRODUCTS_API_ROOT, "stock"),
        "region-availability",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_urls() {
        assert_eq!(catalogs_url(), "https://product.gelatoapis.com/v3/catalogs");
        assert_eq!(
            catalog_url("posters"),
            "https://product.gelatoapis.com/v3/catalogs/posters"
        );
        assert_eq!(
            catalog_products_url("posters"),
            "https://product.gelatoapis.com/v3/catalogs/posters/products:search"
        );
    }

    #[test]
    fn test_product_urls() {
        let uid = "cards_pf_a5_pt_350-gsm";
        assert_eq!(
            product_url(uid),
            "https://product.gelatoapis.com/v3/products/cards_pf_a5_pt_350-gsm"
        );
        assert_eq!(
            product_prices_url(uid),
            "https://product.gelatoapis.com/v3/products/cards_pf_a5_pt_350-gsm/prices"
        );
        assert_eq!(
            product_cover_dimensions_url(uid),
            "https://product.gelatoapis.com/v3/products/cards_pf_a5_pt_350-gsm/cover-dimensions"
        );
    }

    #[test]
    fn test_stock_availability_url() {
        assert_eq!(
            stock_availability_url(),
            "https://product.gelatoapis.com/v3/stock/region-availability"
        );
    }
}
