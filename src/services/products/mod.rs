//! Product API (`https://product.gelatoapis.com/v3/`).
//!
//! Browse catalogs, search and inspect products, and look up prices, cover
//! dimensions and regional stock.
//!
//! # Example
//!
//! ```rust,ignore
//! use gelato_api::services::products::ProductSearchFilter;
//!
//! let products = client.products()?;
//! let catalogs = products.get_catalogs().await?;
//! let first = &catalogs.data[0];
//!
//! let found = products
//!     .get_products(&first.catalog_uid, &ProductSearchFilter::default().limit(3))
//!     .await?;
//! ```

mod catalog;
mod cover_dimensions;
pub mod endpoints;
mod prices;
mod product;
mod stock_availability;

use std::sync::Arc;

pub use catalog::{
    Catalog, CatalogDetail, CatalogList, CatalogProductAttribute, CatalogProductAttributeValue,
    Pagination,
};
pub use cover_dimensions::{CoverDimensions, CoverDimensionsQuery, DimensionAttribute};
pub use prices::{Price, PriceQuery};
pub use product::{
    AttributeFilterValue, FilterHits, MeasureUnit, Product, ProductDetail, ProductSearchFilter,
    ProductSearchResponse,
};
pub use stock_availability::{
    Availability, AvailabilityStatus, ProductAvailability, StockAvailabilityRequest,
    StockAvailabilityResponse,
};

use crate::client::GelatoClient;
use crate::clients::{HttpClient, HttpError, RequestOptions};
use crate::error::ClientError;
use crate::services::{default_client_or, Service};

/// Client for the product API.
#[derive(Debug, Clone)]
pub struct ProductsApi {
    http: Arc<HttpClient>,
    client_name: String,
}

impl Service for ProductsApi {
    const NAME: &'static str = "products";

    fn new(client: &GelatoClient) -> Self {
        Self {
            http: Arc::clone(client.http_client()),
            client_name: client.name().to_string(),
        }
    }
}

impl ProductsApi {
    /// Name of the client this service belongs to.
    #[must_use]
    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    /// Returns the transport this service sends requests through.
    #[must_use]
    pub const fn http_client(&self) -> &Arc<HttpClient> {
        &self.http
    }

    /// Lists the available catalogs.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_catalogs(&self) -> Result<CatalogList, HttpError> {
        self.http
            .get(&endpoints::catalogs_url(), &RequestOptions::new())
            .await
    }

    /// Fetches a catalog with the attributes its products vary by.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_catalog(&self, catalog_id: &str) -> Result<CatalogDetail, HttpError> {
        self.http
            .get(&endpoints::catalog_url(catalog_id), &RequestOptions::new())
            .await
    }

    /// Searches the products of a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_products(
        &self,
        catalog_id: &str,
        filter: &ProductSearchFilter,
    ) -> Result<ProductSearchResponse, HttpError> {
        self.http
            .post(
                &endpoints::catalog_products_url(catalog_id),
                Some(filter),
                &RequestOptions::new(),
            )
            .await
    }

    /// Fetches one product.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_product(&self, product_id: &str) -> Result<ProductDetail, HttpError> {
        self.http
            .get(&endpoints::product_url(product_id), &RequestOptions::new())
            .await
    }

    /// Lists the prices of a product for every quantity.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_product_prices(
        &self,
        product_id: &str,
        query: &PriceQuery,
    ) -> Result<Vec<Price>, HttpError> {
        let options = RequestOptions::query_from(query)?;
        self.http
            .get(&endpoints::product_prices_url(product_id), &options)
            .await
    }

    /// Fetches the cover dimensions of a multipage product.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_cover_dimensions(
        &self,
        product_id: &str,
        query: &CoverDimensionsQuery,
    ) -> Result<CoverDimensions, HttpError> {
        let options = RequestOptions::query_from(query)?;
        self.http
            .get(&endpoints::product_cover_dimensions_url(product_id), &options)
            .await
    }

    /// Checks the regional stock of stockable products.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_stock_availability<S: AsRef<str>>(
        &self,
        product_ids: &[S],
    ) -> Result<StockAvailabilityResponse, HttpError> {
        let body = StockAvailabilityRequest {
            products: product_ids.iter().map(|id| id.as_ref().to_string()).collect(),
        };
        self.http
            .post(
                &endpoints::stock_availability_url(),
                Some(&body),
                &RequestOptions::new(),
            )
            .await
    }
}

/// Returns the products service of `client`, or of the default client when `None`.
///
/// # Errors
///
/// Returns [`ClientError::NoClient`] if no client is given and no default
/// client is registered.
pub fn get_products_api(client: Option<&GelatoClient>) -> Result<Arc<ProductsApi>, ClientError> {
    default_client_or(client, GelatoClient::products)
}
