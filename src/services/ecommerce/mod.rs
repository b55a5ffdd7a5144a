//! E-commerce API (`https://ecommerce.gelatoapis.com/v1/`).
//!
//! Manage the products of stores connected to Gelato and create new ones from
//! templates.
//!
//! # Example
//!
//! ```rust,ignore
//! use gelato_api::services::ecommerce::StoreProductListQuery;
//!
//! let ecommerce = client.ecommerce()?;
//! let list = ecommerce
//!     .get_products("store-id", &StoreProductListQuery::default())
//!     .await?;
//! ```

pub mod endpoints;
mod products;
mod templates;

use std::sync::Arc;

pub use products::*;
pub use templates::*;

use crate::client::GelatoClient;
use crate::clients::{HttpClient, HttpError, RequestOptions};
use crate::error::ClientError;
use crate::services::{default_client_or, Service};

/// Client for the e-commerce API.
#[derive(Debug, Clone)]
pub struct EcommerceApi {
    http: Arc<HttpClient>,
    client_name: String,
}

impl Service for EcommerceApi {
    const NAME: &'static str = "ecommerce";

    fn new(client: &GelatoClient) -> Self {
        Self {
            http: Arc::clone(client.http_client()),
            client_name: client.name().to_string(),
        }
    }
}

impl EcommerceApi {
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

    /// Lists the products of a store.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_products(
        &self,
        store_id: &str,
        query: &StoreProductListQuery,
    ) -> Result<StoreProductList, HttpError> {
        let options = RequestOptions::query_from(query)?;
        self.http
            .get(&endpoints::store_products_url(store_id), &options)
            .await
    }

    /// Fetches one product of a store.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_product(
        &self,
        store_id: &str,
        product_id: &str,
    ) -> Result<StoreProduct, HttpError> {
        self.http
            .get(
                &endpoints::store_product_url(store_id, product_id),
                &RequestOptions::new(),
            )
            .await
    }

    /// Creates a store product from a template.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create_product_from_template(
        &self,
        store_id: &str,
        data: &CreateProductFromTemplateRequest,
    ) -> Result<CreatedStoreProduct, HttpError> {
        self.http
            .post(
                &endpoints::create_from_template_url(store_id),
                Some(data),
                &RequestOptions::new(),
            )
            .await
    }

    /// Fetches a template with its variants and image placeholders.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_template(&self, template_id: &str) -> Result<Template, HttpError> {
        self.http
            .get(&endpoints::template_url(template_id), &RequestOptions::new())
            .await
    }
}

/// Returns the e-commerce service of `client`, or of the default client when `None`.
///
/// # Errors
///
/// Returns [`ClientError::NoClient`] if no client is given and no default
/// client is registered.
pub fn get_ecommerce_api(client: Option<&GelatoClient>) -> Result<Arc<EcommerceApi>, ClientError> {
    default_client_or(client, GelatoClient::ecommerce)
}
