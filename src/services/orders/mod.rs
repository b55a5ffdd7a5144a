//! Orders API (`https://order.gelatoapis.com/v4/`).
//!
//! Create, search, quote, patch, cancel and delete print orders.
//!
//! # Example
//!
//! ```rust,ignore
//! use gelato_api::services::orders::SearchOrdersRequest;
//!
//! let orders = client.orders()?;
//! let found = orders
//!     .get_orders(&SearchOrdersRequest {
//!         limit: Some(10),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! for order in &found.orders {
//!     println!("{} {:?}", order.id, order.fulfillment_status);
//! }
//! ```

pub mod endpoints;
mod types;

use std::sync::Arc;

use serde::de::IgnoredAny;

pub use types::*;

use crate::client::GelatoClient;
use crate::clients::{HttpClient, HttpError, RequestOptions};
use crate::error::ClientError;
use crate::services::{default_client_or, Service};

/// Client for the orders API.
#[derive(Debug, Clone)]
pub struct OrdersApi {
    http: Arc<HttpClient>,
    client_name: String,
}

impl Service for OrdersApi {
    const NAME: &'static str = "orders";

    fn new(client: &GelatoClient) -> Self {
        Self {
            http: Arc::clone(client.http_client()),
            client_name: client.name().to_string(),
        }
    }
}

impl OrdersApi {
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

    /// Searches orders. An empty filter returns the most recent orders.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_orders(
        &self,
        filter: &SearchOrdersRequest,
    ) -> Result<SearchOrdersResponse, HttpError> {
        self.http
            .post(&endpoints::orders_search_url(), Some(filter), &RequestOptions::new())
            .await
    }

    /// Fetches one order with its items, shipment and receipts.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_order(&self, order_id: &str) -> Result<Order, HttpError> {
        self.http
            .get(&endpoints::order_url(order_id), &RequestOptions::new())
            .await
    }

    /// Places a new order (or draft).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create_order(&self, data: &CreateOrderRequest) -> Result<Order, HttpError> {
        self.http
            .post(&endpoints::orders_url(), Some(data), &RequestOptions::new())
            .await
    }

    /// Updates a draft order, typically to convert it into a regular order.
    ///
    /// Only orders whose type is `draft` can be patched.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn patch_draft_order(
        &self,
        order_id: &str,
        data: &PatchOrderRequest,
    ) -> Result<Order, HttpError> {
        self.http
            .patch(&endpoints::order_url(order_id), Some(data), &RequestOptions::new())
            .await
    }

    /// Stops production and shipment of an order.
    ///
    /// Orders that are already `printed` or `shipped` cannot be canceled; the
    /// API answers those with an error status.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn cancel_order(&self, order_id: &str) -> Result<(), HttpError> {
        let _: IgnoredAny = self
            .http
            .post::<_, ()>(&endpoints::order_cancel_url(order_id), None, &RequestOptions::new())
            .await?;
        Ok(())
    }

    /// Deletes a draft order.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_draft_order(&self, order_id: &str) -> Result<(), HttpError> {
        let _: IgnoredAny = self
            .http
            .delete(&endpoints::order_url(order_id), &RequestOptions::new())
            .await?;
        Ok(())
    }

    /// Prices an order and lists the shipment methods available for it.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn quote_order(
        &self,
        data: &QuoteOrderRequest,
    ) -> Result<QuoteOrderResponse, HttpError> {
        self.http
            .post(&endpoints::order_quote_url(), Some(data), &RequestOptions::new())
            .await
    }
}

/// Returns the orders service of `client`, or of the default client when `None`.
///
/// # Errors
///
/// Returns [`ClientError::NoClient`] if no client is given and no default
/// client is registered.
pub fn get_orders_api(client: Option<&GelatoClient>) -> Result<Arc<OrdersApi>, ClientError> {
    default_client_or(client, GelatoClient::orders)
}
