//! Shipment API (`https://shipment.gelatoapis.com/v1/`).
//!
//! # Example
//!
//! ```rust,ignore
//! use gelato_api::services::shipment::ShipmentMethodsQuery;
//!
//! let methods = client
//!     .shipment()?
//!     .get_shipment_methods(&ShipmentMethodsQuery {
//!         country: Some("DE".to_string()),
//!     })
//!     .await?;
//! ```

pub mod endpoints;
mod types;

use std::sync::Arc;

pub use types::*;

use crate::client::GelatoClient;
use crate::clients::{HttpClient, HttpError, RequestOptions};
use crate::error::ClientError;
use crate::services::{default_client_or, Service};

/// Client for the shipment API.
#[derive(Debug, Clone)]
pub struct ShipmentApi {
    http: Arc<HttpClient>,
    client_name: String,
}

impl Service for ShipmentApi {
    const NAME: &'static str = "shipment";

    fn new(client: &GelatoClient) -> Self {
        Self {
            http: Arc::clone(client.http_client()),
            client_name: client.name().to_string(),
        }
    }
}

impl ShipmentApi {
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

    /// Lists the shipment methods Gelato provides, optionally per destination country.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_shipment_methods(
        &self,
        filter: &ShipmentMethodsQuery,
    ) -> Result<ShipmentMethodsResponse, HttpError> {
        let options = RequestOptions::query_from(filter)?;
        self.http
            .get(&endpoints::shipment_methods_url(), &options)
            .await
    }
}

/// Returns the shipment service of `client`, or of the default client when `None`.
///
/// # Errors
///
/// Returns [`ClientError::NoClient`] if no client is given and no default
/// client is registered.
pub fn get_shipment_api(client: Option<&GelatoClient>) -> Result<Arc<ShipmentApi>, ClientError> {
    default_client_or(client, GelatoClient::shipment)
}
