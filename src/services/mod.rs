//! Service types for the Gelato API resource groups.
//!
//! Each service is bound to one [`GelatoClient`] and created lazily the first
//! time it is requested, then memoized for the client's lifetime.
//!
//! # Overview
//!
//! - [`orders::OrdersApi`]: `https://order.gelatoapis.com/v4/`
//! - [`products::ProductsApi`]: `https://product.gelatoapis.com/v3/`
//! - [`shipment::ShipmentApi`]: `https://shipment.gelatoapis.com/v1/`
//! - [`ecommerce::EcommerceApi`]: `https://ecommerce.gelatoapis.com/v1/`
//!
//! Every service method builds exactly one URL and issues exactly one request.
//!
//! # Example
//!
//! ```rust,ignore
//! use gelato_api::{initialize_default_client, ClientOptions};
//! use gelato_api::services::shipment::get_shipment_api;
//!
//! initialize_default_client(ClientOptions::builder().api_key("key").build())?;
//!
//! // Uses the default client
//! let shipment = get_shipment_api(None)?;
//! ```

pub mod ecommerce;
pub mod orders;
pub mod products;
pub mod shipment;

use std::sync::Arc;

use crate::client::GelatoClient;
use crate::error::ClientError;
use crate::registry::ClientRegistry;

/// A service that can be memoized on a [`GelatoClient`].
///
/// `NAME` is the key of the client's service memo, so it must be unique per
/// service type. [`new`](Self::new) may request other services from the same
/// client, but not `Self`.
pub trait Service: Send + Sync + Sized + 'static {
    /// Memo key of this service.
    const NAME: &'static str;

    /// Builds the service for `client`.
    fn new(client: &GelatoClient) -> Self;
}

/// Applies `get` to `client`, or to the global default client when `None`.
pub(crate) fn default_client_or<S, F>(
    client: Option<&GelatoClient>,
    get: F,
) -> Result<Arc<S>, ClientError>
where
    F: FnOnce(&GelatoClient) -> Result<Arc<S>, ClientError>,
{
    match client {
        Some(client) => get(client),
        None => get(&*ClientRegistry::global().get_default_client()?),
    }
}
