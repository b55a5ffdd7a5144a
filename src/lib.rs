//! # Gelato API Rust SDK
//!
//! A typed, async client for the Gelato print-on-demand REST API.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Named clients managed by a [`ClientRegistry`], with a process-wide
//!   default through [`initialize_client`] and [`get_client`]
//! - API key resolution from [`ClientOptions`] or the `GELATO_API_KEY`
//!   environment variable
//! - One shared HTTP transport per client that attaches the `X-API-KEY`
//!   header to every call
//! - Lazily created, memoized services for each API surface:
//!   [`OrdersApi`], [`ProductsApi`], [`ShipmentApi`] and [`EcommerceApi`]
//! - Typed request and response records for every endpoint
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gelato_api::{initialize_default_client, ClientOptions};
//! use gelato_api::services::shipment::ShipmentMethodsQuery;
//!
//! // Falls back to GELATO_API_KEY when no key is given
//! let client = initialize_default_client(ClientOptions::default())?;
//!
//! let methods = client
//!     .shipment()?
//!     .get_shipment_methods(&ShipmentMethodsQuery { country: Some("US".into()) })
//!     .await?;
//! ```
//!
//! ## Multiple Clients
//!
//! ```rust
//! use gelato_api::{ClientOptions, ClientRegistry};
//!
//! let registry = ClientRegistry::with_env_lookup(|_| None);
//! let a = registry
//!     .initialize_client(ClientOptions::builder().api_key("key-a").build(), "tenant-a")
//!     .unwrap();
//! let b = registry
//!     .initialize_client(ClientOptions::builder().api_key("key-b").build(), "tenant-b")
//!     .unwrap();
//!
//! assert_ne!(a.name(), b.name());
//! assert_eq!(registry.get_clients().len(), 2);
//! ```
//!
//! ## Routing Through a Proxy
//!
//! Set `api_host` to send every request to another origin. The path and
//! query of each endpoint are kept.
//!
//! ```rust
//! use gelato_api::{ClientOptions, GelatoClient};
//!
//! let options = ClientOptions::builder()
//!     .api_key("key")
//!     .api_host("http://localhost:8080")
//!     .build();
//! let client = GelatoClient::new(options, "proxied").unwrap();
//! assert_eq!(
//!     client.http_client().api_host().map(|h| h.origin()),
//!     Some("http://localhost:8080")
//! );
//! ```
//!
//! ## Design Principles
//!
//! - **Injectable registry**: the global registry is a convenience over an
//!   ordinary value
//! - **Fail-fast validation**: options are checked when the client is built
//! - **Thread-safe**: all types are `Send + Sync`
//! - **Async-first**: requests are plain futures, usable on any Tokio runtime

mod client;
pub mod clients;
pub mod config;
pub mod error;
mod registry;
pub mod serde_helpers;
pub mod services;
pub mod urls;

use std::sync::Arc;

pub use client::GelatoClient;
pub use config::{ApiKey, ClientOptions, ClientOptionsBuilder, HostUrl};
pub use error::{ClientError, ClientErrorCode, ConfigError};
pub use registry::{ClientRegistry, DEFAULT_CLIENT_NAME, GELATO_API_KEY_VAR};

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpResponseError, InvalidHttpRequestError, RequestOptions,
};

// Re-export services
pub use services::ecommerce::{get_ecommerce_api, EcommerceApi};
pub use services::orders::{get_orders_api, OrdersApi};
pub use services::products::{get_products_api, ProductsApi};
pub use services::shipment::{get_shipment_api, ShipmentApi};
pub use services::Service;

/// Registers a client on the global registry.
///
/// # Errors
///
/// See [`ClientRegistry::initialize_client`].
pub fn initialize_client(
    options: ClientOptions,
    name: &str,
) -> Result<Arc<GelatoClient>, ClientError> {
    ClientRegistry::global().initialize_client(options, name)
}

/// Registers the default client on the global registry.
///
/// # Errors
///
/// See [`ClientRegistry::initialize_client`].
pub fn initialize_default_client(options: ClientOptions) -> Result<Arc<GelatoClient>, ClientError> {
    ClientRegistry::global().initialize_default_client(options)
}

/// Returns a client from the global registry.
///
/// # Errors
///
/// See [`ClientRegistry::get_client`].
pub fn get_client(name: &str) -> Result<Arc<GelatoClient>, ClientError> {
    ClientRegistry::global().get_client(name)
}

/// Returns the default client from the global registry.
///
/// # Errors
///
/// Returns [`ClientError::NoClient`] if it was never registered.
pub fn get_default_client() -> Result<Arc<GelatoClient>, ClientError> {
    ClientRegistry::global().get_default_client()
}

/// Returns a snapshot of the clients in the global registry.
#[must_use]
pub fn get_clients() -> Vec<Arc<GelatoClient>> {
    ClientRegistry::global().get_clients()
}
