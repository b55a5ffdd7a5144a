//! HTTP client types for Gelato API communication.
//!
//! This module provides the transport layer shared by every service of a
//! [`GelatoClient`](crate::GelatoClient). It attaches authentication headers,
//! encodes JSON bodies and query strings, and decodes typed JSON responses.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`RequestOptions`]: Per-request headers and query parameters
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, DELETE)
//! - [`HttpError`]: Everything that can go wrong on the wire
//!
//! # Example
//!
//! ```rust,ignore
//! use gelato_api::clients::{HttpClient, RequestOptions};
//! use gelato_api::ClientOptions;
//!
//! let client = HttpClient::new(&ClientOptions::builder().api_key("key").build())?;
//! let options = RequestOptions::new().query_param("country", "US");
//!
//! let methods: serde_json::Value = client
//!     .get("https://shipment.gelatoapis.com/v1/shipment-methods", &options)
//!     .await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. Each call is sent once and its failure, if any, is returned as-is.

mod errors;
mod http_client;
mod http_request;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, API_KEY_HEADER, SDK_VERSION};
pub use http_request::{HttpMethod, RequestOptions};
