//! Configuration types for the Gelato API SDK.
//!
//! This module provides the options a [`GelatoClient`](crate::GelatoClient) is
//! built from, and the validated newtypes those options are checked against.
//!
//! # Overview
//!
//! - [`ClientOptions`]: The raw, user-facing options for one client
//! - [`ClientOptionsBuilder`]: A fluent builder for [`ClientOptions`]
//! - [`ApiKey`]: A validated API key with masked debug output
//! - [`HostUrl`]: A validated origin that all requests are redirected to
//!
//! Every field of [`ClientOptions`] is optional. A missing `api_key` is
//! resolved from the `GELATO_API_KEY` environment variable when the client is
//! registered; a missing `api_host` means requests go straight to the Gelato
//! API roots.
//!
//! # Example
//!
//! ```rust
//! use gelato_api::ClientOptions;
//!
//! let options = ClientOptions::builder()
//!     .api_key("my-api-key")
//!     .user_agent_prefix("MyShop/1.0")
//!     .build();
//!
//! assert_eq!(options.api_key.as_deref(), Some("my-api-key"));
//! assert!(options.api_host.is_none());
//! ```

mod newtypes;

pub use newtypes::{ApiKey, HostUrl};

use std::fmt;

use crate::error::ClientError;
use crate::registry::GELATO_API_KEY_VAR;

/// Options for a single Gelato client.
///
/// The fields are public so callers can use struct-update syntax; the
/// [`builder`](Self::builder) covers the same ground fluently. Validation
/// happens when a client is built from these options, not here.
///
/// # Thread Safety
///
/// `ClientOptions` is `Clone`, `Send`, and `Sync`. Clients hand out copies via
/// [`GelatoClient::options`](crate::GelatoClient::options), so modifying a
/// returned value never affects the client it came from.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ClientOptions {
    /// The API key sent as `X-API-KEY`.
    pub api_key: Option<String>,
    /// Origin override for every request, e.g. a proxy or a mock server.
    pub api_host: Option<String>,
    /// Text prepended to the SDK's `User-Agent` header.
    pub user_agent_prefix: Option<String>,
}

impl ClientOptions {
    /// Creates a new builder for constructing `ClientOptions`.
    #[must_use]
    pub fn builder() -> ClientOptionsBuilder {
        ClientOptionsBuilder::new()
    }

    /// Loads options from the process environment.
    ///
    /// Only `GELATO_API_KEY` is read. An unset or non-unicode variable leaves
    /// `api_key` as `None`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env), but requires a non-empty key.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NoApiKey`] when `GELATO_API_KEY` is unset or
    /// empty.
    pub fn try_from_env() -> Result<Self, ClientError> {
        Self::try_from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_key: lookup(GELATO_API_KEY_VAR),
            ..Self::default()
        }
    }

    fn try_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let options = Self::from_lookup(lookup);
        if options.api_key.as_deref().map_or(true, str::is_empty) {
            return Err(ClientError::NoApiKey);
        }
        Ok(options)
    }

    /// Returns the API key as a validated newtype, if one is set and non-empty.
    #[must_use]
    pub fn validated_api_key(&self) -> Option<ApiKey> {
        self.api_key.as_deref().and_then(|key| ApiKey::new(key).ok())
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("api_key", &self.api_key.as_ref().map(|_| "*****"))
            .field("api_host", &self.api_host)
            .field("user_agent_prefix", &self.user_agent_prefix)
            .finish()
    }
}

// Verify ClientOptions is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientOptions>();
};

/// Builder for constructing [`ClientOptions`] instances.
///
/// # Defaults
///
/// - `api_key`: `None` (falls back to `GELATO_API_KEY` at registration)
/// - `api_host`: `None`
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use gelato_api::ClientOptions;
///
/// let options = ClientOptions::builder()
///     .api_key("key")
///     .api_host("http://127.0.0.1:8080")
///     .build();
///
/// assert_eq!(options.api_host.as_deref(), Some("http://127.0.0.1:8080"));
/// ```
#[derive(Debug, Default)]
pub struct ClientOptionsBuilder {
    options: ClientOptions,
}

impl ClientOptionsBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.options.api_key = Some(key.into());
        self
    }

    /// Sets the origin all requests are sent to.
    #[must_use]
    pub fn api_host(mut self, host: impl Into<String>) -> Self {
        self.options.api_host = Some(host.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClientOptions`].
    #[must_use]
    pub fn build(self) -> ClientOptions {
        self.options
    }
}
