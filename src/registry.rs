//! The client registry.
//!
//! A [`ClientRegistry`] maps unique, non-empty names to [`GelatoClient`]
//! instances. Clients are registered once and live as long as the registry.
//!
//! # Overview
//!
//! Most applications use the process-wide registry through the crate-root
//! functions ([`initialize_client`](crate::initialize_client),
//! [`get_client`](crate::get_client), ...). Tests and multi-tenant hosts can
//! construct their own registry, optionally with an injected environment
//! lookup so `GELATO_API_KEY` can be controlled without touching the process
//! environment.
//!
//! # Example
//!
//! ```rust
//! use gelato_api::{ClientOptions, ClientRegistry};
//!
//! let registry = ClientRegistry::with_env_lookup(|_| Some("key-from-env".to_string()));
//! let client = registry
//!     .initialize_default_client(ClientOptions::default())
//!     .unwrap();
//!
//! assert_eq!(client.options().api_key.as_deref(), Some("key-from-env"));
//! assert!(registry.get_client("other").is_err());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::client::GelatoClient;
use crate::config::ClientOptions;
use crate::error::ClientError;

/// Name of the client used when none is given.
pub const DEFAULT_CLIENT_NAME: &str = "[DEFAULT]";

/// Environment variable consulted when no API key is configured.
pub const GELATO_API_KEY_VAR: &str = "GELATO_API_KEY";

type EnvLookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// A registry of named Gelato clients.
pub struct ClientRegistry {
    clients: RwLock<HashMap<String, Arc<GelatoClient>>>,
    env_lookup: EnvLookup,
}

// Verify ClientRegistry is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientRegistry>();
};

impl ClientRegistry {
    /// Creates an empty registry reading the process environment.
    #[must_use]
    pub fn new() -> Self {
        Self::with_env_lookup(|name| std::env::var(name).ok())
    }

    /// Creates an empty registry with a custom environment lookup.
    #[must_use]
    pub fn with_env_lookup(
        lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            clients: RwLock::new(HashMap::new()),
            env_lookup: Box::new(lookup),
        }
    }

    /// Returns the process-wide registry, creating it on first use.
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<ClientRegistry> = OnceLock::new();
        GLOBAL.get_or_init(Self::new)
    }

    /// Registers a new client under `name`.
    ///
    /// When `options.api_key` is `None`, the key is read from
    /// `GELATO_API_KEY`. An explicit key, even an empty one, is kept as is.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidClientName`] if `name` is empty
    /// - [`ClientError::DuplicateClient`] if `name` is already registered
    /// - [`ClientError::NoApiKey`] if no non-empty key could be resolved
    /// - [`ClientError::InvalidClientOptions`] if the options are malformed
    pub fn initialize_client(
        &self,
        mut options: ClientOptions,
        name: &str,
    ) -> Result<Arc<GelatoClient>, ClientError> {
        if name.is_empty() {
            return Err(ClientError::InvalidClientName {
                name: name.to_string(),
            });
        }

        let mut clients = self.clients.write();
        if clients.contains_key(name) {
            return Err(ClientError::DuplicateClient {
                name: name.to_string(),
            });
        }

        if options.api_key.is_none() {
            options.api_key = (self.env_lookup)(GELATO_API_KEY_VAR);
        }
        if options.api_key.as_deref().map_or(true, str::is_empty) {
            return Err(ClientError::NoApiKey);
        }

        let client = Arc::new(GelatoClient::new(options, name)?);
        clients.insert(name.to_string(), Arc::clone(&client));
        tracing::debug!(client = name, "Registered Gelato client");
        Ok(client)
    }

    /// Registers the default client.
    ///
    /// # Errors
    ///
    /// See [`initialize_client`](Self::initialize_client).
    pub fn initialize_default_client(
        &self,
        options: ClientOptions,
    ) -> Result<Arc<GelatoClient>, ClientError> {
        self.initialize_client(options, DEFAULT_CLIENT_NAME)
    }

    /// Returns the client registered under `name`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidClientName`] if `name` is empty
    /// - [`ClientError::NoClient`] if nothing is registered under `name`
    pub fn get_client(&self, name: &str) -> Result<Arc<GelatoClient>, ClientError> {
        if name.is_empty() {
            return Err(ClientError::InvalidClientName {
                name: name.to_string(),
            });
        }

        self.clients
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| ClientError::NoClient {
                name: name.to_string(),
            })
    }

    /// Returns the default client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NoClient`] if it was never registered.
    pub fn get_default_client(&self) -> Result<Arc<GelatoClient>, ClientError> {
        self.get_client(DEFAULT_CLIENT_NAME)
    }

    /// Returns a snapshot of all registered clients, in no particular order.
    #[must_use]
    pub fn get_clients(&self) -> Vec<Arc<GelatoClient>> {
        self.clients.read().values().cloned().collect()
    }
}

impl Default for ClientRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ClientRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<String> = self.clients.read().keys().cloned().collect();
        names.sort();
        f.debug_struct("ClientRegistry")
            .field("clients", &names)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientErrorCode;

    fn registry_without_env() -> ClientRegistry {
        ClientRegistry::with_env_lookup(|_| None)
    }

    fn options_with_key() -> ClientOptions {
        ClientOptions::builder().api_key("test-key").build()
    }

    #[test]
    fn test_initialize_and_get_return_same_instance() {
        let registry = registry_without_env();
        let created = registry.initialize_client(options_with_key(), "a").unwrap();
        let fetched = registry.get_client("a").unwrap();

        assert!(Arc::ptr_eq(&created, &fetched));
        assert_eq!(fetched.name(), "a");
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let registry = registry_without_env();
        let error = registry.initialize_client(options_with_key(), "").unwrap_err();
        assert!(error.has_code(ClientErrorCode::InvalidClientName));

        let error = registry.get_client("").unwrap_err();
        assert!(error.has_code(ClientErrorCode::InvalidClientName));
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let registry = registry_without_env();
        registry.initialize_default_client(options_with_key()).unwrap();
        registry.initialize_client(options_with_key(), "named").unwrap();

        let default_error = registry
            .initialize_default_client(options_with_key())
            .unwrap_err();
        let named_error = registry
            .initialize_client(options_with_key(), "named")
            .unwrap_err();

        assert!(default_error.has_code(ClientErrorCode::DuplicateClient));
        assert!(named_error.has_code(ClientErrorCode::DuplicateClient));
        assert_ne!(default_error.to_string(), named_error.to_string());
    }

    #[test]
    fn test_api_key_falls_back_to_environment() {
        let registry = ClientRegistry::with_env_lookup(|name| {
            (name == GELATO_API_KEY_VAR).then(|| "env-key".to_string())
        });
        let client = registry
            .initialize_default_client(ClientOptions::default())
            .unwrap();

        assert_eq!(client.options().api_key.as_deref(), Some("env-key"));
    }

    #[test]
    fn test_explicit_key_is_not_replaced_by_environment() {
        let registry = ClientRegistry::with_env_lookup(|_| Some("env-key".to_string()));
        let client = registry
            .initialize_default_client(options_with_key())
            .unwrap();
        assert_eq!(client.options().api_key.as_deref(), Some("test-key"));

        let error = registry
            .initialize_client(ClientOptions::builder().api_key("").build(), "empty")
            .unwrap_err();
        assert_eq!(error, ClientError::NoApiKey);
    }

    #[test]
    fn test_missing_key_fails_and_registers_nothing() {
        let registry = registry_without_env();
        let error = registry
            .initialize_default_client(ClientOptions::default())
            .unwrap_err();

        assert_eq!(error.prefixed_code(), "client/no-api-key");
        assert!(registry.get_clients().is_empty());
    }

    #[test]
    fn test_failed_options_do_not_register_client() {
        let registry = registry_without_env();
        let options = ClientOptions::builder()
            .api_key("k")
            .api_host("nope")
            .build();

        assert!(registry.initialize_client(options, "bad").is_err());
        assert!(registry
            .get_client("bad")
            .unwrap_err()
            .has_code(ClientErrorCode::NoClient));
        assert!(registry.initialize_client(options_with_key(), "bad").is_ok());
    }

    #[test]
    fn test_get_clients_is_a_snapshot() {
        let registry = registry_without_env();
        registry.initialize_client(options_with_key(), "one").unwrap();
        registry.initialize_client(options_with_key(), "two").unwrap();

        let mut snapshot = registry.get_clients();
        assert_eq!(snapshot.len(), 2);
        snapshot.clear();

        assert_eq!(registry.get_clients().len(), 2);
    }

    #[test]
    fn test_missing_default_client_message() {
        let registry = registry_without_env();
        let error = registry.get_default_client().unwrap_err();
        assert!(error
            .to_string()
            .starts_with("The default Gelato client does not exist."));
    }
}
