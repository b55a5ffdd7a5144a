//! The [`GelatoClient`] type.
//!
//! A client bundles a name, a resolved copy of its [`ClientOptions`], one
//! shared [`HttpClient`], and a memo of the services created for it.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use gelato_api::{ClientOptions, GelatoClient};
//!
//! let client = GelatoClient::new(
//!     ClientOptions::builder().api_key("my-api-key").build(),
//!     "tenant-a",
//! )
//! .unwrap();
//!
//! let first = client.orders().unwrap();
//! let second = client.orders().unwrap();
//! assert!(Arc::ptr_eq(&first, &second));
//! ```

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;

use crate::clients::HttpClient;
use crate::config::ClientOptions;
use crate::error::ClientError;
use crate::services::ecommerce::EcommerceApi;
use crate::services::orders::OrdersApi;
use crate::services::products::ProductsApi;
use crate::services::shipment::ShipmentApi;
use crate::services::Service;

type ServiceSlot = Arc<OnceLock<Arc<dyn Any + Send + Sync>>>;
type ServiceMemo = HashMap<String, ServiceSlot>;

/// A named, configured Gelato API client.
///
/// Clients are normally created through a
/// [`ClientRegistry`](crate::ClientRegistry), which enforces unique names and
/// resolves the API key from the environment. Constructing one directly with
/// [`GelatoClient::new`] skips both.
///
/// # Thread Safety
///
/// `GelatoClient` is `Send + Sync`. Services are created at most once per
/// client even when first requested concurrently.
pub struct GelatoClient {
    name: String,
    options: ClientOptions,
    http: Arc<HttpClient>,
    services: Mutex<ServiceMemo>,
}

// Verify GelatoClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GelatoClient>();
};

impl GelatoClient {
    /// Creates a client from options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidClientName`] if `name` is empty, and
    /// [`ClientError::InvalidClientOptions`] if `api_host` or
    /// `user_agent_prefix` are malformed or the HTTP client cannot be built.
    pub fn new(options: ClientOptions, name: impl Into<String>) -> Result<Self, ClientError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ClientError::InvalidClientName { name });
        }

        let http = HttpClient::new(&options).map_err(|e| ClientError::InvalidClientOptions {
            name: name.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            name,
            options,
            http: Arc::new(http),
            services: Mutex::new(HashMap::new()),
        })
    }

    /// Returns the client name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a copy of the client's options.
    ///
    /// Modifying the returned value does not affect the client.
    #[must_use]
    pub fn options(&self) -> ClientOptions {
        self.options.clone()
    }

    /// Returns the transport shared by all services of this client.
    #[must_use]
    pub const fn http_client(&self) -> &Arc<HttpClient> {
        &self.http
    }

    /// Returns the service memoized under `name`, creating it with `factory`
    /// on first use.
    ///
    /// `factory` is called at most once per name, even when the service is
    /// first requested from several threads. It may request services stored
    /// under other names, but not the one it is building.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidService`] if `name` already holds a
    /// service of a different type.
    pub fn get_or_init_service<S, F>(&self, name: &str, factory: F) -> Result<Arc<S>, ClientError>
    where
        S: Any + Send + Sync,
        F: FnOnce(&Self) -> S,
    {
        // The map lock is released before the factory runs
        let slot = {
            let mut services = self.services.lock();
            Arc::clone(services.entry(name.to_string()).or_default())
        };

        let erased = slot.get_or_init(|| {
            let service: Arc<dyn Any + Send + Sync> = Arc::new(factory(self));
            tracing::debug!(client = %self.name, service = name, "Initialized Gelato service");
            service
        });

        Arc::clone(erased)
            .downcast::<S>()
            .map_err(|_| ClientError::InvalidService {
                service: name.to_string(),
            })
    }

    /// Returns the memoized instance of service `S`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidService`] if `S::NAME` is bound to
    /// another type.
    pub fn service<S: Service>(&self) -> Result<Arc<S>, ClientError> {
        self.get_or_init_service(S::NAME, S::new)
    }

    /// Returns the orders service.
    ///
    /// # Errors
    ///
    /// See [`service`](Self::service).
    pub fn orders(&self) -> Result<Arc<OrdersApi>, ClientError> {
        self.service()
    }

    /// Returns the products service.
    ///
    /// # Errors
    ///
    /// See [`service`](Self::service).
    pub fn products(&self) -> Result<Arc<ProductsApi>, ClientError> {
        self.service()
    }

    /// Returns the shipment service.
    ///
    /// # Errors
    ///
    /// See [`service`](Self::service).
    pub fn shipment(&self) -> Result<Arc<ShipmentApi>, ClientError> {
        self.service()
    }

    /// Returns the e-commerce service.
    ///
    /// # Errors
    ///
    /// See [`service`](Self::service).
    pub fn ecommerce(&self) -> Result<Arc<EcommerceApi>, ClientError> {
        self.service()
    }

    /// Names of the services created so far, sorted.
    #[must_use]
    pub fn initialized_services(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .services
            .lock()
            .iter()
            .filter(|(_, slot)| slot.get().is_some())
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names
    }
}

impl fmt::Debug for GelatoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GelatoClient")
            .field("name", &self.name)
            .field("options", &self.options)
            .field("services", &self.initialized_services())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn create_test_client() -> GelatoClient {
        GelatoClient::new(ClientOptions::builder().api_key("test-key").build(), "test").unwrap()
    }

    #[test]
    fn test_new_rejects_empty_name() {
        let result = GelatoClient::new(ClientOptions::default(), "");
        assert!(matches!(result, Err(ClientError::InvalidClientName { .. })));
    }

    #[test]
    fn test_new_rejects_malformed_api_host() {
        let options = ClientOptions::builder()
            .api_key("test-key")
            .api_host("localhost:8080")
            .build();
        let error = GelatoClient::new(options, "proxy").unwrap_err();

        assert!(matches!(
            &error,
            ClientError::InvalidClientOptions { name, .. } if name == "proxy"
        ));
        assert_eq!(error.prefixed_code(), "client/invalid-client-options");
    }

    #[test]
    fn test_options_returns_independent_copy() {
        let client = create_test_client();
        let mut options = client.options();
        options.api_key = Some("changed".to_string());

        assert_eq!(client.options().api_key.as_deref(), Some("test-key"));
    }

    #[test]
    fn test_service_factory_runs_once() {
        let client = create_test_client();
        let calls = AtomicUsize::new(0);

        let first = client
            .get_or_init_service("counter", |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                42_u32
            })
            .unwrap();
        let second = client
            .get_or_init_service("counter", |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                7_u32
            })
            .unwrap();

        assert_eq!(*first, 42);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_service_name_bound_to_other_type_fails() {
        let client = create_test_client();
        client.get_or_init_service("orders", |_| 1_u8).unwrap();

        let error = client.orders().unwrap_err();
        assert!(matches!(
            error,
            ClientError::InvalidService { ref service } if service == "orders"
        ));
    }

    #[test]
    fn test_typed_accessors_are_memoized_and_share_transport() {
        let client = create_test_client();

        let orders = client.orders().unwrap();
        assert!(Arc::ptr_eq(&orders, &client.orders().unwrap()));
        let products = client.products().unwrap();
        let shipment = client.shipment().unwrap();
        let ecommerce = client.ecommerce().unwrap();

        assert_eq!(orders.client_name(), "test");
        assert_eq!(products.client_name(), "test");
        assert!(Arc::ptr_eq(orders.http_client(), client.http_client()));
        assert!(Arc::ptr_eq(products.http_client(), client.http_client()));
        assert!(Arc::ptr_eq(shipment.http_client(), client.http_client()));
        assert!(Arc::ptr_eq(ecommerce.http_client(), client.http_client()));
        assert_eq!(
            client.initialized_services(),
            vec!["ecommerce", "orders", "products", "shipment"]
        );
    }

    // ========================================================================
    // Nested service construction
    // ========================================================================

    #[test]
    fn test_factory_can_request_other_services() {
        let client = Arc::new(create_test_client());
        let (tx, rx) = std::sync::mpsc::channel();

        let worker = Arc::clone(&client);
        std::thread::spawn(move || {
            let outer = worker.get_or_init_service("outer", |cl| {
                let orders = cl.orders().unwrap();
                orders.client_name().len()
            });
            tx.send(outer.map(|v| *v)).ok();
        });

        let outer = rx
            .recv_timeout(std::time::Duration::from_secs(5))
            .expect("nested service lookup did not complete");
        assert_eq!(outer.unwrap(), "test".len());
        assert_eq!(client.initialized_services(), vec!["orders", "outer"]);
    }

    #[test]
    fn test_nested_lookup_returns_memoized_instance() {
        let client = create_test_client();
        let orders = client.orders().unwrap();

        let seen = client
            .get_or_init_service("wrapper", |cl| cl.orders().unwrap())
            .unwrap();

        assert!(Arc::ptr_eq(&orders, &*seen));
    }

    #[test]
    fn test_debug_masks_api_key() {
        let client = create_test_client();
        let debug_str = format!("{client:?}");
        assert!(debug_str.contains("GelatoClient"));
        assert!(!debug_str.contains("test-key"));
    }
}
