//! Error types for the Gelato API SDK.
//!
//! This module contains the client lifecycle errors raised by the registry and
//! by client construction, plus the configuration errors raised by validated
//! newtypes.
//!
//! # Error Codes
//!
//! Every [`ClientError`] carries a namespaced code of the form
//! `"client/<code>"`, e.g. `"client/no-api-key"`. Use [`ClientError::code`]
//! to match on the kind without parsing strings.
//!
//! # Example
//!
//! ```rust
//! use gelato_api::{ClientError, ClientErrorCode};
//!
//! let error = ClientError::NoClient { name: "tenant-a".to_string() };
//! assert_eq!(error.code(), ClientErrorCode::NoClient);
//! assert_eq!(error.prefixed_code(), "client/no-client");
//! ```

use std::fmt;

use thiserror::Error;

use crate::registry::DEFAULT_CLIENT_NAME;

/// Error kinds for client lifecycle failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClientErrorCode {
    /// No API key could be resolved.
    NoApiKey,
    /// No client is registered under the requested name.
    NoClient,
    /// The client name is empty.
    InvalidClientName,
    /// The client options could not be turned into a working client.
    InvalidClientOptions,
    /// A client is already registered under the requested name.
    DuplicateClient,
    /// A service name is already bound to a different service type.
    InvalidService,
}

impl ClientErrorCode {
    /// Returns the un-prefixed code string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoApiKey => "no-api-key",
            Self::NoClient => "no-client",
            Self::InvalidClientName => "invalid-client-name",
            Self::InvalidClientOptions => "invalid-client-options",
            Self::DuplicateClient => "duplicate-client",
            Self::InvalidService => "invalid-service",
        }
    }
}

impl fmt::Display for ClientErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while registering, looking up or building Gelato clients.
///
/// These errors are returned synchronously by the call that detects them.
/// Transport failures are never wrapped in this type; see
/// [`HttpError`](crate::clients::HttpError).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The client name is empty.
    #[error("Invalid Gelato client name \"{name}\" provided. Client name must be a non-empty string.")]
    InvalidClientName {
        /// The rejected name.
        name: String,
    },

    /// A client with this name already exists.
    #[error("{}", duplicate_client_message(name))]
    DuplicateClient {
        /// The name that is already registered.
        name: String,
    },

    /// Neither the options nor the environment provided an API key.
    #[error("No Gelato API key found. Provide `api_key` in the client options or set the GELATO_API_KEY environment variable.")]
    NoApiKey,

    /// No client is registered under this name.
    #[error("{}", no_client_message(name))]
    NoClient {
        /// The name that was looked up.
        name: String,
    },

    /// The options passed for a client are malformed.
    #[error("Invalid Gelato client options passed to initialize_client() for the client named \"{name}\": {reason}")]
    InvalidClientOptions {
        /// The client being constructed.
        name: String,
        /// What was wrong with the options.
        reason: String,
    },

    /// The service name is bound to another type on this client.
    #[error("Service \"{service}\" is already initialized on this client with a different type.")]
    InvalidService {
        /// The conflicting service name.
        service: String,
    },
}

fn duplicate_client_message(name: &str) -> String {
    if name == DEFAULT_CLIENT_NAME {
        "The default Gelato client already exists. This means you called initialize_client() \
         more than once without providing a client name. In most cases you only need to \
         initialize the client once. If you do want multiple clients, give each one a unique name."
            .to_string()
    } else {
        format!(
            "Gelato client named \"{name}\" already exists. This means you called \
             initialize_client() more than once with the same client name. Make sure you \
             provide a unique name every time you call initialize_client()."
        )
    }
}

fn no_client_message(name: &str) -> String {
    let head = if name == DEFAULT_CLIENT_NAME {
        "The default Gelato client does not exist. ".to_string()
    } else {
        format!("Gelato client named \"{name}\" does not exist. ")
    };
    format!(
        "{head}Make sure you call initialize_client() before using any of the Gelato API services."
    )
}

impl ClientError {
    /// Namespace applied to every client error code.
    pub const CODE_PREFIX: &'static str = "client";

    /// Returns the error kind.
    #[must_use]
    pub const fn code(&self) -> ClientErrorCode {
        match self {
            Self::InvalidClientName { .. } => ClientErrorCode::InvalidClientName,
            Self::DuplicateClient { .. } => ClientErrorCode::DuplicateClient,
            Self::NoApiKey => ClientErrorCode::NoApiKey,
            Self::NoClient { .. } => ClientErrorCode::NoClient,
            Self::InvalidClientOptions { .. } => ClientErrorCode::InvalidClientOptions,
            Self::InvalidService { .. } => ClientErrorCode::InvalidService,
        }
    }

    /// Returns the namespaced code, e.g. `"client/duplicate-client"`.
    #[must_use]
    pub fn prefixed_code(&self) -> String {
        format!("{}/{}", Self::CODE_PREFIX, self.code())
    }

    /// Checks the error kind without caring about the prefix.
    #[must_use]
    pub fn has_code(&self, code: ClientErrorCode) -> bool {
        self.code() == code
    }

    /// Returns a JSON-serializable representation of this error.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.prefixed_code(),
            "message": self.to_string(),
        })
    }
}

/// Errors raised when a configuration value fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Gelato API key.")]
    EmptyApiKey,

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://proxy.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// User agent prefix cannot be sent as a header value.
    #[error("Invalid user agent prefix '{prefix}'. It must only contain visible ASCII characters.")]
    InvalidUserAgentPrefix {
        /// The rejected prefix.
        prefix: String,
    },

    /// The underlying HTTP client could not be created.
    #[error("Failed to create HTTP client: {reason}")]
    HttpClientBuild {
        /// The builder's error message.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_prefixed_with_client_namespace() {
        let error = ClientError::NoApiKey;
        assert_eq!(error.prefixed_code(), "client/no-api-key");

        let error = ClientError::InvalidClientName {
            name: String::new(),
        };
        assert_eq!(error.prefixed_code(), "client/invalid-client-name");
    }

    #[test]
    fn test_duplicate_client_message_differs_for_default_name() {
        let default = ClientError::DuplicateClient {
            name: DEFAULT_CLIENT_NAME.to_string(),
        };
        let named = ClientError::DuplicateClient {
            name: "tenant-a".to_string(),
        };

        assert!(default.to_string().starts_with("The default Gelato client already exists."));
        assert!(named
            .to_string()
            .starts_with("Gelato client named \"tenant-a\" already exists."));
        assert_eq!(default.code(), named.code());
    }

    #[test]
    fn test_no_client_message_mentions_initialize_client() {
        let error = ClientError::NoClient {
            name: "non-existing-client-name".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Gelato client named \"non-existing-client-name\" does not exist. Make sure you call initialize_client() before using any of the Gelato API services."
        );

        let error = ClientError::NoClient {
            name: DEFAULT_CLIENT_NAME.to_string(),
        };
        assert!(error
            .to_string()
            .starts_with("The default Gelato client does not exist."));
    }

    #[test]
    fn test_has_code() {
        let error = ClientError::InvalidService {
            service: "orders".to_string(),
        };
        assert!(error.has_code(ClientErrorCode::InvalidService));
        assert!(!error.has_code(ClientErrorCode::NoClient));
    }

    #[test]
    fn test_to_json_contains_code_and_message() {
        let error = ClientError::NoApiKey;
        let json = error.to_json();

        assert_eq!(json["code"], "client/no-api-key");
        assert!(json["message"].as_str().unwrap().contains("GELATO_API_KEY"));
    }

    #[test]
    fn test_config_error_messages() {
        let error = ConfigError::InvalidHostUrl {
            url: "not a url".to_string(),
        };
        assert!(error.to_string().contains("not a url"));
        assert!(ConfigError::EmptyApiKey
            .to_string()
            .contains("API key cannot be empty"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let _: &dyn std::error::Error = &ClientError::NoApiKey;
        let _: &dyn std::error::Error = &ConfigError::EmptyApiKey;
    }
}
