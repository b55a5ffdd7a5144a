//! HTTP-specific error types for the Gelato API SDK.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: A request that fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! Requests are sent exactly once. A failure is returned to the caller as-is;
//! the SDK never retries.
//!
//! # Example
//!
//! ```rust,ignore
//! use gelato_api::clients::HttpError;
//!
//! match orders.get_order("order-id").await {
//!     Ok(order) => println!("Order status: {:?}", order.fulfillment_status),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(HttpError::Json(e)) => println!("Unexpected payload: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// `message` holds the raw response body, which the Gelato API usually fills
/// with a JSON object carrying `code` and `message` fields.
///
/// # Example
///
/// ```rust
/// use gelato_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"code":"NOT_FOUND","message":"Order not found"}"#.to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert_eq!(error.code, 404);
/// ```
#[derive(Debug, Error)]
#[error("Gelato API responded with status {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub message: String,
    /// Reference ID for error reporting (from the X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A caller-supplied header name is not a valid HTTP header name.
    #[error("Invalid header name '{name}'.")]
    InvalidHeaderName {
        /// The rejected header name.
        name: String,
    },

    /// A caller-supplied header value is not a valid HTTP header value.
    #[error("Invalid value for header '{name}'.")]
    InvalidHeaderValue {
        /// The header whose value was rejected.
        name: String,
    },

    /// A value cannot be flattened into query parameters.
    #[error("Cannot build query parameters: {reason}")]
    InvalidQuery {
        /// What was wrong with the value.
        reason: String,
    },

    /// The request body could not be serialized to JSON.
    #[error("Cannot serialize request body: {reason}")]
    InvalidBody {
        /// The serializer's error message.
        reason: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A 2xx response body did not match the expected shape.
    #[error("Failed to parse response body: {0}")]
    Json(#[from] serde_json::Error),
}

impl HttpError {
    /// Returns the HTTP status code when the server answered with a non-2xx status.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}
