//! HTTP client for Gelato API communication.
//!
//! This module provides the [`HttpClient`] type, the single transport every
//! service of a client shares.

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
use crate::clients::http_request::{HttpMethod, RequestOptions};
use crate::config::{ApiKey, ClientOptions, HostUrl};
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-API-KEY";

const CONTENT_TYPE_HEADER: &str = "Content-Type";
const JSON_MIME: &str = "application/json";

/// HTTP client for making requests to the Gelato API.
///
/// The client handles:
/// - Default headers including User-Agent and the API key
/// - Redirecting requests to `api_host` when one is configured
/// - JSON request bodies and typed JSON responses
///
/// Each request is sent exactly once. Non-2xx responses come back as
/// [`HttpError::Response`].
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use gelato_api::clients::{HttpClient, RequestOptions};
/// use gelato_api::ClientOptions;
///
/// let options = ClientOptions::builder().api_key("my-api-key").build();
/// let client = HttpClient::new(&options)?;
///
/// let catalogs: serde_json::Value = client
///     .get("https://product.gelatoapis.com/v3/catalogs", &RequestOptions::new())
///     .await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// API key sent on every request.
    api_key: Option<ApiKey>,
    /// Origin override for every request.
    api_host: Option<HostUrl>,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from client options.
    ///
    /// An empty `api_key` is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `api_host` is not a valid URL, if the
    /// resulting `User-Agent` is not a valid header value, or if the
    /// underlying reqwest client cannot be created.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gelato_api::clients::HttpClient;
    /// use gelato_api::ClientOptions;
    ///
    /// let options = ClientOptions::builder()
    ///     .api_key("my-api-key")
    ///     .user_agent_prefix("MyShop/1.0")
    ///     .build();
    /// let client = HttpClient::new(&options).unwrap();
    ///
    /// assert!(client.default_headers()["User-Agent"].starts_with("MyShop/1.0 | "));
    /// ```
    pub fn new(options: &ClientOptions) -> Result<Self, ConfigError> {
        let api_host = options.api_host.as_deref().map(HostUrl::new).transpose()?;

        // Build User-Agent header
        let user_agent_prefix = options
            .user_agent_prefix
            .as_deref()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Gelato API Library v{SDK_VERSION} | Rust {rust_version}");
        if HeaderValue::from_str(&user_agent).is_err() {
            return Err(ConfigError::InvalidUserAgentPrefix {
                prefix: options.user_agent_prefix.clone().unwrap_or_default(),
            });
        }

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), JSON_MIME.to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| ConfigError::HttpClientBuild {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: options.validated_api_key(),
            api_host,
            default_headers,
        })
    }

    /// Returns the default headers for this client.
    ///
    /// These are the headers callers may override per request. The
    /// `Content-Type` and `X-API-KEY` headers are added on top of them and
    /// cannot be overridden.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the origin requests are redirected to, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Computes the full header set for a request with the given extras.
    ///
    /// Extras replace default headers of the same name (compared
    /// case-insensitively). Extras named `Content-Type` or `X-API-KEY` are
    /// dropped so the fixed values always win.
    #[must_use]
    pub fn request_headers(&self, extra: &HashMap<String, String>) -> HashMap<String, String> {
        let mut headers = self.default_headers.clone();

        for (name, value) in extra {
            if name.eq_ignore_ascii_case(CONTENT_TYPE_HEADER)
                || name.eq_ignore_ascii_case(API_KEY_HEADER)
            {
                tracing::warn!("Ignoring caller-supplied reserved header '{}'", name);
                continue;
            }
            headers.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
            headers.insert(name.clone(), value.clone());
        }

        headers.insert(CONTENT_TYPE_HEADER.to_string(), JSON_MIME.to_string());
        if let Some(key) = &self.api_key {
            headers.insert(API_KEY_HEADER.to_string(), key.as_ref().to_string());
        }
        headers
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<T, HttpError> {
        self.request::<T, ()>(HttpMethod::Get, url, None, options)
            .await
    }

    /// Sends a POST request with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<T, HttpError> {
        self.request(HttpMethod::Post, url, body, options).await
    }

    /// Sends a PATCH request with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<T, HttpError> {
        self.request(HttpMethod::Patch, url, body, options).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn delete<T: DeserializeOwned>(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<T, HttpError> {
        self.request::<T, ()>(HttpMethod::Delete, url, None, options)
            .await
    }

    /// Sends an HTTP request to the Gelato API and decodes the JSON response.
    ///
    /// An empty 2xx body decodes as JSON `null`, so `()` and `Option<_>`
    /// targets accept it.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - A header or the body fails validation (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`Response`)
    /// - The response body does not match `T` (`Json`)
    pub async fn request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<T, HttpError> {
        let headers = Self::to_header_map(&self.request_headers(&options.headers))?;
        let url = self
            .api_host
            .as_ref()
            .map_or_else(|| url.to_string(), |host| host.rewrite(url));

        let mut req_builder = self
            .client
            .request(method.into(), &url)
            .headers(headers);

        if !options.query.is_empty() {
            req_builder = req_builder.query(&options.query);
        }

        if let Some(body) = body {
            let payload =
                serde_json::to_vec(body).map_err(|e| InvalidHttpRequestError::InvalidBody {
                    reason: e.to_string(),
                })?;
            req_builder = req_builder.body(payload);
        }

        tracing::debug!(method = %method, url = %url, "Sending request to Gelato API");
        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let request_id = res
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body_text = res.text().await?;
        tracing::debug!(
            method = %method,
            url = %url,
            status = code,
            "Received Gelato API response"
        );

        if !(200..300).contains(&code) {
            return Err(HttpError::Response(HttpResponseError {
                code,
                message: body_text,
                error_reference: request_id,
            }));
        }

        if body_text.trim().is_empty() {
            Ok(serde_json::from_value(serde_json::Value::Null)?)
        } else {
            Ok(serde_json::from_str(&body_text)?)
        }
    }

    fn to_header_map(
        headers: &HashMap<String, String>,
    ) -> Result<HeaderMap, InvalidHttpRequestError> {
        let mut map = HeaderMap::with_capacity(headers.len());
        for (name, value) in headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                InvalidHttpRequestError::InvalidHeaderName { name: name.clone() }
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|_| {
                InvalidHttpRequestError::InvalidHeaderValue { name: name.clone() }
            })?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }
}
