//! Per-request types for the Gelato API SDK.
//!
//! This module provides [`HttpMethod`] and [`RequestOptions`], the per-call
//! overrides accepted by every [`HttpClient`](super::HttpClient) method.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Gelato API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and running searches.
    Post,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Patch => write!(f, "patch"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Patch => Self::PATCH,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// Per-request overrides: extra headers and query parameters.
///
/// Query parameters keep their insertion order and may repeat a key.
///
/// # Example
///
/// ```rust
/// use gelato_api::clients::RequestOptions;
///
/// let options = RequestOptions::new()
///     .header("X-Correlation-Id", "abc-123")
///     .query_param("country", "US");
///
/// assert_eq!(options.headers.get("X-Correlation-Id").map(String::as_str), Some("abc-123"));
/// assert_eq!(options.query, vec![("country".to_string(), "US".to_string())]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Additional headers for this request.
    pub headers: HashMap<String, String>,
    /// Query parameters appended to the URL.
    pub query: Vec<(String, String)>,
}

impl RequestOptions {
    /// Creates empty request options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Builds query parameters from any serializable struct or map.
    ///
    /// `null` fields are skipped, arrays repeat their key once per element,
    /// and scalars are rendered as plain strings.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidQuery`] if the value is not
    /// an object, or if a field holds a nested object.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gelato_api::clients::RequestOptions;
    /// use serde_json::json;
    ///
    /// let options = RequestOptions::query_from(&json!({
    ///     "country": "US",
    ///     "pageCount": 24,
    ///     "currency": null,
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(options.query.len(), 2);
    /// ```
    pub fn query_from<Q: Serialize + ?Sized>(query: &Q) -> Result<Self, InvalidHttpRequestError> {
        let value = serde_json::to_value(query).map_err(|e| InvalidHttpRequestError::InvalidQuery {
            reason: e.to_string(),
        })?;

        let Value::Object(fields) = value else {
            return Err(InvalidHttpRequestError::InvalidQuery {
                reason: "query parameters must serialize to an object".to_string(),
            });
        };

        let mut options = Self::default();
        for (key, value) in fields {
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    for item in items {
                        if let Some(rendered) = render_scalar(&key, item)? {
                            options.query.push((key.clone(), rendered));
                        }
                    }
                }
                other => {
                    if let Some(rendered) = render_scalar(&key, other)? {
                        options.query.push((key, rendered));
                    }
                }
            }
        }
        Ok(options)
    }
}

fn render_scalar(key: &str, value: Value) -> Result<Option<String>, InvalidHttpRequestError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Array(_) | Value::Object(_) => Err(InvalidHttpRequestError::InvalidQuery {
            reason: format!("field '{key}' is not a scalar value"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Patch.to_string(), "patch");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_http_method_converts_to_reqwest() {
        assert_eq!(reqwest::Method::from(HttpMethod::Patch), reqwest::Method::PATCH);
    }

    #[test]
    fn test_builder_methods_accumulate() {
        let options = RequestOptions::new()
            .header("X-One", "1")
            .query_param("a", "1")
            .query_param("a", "2");

        assert_eq!(options.headers.len(), 1);
        assert_eq!(
            options.query,
            vec![
                ("a".to_string(), "1".to_string()),
                ("a".to_string(), "2".to_string())
            ]
        );
    }

    #[test]
    fn test_query_from_renders_scalars_and_skips_nulls() {
        let options = RequestOptions::query_from(&json!({
            "country": "DE",
            "pageCount": 24,
            "enabled": true,
            "currency": null,
        }))
        .unwrap();

        assert!(options.query.contains(&("country".to_string(), "DE".to_string())));
        assert!(options.query.contains(&("pageCount".to_string(), "24".to_string())));
        assert!(options.query.contains(&("enabled".to_string(), "true".to_string())));
        assert!(!options.query.iter().any(|(k, _)| k == "currency"));
    }

    #[test]
    fn test_query_from_repeats_array_keys() {
        let options = RequestOptions::query_from(&json!({ "ids": ["a", "b"] })).unwrap();
        assert_eq!(
            options.query,
            vec![
                ("ids".to_string(), "a".to_string()),
                ("ids".to_string(), "b".to_string())
            ]
        );
    }

    #[test]
    fn test_query_from_rejects_nested_objects() {
        let result = RequestOptions::query_from(&json!({ "filter": { "a": 1 } }));
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::InvalidQuery { .. })
        ));
    }

    #[test]
    fn test_query_from_rejects_non_objects() {
        assert!(RequestOptions::query_from(&json!(["a"])).is_err());
        assert!(RequestOptions::query_from("plain").is_err());
    }

    #[test]
    fn test_query_from_serializes_structs() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query {
            page_count: Option<u32>,
            measure_unit: Option<&'static str>,
        }

        let options = RequestOptions::query_from(&Query {
            page_count: Some(30),
            measure_unit: None,
        })
        .unwrap();

        assert_eq!(
            options.query,
            vec![("pageCount".to_string(), "30".to_string())]
        );
    }
}
