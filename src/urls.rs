//! URL helpers shared by the endpoint modules.

use std::borrow::Cow;

/// Joins a relative path onto a base URL with exactly one slash between them.
///
/// Trailing slashes are stripped from `base` and leading slashes from
/// `relative`. An empty `relative` returns `base` unchanged.
///
/// # Example
///
/// ```rust
/// use gelato_api::urls::combine_urls;
///
/// assert_eq!(combine_urls("https://a.com/v4/", "/orders"), "https://a.com/v4/orders");
/// assert_eq!(combine_urls("https://a.com/v4/", ""), "https://a.com/v4/");
/// ```
#[must_use]
pub fn combine_urls(base: &str, relative: &str) -> String {
    if relative.is_empty() {
        return base.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        relative.trim_start_matches('/')
    )
}

/// Percent-encodes a resource identifier for use as one path segment.
#[must_use]
pub fn encode_id(id: &str) -> Cow<'_, str> {
    urlencoding::encode(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_urls_normalizes_slashes() {
        assert_eq!(combine_urls("https://a.com/", "b"), "https://a.com/b");
        assert_eq!(combine_urls("https://a.com", "b"), "https://a.com/b");
        assert_eq!(combine_urls("https://a.com///", "///b/c"), "https://a.com/b/c");
    }

    #[test]
    fn test_combine_urls_with_empty_relative_returns_base() {
        assert_eq!(combine_urls("https://a.com/v1/", ""), "https://a.com/v1/");
        assert_eq!(combine_urls("https://a.com", ""), "https://a.com");
    }

    #[test]
    fn test_combine_urls_keeps_colon_actions() {
        assert_eq!(
            combine_urls("https://order.gelatoapis.com/v4/", "orders/abc:cancel"),
            "https://order.gelatoapis.com/v4/orders/abc:cancel"
        );
    }

    #[test]
    fn test_encode_id_escapes_path_characters() {
        assert_eq!(encode_id("plain-id_123"), "plain-id_123");
        assert_eq!(encode_id("a/b c"), "a%2Fb%20c");
    }
}
