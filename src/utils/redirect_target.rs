//! Redirect target sanitization.
//!
//! Long URLs are stored exactly as submitted, so a mapping may hold
//! `example.com/page` without a scheme. Redirecting to such a value would be
//! interpreted relative to this service; targets are therefore forced to an
//! absolute `http(s)` URL before a redirect is issued.

use axum::http::HeaderValue;
use serde_json::json;
use url::Url;

use crate::error::AppError;

/// Returns an absolute URL suitable for a `Location` header.
///
/// Values already using the `http` or `https` scheme are returned unchanged.
/// Anything else is prefixed with `https://`.
///
/// # Examples
///
/// ```
/// use hexlink::utils::redirect_target::redirect_target;
///
/// assert_eq!(redirect_target("https://rust-lang.org"), "https://rust-lang.org");
/// assert_eq!(redirect_target("rust-lang.org"), "https://rust-lang.org");
/// ```
pub fn redirect_target(long_url: &str) -> String {
    match Url::parse(long_url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => long_url.to_string(),
        _ => format!("https://{}", long_url),
    }
}

/// Builds the `Location` header value for a stored long URL.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the target contains bytes that are not
/// allowed in a header, such as control characters.
pub fn location_header(long_url: &str) -> Result<HeaderValue, AppError> {
    HeaderValue::try_from(redirect_target(long_url)).map_err(|e| {
        AppError::internal(
            "Stored URL cannot be used as a redirect target",
            json!({ "long_url": long_url, "reason": e.to_string() }),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_http_and_https() {
        assert_eq!(
            redirect_target("http://example.com/a?b=c"),
            "http://example.com/a?b=c"
        );
        assert_eq!(redirect_target("https://example.com"), "https://example.com");
    }

    #[test]
    fn test_scheme_check_is_case_insensitive() {
        assert_eq!(redirect_target("HTTPS://example.com"), "HTTPS://example.com");
    }

    #[test]
    fn test_prefixes_bare_host() {
        assert_eq!(redirect_target("example.com/path"), "https://example.com/path");
    }

    #[test]
    fn test_prefixes_non_http_scheme() {
        assert_eq!(
            redirect_target("javascript:alert(1)"),
            "https://javascript:alert(1)"
        );
    }

    #[test]
    fn test_location_header() {
        let value = location_header("example.com").unwrap();
        assert_eq!(value, "https://example.com");
    }

    #[test]
    fn test_location_header_rejects_control_characters() {
        let result = location_header("https://example.com/a\nb");
        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[test]
    fn test_prefixes_host_with_port() {
        // `localhost:8080` parses as scheme "localhost"
        assert_eq!(redirect_target("localhost:8080"), "https://localhost:8080");
    }
}
