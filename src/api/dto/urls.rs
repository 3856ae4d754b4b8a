//! DTOs for the `/api/urls` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::{NoneAsEmptyString, serde_as};
use validator::Validate;

use crate::application::services::mapping_service::URL_REQUIRED_MESSAGE;
use crate::error::AppError;

/// Request carrying a single URL.
///
/// For `POST` the URL is the long URL to shorten; for `GET` it is the short
/// code (or full short URL) to resolve. An empty string is treated as absent.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UrlRequest {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(required(message = "A URL is required in order to use the shortening portal."))]
    pub url: Option<String>,
}

impl UrlRequest {
    /// Validates the request and returns the URL it carries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is absent or empty.
    pub fn into_url(self) -> Result<String, AppError> {
        self.validate()?;
        self.url
            .ok_or_else(|| AppError::bad_request(URL_REQUIRED_MESSAGE, json!({ "field": "url" })))
    }
}

/// Successful response envelope: `{"response": <status>, "content": ...}`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub response: u16,
    pub content: T,
}

/// Content returned after a submission.
#[derive(Debug, Serialize)]
pub struct ShortenedUrl {
    pub long_url: String,
    pub short_url: String,
}

/// Content returned after a resolution.
#[derive(Debug, Serialize)]
pub struct ResolvedUrl {
    pub id: i64,
    pub long_url: String,
    pub short_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_request_deserializes_url() {
        let request: UrlRequest =
            serde_json::from_str(r#"{"url": "https://example.com"}"#).unwrap();
        assert_eq!(request.into_url().unwrap(), "https://example.com");
    }

    #[test]
    fn test_url_request_missing_url() {
        let request: UrlRequest = serde_json::from_str("{}").unwrap();
        let err = request.into_url().unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), URL_REQUIRED_MESSAGE);
    }

    #[test]
    fn test_url_request_empty_url_is_absent() {
        let request: UrlRequest = serde_json::from_str(r#"{"url": ""}"#).unwrap();
        assert!(request.url.is_none());
        assert!(request.into_url().is_err());
    }

    #[test]
    fn test_envelope_shape() {
        let envelope = Envelope {
            response: 201,
            content: ShortenedUrl {
                long_url: "https://example.com".to_string(),
                short_url: "cnjr.lnk/1".to_string(),
            },
        };

        let json = serde_json::to_value(envelope).unwrap();
        assert_eq!(
            json,
            json!({
                "response": 201,
                "content": { "long_url": "https://example.com", "short_url": "cnjr.lnk/1" }
            })
        );
    }
}
