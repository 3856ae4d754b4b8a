//! Url mapping creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{code_from_input, short_url};
use serde_json::json;

/// Message returned when a submission carries no URL.
pub const URL_REQUIRED_MESSAGE: &str = "A URL is required in order to use the shortening portal.";

/// Outcome of [`MappingService::create_or_get`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOutcome {
    pub mapping: UrlMapping,
    /// `true` if this call persisted a new mapping, `false` if the long URL
    /// was already known.
    pub created: bool,
}

/// The single gate through which url mappings are created and queried.
///
/// Enforces long URL uniqueness: a URL submitted twice resolves to the same
/// mapping, and the second submission consumes no id. URLs are compared as
/// exact strings without normalization.
pub struct MappingService<R: UrlRepository> {
    repository: Arc<R>,
    short_url_prefix: String,
}

impl<R: UrlRepository> MappingService<R> {
    /// Creates a new mapping service.
    ///
    /// `short_url_prefix` is prepended to codes to form public short URLs
    /// (e.g. `"cnjr.lnk/"`).
    pub fn new(repository: Arc<R>, short_url_prefix: impl Into<String>) -> Self {
        Self {
            repository,
            short_url_prefix: short_url_prefix.into(),
        }
    }

    /// Returns the mapping for `long_url`, creating it if the URL is unseen.
    ///
    /// # Concurrency
    ///
    /// If a concurrent request maps the same URL between the lookup and the
    /// insert, the insert fails with a unique violation and the mapping
    /// created by the other request is returned with `created = false`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `long_url` is empty or blank.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_or_get(&self, long_url: &str) -> Result<CreateOutcome, AppError> {
        if long_url.trim().is_empty() {
            return Err(AppError::bad_request(
                URL_REQUIRED_MESSAGE,
                json!({ "field": "url" }),
            ));
        }

        if let Some(mapping) = self.repository.find_by_long_url(long_url).await? {
            tracing::debug!(short_code = %mapping.short_code, "Long URL already mapped");
            return Ok(CreateOutcome {
                mapping,
                created: false,
            });
        }

        match self.repository.create(long_url).await {
            Ok(mapping) => {
                tracing::info!(
                    id = mapping.id,
                    short_code = %mapping.short_code,
                    "Created mapping"
                );
                Ok(CreateOutcome {
                    mapping,
                    created: true,
                })
            }
            Err(AppError::DuplicateUrl { .. }) => {
                let mapping = self
                    .repository
                    .find_by_long_url(long_url)
                    .await?
                    .ok_or_else(|| {
                        AppError::internal(
                            "Mapping disappeared after unique violation",
                            json!({ "long_url": long_url }),
                        )
                    })?;

                Ok(CreateOutcome {
                    mapping,
                    created: false,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Resolves a short code to its mapping.
    ///
    /// Accepts a bare code or a full short URL carrying the configured prefix.
    /// A miss is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `short_code` is empty or blank.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        let code = code_from_input(&self.short_url_prefix, short_code);

        if code.is_empty() {
            return Err(AppError::bad_request(
                URL_REQUIRED_MESSAGE,
                json!({ "field": "url" }),
            ));
        }

        self.repository.find_by_short_code(code).await
    }

    /// Resolves a short code, treating a miss as [`AppError::NotFound`].
    ///
    /// # Errors
    ///
    /// See [`Self::resolve`]; additionally returns [`AppError::NotFound`].
    pub async fn resolve_or_not_found(&self, short_code: &str) -> Result<UrlMapping, AppError> {
        self.resolve(short_code)
            .await?
            .ok_or_else(|| AppError::not_found(json!({ "short_code": short_code })))
    }

    /// Constructs the public short URL for a mapping.
    pub fn short_url(&self, mapping: &UrlMapping) -> String {
        short_url(&self.short_url_prefix, &mapping.short_code)
    }

    /// Counts stored mappings. Used for health and admin reporting.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use crate::utils::code_generator::encode;

    const PREFIX: &str = "cnjr.lnk/";

    fn create_test_mapping(id: i64, url: &str) -> UrlMapping {
        UrlMapping::new(id, url.to_string(), encode(id as u64))
    }

    #[tokio::test]
    async fn test_create_or_get_creates_new_mapping() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_find_by_long_url()
            .withf(|url| url == "https://example.com")
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_create()
            .withf(|url| url == "https://example.com")
            .times(1)
            .returning(|url| Ok(create_test_mapping(1, url)));

        let service = MappingService::new(Arc::new(mock_repo), PREFIX);

        let outcome = service.create_or_get("https://example.com").await.unwrap();

        assert!(outcome.created);
        assert_eq!(outcome.mapping.id, 1);
        assert_eq!(outcome.mapping.short_code, "1");
        assert_eq!(service.short_url(&outcome.mapping), "cnjr.lnk/1");
    }

    #[tokio::test]
    async fn test_create_or_get_returns_existing_mapping() {
        let mut mock_repo = MockUrlRepository::new();

        let existing = create_test_mapping(255, "https://example.com");
        mock_repo
            .expect_find_by_long_url()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));

        mock_repo.expect_create().times(0);

        let service = MappingService::new(Arc::new(mock_repo), PREFIX);

        let outcome = service.create_or_get("https://example.com").await.unwrap();

        assert!(!outcome.created);
        assert_eq!(outcome.mapping.id, 255);
        assert_eq!(outcome.mapping.short_code, "ff");
    }

    #[tokio::test]
    async fn test_create_or_get_does_not_normalize() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_find_by_long_url()
            .withf(|url| url == "HTTPS://Example.com/")
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_create()
            .withf(|url| url == "HTTPS://Example.com/")
            .times(1)
            .returning(|url| Ok(create_test_mapping(2, url)));

        let service = MappingService::new(Arc::new(mock_repo), PREFIX);

        let outcome = service.create_or_get("HTTPS://Example.com/").await.unwrap();

        assert_eq!(outcome.mapping.long_url, "HTTPS://Example.com/");
    }

    #[tokio::test]
    async fn test_create_or_get_recovers_from_concurrent_duplicate() {
        let mut mock_repo = MockUrlRepository::new();
        let mut seq = mockall::Sequence::new();

        mock_repo
            .expect_find_by_long_url()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));

        mock_repo
            .expect_create()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|url| Err(AppError::duplicate_url(url)));

        let winner = create_test_mapping(7, "https://race.example");
        mock_repo
            .expect_find_by_long_url()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(Some(winner.clone())));

        let service = MappingService::new(Arc::new(mock_repo), PREFIX);

        let outcome = service.create_or_get("https://race.example").await.unwrap();

        assert!(!outcome.created);
        assert_eq!(outcome.mapping.id, 7);
    }

    #[tokio::test]
    async fn test_create_or_get_empty_url() {
        let mock_repo = MockUrlRepository::new();
        let service = MappingService::new(Arc::new(mock_repo), PREFIX);

        let result = service.create_or_get("").await;
        assert!(matches!(result, Err(AppError::Validation { .. })));

        let result = service.create_or_get("   ").await;
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_or_get_propagates_internal_error() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_find_by_long_url()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = MappingService::new(Arc::new(mock_repo), PREFIX);

        let result = service.create_or_get("https://example.com").await;
        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_resolve_hit() {
        let mut mock_repo = MockUrlRepository::new();

        let mapping = create_test_mapping(16, "https://example.com");
        mock_repo
            .expect_find_by_short_code()
            .withf(|code| code == "10")
            .times(1)
            .returning(move |_| Ok(Some(mapping.clone())));

        let service = MappingService::new(Arc::new(mock_repo), PREFIX);

        let resolved = service.resolve("10").await.unwrap().unwrap();
        assert_eq!(resolved.long_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_strips_prefix() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_find_by_short_code()
            .withf(|code| code == "1f")
            .times(1)
            .returning(|_| Ok(None));

        let service = MappingService::new(Arc::new(mock_repo), PREFIX);

        assert!(service.resolve("cnjr.lnk/1f").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_resolve_miss_is_none() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_find_by_short_code()
            .times(1)
            .returning(|_| Ok(None));

        let service = MappingService::new(Arc::new(mock_repo), PREFIX);

        let result = service.resolve("deadbeef").await;
        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn test_resolve_or_not_found() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_find_by_short_code()
            .times(1)
            .returning(|_| Ok(None));

        let service = MappingService::new(Arc::new(mock_repo), PREFIX);

        let result = service.resolve_or_not_found("deadbeef").await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_resolve_empty_code() {
        let mock_repo = MockUrlRepository::new();
        let service = MappingService::new(Arc::new(mock_repo), PREFIX);

        assert!(matches!(
            service.resolve("").await,
            Err(AppError::Validation { .. })
        ));
        // A bare prefix carries no code
        assert!(matches!(
            service.resolve("cnjr.lnk/").await,
            Err(AppError::Validation { .. })
        ));
    }
}
