//! Repository trait for url mapping data access.

use crate::domain::entities::UrlMapping;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for url mappings.
///
/// The repository is the only component that writes to storage. Creation
/// assigns the id and the derived short code in a single transaction.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Persists a new mapping for `long_url`.
    ///
    /// The id is the next value of the store's sequence and the short code is
    /// [`encode(id)`](crate::utils::code_generator::encode). Both are assigned
    /// atomically with the insert, so concurrent creations never share an id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateUrl`] if `long_url` is already mapped.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, long_url: &str) -> Result<UrlMapping, AppError>;

    /// Finds a mapping by its exact long URL.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Finds a mapping by its exact short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Lists mappings, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<UrlMapping>, AppError>;

    /// Counts all mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Returns the largest assigned id, or `None` when the store is empty.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn max_id(&self) -> Result<Option<i64>, AppError>;
}
