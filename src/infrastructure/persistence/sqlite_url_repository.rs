//! SQLite implementation of the url repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::encode;

/// SQLite repository for url mapping storage and retrieval.
///
/// Ids come from the `AUTOINCREMENT` sequence of the `urls` table, which
/// never reuses a value and is only advanced by committed inserts.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn create(&self, long_url: &str) -> Result<UrlMapping, AppError> {
        let mut tx = self.pool.begin().await?;

        // The INSERT takes the database write lock, so the id assignment and
        // the short code update below are serialized against other writers.
        let id: i64 = sqlx::query_scalar("INSERT INTO urls (long_url) VALUES (?1) RETURNING id")
            .bind(long_url)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| match AppError::from(e) {
                AppError::DuplicateUrl { .. } => AppError::duplicate_url(long_url),
                other => other,
            })?;

        let sequence = u64::try_from(id).map_err(|_| {
            AppError::internal("Storage returned a negative id", json!({ "id": id }))
        })?;
        let short_code = encode(sequence);

        sqlx::query("UPDATE urls SET short_code = ?1 WHERE id = ?2")
            .bind(&short_code)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(UrlMapping::new(id, long_url.to_string(), short_code))
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<UrlMapping>, AppError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT id, long_url, short_code
            FROM urls
            WHERE long_url = ?1
            "#,
        )
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT id, long_url, short_code
            FROM urls
            WHERE short_code = ?1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<UrlMapping>, AppError> {
        let mappings = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT id, long_url, short_code
            FROM urls
            ORDER BY id DESC
            LIMIT ?1 OFFSET ?2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(mappings)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn max_id(&self) -> Result<Option<i64>, AppError> {
        let max: Option<i64> = sqlx::query_scalar("SELECT MAX(id) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(max)
    }
}
