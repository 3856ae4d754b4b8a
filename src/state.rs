//! Shared application state injected into every handler.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::MappingService;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::persistence::SqliteUrlRepository;

/// Mapping service backed by SQLite.
pub type SqliteMappingService = MappingService<SqliteUrlRepository>;

/// Handles shared by all requests.
///
/// The store handle is passed explicitly through the service; handlers never
/// reach for a global connection.
#[derive(Clone)]
pub struct AppState {
    pub mapping_service: Arc<SqliteMappingService>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    /// Wires the repository and service on top of a connection pool.
    pub fn new(
        pool: Arc<SqlitePool>,
        short_url_prefix: impl Into<String>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        let repository = Arc::new(SqliteUrlRepository::new(pool));
        let mapping_service = Arc::new(MappingService::new(repository, short_url_prefix));

        Self {
            mapping_service,
            cache,
        }
    }
}
