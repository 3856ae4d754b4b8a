#![allow(dead_code)]

use async_trait::async_trait;
use hexlink::infrastructure::cache::{CacheError, CacheResult, CacheService, NullCache};
use hexlink::state::AppState;
use sqlx::SqlitePool;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const PREFIX: &str = "cnjr.lnk/";

/// Inserts a mapping directly, bypassing the service.
pub async fn insert_mapping(pool: &SqlitePool, id: i64, long_url: &str, short_code: &str) {
    sqlx::query("INSERT INTO urls (id, long_url, short_code) VALUES (?1, ?2, ?3)")
        .bind(id)
        .bind(long_url)
        .bind(short_code)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_mappings(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    create_test_state_with_cache(pool, Arc::new(NullCache::new()))
}

pub fn create_test_state_with_cache(pool: SqlitePool, cache: Arc<dyn CacheService>) -> AppState {
    AppState::new(Arc::new(pool), PREFIX, cache)
}

/// In-process cache recording every entry written to it.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn with_entry(short_code: &str, long_url: &str) -> Self {
        let cache = Self::default();
        cache.insert(short_code, long_url);
        cache
    }

    pub fn insert(&self, short_code: &str, long_url: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(short_code.to_string(), long_url.to_string());
    }

    pub fn get(&self, short_code: &str) -> Option<String> {
        self.entries.lock().unwrap().get(short_code).cloned()
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get_url(&self, short_code: &str) -> CacheResult<Option<String>> {
        Ok(self.get(short_code))
    }

    async fn set_url(
        &self,
        short_code: &str,
        long_url: &str,
        _ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        self.insert(short_code, long_url);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// Cache whose backend is always unreachable.
pub struct FailingCache;

#[async_trait]
impl CacheService for FailingCache {
    async fn get_url(&self, short_code: &str) -> CacheResult<Option<String>> {
        Err(CacheError::OperationError(format!("GET {short_code}: connection refused")))
    }

    async fn set_url(
        &self,
        short_code: &str,
        _long_url: &str,
        _ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        Err(CacheError::OperationError(format!("SET {short_code}: connection refused")))
    }

    async fn health_check(&self) -> bool {
        false
    }
}
