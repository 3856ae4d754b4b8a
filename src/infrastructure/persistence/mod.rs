//! SQLite persistence: connection pool, migrations, and repository implementations.
//!
//! # Repositories
//!
//! - [`SqliteUrlRepository`] - Url mapping storage and retrieval

pub mod pool;
pub mod sqlite_url_repository;

pub use pool::{connect, migrate};
pub use sqlite_url_repository::SqliteUrlRepository;
