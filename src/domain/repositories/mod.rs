//! Repository trait definitions for the domain layer.
//!
//! Repositories abstract data access behind traits implemented in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for unit testing services.
//!
//! # Available Repositories
//!
//! - [`UrlRepository`] - Url mapping creation and lookup
//!
//! # Testing
//!
//! See integration tests in `tests/repository_url.rs` for usage examples.

pub mod url_repository;

pub use url_repository::UrlRepository;

#[cfg(test)]
pub use url_repository::MockUrlRepository;
