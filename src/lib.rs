//! # hexlink
//!
//! A compact URL shortener built with Axum and SQLite. Every submitted long
//! URL receives the next id from the store, and its short code is that id in
//! lowercase hexadecimal: the first URL becomes `cnjr.lnk/1`, the 256th
//! `cnjr.lnk/100`.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The [`UrlMapping`](domain::entities::UrlMapping) entity and repository traits
//! - **Application Layer** ([`application`]) - Create-or-get and resolve logic
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence and Redis cache
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML form over the same operations
//!
//! ## Guarantees
//!
//! - A long URL maps to exactly one short code; resubmitting it returns the
//!   existing mapping
//! - Ids are dense, start at 1 and are never reused
//! - Long URLs are compared exactly, without normalization
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: defaults to sqlite://data/hexlink.sqlite?mode=rwc
//! export DATABASE_URL="sqlite://data/hexlink.sqlite?mode=rwc"
//!
//! # Start the service (migrations run on startup)
//! cargo run
//!
//! curl -X POST localhost:3000/api/urls -H 'content-type: application/json' \
//!      -d '{"url": "https://www.rust-lang.org"}'
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;
