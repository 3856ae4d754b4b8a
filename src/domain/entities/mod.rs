//! Core domain entities.
//!
//! The service persists a single entity, [`UrlMapping`], in one flat namespace.

pub mod url_mapping;

pub use url_mapping::UrlMapping;
