//! Utility functions for code allocation and redirect handling.
//!
//! - [`code_generator`] - Hexadecimal short code encoding and short URL composition
//! - [`redirect_target`] - Absolute redirect target construction

pub mod code_generator;
pub mod redirect_target;
