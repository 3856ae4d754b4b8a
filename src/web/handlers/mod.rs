//! HTML template rendering handlers for the web form.

mod index;
mod submit;

pub use index::index_handler;
pub use submit::{submit_handler, submit_page_handler};
