//! bookshelf-report
//!
//! Plain-text analysis reports rendered from Tera templates.

pub mod error;
pub mod render;
pub mod template;
