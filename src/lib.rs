//! stylebook: living style guides from stylesheet comments.
//!
//! Block comments in CSS, SCSS, Sass and Less files are treated as
//! markdown. Each comment becomes a section of its file's page, and an
//! embedded code example is rendered both as live markup and as escaped
//! source text. Highlighting is left to the page template.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod markdown;
pub mod site;
pub mod test_utils;
pub mod utils;

pub use error::{Result, SbError};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
