/// Core Module for Newsdesk
///
/// This module contains the shared infrastructure of the data-access
/// layer: the error taxonomy and the crate-wide `Result` alias that
/// every repository, resolver, and query propagates.

pub mod error;

// Re-export commonly used types for convenience
pub use error::{NewsdeskError, Result};
