//! # Motion Errors
//!
//! Only configuration can be wrong: animations themselves never fail, and
//! operations on elements that do not exist are silently skipped.

use thiserror::Error;

/// Convenience type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A color token is not `#rgb` or `#rrggbb`.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Marquee geometry that cannot wrap (zero width or no cards).
    #[error("Invalid marquee: {0}")]
    InvalidMarquee(String),
}
