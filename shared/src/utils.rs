//! # Shared Utility Functions
//!
//! Small formatting helpers used by both the animation core and the
//! front-end.
//!
//! - [`format_ordinal`] - Two-digit ordinal label (`01`, `02`, ...)
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_ordinal;
//!
//! assert_eq!(format_ordinal(0), "01");
//! assert_eq!(format_ordinal(11), "12");
//! ```

/// Format a zero-based list position as a one-based, zero-padded ordinal.
///
/// Matches CSS `decimal-leading-zero` counters: positions past 98 simply grow
/// to three digits.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_ordinal;
///
/// assert_eq!(format_ordinal(4), "05");
/// assert_eq!(format_ordinal(99), "100");
/// ```
pub fn format_ordinal(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ordinal() {
        assert_eq!(format_ordinal(0), "01");
        assert_eq!(format_ordinal(8), "09");
        assert_eq!(format_ordinal(9), "10");
    }
}
