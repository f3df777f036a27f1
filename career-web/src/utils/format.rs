//! # Style Formatting
//!
//! Inline style fragments shared by the page sections and the menu.
//!
//! - [`animation_delay`] - Staggered CSS `animation-delay` for list entries
//! - [`accent_style`] - Custom property carrying the menu accent color

/// `animation-delay` for the `index`-th entry of a staggered list.
///
/// # Examples
///
/// ```text
/// animation_delay(0, 0.1) == "animation-delay: 0s;"
/// animation_delay(3, 0.1) == "animation-delay: 0.3s;"
/// ```
pub fn animation_delay(index: usize, step_secs: f64) -> String {
    let delay = (index as f64 * step_secs * 1000.0).round() / 1000.0;
    format!("animation-delay: {}s;", delay)
}

/// Custom property read by the menu stylesheet for numbers, the social
/// heading and hover colors.
pub fn accent_style(color: &str) -> String {
    format!("--sm-accent: {};", color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_delay() {
        assert_eq!(animation_delay(0, 0.1), "animation-delay: 0s;");
        assert_eq!(animation_delay(3, 0.1), "animation-delay: 0.3s;");
        assert_eq!(animation_delay(4, 0.1), "animation-delay: 0.4s;");
    }

    #[test]
    fn test_accent_style() {
        assert_eq!(accent_style("#ea580c"), "--sm-accent: #ea580c;");
    }
}
