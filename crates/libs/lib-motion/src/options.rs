//! # Menu Options
//!
//! Construction parameters for the slide-out menu. Defaults reproduce the
//! career week theme (orange accent, white bars, black open button).
//!
//! Options deserialize from the `menu` object of the site config:
//!
//! ```rust
//! use lib_motion::{DockEdge, MenuOptions};
//!
//! let options: MenuOptions = serde_json::from_str(r#"{ "position": "left" }"#).unwrap();
//! assert_eq!(options.position, DockEdge::Left);
//! assert!(options.display_socials);
//! ```

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::Result;

/// Screen edge the panel slides in from and out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DockEdge {
    Left,
    #[default]
    Right,
}

impl DockEdge {
    /// Horizontal offset, in percent of the element width, that places an
    /// element fully off-screen on this edge.
    pub fn offscreen_x_percent(self) -> f64 {
        match self {
            DockEdge::Left => -100.0,
            DockEdge::Right => 100.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DockEdge::Left => "left",
            DockEdge::Right => "right",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuOptions {
    pub position: DockEdge,
    /// One decorative backdrop layer per color, bottom-most first.
    pub colors: Vec<String>,
    pub display_socials: bool,
    pub display_item_numbering: bool,
    /// Icon bar color.
    pub menu_button_color: String,
    /// Button background while the menu is open.
    pub open_menu_button_color: String,
    /// Button background gradient while the menu is closed.
    pub button_gradient: [String; 2],
    pub change_menu_color_on_open: bool,
    /// Ordinal numbers, social heading and hover color.
    pub accent_color: String,
    pub is_fixed: bool,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            position: DockEdge::Right,
            colors: vec!["#fed7aa".to_string(), "#fb923c".to_string(), "#ea580c".to_string()],
            display_socials: true,
            display_item_numbering: true,
            menu_button_color: "#ffffff".to_string(),
            open_menu_button_color: "#000000".to_string(),
            button_gradient: ["#ea580c".to_string(), "#fb923c".to_string()],
            change_menu_color_on_open: true,
            accent_color: "#ea580c".to_string(),
            is_fixed: true,
        }
    }
}

impl MenuOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position: DockEdge) -> Self {
        self.position = position;
        self
    }

    pub fn colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn display_socials(mut self, display: bool) -> Self {
        self.display_socials = display;
        self
    }

    pub fn display_item_numbering(mut self, display: bool) -> Self {
        self.display_item_numbering = display;
        self
    }

    pub fn change_menu_color_on_open(mut self, change: bool) -> Self {
        self.change_menu_color_on_open = change;
        self
    }

    pub fn accent_color(mut self, color: impl Into<String>) -> Self {
        self.accent_color = color.into();
        self
    }

    pub fn is_fixed(mut self, fixed: bool) -> Self {
        self.is_fixed = fixed;
        self
    }

    /// Check that every color token parses.
    pub fn validate(&self) -> Result<()> {
        let tokens = self
            .colors
            .iter()
            .chain(&self.button_gradient)
            .chain([&self.menu_button_color, &self.open_menu_button_color, &self.accent_color]);
        for token in tokens {
            Rgb::parse_hex(token)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_defaults_validate() {
        assert!(MenuOptions::default().validate().is_ok());
    }

    #[test]
    fn test_validate_reports_bad_color() {
        let options = MenuOptions::new().colors(["#fed7aa", "tomato"]);
        assert_eq!(options.validate(), Err(Error::InvalidColor("tomato".to_string())));

        let options = MenuOptions::new().accent_color("#12");
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_offscreen_side() {
        assert_eq!(DockEdge::Right.offscreen_x_percent(), 100.0);
        assert_eq!(DockEdge::Left.offscreen_x_percent(), -100.0);
    }

    #[test]
    fn test_builder() {
        let options = MenuOptions::new()
            .position(DockEdge::Left)
            .display_socials(false)
            .display_item_numbering(false)
            .change_menu_color_on_open(false)
            .is_fixed(false);
        assert_eq!(options.position, DockEdge::Left);
        assert!(!options.display_socials);
        assert!(!options.display_item_numbering);
        assert!(!options.change_menu_color_on_open);
        assert!(!options.is_fixed);
    }
}
