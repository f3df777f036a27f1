//! Hex color tokens.

use std::fmt;

use crate::error::{Error, Result};

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb` (the `#` is optional).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lib_motion::Rgb;
    ///
    /// assert_eq!(Rgb::parse_hex("#ea580c").unwrap(), Rgb::new(0xea, 0x58, 0x0c));
    /// assert_eq!(Rgb::parse_hex("fff").unwrap(), Rgb::WHITE);
    /// assert!(Rgb::parse_hex("orange").is_err());
    /// ```
    pub fn parse_hex(token: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor(token.to_string());
        let hex = token.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                let expand = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 0x11);
                Ok(Self::new(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::new(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
            _ => Err(invalid()),
        }
    }

    /// Linear interpolation per channel, `t` clamped to 0.0..=1.0.
    pub fn lerp(self, to: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb::new(mix(self.r, to.r), mix(self.g, to.g), mix(self.b, to.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let accent = Rgb::parse_hex("#EA580C").unwrap();
        assert_eq!(accent.to_string(), "#ea580c");
        assert_eq!(Rgb::parse_hex("#000").unwrap(), Rgb::BLACK);
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        for bad in ["", "#12", "#12345", "#gggggg", "#ea580c00", "#é"] {
            assert_eq!(Rgb::parse_hex(bad), Err(Error::InvalidColor(bad.to_string())));
        }
    }

    #[test]
    fn test_lerp() {
        assert_eq!(Rgb::BLACK.lerp(Rgb::WHITE, 0.0), Rgb::BLACK);
        assert_eq!(Rgb::BLACK.lerp(Rgb::WHITE, 1.0), Rgb::WHITE);
        assert_eq!(Rgb::BLACK.lerp(Rgb::WHITE, 0.5), Rgb::new(128, 128, 128));
        assert_eq!(Rgb::BLACK.lerp(Rgb::WHITE, 4.0), Rgb::WHITE);
    }
}
