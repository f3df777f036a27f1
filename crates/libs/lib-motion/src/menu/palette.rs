//! Toggle button color crossfade.

use tracing::warn;

use crate::color::Rgb;
use crate::easing::Ease;
use crate::options::MenuOptions;

/// Delay before the color follows the panel motion, seconds.
pub const COLOR_DELAY: f64 = 0.1;
pub const COLOR_DURATION: f64 = 0.25;

/// Colors of the toggle button: background gradient stops and icon bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonPalette {
    pub background_start: Rgb,
    pub background_end: Rgb,
    pub bar: Rgb,
}

impl Default for ButtonPalette {
    fn default() -> Self {
        Self {
            background_start: Rgb::new(0xea, 0x58, 0x0c),
            background_end: Rgb::new(0xfb, 0x92, 0x3c),
            bar: Rgb::WHITE,
        }
    }
}

impl ButtonPalette {
    /// Accent gradient shown while the menu is closed.
    pub fn closed(options: &MenuOptions) -> Self {
        let fallback = Self::default();
        Self {
            background_start: color_or(&options.button_gradient[0], fallback.background_start),
            background_end: color_or(&options.button_gradient[1], fallback.background_end),
            bar: color_or(&options.menu_button_color, fallback.bar),
        }
    }

    /// Flat neutral background shown while the menu is open.
    pub fn open(options: &MenuOptions) -> Self {
        let background = color_or(&options.open_menu_button_color, Rgb::BLACK);
        Self {
            background_start: background,
            background_end: background,
            bar: color_or(&options.menu_button_color, Rgb::WHITE),
        }
    }

    pub fn lerp(self, to: ButtonPalette, t: f64) -> ButtonPalette {
        ButtonPalette {
            background_start: self.background_start.lerp(to.background_start, t),
            background_end: self.background_end.lerp(to.background_end, t),
            bar: self.bar.lerp(to.bar, t),
        }
    }

    /// CSS `background` value.
    pub fn background_css(&self) -> String {
        format!("linear-gradient(to right, {}, {})", self.background_start, self.background_end)
    }
}

fn color_or(token: &str, fallback: Rgb) -> Rgb {
    Rgb::parse_hex(token).unwrap_or_else(|err| {
        warn!("{}, using {}", err, fallback);
        fallback
    })
}

/// Delayed crossfade between two palettes.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTransition {
    from: ButtonPalette,
    to: ButtonPalette,
    elapsed: f64,
}

impl ColorTransition {
    pub fn new(from: ButtonPalette, to: ButtonPalette) -> Self {
        Self { from, to, elapsed: 0.0 }
    }

    pub fn target(&self) -> ButtonPalette {
        self.to
    }

    /// Advance by `dt` seconds; returns the current palette and whether the
    /// fade has finished.
    pub fn advance(&mut self, dt: f64) -> (ButtonPalette, bool) {
        self.elapsed += dt.max(0.0);
        let progress = ((self.elapsed - COLOR_DELAY) / COLOR_DURATION).clamp(0.0, 1.0);
        let palette = self.from.lerp(self.to, Ease::Power2Out.apply(progress));
        (palette, self.elapsed >= COLOR_DELAY + COLOR_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_from_default_options() {
        let options = MenuOptions::default();
        let closed = ButtonPalette::closed(&options);
        assert_eq!(closed, ButtonPalette::default());
        assert_eq!(closed.background_css(), "linear-gradient(to right, #ea580c, #fb923c)");

        let open = ButtonPalette::open(&options);
        assert_eq!(open.background_start, Rgb::BLACK);
        assert_eq!(open.background_end, Rgb::BLACK);
        assert_eq!(open.bar, Rgb::WHITE);
    }

    #[test]
    fn test_bad_tokens_fall_back() {
        let mut options = MenuOptions::default();
        options.open_menu_button_color = "midnight".to_string();
        assert_eq!(ButtonPalette::open(&options).background_start, Rgb::BLACK);
    }

    #[test]
    fn test_transition_waits_for_delay() {
        let from = ButtonPalette::default();
        let to = ButtonPalette::open(&MenuOptions::default());
        let mut fade = ColorTransition::new(from, to);

        let (palette, done) = fade.advance(0.05);
        assert_eq!(palette, from);
        assert!(!done);

        let (palette, done) = fade.advance(0.3);
        assert_eq!(palette, to);
        assert!(done);
    }
}
