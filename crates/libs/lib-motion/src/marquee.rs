//! # Partner Marquee
//!
//! Desktop shows the event partners as an endless strip: the card list is
//! rendered twice side by side and shifted left a fixed number of pixels per
//! frame. Once the strip has moved by one full copy it jumps back by exactly
//! that width, which is invisible because the second copy is identical.
//!
//! Mobile shows a small window of cards instead, paged with prev/next buttons
//! and a row of dots ([`PartnerPager`]).

use tracing::debug;

use crate::error::{Error, Result};

/// Horizontal space one card takes in the strip, pixels.
pub const CARD_WIDTH: f64 = 200.0;
/// Pixels moved per animation frame.
pub const SPEED: f64 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub struct Marquee {
    offset: f64,
    speed: f64,
    width: f64,
    paused: bool,
}

impl Marquee {
    /// Strip of `card_count` cards, each `card_width` pixels, moving `speed`
    /// pixels per frame.
    pub fn new(card_width: f64, card_count: usize, speed: f64) -> Result<Self> {
        if !(card_width.is_finite() && card_width > 0.0) {
            return Err(Error::InvalidMarquee(format!("card width must be positive, got {card_width}")));
        }
        if card_count == 0 {
            return Err(Error::InvalidMarquee("no cards to scroll".to_string()));
        }
        if !(speed.is_finite() && speed >= 0.0) {
            return Err(Error::InvalidMarquee(format!("speed must be non-negative, got {speed}")));
        }
        Ok(Self {
            offset: 0.0,
            speed,
            width: card_width * card_count as f64,
            paused: false,
        })
    }

    /// Marquee with the default card width and speed.
    pub fn with_cards(card_count: usize) -> Result<Self> {
        Self::new(CARD_WIDTH, card_count, SPEED)
    }

    /// Current shift in pixels, always in `(-width, 0]`.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Width of one copy of the card list.
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            debug!("marquee {}", if paused { "paused" } else { "resumed" });
        }
        self.paused = paused;
    }

    /// One animation frame.
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }
        self.offset -= self.speed;
        if self.offset <= -self.width {
            self.offset = self.offset % self.width + 0.0;
        }
    }

    /// CSS `transform` for the strip.
    pub fn transform(&self) -> String {
        format!("translateX({}px)", (self.offset * 100.0).round() / 100.0 + 0.0)
    }
}

/// Cards moved by the prev/next buttons.
pub const PAGE_STEP: usize = 5;
/// Cards per dot.
pub const DOT_SET: usize = 3;

/// Mobile pager over the partner list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartnerPager {
    index: usize,
    len: usize,
}

impl PartnerPager {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// First visible card.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + PAGE_STEP) % self.len;
    }

    /// Step back; stepping back from the first page lands on the last
    /// `PAGE_STEP` cards.
    pub fn prev(&mut self) {
        self.index = match self.index.checked_sub(PAGE_STEP) {
            Some(index) => index,
            None => self.len.saturating_sub(PAGE_STEP),
        };
    }

    /// Jump to dot `set`.
    pub fn go_to_set(&mut self, set: usize) {
        if self.len == 0 {
            return;
        }
        self.index = (set * DOT_SET).min(self.len - 1);
    }

    pub fn dot_count(&self) -> usize {
        self.len.div_ceil(DOT_SET)
    }

    pub fn active_dot(&self) -> usize {
        self.index / DOT_SET
    }

    /// Indices of the `count` visible cards, wrapping past the end.
    pub fn visible(&self, count: usize) -> Vec<usize> {
        if self.len == 0 {
            return Vec::new();
        }
        (0..count).map(|i| (self.index + i) % self.len).collect()
    }
}

/// Cards shown by the pager at a given viewport width: two on phones, three
/// on small tablets.
pub fn visible_cards(viewport_width: f64) -> usize {
    if viewport_width < 640.0 {
        2
    } else {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rejects_degenerate_geometry() {
        assert!(matches!(Marquee::new(0.0, 14, SPEED), Err(Error::InvalidMarquee(_))));
        assert!(matches!(Marquee::new(200.0, 0, SPEED), Err(Error::InvalidMarquee(_))));
        assert!(matches!(Marquee::new(200.0, 14, -1.0), Err(Error::InvalidMarquee(_))));
        assert!(Marquee::new(f64::NAN, 14, SPEED).is_err());
    }

    #[test]
    fn test_tick_moves_left_and_wraps() {
        let mut marquee = Marquee::new(10.0, 2, 4.0).unwrap();
        assert_eq!(marquee.width(), 20.0);

        marquee.tick();
        assert_eq!(marquee.offset(), -4.0);
        for _ in 0..4 {
            marquee.tick();
        }
        // -20 wraps to exactly 0
        assert_eq!(marquee.offset(), 0.0);
        marquee.tick();
        assert_eq!(marquee.offset(), -4.0);
    }

    #[test]
    fn test_pause_freezes_offset() {
        let mut marquee = Marquee::with_cards(14).unwrap();
        marquee.tick();
        marquee.set_paused(true);
        marquee.tick();
        marquee.tick();
        assert!((marquee.offset() + SPEED).abs() < 1e-9);
        marquee.set_paused(false);
        marquee.tick();
        assert!((marquee.offset() + 2.0 * SPEED).abs() < 1e-9);
    }

    #[test]
    fn test_transform() {
        let mut marquee = Marquee::with_cards(14).unwrap();
        assert_eq!(marquee.transform(), "translateX(0px)");
        marquee.tick();
        assert_eq!(marquee.transform(), "translateX(-0.8px)");
    }

    #[test]
    fn test_pager_next_wraps() {
        let mut pager = PartnerPager::new(14);
        let seen: Vec<usize> = (0..4)
            .map(|_| {
                pager.next();
                pager.index()
            })
            .collect();
        assert_eq!(seen, vec![5, 10, 1, 6]);
    }

    #[test]
    fn test_pager_prev_from_start_goes_to_last_page() {
        let mut pager = PartnerPager::new(14);
        pager.prev();
        assert_eq!(pager.index(), 9);
        pager.prev();
        assert_eq!(pager.index(), 4);
        pager.prev();
        assert_eq!(pager.index(), 9);
    }

    #[test]
    fn test_pager_dots() {
        let mut pager = PartnerPager::new(14);
        assert_eq!(pager.dot_count(), 5);
        pager.go_to_set(3);
        assert_eq!(pager.index(), 9);
        assert_eq!(pager.active_dot(), 3);
        pager.next();
        assert_eq!(pager.index(), 0);
        assert_eq!(pager.active_dot(), 0);
    }

    #[test]
    fn test_pager_visible_window_wraps() {
        let mut pager = PartnerPager::new(14);
        pager.go_to_set(4);
        assert_eq!(pager.index(), 12);
        assert_eq!(pager.visible(3), vec![12, 13, 0]);
        assert_eq!(visible_cards(375.0), 2);
        assert_eq!(visible_cards(700.0), 3);
    }

    #[test]
    fn test_empty_pager_is_inert() {
        let mut pager = PartnerPager::new(0);
        pager.next();
        pager.prev();
        pager.go_to_set(2);
        assert!(pager.is_empty());
        assert_eq!(pager.index(), 0);
        assert_eq!(pager.dot_count(), 0);
        assert!(pager.visible(3).is_empty());
    }

    proptest! {
        #[test]
        fn offset_stays_within_one_copy(count in 1usize..30, speed in 0.0f64..500.0, frames in 0usize..2_000) {
            let mut marquee = Marquee::new(CARD_WIDTH, count, speed).unwrap();
            for _ in 0..frames {
                marquee.tick();
                prop_assert!(marquee.offset() <= 0.0);
                prop_assert!(marquee.offset() > -marquee.width());
            }
        }

        #[test]
        fn pager_index_stays_in_bounds(len in 1usize..40, moves in proptest::collection::vec(0u8..3, 0..50)) {
            let mut pager = PartnerPager::new(len);
            for m in moves {
                match m {
                    0 => pager.next(),
                    1 => pager.prev(),
                    _ => pager.go_to_set(pager.active_dot() + 1),
                }
                prop_assert!(pager.index() < len);
                prop_assert!(pager.active_dot() < pager.dot_count());
            }
        }
    }
}
