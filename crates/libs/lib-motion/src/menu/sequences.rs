//! Open, close and icon timelines.
//!
//! All offsets are seconds from the start of the sequence.

use crate::easing::Ease;
use crate::scene::{Prop, Scene, Target};
use crate::timeline::Timeline;

pub const BUTTON_FADE_OUT: f64 = 0.2;
pub const DISPLAY_AT: f64 = 0.15;
pub const LAYERS_START: f64 = 0.2;
pub const LAYER_STAGGER: f64 = 0.05;
pub const LAYER_DURATION: f64 = 0.4;
pub const PANEL_DURATION: f64 = 0.5;
/// Items start this far into the panel slide.
pub const ITEMS_START_RATIO: f64 = 0.15;
pub const ITEM_STAGGER: f64 = 0.08;
pub const ITEM_DURATION: f64 = 0.8;
pub const NUMBERS_DELAY: f64 = 0.08;
pub const NUMBER_STAGGER: f64 = 0.06;
pub const NUMBER_DURATION: f64 = 0.5;
/// Socials start this far into the panel slide.
pub const SOCIALS_START_RATIO: f64 = 0.25;
pub const SOCIAL_TITLE_DURATION: f64 = 0.4;
pub const SOCIAL_LINKS_DELAY: f64 = 0.03;
pub const SOCIAL_STAGGER: f64 = 0.06;
pub const SOCIAL_DURATION: f64 = 0.45;

pub const CLOSE_SLIDE: f64 = 0.25;
pub const BUTTON_FADE_IN_AT: f64 = 0.2;
pub const BUTTON_FADE_IN: f64 = 0.3;

/// Vertical travel of the outer icon bars when forming the X, pixels.
pub const ICON_BAR_SHIFT: f64 = 6.0;
pub const ICON_BAR_ANGLE: f64 = 45.0;

/// Offset at which the main panel starts sliding in.
pub fn panel_start(backdrops: usize) -> f64 {
    let last_layer = LAYERS_START + backdrops.saturating_sub(1) as f64 * LAYER_STAGGER;
    last_layer + LAYER_STAGGER
}

pub fn open(scene: &Scene) -> Timeline {
    let mut tl = Timeline::new("menu-open");

    tl.to(Target::ToggleButton, &[(Prop::Opacity, 0.0)], 0.0, BUTTON_FADE_OUT, Ease::Power2Out);
    tl.set_displayed(scene.sliding_targets(), true, DISPLAY_AT);

    let shown = [(Prop::Opacity, 1.0), (Prop::XPercent, 0.0)];
    tl.stagger(
        (0..scene.backdrops.len()).map(Target::Backdrop),
        &shown,
        LAYERS_START,
        LAYER_STAGGER,
        LAYER_DURATION,
        Ease::Power4Out,
    );

    let panel_at = panel_start(scene.backdrops.len());
    tl.to(Target::Panel, &shown, panel_at, PANEL_DURATION, Ease::Power4Out);

    if !scene.item_labels.is_empty() {
        let items_at = panel_at + PANEL_DURATION * ITEMS_START_RATIO;
        tl.stagger(
            (0..scene.item_labels.len()).map(Target::ItemLabel),
            &[(Prop::YPercent, 0.0), (Prop::Rotate, 0.0)],
            items_at,
            ITEM_STAGGER,
            ITEM_DURATION,
            Ease::Power4Out,
        );
        tl.stagger(
            (0..scene.item_numbers.len()).map(Target::ItemNumber),
            &[(Prop::Opacity, 1.0)],
            items_at + NUMBERS_DELAY,
            NUMBER_STAGGER,
            NUMBER_DURATION,
            Ease::Power2Out,
        );
    }

    if scene.social_title.is_some() || !scene.social_links.is_empty() {
        let socials_at = panel_at + PANEL_DURATION * SOCIALS_START_RATIO;
        tl.to(Target::SocialTitle, &[(Prop::Opacity, 1.0)], socials_at, SOCIAL_TITLE_DURATION, Ease::Power2Out);
        tl.stagger(
            (0..scene.social_links.len()).map(Target::SocialLink),
            &[(Prop::Y, 0.0), (Prop::Opacity, 1.0)],
            socials_at + SOCIAL_LINKS_DELAY,
            SOCIAL_STAGGER,
            SOCIAL_DURATION,
            Ease::Power3Out,
        );
    }

    tl
}

pub fn close(scene: &Scene) -> Timeline {
    let mut tl = Timeline::new("menu-close");
    let sliding = scene.sliding_targets();
    let hidden = [(Prop::XPercent, scene.edge().offscreen_x_percent()), (Prop::Opacity, 0.0)];

    for &target in &sliding {
        tl.to(target, &hidden, 0.0, CLOSE_SLIDE, Ease::Power3In);
    }
    tl.set_displayed(sliding, false, CLOSE_SLIDE);
    tl.to(Target::ToggleButton, &[(Prop::Opacity, 1.0)], BUTTON_FADE_IN_AT, BUTTON_FADE_IN, Ease::Power2Out);

    tl
}

/// Hamburger to X when `opening`, X back to hamburger otherwise.
pub fn icon(opening: bool) -> Timeline {
    let mut tl = Timeline::new(if opening { "icon-open" } else { "icon-close" });
    let (shift, angle, middle, bar_duration, ease) = if opening {
        (ICON_BAR_SHIFT, ICON_BAR_ANGLE, 0.0, 0.4, Ease::Power4Out)
    } else {
        (0.0, 0.0, 1.0, 0.3, Ease::Power3InOut)
    };

    tl.to(Target::IconBar(0), &[(Prop::Y, shift), (Prop::Rotate, angle)], 0.0, bar_duration, ease);
    tl.to(Target::IconBar(1), &[(Prop::Opacity, middle)], 0.0, 0.25, ease);
    tl.to(Target::IconBar(2), &[(Prop::Y, -shift), (Prop::Rotate, -angle)], 0.0, bar_duration, ease);

    tl
}

