//! # Animated Scene
//!
//! Every element the menu animates owns one [`Visual`]: opacity, transform
//! components and whether it takes part in layout. Timelines write into the
//! scene; the view reads from it.
//!
//! Elements are addressed by [`Target`]. Looking up a target that does not
//! exist (an item index past the end, numbers when numbering is off) yields
//! `None`, and timelines skip such steps.

use crate::options::{DockEdge, MenuOptions};

/// Label offset before the entrance, percent of its own height.
pub const LABEL_HIDDEN_Y_PERCENT: f64 = 140.0;
/// Label tilt before the entrance, degrees.
pub const LABEL_HIDDEN_ROTATE: f64 = 10.0;
/// Social link offset before the entrance, pixels.
pub const SOCIAL_HIDDEN_Y: f64 = 25.0;

/// Animatable property of a [`Visual`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prop {
    Opacity,
    XPercent,
    YPercent,
    /// Vertical offset in pixels.
    Y,
    /// Rotation in degrees.
    Rotate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    pub opacity: f64,
    pub x_percent: f64,
    pub y_percent: f64,
    pub y: f64,
    pub rotate: f64,
    /// `false` means removed from layout (`display: none`).
    pub displayed: bool,
}

impl Visual {
    /// Fully visible, untransformed.
    pub const REST: Visual = Visual {
        opacity: 1.0,
        x_percent: 0.0,
        y_percent: 0.0,
        y: 0.0,
        rotate: 0.0,
        displayed: true,
    };

    /// Off-screen on `edge`, transparent and out of layout.
    pub fn offscreen(edge: DockEdge) -> Self {
        Visual {
            opacity: 0.0,
            x_percent: edge.offscreen_x_percent(),
            displayed: false,
            ..Visual::REST
        }
    }

    pub fn get(&self, prop: Prop) -> f64 {
        match prop {
            Prop::Opacity => self.opacity,
            Prop::XPercent => self.x_percent,
            Prop::YPercent => self.y_percent,
            Prop::Y => self.y,
            Prop::Rotate => self.rotate,
        }
    }

    pub fn set(&mut self, prop: Prop, value: f64) {
        match prop {
            Prop::Opacity => self.opacity = value,
            Prop::XPercent => self.x_percent = value,
            Prop::YPercent => self.y_percent = value,
            Prop::Y => self.y = value,
            Prop::Rotate => self.rotate = value,
        }
    }

    /// CSS `transform` for this visual.
    pub fn transform(&self) -> String {
        format!(
            "translate({}%, calc({}% + {}px)) rotate({}deg)",
            round3(self.x_percent),
            round3(self.y_percent),
            round3(self.y),
            round3(self.rotate)
        )
    }

    /// Inline style combining layout, opacity and transform.
    pub fn style(&self) -> String {
        self.style_with_display("block")
    }

    /// Like [`Visual::style`], with `display` as the shown layout mode.
    pub fn style_with_display(&self, display: &str) -> String {
        format!(
            "display: {}; opacity: {}; transform: {};",
            if self.displayed { display } else { "none" },
            round3(self.opacity),
            self.transform()
        )
    }

    /// Opacity and transform only, for elements whose layout is static.
    pub fn motion_style(&self) -> String {
        format!("opacity: {}; transform: {};", round3(self.opacity), self.transform())
    }
}

// `+ 0.0` folds -0 into 0 so styles never print "-0".
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0 + 0.0
}

/// Addressable element of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    ToggleButton,
    Backdrop(usize),
    Panel,
    ItemLabel(usize),
    ItemNumber(usize),
    SocialTitle,
    SocialLink(usize),
    /// Hamburger bars, top to bottom.
    IconBar(usize),
}

/// How many of each element the menu renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneLayout {
    pub backdrops: usize,
    pub items: usize,
    pub numbered: bool,
    pub socials: usize,
    pub edge: DockEdge,
}

impl SceneLayout {
    /// Derive the layout from options plus content counts.
    ///
    /// Socials are dropped entirely when hidden or empty.
    pub fn new(options: &MenuOptions, items: usize, socials: usize) -> Self {
        Self {
            backdrops: options.colors.len(),
            items,
            numbered: options.display_item_numbering,
            socials: if options.display_socials { socials } else { 0 },
            edge: options.position,
        }
    }

    pub fn has_socials(&self) -> bool {
        self.socials > 0
    }
}

pub const ICON_BARS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub toggle_button: Visual,
    pub backdrops: Vec<Visual>,
    pub panel: Visual,
    pub item_labels: Vec<Visual>,
    pub item_numbers: Vec<Visual>,
    pub social_title: Option<Visual>,
    pub social_links: Vec<Visual>,
    pub icon_bars: [Visual; ICON_BARS],
    edge: DockEdge,
}

impl Scene {
    /// Scene as mounted: panel and backdrops hidden off-screen, entrance
    /// values primed, hamburger at rest.
    pub fn new(layout: &SceneLayout) -> Self {
        let hidden = Visual::offscreen(layout.edge);
        let mut scene = Self {
            toggle_button: Visual::REST,
            backdrops: vec![hidden; layout.backdrops],
            panel: hidden,
            item_labels: vec![Visual::REST; layout.items],
            item_numbers: if layout.numbered { vec![Visual::REST; layout.items] } else { Vec::new() },
            social_title: layout.has_socials().then_some(Visual::REST),
            social_links: vec![Visual::REST; layout.socials],
            icon_bars: [Visual::REST; ICON_BARS],
            edge: layout.edge,
        };
        scene.reset_entrance();
        scene
    }

    pub fn edge(&self) -> DockEdge {
        self.edge
    }

    pub fn visual(&self, target: Target) -> Option<&Visual> {
        match target {
            Target::ToggleButton => Some(&self.toggle_button),
            Target::Backdrop(i) => self.backdrops.get(i),
            Target::Panel => Some(&self.panel),
            Target::ItemLabel(i) => self.item_labels.get(i),
            Target::ItemNumber(i) => self.item_numbers.get(i),
            Target::SocialTitle => self.social_title.as_ref(),
            Target::SocialLink(i) => self.social_links.get(i),
            Target::IconBar(i) => self.icon_bars.get(i),
        }
    }

    pub fn visual_mut(&mut self, target: Target) -> Option<&mut Visual> {
        match target {
            Target::ToggleButton => Some(&mut self.toggle_button),
            Target::Backdrop(i) => self.backdrops.get_mut(i),
            Target::Panel => Some(&mut self.panel),
            Target::ItemLabel(i) => self.item_labels.get_mut(i),
            Target::ItemNumber(i) => self.item_numbers.get_mut(i),
            Target::SocialTitle => self.social_title.as_mut(),
            Target::SocialLink(i) => self.social_links.get_mut(i),
            Target::IconBar(i) => self.icon_bars.get_mut(i),
        }
    }

    /// Targets that slide with the panel: backdrops first, then the panel.
    pub fn sliding_targets(&self) -> Vec<Target> {
        (0..self.backdrops.len())
            .map(Target::Backdrop)
            .chain(std::iter::once(Target::Panel))
            .collect()
    }

    /// Put labels, numbers and socials back in their pre-entrance state.
    pub fn reset_entrance(&mut self) {
        for label in &mut self.item_labels {
            label.y_percent = LABEL_HIDDEN_Y_PERCENT;
            label.rotate = LABEL_HIDDEN_ROTATE;
        }
        for number in &mut self.item_numbers {
            number.opacity = 0.0;
        }
        if let Some(title) = &mut self.social_title {
            title.opacity = 0.0;
        }
        for link in &mut self.social_links {
            link.y = SOCIAL_HIDDEN_Y;
            link.opacity = 0.0;
        }
    }

    /// Whether the panel currently takes part in layout. Drives `aria-hidden`.
    pub fn panel_displayed(&self) -> bool {
        self.panel.displayed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> SceneLayout {
        SceneLayout::new(&MenuOptions::default(), 4, 3)
    }

    #[test]
    fn test_initial_scene_is_hidden_and_primed() {
        let scene = Scene::new(&layout());
        assert!(!scene.panel_displayed());
        assert_eq!(scene.panel.x_percent, 100.0);
        assert_eq!(scene.backdrops.len(), 3);
        assert!(scene.backdrops.iter().all(|b| !b.displayed && b.opacity == 0.0));
        assert!(scene.item_labels.iter().all(|l| l.y_percent == LABEL_HIDDEN_Y_PERCENT));
        assert!(scene.item_numbers.iter().all(|n| n.opacity == 0.0));
        assert_eq!(scene.social_title.map(|t| t.opacity), Some(0.0));
        assert!(scene.social_links.iter().all(|s| s.y == SOCIAL_HIDDEN_Y));
        assert_eq!(scene.toggle_button, Visual::REST);
    }

    #[test]
    fn test_missing_targets_are_none() {
        let options = MenuOptions::new().display_item_numbering(false).display_socials(false);
        let mut scene = Scene::new(&SceneLayout::new(&options, 2, 3));
        assert!(scene.visual(Target::ItemLabel(2)).is_none());
        assert!(scene.visual(Target::ItemNumber(0)).is_none());
        assert!(scene.visual(Target::SocialTitle).is_none());
        assert!(scene.visual_mut(Target::SocialLink(0)).is_none());
        assert!(scene.visual(Target::IconBar(3)).is_none());
    }

    #[test]
    fn test_left_edge_hides_to_the_left() {
        let options = MenuOptions::new().position(DockEdge::Left);
        let scene = Scene::new(&SceneLayout::new(&options, 1, 0));
        assert_eq!(scene.panel.x_percent, -100.0);
        assert_eq!(scene.edge(), DockEdge::Left);
    }

    #[test]
    fn test_sliding_targets_order() {
        let scene = Scene::new(&layout());
        assert_eq!(
            scene.sliding_targets(),
            vec![Target::Backdrop(0), Target::Backdrop(1), Target::Backdrop(2), Target::Panel]
        );
    }

    #[test]
    fn test_style_strings() {
        let visual = Visual::offscreen(DockEdge::Right);
        assert_eq!(
            visual.style(),
            "display: none; opacity: 0; transform: translate(100%, calc(0% + 0px)) rotate(0deg);"
        );
        let mut label = Visual::REST;
        label.set(Prop::YPercent, 12.34567);
        assert_eq!(label.get(Prop::YPercent), 12.34567);
        assert!(label.transform().contains("calc(12.346% + 0px)"));

        let mut panel = Visual::REST;
        assert!(panel.style_with_display("flex").starts_with("display: flex;"));
        panel.displayed = false;
        assert!(panel.style_with_display("flex").starts_with("display: none;"));
        assert_eq!(
            Visual::REST.motion_style(),
            "opacity: 1; transform: translate(0%, calc(0% + 0px)) rotate(0deg);"
        );
    }
}
