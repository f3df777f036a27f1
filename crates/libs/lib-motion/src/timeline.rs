//! # Timelines
//!
//! A [`Timeline`] is a list of steps scheduled by start offset (seconds from
//! the beginning of the timeline). Steps overlap freely: a later step may
//! start before an earlier one finishes.
//!
//! - **Tween** steps interpolate one property of one target. The start value
//!   is captured the first time the step becomes active, so a timeline built
//!   while another animation was half-way through continues from wherever that
//!   animation left the element.
//! - **Set** steps flip an element's layout flag once, at their offset.
//!
//! Dropping a timeline cancels it: nothing is written after that.
//!
//! ```rust
//! use lib_motion::{Ease, MenuOptions, Prop, Scene, SceneLayout, Target, Timeline};
//!
//! let mut scene = Scene::new(&SceneLayout::new(&MenuOptions::default(), 3, 0));
//! let mut timeline = Timeline::new("labels");
//! timeline.stagger(
//!     (0..3).map(Target::ItemLabel),
//!     &[(Prop::YPercent, 0.0)],
//!     0.0,
//!     0.08,
//!     0.8,
//!     Ease::Power4Out,
//! );
//! assert!((timeline.duration() - 0.96).abs() < 1e-9);
//!
//! timeline.advance(1.0, &mut scene);
//! assert!(timeline.is_complete());
//! assert!(scene.item_labels.iter().all(|label| label.y_percent == 0.0));
//! ```

use tracing::trace;

use crate::easing::Ease;
use crate::scene::{Prop, Scene, Target};

#[derive(Debug, Clone, PartialEq)]
struct Tween {
    target: Target,
    prop: Prop,
    to: f64,
    from: Option<f64>,
    at: f64,
    duration: f64,
    ease: Ease,
}

impl Tween {
    fn end(&self) -> f64 {
        self.at + self.duration
    }

    fn apply(&mut self, elapsed: f64, scene: &mut Scene) {
        if elapsed < self.at {
            return;
        }
        let Some(visual) = scene.visual_mut(self.target) else {
            return;
        };
        let from = *self.from.get_or_insert_with(|| visual.get(self.prop));
        let progress = if self.duration <= 0.0 || elapsed >= self.end() {
            1.0
        } else {
            (elapsed - self.at) / self.duration
        };
        let value = from + (self.to - from) * self.ease.apply(progress);
        visual.set(self.prop, value);
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Set {
    target: Target,
    displayed: bool,
    at: f64,
    fired: bool,
}

#[derive(Debug, Clone, PartialEq)]
enum Step {
    Tween(Tween),
    Set(Set),
}

impl Step {
    fn end(&self) -> f64 {
        match self {
            Step::Tween(tween) => tween.end(),
            Step::Set(set) => set.at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    name: &'static str,
    steps: Vec<Step>,
    elapsed: f64,
}

impl Timeline {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            steps: Vec::new(),
            elapsed: 0.0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Tween each `(prop, value)` pair on `target`, starting at `at`.
    pub fn to(&mut self, target: Target, props: &[(Prop, f64)], at: f64, duration: f64, ease: Ease) -> &mut Self {
        for &(prop, to) in props {
            self.steps.push(Step::Tween(Tween {
                target,
                prop,
                to,
                from: None,
                at: at.max(0.0),
                duration: duration.max(0.0),
                ease,
            }));
        }
        self
    }

    /// Same tween on several targets, each starting `each` seconds after the
    /// previous, in iteration order.
    pub fn stagger<I>(&mut self, targets: I, props: &[(Prop, f64)], at: f64, each: f64, duration: f64, ease: Ease) -> &mut Self
    where
        I: IntoIterator<Item = Target>,
    {
        for (i, target) in targets.into_iter().enumerate() {
            self.to(target, props, at + i as f64 * each, duration, ease);
        }
        self
    }

    /// Put targets in or out of layout at `at`.
    pub fn set_displayed<I>(&mut self, targets: I, displayed: bool, at: f64) -> &mut Self
    where
        I: IntoIterator<Item = Target>,
    {
        for target in targets {
            self.steps.push(Step::Set(Set {
                target,
                displayed,
                at: at.max(0.0),
                fired: false,
            }));
        }
        self
    }

    /// Offset at which the last step finishes.
    pub fn duration(&self) -> f64 {
        self.steps.iter().map(Step::end).fold(0.0, f64::max)
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration()
    }

    /// Move the playhead forward by `dt` seconds and write every active step
    /// into `scene`. Returns `true` once the timeline has finished.
    pub fn advance(&mut self, dt: f64, scene: &mut Scene) -> bool {
        self.elapsed += dt.max(0.0);
        let elapsed = self.elapsed;
        for step in &mut self.steps {
            match step {
                Step::Tween(tween) => tween.apply(elapsed, scene),
                Step::Set(set) => {
                    if !set.fired && elapsed >= set.at {
                        set.fired = true;
                        if let Some(visual) = scene.visual_mut(set.target) {
                            visual.displayed = set.displayed;
                        }
                    }
                }
            }
        }
        let complete = self.is_complete();
        if complete {
            trace!("timeline '{}' complete after {:.3}s", self.name, self.elapsed);
        }
        complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::MenuOptions;
    use crate::scene::SceneLayout;

    fn scene() -> Scene {
        Scene::new(&SceneLayout::new(&MenuOptions::default(), 3, 2))
    }

    #[test]
    fn test_empty_timeline_is_complete() {
        let mut scene = scene();
        let mut timeline = Timeline::new("empty");
        assert_eq!(timeline.duration(), 0.0);
        assert!(timeline.advance(0.0, &mut scene));
    }

    #[test]
    fn test_tween_interpolates_with_ease() {
        let mut scene = scene();
        let mut timeline = Timeline::new("fade");
        timeline.to(Target::ToggleButton, &[(Prop::Opacity, 0.0)], 0.0, 1.0, Ease::Linear);

        timeline.advance(0.25, &mut scene);
        assert!((scene.toggle_button.opacity - 0.75).abs() < 1e-9);
        assert!(!timeline.is_complete());

        timeline.advance(0.75, &mut scene);
        assert_eq!(scene.toggle_button.opacity, 0.0);
        assert!(timeline.is_complete());
    }

    #[test]
    fn test_tween_waits_for_offset() {
        let mut scene = scene();
        let before = scene.panel;
        let mut timeline = Timeline::new("late");
        timeline.to(Target::Panel, &[(Prop::XPercent, 0.0)], 0.5, 0.5, Ease::Power4Out);

        timeline.advance(0.4, &mut scene);
        assert_eq!(scene.panel, before);
        timeline.advance(0.6, &mut scene);
        assert_eq!(scene.panel.x_percent, 0.0);
    }

    #[test]
    fn test_from_value_captured_at_activation() {
        let mut scene = scene();
        let mut timeline = Timeline::new("capture");
        timeline.to(Target::ToggleButton, &[(Prop::Opacity, 1.0)], 0.5, 1.0, Ease::Linear);

        scene.toggle_button.opacity = 0.2;
        timeline.advance(0.5, &mut scene);
        assert!((scene.toggle_button.opacity - 0.2).abs() < 1e-9);

        timeline.advance(0.5, &mut scene);
        assert!((scene.toggle_button.opacity - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_set_fires_once_at_offset() {
        let mut scene = scene();
        let mut timeline = Timeline::new("display");
        timeline.set_displayed([Target::Panel, Target::Backdrop(0)], true, 0.15);

        timeline.advance(0.1, &mut scene);
        assert!(!scene.panel.displayed);
        timeline.advance(0.05, &mut scene);
        assert!(scene.panel.displayed);
        assert!(scene.backdrops[0].displayed);

        scene.panel.displayed = false;
        timeline.advance(0.1, &mut scene);
        assert!(!scene.panel.displayed, "set steps must not fire twice");
    }

    #[test]
    fn test_missing_targets_are_skipped() {
        let mut scene = scene();
        let snapshot = scene.clone();
        let mut timeline = Timeline::new("missing");
        timeline
            .to(Target::ItemLabel(10), &[(Prop::YPercent, 0.0)], 0.0, 0.2, Ease::Linear)
            .set_displayed([Target::Backdrop(9)], true, 0.0);

        assert!(timeline.advance(1.0, &mut scene));
        assert_eq!(scene, snapshot);
    }

    #[test]
    fn test_stagger_offsets() {
        let mut scene = scene();
        let mut timeline = Timeline::new("stagger");
        timeline.stagger((0..3).map(Target::ItemNumber), &[(Prop::Opacity, 1.0)], 0.1, 0.1, 0.1, Ease::Linear);

        timeline.advance(0.2, &mut scene);
        assert_eq!(scene.item_numbers[0].opacity, 1.0);
        assert_eq!(scene.item_numbers[1].opacity, 0.0);
        assert_eq!(scene.item_numbers[2].opacity, 0.0);
        assert!((timeline.duration() - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut scene = scene();
        let mut timeline = Timeline::new("jump");
        timeline.to(Target::SocialLink(1), &[(Prop::Y, 0.0), (Prop::Opacity, 1.0)], 0.0, 0.0, Ease::Power3Out);
        assert!(timeline.advance(0.0, &mut scene));
        assert_eq!(scene.social_links[1].y, 0.0);
        assert_eq!(scene.social_links[1].opacity, 1.0);
    }
}
