//! # Slide-Out Menu Controller
//!
//! State machine behind the staggered slide-out menu.
//!
//! ```text
//!            toggle                 open timeline done
//!   Closed ─────────► Opening ─────────────────────────► Open
//!     ▲                 │  ▲                               │
//!     │          toggle │  │ toggle                        │ toggle
//!     │                 ▼  │                               │
//!     └──────────────── Closing ◄──────────────────────────┘
//!      close timeline done
//! ```
//!
//! ## Guarantees
//!
//! - Every [`MenuController::toggle`] returns exactly one [`MenuEvent`]; frames
//!   and timeline completion never produce events.
//! - At most one open or close sequence exists at a time. Starting one drops
//!   (cancels) the other, and the new one starts from the current animated
//!   values, so reversing mid-flight never snaps.
//! - When a close sequence completes, labels, ordinal numbers and socials are
//!   put back in their pre-entrance state, so every open starts identically.
//! - The panel's layout flag is only changed by timelines; `aria-hidden` is
//!   derived from it.

mod palette;
pub mod sequences;


use std::time::Duration;

use shared::dto::menu::{MenuItem, NavTarget};
use tracing::debug;

use crate::options::MenuOptions;
use crate::scene::{Scene, SceneLayout};
use crate::timeline::Timeline;

pub use palette::{ButtonPalette, ColorTransition, COLOR_DELAY, COLOR_DURATION};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl MenuState {
    /// `Opening` or `Open`: the user's last request was to open.
    pub fn is_open_family(self) -> bool {
        matches!(self, MenuState::Opening | MenuState::Open)
    }

    pub fn is_transitioning(self) -> bool {
        matches!(self, MenuState::Opening | MenuState::Closing)
    }
}

/// Notification emitted once per toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Opened,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    Open,
    Close,
}

/// Identifies one run of the open or close sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationHandle {
    id: u64,
    kind: SequenceKind,
}

impl AnimationHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> SequenceKind {
        self.kind
    }
}

#[derive(Debug, Clone)]
struct Running {
    handle: AnimationHandle,
    timeline: Timeline,
}

/// What the caller must do after [`MenuController::navigate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub target: NavTarget,
    /// `Some(Closed)` when navigating closed the menu.
    pub event: Option<MenuEvent>,
}

#[derive(Debug, Clone)]
pub struct MenuController {
    layout: SceneLayout,
    state: MenuState,
    scene: Scene,
    sequence: Option<Running>,
    icon: Option<Timeline>,
    color: Option<ColorTransition>,
    palette: ButtonPalette,
    closed_palette: ButtonPalette,
    open_palette: ButtonPalette,
    change_color: bool,
    next_handle: u64,
}

impl MenuController {
    pub fn new(options: &MenuOptions, layout: SceneLayout) -> Self {
        let closed_palette = ButtonPalette::closed(options);
        Self {
            layout,
            state: MenuState::Closed,
            scene: Scene::new(&layout),
            sequence: None,
            icon: None,
            color: None,
            palette: closed_palette,
            closed_palette,
            open_palette: ButtonPalette::open(options),
            change_color: options.change_menu_color_on_open,
            next_handle: 0,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open_family()
    }

    pub fn layout(&self) -> &SceneLayout {
        &self.layout
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Current toggle button colors.
    pub fn palette(&self) -> ButtonPalette {
        self.palette
    }

    /// Whether any timeline or color fade still needs frames.
    pub fn is_animating(&self) -> bool {
        self.sequence.is_some() || self.icon.is_some() || self.color.is_some()
    }

    pub fn active_sequence(&self) -> Option<AnimationHandle> {
        self.sequence.as_ref().map(|running| running.handle)
    }

    /// Flip between open and closed, reversing any sequence in flight.
    pub fn toggle(&mut self) -> MenuEvent {
        let opening = !self.state.is_open_family();
        let kind = if opening { SequenceKind::Open } else { SequenceKind::Close };

        if let Some(previous) = self.sequence.take() {
            debug!(
                "cancelling {:?} sequence #{} at {:.3}s",
                previous.handle.kind,
                previous.handle.id,
                previous.timeline.elapsed()
            );
        }

        let timeline = if opening {
            sequences::open(&self.scene)
        } else {
            sequences::close(&self.scene)
        };
        self.next_handle += 1;
        let handle = AnimationHandle {
            id: self.next_handle,
            kind,
        };
        self.sequence = Some(Running { handle, timeline });
        self.icon = Some(sequences::icon(opening));

        if self.change_color {
            let target = if opening { self.open_palette } else { self.closed_palette };
            self.color = Some(ColorTransition::new(self.palette, target));
        }

        self.state = if opening { MenuState::Opening } else { MenuState::Closing };
        debug!("menu {:?} (sequence #{})", self.state, handle.id);

        if opening {
            MenuEvent::Opened
        } else {
            MenuEvent::Closed
        }
    }

    /// Close if the menu is open or opening; otherwise nothing happens.
    pub fn close(&mut self) -> Option<MenuEvent> {
        self.state.is_open_family().then(|| self.toggle())
    }

    /// Pointer-down anywhere on the page. Outside the menu root while open,
    /// this closes the menu.
    pub fn pointer_down(&mut self, inside_menu: bool) -> Option<MenuEvent> {
        if inside_menu {
            return None;
        }
        self.close()
    }

    /// Resolve a menu item and close the menu. The caller performs the
    /// returned navigation.
    pub fn navigate(&mut self, item: &MenuItem) -> Navigation {
        let target = item.target();
        debug!("navigate to {:?}", target);
        Navigation {
            target,
            event: self.close(),
        }
    }

    /// Advance every running animation by `dt`. Returns the new state when a
    /// sequence settled during this tick.
    pub fn tick(&mut self, dt: Duration) -> Option<MenuState> {
        let dt = dt.as_secs_f64();
        let mut settled = None;

        if let Some(running) = &mut self.sequence {
            if running.timeline.advance(dt, &mut self.scene) {
                let kind = running.handle.kind;
                self.sequence = None;
                self.state = match kind {
                    SequenceKind::Open => MenuState::Open,
                    SequenceKind::Close => {
                        self.scene.reset_entrance();
                        MenuState::Closed
                    }
                };
                debug!("menu settled {:?}", self.state);
                settled = Some(self.state);
            }
        }

        if let Some(icon) = &mut self.icon {
            if icon.advance(dt, &mut self.scene) {
                self.icon = None;
            }
        }

        if let Some(color) = &mut self.color {
            let (palette, done) = color.advance(dt);
            self.palette = palette;
            if done {
                self.color = None;
            }
        }

        settled
    }

    /// Drop every running animation without touching the scene. Called on
    /// unmount.
    pub fn cancel_all(&mut self) {
        if self.is_animating() {
            debug!("cancelling all menu animations");
        }
        self.sequence = None;
        self.icon = None;
        self.color = None;
    }
}
