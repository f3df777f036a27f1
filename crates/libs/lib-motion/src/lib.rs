//! # Motion Library
//!
//! Platform-independent animation core for the landing page. Nothing in here
//! touches the DOM: animations are expressed as [`Timeline`]s that write
//! opacity and transform values into a [`Scene`], and the front-end binds its
//! element styles to that scene.
//!
//! ## Modules
//!
//! - [`easing`] - Power-curve easing functions
//! - [`color`] - Hex color parsing and interpolation
//! - [`scene`] - Animated values for every element the menu owns
//! - [`timeline`] - Tweens, set-steps and staggers scheduled by start offset
//! - [`options`] - Menu construction options
//! - [`menu`] - The slide-out menu controller state machine
//! - [`marquee`] - Partner logo marquee and mobile pager
//!
//! ## Driving the controller
//!
//! ```rust
//! use std::time::Duration;
//! use lib_motion::{MenuController, MenuEvent, MenuOptions, MenuState, SceneLayout};
//!
//! let layout = SceneLayout::new(&MenuOptions::default(), 4, 3);
//! let mut menu = MenuController::new(&MenuOptions::default(), layout);
//!
//! assert_eq!(menu.toggle(), MenuEvent::Opened);
//! while menu.is_animating() {
//!     menu.tick(Duration::from_millis(16));
//! }
//! assert_eq!(menu.state(), MenuState::Open);
//! ```

pub mod color;
pub mod easing;
pub mod error;
pub mod marquee;
pub mod menu;
pub mod options;
pub mod scene;
pub mod timeline;

pub use color::Rgb;
pub use easing::Ease;
pub use error::{Error, Result};
pub use marquee::{Marquee, PartnerPager};
pub use menu::{AnimationHandle, ButtonPalette, MenuController, MenuEvent, MenuState, Navigation, SequenceKind};
pub use options::{DockEdge, MenuOptions};
pub use scene::{Prop, Scene, SceneLayout, Target, Visual};
pub use timeline::Timeline;
