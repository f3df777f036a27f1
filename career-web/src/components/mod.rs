//! UI Components

pub mod icons;
pub mod partner_carousel;
pub mod staggered_menu;

pub use icons::{Icon, IconKind};
pub use partner_carousel::PartnerCarousel;
pub use staggered_menu::StaggeredMenu;
