//! # Content Types
//!
//! Data structures describing what the landing page renders.
//!
//! ## Module Organization
//!
//! - [`menu`] - Slide-out menu entries, social links, navigation targets
//! - [`content`] - Logos, event days, and the [`content::SiteContent`] document
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Enums**: lowercase strings using `#[serde(rename_all = "lowercase")]`
//! - **Missing sections**: every [`content::SiteContent`] field has a default,
//!   so a partial document still deserializes
//!
//! ## Example
//!
//! ```text
//! {
//!   "menu_items": [
//!     { "label": "Timeline", "aria_label": "Go to the timeline", "link": "#timeline" },
//!     { "label": "Register", "aria_label": "Register now", "link": "https://port.asucareercenter.com" }
//!   ],
//!   "social_items": [
//!     { "label": "LinkedIn", "link": "https://linkedin.com", "icon": "linkedin" }
//!   ]
//! }
//! ```

pub mod content;
pub mod menu;

pub use content::*;
pub use menu::*;
