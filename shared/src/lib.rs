//! # Shared Page Content Library
//!
//! This library defines the content model shared between the landing page
//! front-end and the animation core: menu entries, social links, partner logos
//! and the five event days. All types are plain data and deserialize from the
//! site content JSON via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Content types
//!   - **[`dto::menu`]**: Menu items, social items and navigation targets
//!   - **[`dto::content`]**: Logos, event days and the full [`SiteContent`] document
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_ordinal`]**: Two-digit ordinal labels for menu numbering
//!
//! ## Wire Format
//!
//! Content JSON uses the default `serde` behavior:
//! - Field names are **snake_case**
//! - Enums serialize to **lowercase** strings
//! - Dates use ISO-8601 (`2025-10-19`)
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::menu::{MenuItem, NavTarget};
//!
//! let item = MenuItem::new("Timeline", "Go to the event timeline", "#timeline");
//! assert_eq!(item.target(), NavTarget::Section("timeline".to_string()));
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
