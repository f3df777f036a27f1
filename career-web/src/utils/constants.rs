//! Application constants

/// Page sections, top to bottom. Menu items and `?section=` deep links
/// resolve against these ids.
pub const SECTION_IDS: &[&str] = &[
    "home",
    "partners",
    "timeline",
    "highlights",
    "about",
    "event-partners",
    "connect",
];

/// Query parameter naming the section to scroll to after load.
pub const SECTION_QUERY_PARAM: &str = "section";

/// Wait before honoring a deep link so the page has laid out.
pub const DEEP_LINK_DELAY_MS: u32 = 150;

/// Element shown by `index.html` until the wasm module mounts.
pub const LOADING_ELEMENT_ID: &str = "leptos-loading";

pub const MENU_PANEL_ID: &str = "staggered-menu-panel";

// UI constants
pub const TIMELINE_CARD_DELAY_S: f64 = 0.1;
pub const PAGER_CARD_DELAY_S: f64 = 0.1;
