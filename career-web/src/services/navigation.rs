//! In-page and external navigation
//!
//! External URLs open in a new browsing context; section ids scroll the
//! matching element into view. Failures are reported but never block the
//! caller: the menu closes either way.

use shared::dto::menu::NavTarget;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::js_error_message;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("No window available")]
    NoWindow,

    #[error("No document available")]
    NoDocument,

    #[error("Section not found: #{0}")]
    SectionNotFound(String),

    #[error("Popup blocked while opening {0}")]
    PopupBlocked(String),

    #[error("Browser error: {0}")]
    Browser(String),
}

impl From<JsValue> for NavigationError {
    fn from(value: JsValue) -> Self {
        NavigationError::Browser(js_error_message(&value))
    }
}

/// Follow a navigation target.
pub fn navigate(target: &NavTarget) -> Result<(), NavigationError> {
    match target {
        NavTarget::External(url) => open_external(url),
        NavTarget::Section(id) => scroll_to_section(id),
    }
}

/// Follow a raw link string, logging failures. Suitable as an `on_navigate`
/// callback.
pub fn navigate_link(link: &str) {
    let target = NavTarget::parse(link);
    if let Err(err) = navigate(&target) {
        log::warn!("Navigation to '{}' failed: {}", link, err);
    }
}

/// Open `url` in a new tab without giving it a handle back to this page.
pub fn open_external(url: &str) -> Result<(), NavigationError> {
    let window = web_sys::window().ok_or(NavigationError::NoWindow)?;
    let opened = window
        .open_with_url_and_target(url, "_blank")?
        .ok_or_else(|| NavigationError::PopupBlocked(url.to_string()))?;
    opened.set_opener(&JsValue::NULL)?;
    log::debug!("Opened external link {}", url);
    Ok(())
}

/// Smoothly scroll the element with id `id` to the top of the viewport.
pub fn scroll_to_section(id: &str) -> Result<(), NavigationError> {
    let document = web_sys::window()
        .ok_or(NavigationError::NoWindow)?
        .document()
        .ok_or(NavigationError::NoDocument)?;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| NavigationError::SectionNotFound(id.to_string()))?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    log::debug!("Scrolled to #{}", id);
    Ok(())
}
