//! # Site Configuration
//!
//! Page content and menu options are compiled into the wasm module from
//! `content/site.json` and validated once at startup.
//!
//! ## Global Config Access
//!
//! Call [`init_config()`] once in the wasm entry point, then read the config
//! anywhere with [`site_config()`]. If loading failed, [`site_config()`] serves
//! an empty page with default menu options instead of panicking.

use std::sync::OnceLock;

use lib_motion::MenuOptions;
use serde::{Deserialize, Serialize};
use shared::dto::content::SiteContent;
use thiserror::Error;

/// Site document embedded at compile time.
const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse site config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid menu options: {0}")]
    Menu(#[from] lib_motion::Error),

    #[error("Invalid site content: {0}")]
    Content(String),

    #[error("Config has already been initialized")]
    AlreadyInitialized,
}

/// Everything the page needs to render.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Slide-out menu construction options
    pub menu: MenuOptions,

    /// Copy, logos, days and links
    pub content: SiteContent,
}

impl SiteConfig {
    /// Parse a site document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load the embedded site document.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_json(SITE_JSON)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.menu.validate()?;
        self.content.validate().map_err(ConfigError::Content)?;
        Ok(())
    }
}

static CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Load, validate and install the global configuration.
///
/// # Errors
///
/// Returns an error if the embedded document does not parse, fails
/// validation, or the config was already installed.
pub fn init_config() -> Result<&'static SiteConfig, ConfigError> {
    let config = SiteConfig::load()?;
    config.validate()?;

    CONFIG.set(config).map_err(|_| ConfigError::AlreadyInitialized)?;
    Ok(site_config())
}

/// Global configuration. Falls back to [`SiteConfig::default`] when
/// [`init_config()`] failed or was never called.
pub fn site_config() -> &'static SiteConfig {
    CONFIG.get_or_init(SiteConfig::default)
}

/// Console log level, chosen at build time with `CAREER_WEB_LOG`.
pub fn log_level() -> log::Level {
    parse_level(option_env!("CAREER_WEB_LOG"))
}

fn parse_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|level| level.trim().parse().ok()).unwrap_or(log::Level::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_site_is_valid() {
        let config = SiteConfig::load().unwrap();
        config.validate().unwrap();

        let content = &config.content;
        assert_eq!(content.days.len(), 5);
        assert_eq!(content.event_partners.len(), 14);
        assert!(!content.menu_items.is_empty());
        assert_eq!(content.social_items.len(), 3);
    }

    #[test]
    fn test_embedded_menu_links_resolve_to_page_sections() {
        use crate::utils::constants::SECTION_IDS;
        use shared::dto::menu::NavTarget;

        let config = SiteConfig::load().unwrap();
        for item in &config.content.menu_items {
            if let NavTarget::Section(id) = item.target() {
                assert!(SECTION_IDS.contains(&id.as_str()), "menu item {} points at unknown section {}", item.label, id);
            }
        }
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let config = SiteConfig::from_json(r#"{ "menu": { "position": "left" } }"#).unwrap();
        assert_eq!(config.menu.position, lib_motion::DockEdge::Left);
        assert_eq!(config.content, SiteContent::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_error() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_menu_color() {
        let config = SiteConfig::from_json(r#"{ "menu": { "accent_color": "tangerine" } }"#).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Menu(_))));
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(None), log::Level::Info);
        assert_eq!(parse_level(Some("debug")), log::Level::Debug);
        assert_eq!(parse_level(Some(" WARN ")), log::Level::Warn);
        assert_eq!(parse_level(Some("chatty")), log::Level::Info);
    }
}
