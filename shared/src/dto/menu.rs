use serde::{Deserialize, Serialize};

/// Where a menu entry leads.
///
/// Links starting with `http` open in a new browsing context; everything else
/// names an on-page section (a leading `#` is optional).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NavTarget {
    /// Absolute URL opened in a new tab
    External(String),
    /// Id of an element on the current page
    Section(String),
}

impl NavTarget {
    /// Classify a raw link string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shared::dto::menu::NavTarget;
    ///
    /// assert_eq!(
    ///     NavTarget::parse("https://example.com"),
    ///     NavTarget::External("https://example.com".to_string())
    /// );
    /// assert_eq!(NavTarget::parse("#timeline"), NavTarget::Section("timeline".to_string()));
    /// assert_eq!(NavTarget::parse("about"), NavTarget::Section("about".to_string()));
    /// ```
    pub fn parse(link: &str) -> Self {
        let link = link.trim();
        if link.starts_with("http") {
            NavTarget::External(link.to_string())
        } else {
            NavTarget::Section(link.trim_start_matches('#').to_string())
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, NavTarget::External(_))
    }

    /// The raw string handed to `on_navigate` callbacks.
    pub fn as_str(&self) -> &str {
        match self {
            NavTarget::External(url) => url,
            NavTarget::Section(id) => id,
        }
    }
}

/// Slide-out menu entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub aria_label: String,
    pub link: String,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, aria_label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            aria_label: aria_label.into(),
            link: link.into(),
        }
    }

    pub fn target(&self) -> NavTarget {
        NavTarget::parse(&self.link)
    }
}

/// Glyph shown for a social link
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    LinkedIn,
    Instagram,
    Facebook,
}

impl SocialIcon {
    pub fn name(&self) -> &'static str {
        match self {
            SocialIcon::LinkedIn => "LinkedIn",
            SocialIcon::Instagram => "Instagram",
            SocialIcon::Facebook => "Facebook",
        }
    }
}

/// Social profile link shown under "Follow Us" and in the page footer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialItem {
    pub label: String,
    pub link: String,
    pub icon: SocialIcon,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_external_targets() {
        assert!(NavTarget::parse("https://maps.app.goo.gl/p3ab5YKWvcJYAekY9").is_external());
        assert!(NavTarget::parse("http://linkedin.com/company/18294977").is_external());
        assert!(NavTarget::parse("  https://example.com ").is_external());
    }

    #[test]
    fn test_parse_section_targets() {
        assert_eq!(NavTarget::parse("#home"), NavTarget::Section("home".to_string()));
        assert_eq!(NavTarget::parse("event-partners"), NavTarget::Section("event-partners".to_string()));
        assert_eq!(NavTarget::parse(""), NavTarget::Section(String::new()));
    }

    #[test]
    fn test_menu_item_json() {
        let json = r##"{"label":"About","aria_label":"About the event","link":"#about"}"##;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.label, "About");
        assert_eq!(item.target().as_str(), "about");
    }

    #[test]
    fn test_social_icon_lowercase() {
        let item: SocialItem = serde_json::from_str(
            r#"{"label":"Instagram","link":"https://www.instagram.com/asucareercenter/","icon":"instagram"}"#,
        )
        .unwrap();
        assert_eq!(item.icon, SocialIcon::Instagram);
        assert_eq!(serde_json::to_string(&SocialIcon::LinkedIn).unwrap(), "\"linkedin\"");
    }
}
