use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::menu::{MenuItem, SocialItem};

/// Image with its accessible name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Logo {
    pub name: String,
    pub url: String,
}

/// Text link (venue, credit)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// Glyph shown on a timeline card
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DayIcon {
    Calendar,
    Users,
    Lightbulb,
    Award,
    Rocket,
}

/// One card of the five-day timeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventDay {
    pub day: u8,
    pub date: NaiveDate,
    pub title: String,
    pub audience: String,
    pub icon: DayIcon,
}

impl EventDay {
    /// Short date label, e.g. `Sun, Oct 19`.
    pub fn date_label(&self) -> String {
        self.date.format("%a, %b %-d").to_string()
    }
}

/// Everything the landing page renders.
///
/// Missing fields fall back to their defaults so partially filled documents
/// still load; [`SiteContent::validate`] reports what is structurally wrong.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteContent {
    pub title: String,
    pub organizer: String,
    pub tagline: String,
    pub date_range_label: String,
    pub hours_label: String,
    pub venue: Link,
    pub register_url: String,
    pub top_logos: Vec<Logo>,
    pub strategic_partners: Vec<Logo>,
    pub event_partners: Vec<Logo>,
    pub days: Vec<EventDay>,
    pub video_title: String,
    pub video_embed_url: String,
    pub intro: String,
    pub highlights: Vec<String>,
    pub menu_items: Vec<MenuItem>,
    pub social_items: Vec<SocialItem>,
    pub credit: Link,
}

impl SiteContent {
    /// Check structural rules the page layout depends on.
    ///
    /// - day numbers are strictly increasing
    /// - every logo and menu item has a non-empty label
    pub fn validate(&self) -> Result<(), String> {
        if let Some(pair) = self.days.windows(2).find(|w| w[0].day >= w[1].day) {
            return Err(format!(
                "event days must be in increasing order (day {} before day {})",
                pair[0].day, pair[1].day
            ));
        }

        let logos = self
            .top_logos
            .iter()
            .chain(&self.strategic_partners)
            .chain(&self.event_partners);
        for logo in logos {
            if logo.name.trim().is_empty() {
                return Err(format!("logo at {} has no name", logo.url));
            }
        }

        if let Some(item) = self.menu_items.iter().find(|i| i.label.trim().is_empty()) {
            return Err(format!("menu item linking to {} has no label", item.link));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(day: u8, date: &str) -> EventDay {
        EventDay {
            day,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            title: format!("Day {day}"),
            audience: "Everyone".to_string(),
            icon: DayIcon::Calendar,
        }
    }

    #[test]
    fn test_date_label() {
        assert_eq!(day(1, "2025-10-19").date_label(), "Sun, Oct 19");
        assert_eq!(day(5, "2025-10-23").date_label(), "Thu, Oct 23");
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let content: SiteContent = serde_json::from_str(r#"{"title":"Career Week"}"#).unwrap();
        assert_eq!(content.title, "Career Week");
        assert!(content.menu_items.is_empty());
        assert!(content.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unordered_days() {
        let content = SiteContent {
            days: vec![day(2, "2025-10-20"), day(1, "2025-10-19")],
            ..Default::default()
        };
        assert!(content.validate().unwrap_err().contains("increasing order"));
    }

    #[test]
    fn test_validate_rejects_unnamed_logo() {
        let content = SiteContent {
            event_partners: vec![Logo { name: " ".to_string(), url: "/assets/partners/x.png".to_string() }],
            ..Default::default()
        };
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unlabelled_menu_item() {
        let content = SiteContent {
            menu_items: vec![MenuItem::new("", "", "#home")],
            ..Default::default()
        };
        assert!(content.validate().unwrap_err().contains("#home"));
    }
}
