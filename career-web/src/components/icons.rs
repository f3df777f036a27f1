//! Inline SVG line icons (24x24, stroked with `currentColor`)

use leptos::prelude::*;
use shared::dto::content::DayIcon;
use shared::dto::menu::SocialIcon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Calendar,
    Users,
    Lightbulb,
    Award,
    Rocket,
    MapPin,
    ChevronLeft,
    ChevronRight,
    LinkedIn,
    Instagram,
    Facebook,
}

impl IconKind {
    /// Path data, drawn in order.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            IconKind::Calendar => &[
                "M8 2v4",
                "M16 2v4",
                "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M3 10h18",
            ],
            IconKind::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            IconKind::Lightbulb => &[
                "M15 14c.2-1 .7-1.7 1.5-2.5 1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 3.5.7.7 1.3 1.5 1.5 2.5",
                "M9 18h6",
                "M10 22h4",
            ],
            IconKind::Award => &[
                "M12 2a6 6 0 1 0 0 12a6 6 0 1 0 0-12z",
                "M15.477 12.89 17 22l-5-3-5 3 1.523-9.11",
            ],
            IconKind::Rocket => &[
                "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z",
                "m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z",
                "M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0",
                "M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5",
            ],
            IconKind::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z",
                "M12 7a3 3 0 1 0 0 6a3 3 0 1 0 0-6z",
            ],
            IconKind::ChevronLeft => &["m15 18-6-6 6-6"],
            IconKind::ChevronRight => &["m9 18 6-6-6-6"],
            IconKind::LinkedIn => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M4 2a2 2 0 1 0 0 4a2 2 0 1 0 0-4z",
            ],
            IconKind::Instagram => &[
                "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
                "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
                "M17.5 6.5h.01",
            ],
            IconKind::Facebook => &["M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"],
        }
    }
}

impl From<DayIcon> for IconKind {
    fn from(icon: DayIcon) -> Self {
        match icon {
            DayIcon::Calendar => IconKind::Calendar,
            DayIcon::Users => IconKind::Users,
            DayIcon::Lightbulb => IconKind::Lightbulb,
            DayIcon::Award => IconKind::Award,
            DayIcon::Rocket => IconKind::Rocket,
        }
    }
}

impl From<SocialIcon> for IconKind {
    fn from(icon: SocialIcon) -> Self {
        match icon {
            SocialIcon::LinkedIn => IconKind::LinkedIn,
            SocialIcon::Instagram => IconKind::Instagram,
            SocialIcon::Facebook => IconKind::Facebook,
        }
    }
}

#[component]
pub fn Icon(#[prop(into)] kind: IconKind, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {kind.paths().iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_has_paths() {
        let all = [
            IconKind::Calendar,
            IconKind::Users,
            IconKind::Lightbulb,
            IconKind::Award,
            IconKind::Rocket,
            IconKind::MapPin,
            IconKind::ChevronLeft,
            IconKind::ChevronRight,
            IconKind::LinkedIn,
            IconKind::Instagram,
            IconKind::Facebook,
        ];
        for kind in all {
            assert!(!kind.paths().is_empty(), "{kind:?}");
            assert!(kind.paths().iter().all(|d| d.starts_with(|c: char| c == 'M' || c == 'm')), "{kind:?}");
        }
    }

    #[test]
    fn test_content_icons_map() {
        assert_eq!(IconKind::from(DayIcon::Rocket), IconKind::Rocket);
        assert_eq!(IconKind::from(SocialIcon::Instagram), IconKind::Instagram);
    }
}
