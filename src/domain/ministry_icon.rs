// SPDX-License-Identifier: MPL-2.0
//! Closed set of ministry icons.
//!
//! Ministries name their icon as free text in the admin area. Lookup is by
//! case-insensitive name, including a few common aliases; anything else maps
//! to [`MinistryIcon::Default`].

/// Icons a ministry card can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MinistryIcon {
    Music,
    Children,
    Youth,
    Prayer,
    Outreach,
    Bible,
    Care,
    Community,
    /// Used whenever the stored name is empty or not recognised.
    #[default]
    Default,
}

impl MinistryIcon {
    pub const ALL: [MinistryIcon; 9] = [
        MinistryIcon::Music,
        MinistryIcon::Children,
        MinistryIcon::Youth,
        MinistryIcon::Prayer,
        MinistryIcon::Outreach,
        MinistryIcon::Bible,
        MinistryIcon::Care,
        MinistryIcon::Community,
        MinistryIcon::Default,
    ];

    /// Resolves a stored icon name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let key: String = name
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "music" | "musicnote" | "worship" | "choir" => MinistryIcon::Music,
            "baby" | "child" | "children" | "kids" => MinistryIcon::Children,
            "youth" | "users" | "teens" => MinistryIcon::Youth,
            "prayer" | "hands" | "handsprayer" => MinistryIcon::Prayer,
            "globe" | "outreach" | "mission" | "missions" => MinistryIcon::Outreach,
            "book" | "bookopen" | "bible" | "study" => MinistryIcon::Bible,
            "heart" | "care" | "handheart" => MinistryIcon::Care,
            "home" | "community" | "fellowship" | "coffee" => MinistryIcon::Community,
            _ => MinistryIcon::Default,
        }
    }

    /// Glyph drawn on the ministry card.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            MinistryIcon::Music => "♪",
            MinistryIcon::Children => "☺",
            MinistryIcon::Youth => "★",
            MinistryIcon::Prayer => "✋",
            MinistryIcon::Outreach => "◍",
            MinistryIcon::Bible => "✎",
            MinistryIcon::Care => "♥",
            MinistryIcon::Community => "⌂",
            MinistryIcon::Default => "✚",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MinistryIcon::Music => "Music",
            MinistryIcon::Children => "Children",
            MinistryIcon::Youth => "Youth",
            MinistryIcon::Prayer => "Prayer",
            MinistryIcon::Outreach => "Outreach",
            MinistryIcon::Bible => "Bible study",
            MinistryIcon::Care => "Care",
            MinistryIcon::Community => "Community",
            MinistryIcon::Default => "Ministry",
        }
    }
}
