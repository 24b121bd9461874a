// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection and the colour scheme derived from it.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colours used by page chrome (navbar, cards, footer).
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    pub surface_primary: Color,
    pub surface_card: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub brand_primary: Color,
    pub brand_accent: Color,
    pub error: Color,
    pub scrim: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::IVORY,
            surface_card: palette::WHITE,
            text_primary: palette::GRAY_900,
            text_muted: palette::GRAY_700,
            brand_primary: palette::PRIMARY_600,
            brand_accent: palette::GOLD_500,
            error: palette::ERROR_500,
            scrim: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_card: Color::from_rgb(0.16, 0.16, 0.18),
            text_primary: palette::WHITE,
            text_muted: palette::GRAY_200,
            brand_primary: palette::PRIMARY_400,
            brand_accent: palette::GOLD_500,
            error: palette::ERROR_500,
            scrim: Color {
                a: opacity::OVERLAY_HOVER,
                ..palette::BLACK
            },
        }
    }

    /// Picks the scheme matching an Iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    #[must_use]
    pub fn to_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_scheme_has_light_surface() {
        assert!(ColorScheme::light().surface_primary.r > 0.9);
    }

    #[test]
    fn dark_scheme_has_dark_surface() {
        assert!(ColorScheme::dark().surface_primary.r < 0.2);
    }

    #[test]
    fn explicit_modes_map_to_iced_themes() {
        assert_eq!(ThemeMode::Light.to_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.to_theme(), Theme::Dark);
        let _ = ThemeMode::System.to_theme();
    }

    #[test]
    fn scheme_follows_theme_darkness() {
        assert!(ColorScheme::for_theme(&Theme::Dark).surface_primary.r < 0.2);
        assert!(ColorScheme::for_theme(&Theme::Light).surface_primary.r > 0.9);
    }
}
