// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page background behind every route.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Raised card used for events, sermons and ministries.
pub fn card(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_card)),
        text_color: Some(colors.text_primary),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

pub fn navbar(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_card)),
        text_color: Some(colors.text_primary),
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Small pill label ("Unpublished", event date).
pub fn chip(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color { a: 0.15, ..color })),
        text_color: Some(color),
        border: Border {
            color,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Inline error or success notice in forms.
pub fn notice(success: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let color = if success {
            palette::SUCCESS_500
        } else {
            palette::ERROR_500
        };
        container::Style {
            background: Some(Background::Color(Color { a: 0.12, ..color })),
            text_color: Some(color),
            border: Border {
                color,
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..Default::default()
        }
    }
}
