// SPDX-License-Identifier: MPL-2.0
//! Rendering of a lazy image slot.
//!
//! Pending slots show a soft placeholder (or nothing, with
//! `skip_placeholder`), loaded slots the decoded image, failed slots a
//! fallback glyph with the alt text.

use crate::media::{LazyMedia, LoadState, SlotKey};
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{center, column, container, image, text, Space};
use iced::{Background, Border, ContentFit, Element, Length, Theme};

/// How a slot fills its box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: Length,
    pub height: Length,
    pub fit: ContentFit,
    pub opacity: f32,
    pub rounded: bool,
}

impl Frame {
    /// Fixed-size thumbnail, cropped to fill.
    #[must_use]
    pub fn thumbnail(width: f32, height: f32) -> Self {
        Self {
            width: Length::Fixed(width),
            height: Length::Fixed(height),
            fit: ContentFit::Cover,
            opacity: 1.0,
            rounded: true,
        }
    }

    /// Full-area image scaled to fit, for viewers and slides.
    #[must_use]
    pub fn contain() -> Self {
        Self {
            width: Length::Fill,
            height: Length::Fill,
            fit: ContentFit::Contain,
            opacity: 1.0,
            rounded: false,
        }
    }

    /// Full-width banner, cropped.
    #[must_use]
    pub fn banner(height: f32) -> Self {
        Self {
            width: Length::Fill,
            height: Length::Fixed(height),
            fit: ContentFit::Cover,
            opacity: 1.0,
            rounded: false,
        }
    }

    #[must_use]
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }
}

pub fn view<'a, M: 'a>(lazy: &'a LazyMedia, key: &SlotKey, frame: Frame) -> Element<'a, M> {
    let state = lazy.state(key).unwrap_or(LoadState::NotInView);
    let skip_placeholder = lazy
        .source(key)
        .is_some_and(|source| source.options.skip_placeholder);

    let body: Element<'a, M> = match (state, lazy.image(key)) {
        (LoadState::Loaded, Some(data)) => image(data.handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(frame.fit)
            .opacity(frame.opacity)
            .into(),
        (LoadState::Failed, _) => {
            let alt = lazy
                .source(key)
                .map(|source| source.alt.clone())
                .filter(|alt| !alt.is_empty())
                .unwrap_or_else(|| "Image unavailable".to_string());
            center(
                column![
                    text("⚠").size(sizing::ICON_MD),
                    text(alt).size(typography::CAPTION),
                ]
                .spacing(spacing::XXS)
                .align_x(iced::Alignment::Center),
            )
            .style(move |theme: &Theme| placeholder_style(theme, 1.0))
            .into()
        }
        _ if skip_placeholder => Space::new().into(),
        _ => container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |theme: &Theme| placeholder_style(theme, 0.6))
            .into(),
    };

    let rounded = frame.rounded;
    container(body)
        .width(frame.width)
        .height(frame.height)
        .clip(true)
        .style(move |_theme: &Theme| container::Style {
            border: Border {
                radius: if rounded { radius::MD.into() } else { 0.0.into() },
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

fn placeholder_style(theme: &Theme, strength: f32) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    let mut tint = colors.text_muted;
    tint.a = 0.18 * strength;
    container::Style {
        background: Some(Background::Color(tint)),
        text_color: Some(colors.text_muted),
        ..container::Style::default()
    }
}
