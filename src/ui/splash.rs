// SPDX-License-Identifier: MPL-2.0
//! Boot splash and route fallback views.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::overlay;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::animated_spinner::AnimatedSpinner;
use iced::alignment::Horizontal;
use iced::widget::{center, column, container, text};
use iced::{Element, Length, Theme};

/// Full-window splash with the congregation name.
pub fn view<'a, M: 'static>(
    title: &'a str,
    tagline: &'a str,
    rotation: f32,
    theme: &Theme,
) -> Element<'a, M> {
    let colors = ColorScheme::for_theme(theme);
    let content = column![
        text(title).size(typography::TITLE_LG),
        text(tagline).size(typography::BODY_LG),
        AnimatedSpinner::new(colors.brand_primary, rotation)
            .size(sizing::ICON_XL)
            .into_element(),
    ]
    .spacing(spacing::LG)
    .align_x(Horizontal::Center);

    container(center(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(overlay::splash)
        .into()
}

/// Spinner shown in place of a page whose first load is pending.
pub fn fallback<'a, M: 'static>(rotation: f32, theme: &Theme) -> Element<'a, M> {
    let colors = ColorScheme::for_theme(theme);
    center(
        AnimatedSpinner::new(colors.brand_primary, rotation)
            .size(sizing::ICON_LG)
            .into_element(),
    )
    .into()
}
