// SPDX-License-Identifier: MPL-2.0
//! Placeholder shown when a page has nothing to list or its fetch failed.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::alignment::Horizontal;
use iced::widget::{column, container, text};
use iced::{Element, Length, Theme};

/// `No <what> available at the moment`.
#[must_use]
pub fn unavailable_message(what: &str) -> String {
    format!("No {what} available at the moment")
}

pub fn view<'a, M: 'a>(what: &str) -> Element<'a, M> {
    message(unavailable_message(what))
}

/// Centered muted message.
pub fn message<'a, M: 'a>(body: impl Into<String>) -> Element<'a, M> {
    let body: String = body.into();
    container(
        column![
            text("✝").size(sizing::ICON_LG),
            text(body).size(typography::BODY_LG),
        ]
        .spacing(spacing::SM)
        .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::XXL)
    .align_x(Horizontal::Center)
    .style(|theme: &Theme| container::Style {
        text_color: Some(ColorScheme::for_theme(theme).text_muted),
        ..container::Style::default()
    })
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_missing_records() {
        assert_eq!(unavailable_message("events"), "No events available at the moment");
    }
}
