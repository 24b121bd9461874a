// SPDX-License-Identifier: MPL-2.0
//! Ministries page.

use super::layout::page_column;
use super::{list_or_empty, page_title, Remote};
use crate::domain::Ministry;
use crate::error::StoreError;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::Vertical;
use iced::widget::{column, container, row, text, Column};
use iced::{Element, Length, Theme};

#[derive(Debug, Default)]
pub struct State {
    ministries: Remote<Vec<Ministry>>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<Vec<Ministry>, StoreError>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Ready,
}

impl State {
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Loaded(result) => {
                self.ministries = Remote::from_result(result, "ministries").map_ready(|mut rows| {
                    rows.sort_by_key(|ministry| ministry.display_order);
                    rows
                });
                Event::Ready
            }
        }
    }

    #[must_use]
    pub fn ministries(&self) -> &Remote<Vec<Ministry>> {
        &self.ministries
    }

    pub fn view(&self) -> Element<'_, Message> {
        page_column(vec![
            page_title("Ministries"),
            list_or_empty(&self.ministries, "ministries", |ministries| {
                ministries
                    .iter()
                    .fold(Column::new().spacing(spacing::SM), |list, ministry| {
                        list.push(card(ministry))
                    })
                    .into()
            }),
        ])
    }
}

fn card(ministry: &Ministry) -> Element<'_, Message> {
    let icon = ministry.resolved_icon();
    let badge = container(text(icon.glyph()).size(sizing::ICON_LG))
        .width(sizing::ICON_XL + spacing::MD)
        .height(sizing::ICON_XL + spacing::MD)
        .center_x(sizing::ICON_XL + spacing::MD)
        .center_y(sizing::ICON_XL + spacing::MD)
        .style(styles::container::chip(palette::GOLD_500));

    let mut details = column![text(&ministry.name).size(typography::TITLE_SM)].spacing(spacing::XXS);
    if let Some(leader) = &ministry.leader {
        details = details.push(
            text(format!("Led by {leader}"))
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::for_theme(theme).text_muted),
                }),
        );
    }
    if let Some(description) = &ministry.description {
        details = details.push(text(description).size(typography::BODY));
    }

    container(
        row![badge, details]
            .spacing(spacing::MD)
            .align_y(Vertical::Center),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MinistryIcon, RecordId};

    fn ministry(id: &str, order: i32, icon: Option<&str>) -> Ministry {
        Ministry {
            id: RecordId::new(id),
            name: format!("Ministry {id}"),
            description: None,
            icon: icon.map(str::to_string),
            leader: None,
            display_order: order,
        }
    }

    #[test]
    fn ministries_are_ordered_and_icons_resolve() {
        let mut state = State::default();
        state.update(Message::Loaded(Ok(vec![
            ministry("b", 2, Some("spaceship")),
            ministry("a", 1, Some("music")),
        ])));
        let rows = state.ministries().ready().expect("ready");
        assert_eq!(rows[0].id.as_str(), "a");
        assert_eq!(rows[0].resolved_icon(), MinistryIcon::Music);
        assert_eq!(rows[1].resolved_icon(), MinistryIcon::Default);
    }
}
