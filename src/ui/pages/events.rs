// SPDX-License-Identifier: MPL-2.0
//! Events page: upcoming published events, soonest first.

use super::layout::page_column;
use super::{list_or_empty, page_title, Remote};
use crate::app::route::Route;
use crate::domain::content::upcoming_events;
use crate::domain::{Event as ChurchEvent, RecordId};
use crate::error::StoreError;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use chrono::{DateTime, Utc};
use iced::widget::{button, column, container, row, text, Column, Space};
use iced::{Element, Length};

#[derive(Debug, Default)]
pub struct State {
    events: Remote<Vec<ChurchEvent>>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<Vec<ChurchEvent>, StoreError>),
    Open(RecordId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// First data arrived (or failed); the route is ready.
    Ready,
    Navigate(Route),
}

impl State {
    /// `now` filters out events that already started.
    pub fn update(&mut self, message: Message, now: DateTime<Utc>) -> Event {
        match message {
            Message::Loaded(result) => {
                self.events = Remote::from_result(result, "events")
                    .map_ready(|events| upcoming_events(&events, now));
                Event::Ready
            }
            Message::Open(id) => Event::Navigate(Route::EventDetail(id)),
        }
    }

    #[must_use]
    pub fn events(&self) -> &Remote<Vec<ChurchEvent>> {
        &self.events
    }

    pub fn view(&self) -> Element<'_, Message> {
        page_column(vec![
            page_title("Upcoming events"),
            list_or_empty(&self.events, "events", |events| {
                events
                    .iter()
                    .fold(Column::new().spacing(spacing::SM), |list, event| {
                        list.push(card(event))
                    })
                    .into()
            }),
        ])
    }
}

fn card(event: &ChurchEvent) -> Element<'_, Message> {
    let date = container(text(event.when_label()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::chip(palette::PRIMARY_500));

    let mut details = column![
        text(&event.title).size(typography::TITLE_SM),
        date,
    ]
    .spacing(spacing::XS);
    if let Some(location) = &event.location {
        details = details.push(text(format!("📍 {location}")).size(typography::BODY));
    }

    button(
        row![details, Space::new().width(Length::Fill), text("›").size(typography::TITLE_LG)]
            .align_y(iced::Alignment::Center)
            .padding(spacing::MD),
    )
    .width(Length::Fill)
    .style(styles::button::card)
    .on_press(Message::Open(event.id.clone()))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(id: &str, day: u32) -> ChurchEvent {
        ChurchEvent {
            id: RecordId::new(id),
            title: format!("Event {id}"),
            description: None,
            starts_at: Utc.with_ymd_and_hms(2026, 3, day, 10, 0, 0).single().expect("date"),
            location: None,
            image_url: None,
            published: true,
        }
    }

    #[test]
    fn loaded_events_drop_past_ones() {
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 0, 0, 0).single().expect("date");
        let mut state = State::default();
        let effect = state.update(
            Message::Loaded(Ok(vec![event("old", 1), event("new", 20)])),
            now,
        );
        assert_eq!(effect, Event::Ready);
        let ids: Vec<&str> = state
            .events()
            .ready()
            .expect("ready")
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["new"]);
    }

    #[test]
    fn failed_fetch_is_unavailable() {
        let mut state = State::default();
        state.update(Message::Loaded(Err(StoreError::Http("down".into()))), Utc::now());
        assert_eq!(state.events(), &Remote::Unavailable);
    }

    #[test]
    fn open_navigates_to_detail() {
        let mut state = State::default();
        assert_eq!(
            state.update(Message::Open(RecordId::new("7")), Utc::now()),
            Event::Navigate(Route::EventDetail(RecordId::new("7")))
        );
    }
}
