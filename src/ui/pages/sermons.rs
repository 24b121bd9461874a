// SPDX-License-Identifier: MPL-2.0
//! Sermons page: newest first, one fixed-height row per sermon with a lazy
//! thumbnail on the left.

use super::layout::{page_column, PageGeometry, BLOCK_GAP};
use super::{list_or_empty, page_title, Remote};
use crate::domain::content::latest_sermons;
use crate::domain::{RecordId, Sermon};
use crate::error::StoreError;
use crate::media::{LazyMedia, MediaSource, SlotKey};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::lazy_image::{self, Frame};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, column, container, row, text, Column};
use iced::{Element, Length, Rectangle};

pub const SLOT_PREFIX: &str = "sermons/";

const ROW_GAP: f32 = spacing::SM;

#[derive(Debug, Default)]
pub struct State {
    sermons: Remote<Vec<Sermon>>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<Vec<Sermon>, StoreError>),
    Watch(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Ready,
    OpenExternal(String),
}

impl State {
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Loaded(result) => {
                self.sermons =
                    Remote::from_result(result, "sermons").map_ready(|rows| latest_sermons(&rows));
                Event::Ready
            }
            Message::Watch(url) => Event::OpenExternal(url),
        }
    }

    #[must_use]
    pub fn sermons(&self) -> &Remote<Vec<Sermon>> {
        &self.sermons
    }

    pub fn place_slots(&self, lazy: &mut LazyMedia, geometry: PageGeometry) {
        let Some(sermons) = self.sermons.ready() else {
            lazy.unmount_prefix(SLOT_PREFIX);
            return;
        };
        let origin = geometry.origin();
        let list_top = origin.y + sizing::SECTION_HEADER_HEIGHT + BLOCK_GAP;

        let mut keys = Vec::with_capacity(sermons.len());
        for (index, sermon) in sermons.iter().enumerate() {
            let Some(url) = sermon.poster_url() else {
                continue;
            };
            let key = slot_key(&sermon.id);
            let rect = Rectangle {
                x: origin.x,
                y: list_top + index as f32 * (sizing::LIST_ROW_HEIGHT + ROW_GAP),
                width: sizing::LIST_THUMB_WIDTH,
                height: sizing::LIST_ROW_HEIGHT,
            };
            lazy.mount(key.clone(), MediaSource::new(url, sermon.title.clone()), rect);
            keys.push(key);
        }
        lazy.retain_under(SLOT_PREFIX, &keys);
    }

    pub fn view<'a>(&'a self, lazy: &'a LazyMedia) -> Element<'a, Message> {
        page_column(vec![
            page_title("Sermons"),
            list_or_empty(&self.sermons, "sermons", |sermons| {
                sermons
                    .iter()
                    .fold(Column::new().spacing(ROW_GAP), |list, sermon| {
                        list.push(sermon_row(sermon, lazy))
                    })
                    .into()
            }),
        ])
    }
}

fn slot_key(id: &RecordId) -> SlotKey {
    SlotKey::new(format!("{SLOT_PREFIX}{id}"))
}

fn sermon_row<'a>(sermon: &'a Sermon, lazy: &'a LazyMedia) -> Element<'a, Message> {
    let thumbnail = lazy_image::view(
        lazy,
        &slot_key(&sermon.id),
        Frame::thumbnail(sizing::LIST_THUMB_WIDTH, sizing::LIST_ROW_HEIGHT),
    );

    let mut details = column![
        text(&sermon.title).size(typography::TITLE_SM),
        text(sermon.byline()).size(typography::BODY),
    ]
    .spacing(spacing::XS);
    if let Some(url) = &sermon.video_url {
        details = details.push(
            button(text("Watch"))
                .padding([spacing::XXS, spacing::MD])
                .style(styles::button::primary)
                .on_press(Message::Watch(url.clone())),
        );
    }

    container(
        row![thumbnail, container(details).padding(spacing::MD)]
            .spacing(spacing::XS)
            .align_y(Vertical::Center),
    )
    .width(Length::Fill)
    .height(sizing::LIST_ROW_HEIGHT)
    .clip(true)
    .style(styles::container::card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sermon(id: &str, day: u32, video: bool) -> Sermon {
        Sermon {
            id: RecordId::new(id),
            title: format!("Sermon {id}"),
            preacher: Some("Pastor Ann".into()),
            preached_on: NaiveDate::from_ymd_opt(2026, 2, day).expect("date"),
            scripture: None,
            video_url: video.then(|| format!("https://youtu.be/{id}")),
            thumbnail_url: None,
            published: true,
        }
    }

    #[test]
    fn sermons_are_newest_first() {
        let mut state = State::default();
        state.update(Message::Loaded(Ok(vec![
            sermon("a", 1, true),
            sermon("b", 15, false),
        ])));
        let ids: Vec<&str> = state
            .sermons()
            .ready()
            .expect("ready")
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn rows_without_poster_get_no_slot() {
        let mut state = State::default();
        state.update(Message::Loaded(Ok(vec![
            sermon("a", 1, true),
            sermon("b", 15, false),
        ])));
        let mut lazy = LazyMedia::new(100.0, 1024 * 1024, None);
        state.place_slots(&mut lazy, PageGeometry::new(900.0));
        assert_eq!(lazy.slot_count(), 1);
        assert!(lazy.is_mounted(&slot_key(&RecordId::new("a"))));
    }

    #[test]
    fn watch_opens_externally() {
        let mut state = State::default();
        assert_eq!(
            state.update(Message::Watch("https://youtu.be/x".into())),
            Event::OpenExternal("https://youtu.be/x".into())
        );
    }
}
