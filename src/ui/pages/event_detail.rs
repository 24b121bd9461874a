// SPDX-License-Identifier: MPL-2.0
//! Single event, addressed as `/events/<id>`.

use super::layout::page_column;
use super::{page_title, Remote};
use crate::app::route::Route;
use crate::domain::{Event as ChurchEvent, RecordId};
use crate::error::StoreError;
use crate::media::{LazyMedia, MediaSource, SlotKey};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::empty_state;
use crate::ui::lazy_image::{self, Frame};
use crate::ui::styles;
use iced::widget::{button, column, container, text};
use iced::{Element, Length};

pub const SLOT_PREFIX: &str = "event/";

#[derive(Debug)]
pub struct State {
    id: RecordId,
    event: Remote<Option<ChurchEvent>>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<Option<ChurchEvent>, StoreError>),
    Back,
    /// The banner was pressed; show it full size.
    OpenBanner,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Ready,
    Navigate(Route),
}

impl State {
    #[must_use]
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            event: Remote::Loading,
        }
    }

    #[must_use]
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Loaded(result) => {
                self.event = Remote::from_result(result, "event");
                if matches!(self.event, Remote::Ready(None)) {
                    tracing::debug!(id = %self.id, "event not found");
                }
                Event::Ready
            }
            Message::Back => Event::Navigate(Route::Events),
            Message::OpenBanner => match self.event.ready().and_then(Option::as_ref) {
                Some(ChurchEvent {
                    image_url: Some(url),
                    title,
                    ..
                }) => Event::Navigate(Route::image_viewer(url.clone(), title.clone())),
                _ => Event::None,
            },
        }
    }

    /// Mounts the banner, which sits at the top of the page and loads at once.
    pub fn place_slots(&self, lazy: &mut LazyMedia) -> Vec<SlotKey> {
        let banner = self
            .event
            .ready()
            .and_then(Option::as_ref)
            .and_then(|event| event.image_url.as_ref().map(|url| (url, &event.title)));
        match banner {
            Some((url, title)) => {
                let key = banner_key();
                lazy.mount_detached(key.clone(), MediaSource::new(url.clone(), title.clone()));
                vec![key]
            }
            None => {
                lazy.unmount_prefix(SLOT_PREFIX);
                Vec::new()
            }
        }
    }

    pub fn view<'a>(&'a self, lazy: &'a LazyMedia) -> Element<'a, Message> {
        let back = button(text("‹ All events"))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::link)
            .on_press(Message::Back);

        let body: Element<'a, Message> = match &self.event {
            Remote::Loading => text("").into(),
            Remote::Unavailable => empty_state::view("event details"),
            Remote::Ready(None) => empty_state::message("Event not found"),
            Remote::Ready(Some(event)) => details(event, lazy),
        };

        page_column(vec![back.into(), body])
    }
}

fn details<'a>(event: &'a ChurchEvent, lazy: &'a LazyMedia) -> Element<'a, Message> {
    let mut content = column![page_title(event.title.clone())].spacing(spacing::MD);
    if event.image_url.is_some() {
        content = content.push(
            button(lazy_image::view(
                lazy,
                &banner_key(),
                Frame::banner(sizing::HERO_HEIGHT),
            ))
            .padding(0)
            .width(Length::Fill)
            .style(styles::button::card)
            .on_press(Message::OpenBanner),
        );
    }
    content = content.push(text(event.when_label()).size(typography::TITLE_SM));
    if let Some(location) = &event.location {
        content = content.push(text(format!("📍 {location}")).size(typography::BODY_LG));
    }
    if let Some(description) = &event.description {
        content = content.push(
            container(text(description).size(typography::BODY_LG))
                .padding(spacing::LG)
                .width(Length::Fill)
                .style(styles::container::card),
        );
    }
    content.into()
}

fn banner_key() -> SlotKey {
    SlotKey::new(format!("{SLOT_PREFIX}banner"))
}
