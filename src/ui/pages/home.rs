// SPDX-License-Identifier: MPL-2.0
//! Home page.
//!
//! An autoplaying hero of featured photos, the next few events, the latest
//! sermon, and a chat prompt that appears once after the visitor has idled
//! on the page for a while.

use super::layout::{page_column, BLOCK_GAP};
use super::{section_title, Remote};
use crate::app::config::{AboutConfig, HomeConfig};
use crate::app::route::Route;
use crate::domain::content::upcoming_events;
use crate::domain::{Event as ChurchEvent, MediaItem, RecordId, Sermon};
use crate::error::StoreError;
use crate::media::{LazyMedia, MediaSource, SlotKey};
use crate::store::fetch::HomeRows;
use crate::ui::carousel::{self, Effect as CarouselEffect};
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::empty_state;
use crate::ui::lazy_image::{self, Frame};
use crate::ui::styles::{self, overlay};
use chrono::{DateTime, Utc};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, column, container, mouse_area, row, text, Column, Space, Stack};
use iced::{Element, Length};
use std::time::{Duration, Instant};

pub const SLOT_PREFIX: &str = "hero/";

/// Fire-once idle prompt. Armed on entering the page, disarmed on leaving,
/// and never armed again once it has been shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ChatPrompt {
    #[default]
    Idle,
    Armed(Instant),
    Shown,
    Done,
}

#[derive(Debug)]
pub struct State {
    featured: Remote<Vec<MediaItem>>,
    hero: Option<carousel::State>,
    events: Remote<Vec<ChurchEvent>>,
    sermon: Remote<Option<Sermon>>,
    chat: ChatPrompt,
    chat_delay: Option<Duration>,
    upcoming_limit: usize,
    hero_settings: carousel::Settings,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<HomeRows, StoreError>),
    Hero(carousel::Message),
    Navigate(Route),
    OpenEvent(RecordId),
    WatchSermon(String),
    OpenChat,
    DismissChat,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Ready,
    Navigate(Route),
    OpenExternal(String),
    /// Hero slides that should start loading now.
    Reveal(Vec<SlotKey>),
}

impl State {
    #[must_use]
    pub fn new(config: &HomeConfig, hero_settings: carousel::Settings) -> Self {
        Self {
            featured: Remote::Loading,
            hero: None,
            events: Remote::Loading,
            sermon: Remote::Loading,
            chat: ChatPrompt::Idle,
            chat_delay: config.chat_prompt_delay(),
            upcoming_limit: config.upcoming_events(),
            hero_settings,
        }
    }

    /// Called every time the page becomes current.
    pub fn enter(&mut self, now: Instant) {
        if let (ChatPrompt::Idle, Some(delay)) = (self.chat, self.chat_delay) {
            self.chat = ChatPrompt::Armed(now + delay);
        }
    }

    /// Called when navigating away; a pending prompt is cancelled.
    pub fn leave(&mut self) {
        if matches!(self.chat, ChatPrompt::Armed(_)) {
            self.chat = ChatPrompt::Idle;
        }
    }

    pub fn update(&mut self, message: Message, now: Instant, today: DateTime<Utc>) -> Event {
        match message {
            Message::Loaded(Ok(rows)) => {
                let featured: Vec<MediaItem> = rows
                    .featured
                    .into_iter()
                    .filter(|item| !item.image_urls.is_empty())
                    .collect();
                self.hero = (!featured.is_empty())
                    .then(|| carousel::State::new(featured.len(), 0, self.hero_settings, now));
                self.featured = Remote::Ready(featured);

                let mut events = upcoming_events(&rows.events, today);
                events.truncate(self.upcoming_limit);
                self.events = Remote::Ready(events);
                self.sermon = Remote::Ready(rows.latest_sermon);
                Event::Ready
            }
            Message::Loaded(Err(err)) => {
                tracing::warn!(error = %err, "failed to load home page");
                self.featured = Remote::Unavailable;
                self.hero = None;
                self.events = Remote::Unavailable;
                self.sermon = Remote::Unavailable;
                Event::Ready
            }
            Message::Hero(message) => self.hero(message, now),
            Message::Navigate(route) => Event::Navigate(route),
            Message::OpenEvent(id) => Event::Navigate(Route::EventDetail(id)),
            Message::WatchSermon(url) => Event::OpenExternal(url),
            Message::OpenChat => {
                self.chat = ChatPrompt::Done;
                Event::Navigate(Route::Contact)
            }
            Message::DismissChat => {
                self.chat = ChatPrompt::Done;
                Event::None
            }
        }
    }

    /// Advances hero autoplay and the chat prompt deadline.
    pub fn tick(&mut self, now: Instant) -> Event {
        if let ChatPrompt::Armed(deadline) = self.chat {
            if now >= deadline {
                self.chat = ChatPrompt::Shown;
            }
        }
        self.hero(carousel::Message::Tick, now)
    }

    fn hero(&mut self, message: carousel::Message, now: Instant) -> Event {
        let Some(hero) = self.hero.as_mut() else {
            return Event::None;
        };
        match hero.handle(message, now) {
            CarouselEffect::SelectionChanged(_) => Event::Reveal(self.near_keys()),
            CarouselEffect::None => Event::None,
        }
    }

    fn near_keys(&self) -> Vec<SlotKey> {
        self.hero
            .as_ref()
            .map(|hero| hero.near_indices().into_iter().map(slide_key).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn needs_tick(&self) -> bool {
        matches!(self.chat, ChatPrompt::Armed(_))
            || self.hero.as_ref().is_some_and(carousel::State::needs_tick)
    }

    /// Whether a fast tick is needed for a running cross-fade.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.hero.as_ref().is_some_and(carousel::State::is_animating)
    }

    #[must_use]
    pub fn chat_visible(&self) -> bool {
        self.chat == ChatPrompt::Shown
    }

    #[must_use]
    pub fn hero_index(&self) -> Option<usize> {
        self.hero.as_ref().map(carousel::State::index)
    }

    #[must_use]
    pub fn events(&self) -> &Remote<Vec<ChurchEvent>> {
        &self.events
    }

    /// Mounts every hero slide off-page and returns the ones to load now.
    pub fn place_slots(&self, lazy: &mut LazyMedia) -> Vec<SlotKey> {
        let Some(featured) = self.featured.ready() else {
            lazy.unmount_prefix(SLOT_PREFIX);
            return Vec::new();
        };
        let mut keys = Vec::with_capacity(featured.len());
        for (index, item) in featured.iter().enumerate() {
            let Some(url) = item.image_urls.first() else {
                continue;
            };
            let key = slide_key(index);
            lazy.mount_detached(
                key.clone(),
                MediaSource::new(url.clone(), item.title.clone()).skip_placeholder(),
            );
            keys.push(key);
        }
        lazy.retain_under(SLOT_PREFIX, &keys);
        self.near_keys()
    }

    pub fn view<'a>(
        &'a self,
        lazy: &'a LazyMedia,
        about: &'a AboutConfig,
        now: Instant,
    ) -> Element<'a, Message> {
        let mut blocks = vec![hero(self.hero.as_ref(), lazy, about, now)];
        blocks.push(upcoming(&self.events));
        blocks.push(latest_sermon(&self.sermon));
        page_column(blocks)
    }

    /// Floating prompt, drawn above the page while visible.
    #[must_use]
    pub fn chat_prompt(&self) -> Option<Element<'_, Message>> {
        if !self.chat_visible() {
            return None;
        }
        let actions = row![
            button(text("Send a message"))
                .padding([spacing::XXS, spacing::MD])
                .style(styles::button::primary)
                .on_press(Message::OpenChat),
            button(text("Not now"))
                .padding([spacing::XXS, spacing::MD])
                .style(styles::button::secondary)
                .on_press(Message::DismissChat),
        ]
        .spacing(spacing::XS);

        let card = container(
            column![
                text("Have a question?").size(typography::TITLE_SM),
                text("We would love to hear from you.").size(typography::BODY),
                actions,
            ]
            .spacing(spacing::XS),
        )
        .padding(spacing::MD)
        .max_width(320.0)
        .style(styles::container::card);

        Some(
            container(card)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::LG)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Bottom)
                .into(),
        )
    }
}

fn slide_key(index: usize) -> SlotKey {
    SlotKey::new(format!("{SLOT_PREFIX}{index}"))
}

fn hero<'a>(
    carousel: Option<&'a carousel::State>,
    lazy: &'a LazyMedia,
    about: &'a AboutConfig,
    now: Instant,
) -> Element<'a, Message> {
    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(sizing::HERO_HEIGHT);

    match carousel {
        Some(carousel) => {
            let frame = Frame::banner(sizing::HERO_HEIGHT);
            match carousel.fade(now) {
                Some((from, progress)) => {
                    layers = layers
                        .push(lazy_image::view(lazy, &slide_key(from), frame.opacity(1.0 - progress)))
                        .push(lazy_image::view(
                            lazy,
                            &slide_key(carousel.index()),
                            frame.opacity(progress),
                        ));
                }
                None => {
                    layers = layers.push(lazy_image::view(lazy, &slide_key(carousel.index()), frame));
                }
            }
        }
        None => {
            layers = layers.push(
                container(Space::new())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(styles::container::chip(palette::PRIMARY_700)),
            );
        }
    }

    let headline = container(
        column![
            text(&about.congregation_name).size(typography::TITLE_LG),
            text(&about.tagline).size(typography::BODY_LG),
        ]
        .spacing(spacing::XXS),
    )
    .padding([spacing::SM, spacing::MD])
    .style(overlay::indicator(radius::MD));
    layers = layers.push(
        container(headline)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG)
            .align_y(Vertical::Bottom),
    );

    if let Some(carousel) = carousel.filter(|c| c.len() > 1) {
        let arrows = row![
            hero_arrow("◀", carousel::Message::Previous),
            Space::new().width(Length::Fill),
            hero_arrow("▶", carousel::Message::Next),
        ]
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .height(Length::Fill);
        layers = layers.push(arrows).push(
            container(carousel::dots(carousel, |index| {
                Message::Hero(carousel::Message::GoTo(index))
            }))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::SM)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Bottom),
        );
    }

    mouse_area(container(layers).clip(true))
        .on_enter(Message::Hero(carousel::Message::Hovered(true)))
        .on_exit(Message::Hero(carousel::Message::Hovered(false)))
        .into()
}

fn hero_arrow(glyph: &str, message: carousel::Message) -> Element<'_, Message> {
    button(text(glyph).size(typography::TITLE_MD))
        .padding(spacing::XS)
        .style(styles::button_overlay(
            palette::BLACK,
            opacity::OVERLAY_SUBTLE,
            opacity::OVERLAY_MEDIUM,
        ))
        .on_press(Message::Hero(message))
        .into()
}

fn upcoming(events: &Remote<Vec<ChurchEvent>>) -> Element<'_, Message> {
    let body: Element<'_, Message> = match events {
        Remote::Loading => Space::new().into(),
        Remote::Ready(events) if !events.is_empty() => events
            .iter()
            .fold(Column::new().spacing(spacing::XS), |list, event| {
                list.push(
                    button(
                        row![
                            text(event.when_label()).size(typography::CAPTION).width(160.0),
                            text(&event.title).size(typography::BODY_LG),
                        ]
                        .spacing(spacing::MD)
                        .align_y(Vertical::Center),
                    )
                    .width(Length::Fill)
                    .padding(spacing::SM)
                    .style(styles::button::card)
                    .on_press(Message::OpenEvent(event.id.clone())),
                )
            })
            .into(),
        Remote::Ready(_) | Remote::Unavailable => empty_state::view("events"),
    };

    let all = button(text("See all events ›"))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::link)
        .on_press(Message::Navigate(Route::Events));

    column![section_title("Coming up"), body, all]
        .spacing(spacing::XS)
        .padding(iced::Padding::ZERO.top(BLOCK_GAP))
        .into()
}

fn latest_sermon(sermon: &Remote<Option<Sermon>>) -> Element<'_, Message> {
    let body: Element<'_, Message> = match sermon {
        Remote::Loading => Space::new().into(),
        Remote::Ready(Some(sermon)) => {
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
                        .on_press(Message::WatchSermon(url.clone())),
                );
            }
            container(details)
                .padding(spacing::MD)
                .width(Length::Fill)
                .style(styles::container::card)
                .into()
        }
        Remote::Ready(None) | Remote::Unavailable => empty_state::view("sermons"),
    };

    let all = button(text("All sermons ›"))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::link)
        .on_press(Message::Navigate(Route::Sermons));

    column![section_title("Latest sermon"), body, all]
        .spacing(spacing::XS)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::fixtures::{image_item, video_item};
    use chrono::TimeZone;

    fn settings() -> carousel::Settings {
        carousel::Settings {
            transition: Duration::ZERO,
            autoplay: Some(Duration::from_secs(5)),
            interaction_pause: Duration::from_secs(8),
        }
    }

    fn config(chat_secs: u64) -> HomeConfig {
        HomeConfig {
            hero_limit: Some(5),
            upcoming_events: Some(2),
            chat_prompt_delay_secs: Some(chat_secs),
        }
    }

    fn event(id: &str, day: u32) -> ChurchEvent {
        ChurchEvent {
            id: RecordId::new(id),
            title: format!("Event {id}"),
            description: None,
            starts_at: Utc.with_ymd_and_hms(2026, 5, day, 18, 0, 0).single().expect("date"),
            location: None,
            image_url: None,
            published: true,
        }
    }

    fn today() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 2, 0, 0, 0).single().expect("date")
    }

    fn loaded(now: Instant) -> State {
        let mut state = State::new(&config(30), settings());
        let rows = HomeRows {
            featured: vec![
                image_item("a", "s", 0, 2),
                video_item("dQw4w9WgXcQ", "s", 1),
                image_item("b", "s", 2, 1),
                image_item("c", "s", 3, 1),
            ],
            events: vec![event("past", 1), event("x", 3), event("y", 4), event("z", 5)],
            latest_sermon: None,
        };
        assert_eq!(state.update(Message::Loaded(Ok(rows)), now, today()), Event::Ready);
        state
    }

    #[test]
    fn hero_uses_items_with_images_only() {
        let now = Instant::now();
        let state = loaded(now);
        let mut lazy = LazyMedia::new(100.0, 1024 * 1024, None);
        let near = state.place_slots(&mut lazy);
        assert_eq!(lazy.slot_count(), 3);
        assert_eq!(near, vec![slide_key(2), slide_key(0), slide_key(1)]);
    }

    #[test]
    fn upcoming_events_are_capped() {
        let state = loaded(Instant::now());
        let ids: Vec<&str> = state
            .events()
            .ready()
            .expect("ready")
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["x", "y"]);
    }

    #[test]
    fn autoplay_reveals_new_neighbours() {
        let now = Instant::now();
        let mut state = loaded(now);
        assert_eq!(state.tick(now + Duration::from_secs(1)), Event::None);
        match state.tick(now + Duration::from_secs(5)) {
            Event::Reveal(keys) => assert!(keys.contains(&slide_key(2))),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(state.hero_index(), Some(1));
    }

    #[test]
    fn chat_prompt_fires_once_after_idle_delay() {
        let now = Instant::now();
        let mut state = loaded(now);
        state.enter(now);
        assert!(state.needs_tick());
        state.tick(now + Duration::from_secs(29));
        assert!(!state.chat_visible());
        state.tick(now + Duration::from_secs(30));
        assert!(state.chat_visible());

        assert_eq!(
            state.update(Message::DismissChat, now, today()),
            Event::None
        );
        state.leave();
        state.enter(now + Duration::from_secs(60));
        state.tick(now + Duration::from_secs(600));
        assert!(!state.chat_visible());
    }

    #[test]
    fn leaving_cancels_a_pending_prompt() {
        let now = Instant::now();
        let mut state = State::new(&config(30), settings());
        state.enter(now);
        state.leave();
        state.tick(now + Duration::from_secs(31));
        assert!(!state.chat_visible());

        // Re-entering arms a fresh timer from the new visit.
        state.enter(now + Duration::from_secs(40));
        state.tick(now + Duration::from_secs(60));
        assert!(!state.chat_visible());
        state.tick(now + Duration::from_secs(70));
        assert!(state.chat_visible());
    }

    #[test]
    fn zero_delay_disables_prompt() {
        let now = Instant::now();
        let mut state = State::new(&config(0), settings());
        state.enter(now);
        assert!(!state.needs_tick());
    }

    #[test]
    fn failed_load_marks_everything_unavailable() {
        let mut state = State::new(&config(30), settings());
        state.update(
            Message::Loaded(Err(StoreError::Http("offline".into()))),
            Instant::now(),
            today(),
        );
        assert_eq!(state.events(), &Remote::Unavailable);
        assert_eq!(state.hero_index(), None);
    }

    #[test]
    fn open_chat_goes_to_contact() {
        let mut state = State::new(&config(30), settings());
        assert_eq!(
            state.update(Message::OpenChat, Instant::now(), today()),
            Event::Navigate(Route::Contact)
        );
    }
}
