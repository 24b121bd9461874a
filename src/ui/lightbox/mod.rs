// SPDX-License-Identifier: MPL-2.0
//! Full-window media lightbox.
//!
//! ```text
//! Closed ──open(item, k)──▶ OpeningToIndex(item, k) ──settle──▶ Open
//!   ▲                                                            │
//!   └────────── close button │ backdrop press │ Escape ──────────┘
//! ```
//!
//! The lightbox is drawn on the application's top layer, above every page.
//! While open it holds one page scroll lock; opening another item while
//! open swaps the content and keeps that same lock. Image items get a
//! looping carousel that starts on slide `k` without animating through the
//! slides before it; video items ignore `k` and show a single video panel.

pub mod view;

use crate::domain::{MediaItem, Modality};
use crate::media::lazy::LoadRequest;
use crate::media::{LazyMedia, MediaSource, SlotKey};
use crate::ui::carousel::{self, Transition};
use crate::ui::scroll_lock::{LockToken, ScrollLock};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, window, Event};
use std::time::Instant;

pub use view::view;

/// Slot key prefix for lightbox slides.
pub const SLOT_PREFIX: &str = "lightbox/";

/// Why the lightbox closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Button,
    Backdrop,
    Escape,
    /// The page underneath changed.
    Navigation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Escape,
    Left,
    Right,
}

#[derive(Debug)]
pub struct Session {
    item: MediaItem,
    modality: Modality,
    carousel: Option<carousel::State>,
    lock: Option<LockToken>,
}

impl Session {
    #[must_use]
    pub fn item(&self) -> &MediaItem {
        &self.item
    }

    #[must_use]
    pub fn modality(&self) -> Modality {
        self.modality
    }

    #[must_use]
    pub fn carousel(&self) -> Option<&carousel::State> {
        self.carousel.as_ref()
    }
}

#[derive(Debug, Default)]
pub enum State {
    #[default]
    Closed,
    OpeningToIndex {
        item: MediaItem,
        modality: Modality,
        index: usize,
        // Lock carried over when replacing an open item.
        lock: Option<LockToken>,
    },
    Open(Session),
}

#[derive(Debug, Clone)]
pub enum Message {
    Open {
        item: MediaItem,
        index: usize,
        modality: Modality,
    },
    Settle,
    Close(CloseReason),
    /// Press on the media itself; swallowed so the backdrop never sees it.
    ContentPressed,
    Carousel(carousel::Message),
    Key(NavKey),
    PlayVideo,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The caller should dispatch [`Message::Settle`] next.
    Settle,
    /// Slides that became near-visible; start their downloads.
    Load(Vec<LoadRequest>),
    /// The active slide changed; `loads` are slides it brought near.
    SelectionChanged {
        index: usize,
        loads: Vec<LoadRequest>,
    },
    Closed,
    OpenExternal(String),
}

/// Mutable resources the lightbox borrows from the application.
pub struct Context<'a> {
    pub scroll_lock: &'a mut ScrollLock,
    pub lazy: &'a mut LazyMedia,
    pub carousel: carousel::Settings,
    pub scrollbar_width: f32,
    pub now: Instant,
}

impl State {
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, State::Open(_))
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self, State::Closed)
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            State::Open(session) => Some(session),
            _ => None,
        }
    }

    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.session()
            .and_then(Session::carousel)
            .is_some_and(carousel::State::is_animating)
    }

    pub fn handle(&mut self, message: Message, ctx: &mut Context<'_>) -> Effect {
        match message {
            Message::Open {
                item,
                index,
                modality,
            } => self.open(item, index, modality, ctx),
            Message::Settle => self.settle(ctx),
            Message::Close(reason) => self.close(reason, ctx),
            Message::ContentPressed => Effect::None,
            Message::Key(NavKey::Escape) => self.close(CloseReason::Escape, ctx),
            Message::Key(NavKey::Left) => self.navigate(carousel::Message::Previous, ctx),
            Message::Key(NavKey::Right) => self.navigate(carousel::Message::Next, ctx),
            Message::Carousel(message) => self.navigate(message, ctx),
            Message::PlayVideo => match self.session() {
                Some(session) if session.modality == Modality::Video => session
                    .item
                    .video_url
                    .clone()
                    .map_or(Effect::None, Effect::OpenExternal),
                _ => Effect::None,
            },
        }
    }

    fn open(
        &mut self,
        item: MediaItem,
        index: usize,
        modality: Modality,
        ctx: &mut Context<'_>,
    ) -> Effect {
        let lock = match std::mem::take(self) {
            State::Open(session) => {
                ctx.lazy.unmount_prefix(SLOT_PREFIX);
                session.lock
            }
            State::OpeningToIndex { lock, .. } => lock,
            State::Closed => None,
        };
        let index = match modality {
            Modality::Video => 0,
            Modality::Images => index.min(item.image_urls.len().saturating_sub(1)),
        };
        tracing::debug!(item = %item.id, index, ?modality, "opening lightbox");
        *self = State::OpeningToIndex {
            item,
            modality,
            index,
            lock,
        };
        Effect::Settle
    }

    fn settle(&mut self, ctx: &mut Context<'_>) -> Effect {
        let State::OpeningToIndex {
            item,
            modality,
            index,
            lock,
        } = std::mem::take(self)
        else {
            return Effect::None;
        };

        let lock = lock.unwrap_or_else(|| ctx.scroll_lock.acquire(ctx.scrollbar_width));

        let carousel = match modality {
            Modality::Images => {
                for (slide, url) in item.image_urls.iter().enumerate() {
                    ctx.lazy.mount_detached(
                        slide_key(slide),
                        MediaSource::new(url.clone(), item.title.clone()).skip_placeholder(),
                    );
                }
                // Instant: slide `index` is shown first, no pass through 0..index.
                let mut carousel =
                    carousel::State::new(item.image_urls.len(), 0, ctx.carousel, ctx.now);
                let _ = carousel.scroll_to(index, Transition::Instant, ctx.now);
                Some(carousel)
            }
            Modality::Video => {
                if let Some(poster) = item.thumbnail_url() {
                    ctx.lazy.mount_detached(
                        poster_key(),
                        MediaSource::new(poster, item.title.clone()),
                    );
                }
                None
            }
        };

        *self = State::Open(Session {
            item,
            modality,
            carousel,
            lock: Some(lock),
        });
        self.reveal_near(ctx)
    }

    fn close(&mut self, reason: CloseReason, ctx: &mut Context<'_>) -> Effect {
        let lock = match std::mem::take(self) {
            State::Closed => return Effect::None,
            State::OpeningToIndex { lock, .. } => lock,
            State::Open(session) => session.lock,
        };
        if let Some(token) = lock {
            ctx.scroll_lock.release(token);
        }
        ctx.lazy.unmount_prefix(SLOT_PREFIX);
        tracing::debug!(?reason, "lightbox closed");
        Effect::Closed
    }

    fn navigate(&mut self, message: carousel::Message, ctx: &mut Context<'_>) -> Effect {
        let State::Open(session) = self else {
            return Effect::None;
        };
        let Some(carousel) = session.carousel.as_mut() else {
            return Effect::None;
        };
        match carousel.handle(message, ctx.now) {
            carousel::Effect::SelectionChanged(index) => {
                let loads = match self.reveal_near(ctx) {
                    Effect::Load(requests) => requests,
                    _ => Vec::new(),
                };
                Effect::SelectionChanged { index, loads }
            }
            carousel::Effect::None => Effect::None,
        }
    }

    fn reveal_near(&mut self, ctx: &mut Context<'_>) -> Effect {
        let Some(session) = self.session() else {
            return Effect::None;
        };
        let keys: Vec<SlotKey> = match &session.carousel {
            Some(carousel) => carousel.near_indices().into_iter().map(slide_key).collect(),
            None => vec![poster_key()],
        };
        Effect::Load(ctx.lazy.reveal(&keys))
    }
}

#[must_use]
pub fn slide_key(index: usize) -> SlotKey {
    SlotKey::new(format!("{SLOT_PREFIX}{index}"))
}

#[must_use]
pub fn poster_key() -> SlotKey {
    SlotKey::new(format!("{SLOT_PREFIX}poster"))
}

/// Maps window keyboard events to lightbox keys.
///
/// Used with `event::listen_with`, only subscribed while the lightbox is open.
pub fn key_from_event(event: Event, _status: event::Status, _window: window::Id) -> Option<NavKey> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(named),
            ..
        }) => match named {
            Named::Escape => Some(NavKey::Escape),
            Named::ArrowLeft => Some(NavKey::Left),
            Named::ArrowRight => Some(NavKey::Right),
            _ => None,
        },
        _ => None,
    }
}
