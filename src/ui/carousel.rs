// SPDX-License-Identifier: MPL-2.0
//! Looping slide carousel.
//!
//! Keeps the active index for a sequence of slides and reports every change
//! through [`Effect::SelectionChanged`], so dots, counters and keyboard
//! handlers outside the carousel stay in sync. Navigation wraps in both
//! directions. Animated moves cross-fade from the previous slide; instant
//! moves (used when opening at a given slide) show the target immediately.

use crate::app::config::CarouselConfig;
use crate::ui::design_tokens::{palette, sizing, spacing};
use iced::widget::{button, container, row, Space};
use iced::{Background, Border, Color, Element, Length, Theme};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Jump straight to the slide.
    Instant,
    /// Cross-fade over the configured duration.
    Animated,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub transition: Duration,
    /// `None` disables autoplay.
    pub autoplay: Option<Duration>,
    /// How long autoplay waits after the user navigates.
    pub interaction_pause: Duration,
}

impl Settings {
    /// Manual carousel (lightbox) using the configured fade.
    #[must_use]
    pub fn manual(config: &CarouselConfig) -> Self {
        Self {
            transition: config.transition(),
            autoplay: None,
            interaction_pause: config.interaction_pause(),
        }
    }

    /// Autoplaying carousel (home hero).
    #[must_use]
    pub fn autoplay(config: &CarouselConfig) -> Self {
        Self {
            autoplay: Some(config.autoplay_interval()),
            ..Self::manual(config)
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::manual(&CarouselConfig::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Fade {
    from: usize,
    started: Instant,
}

#[derive(Debug, Clone)]
pub struct State {
    len: usize,
    index: usize,
    fade: Option<Fade>,
    settings: Settings,
    hovered: bool,
    last_interaction: Option<Instant>,
    last_advance: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
    GoTo(usize),
    Hovered(bool),
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    SelectionChanged(usize),
}

impl State {
    /// Creates a carousel over `len` slides showing `start` without any
    /// transition. Out-of-range starts are clamped.
    #[must_use]
    pub fn new(len: usize, start: usize, settings: Settings, now: Instant) -> Self {
        Self {
            len,
            index: start.min(len.saturating_sub(1)),
            fade: None,
            settings,
            hovered: false,
            last_interaction: None,
            last_advance: now,
        }
    }

    /// User-driven messages count as interaction and pause autoplay.
    pub fn handle(&mut self, message: Message, now: Instant) -> Effect {
        match message {
            Message::Previous => {
                self.last_interaction = Some(now);
                self.scroll_prev(now)
            }
            Message::Next => {
                self.last_interaction = Some(now);
                self.scroll_next(now)
            }
            Message::GoTo(index) => {
                self.last_interaction = Some(now);
                self.scroll_to(index, Transition::Animated, now)
            }
            Message::Hovered(hovered) => {
                self.hovered = hovered;
                if !hovered {
                    // Leaving restarts the interval instead of advancing at once.
                    self.last_advance = now;
                }
                Effect::None
            }
            Message::Tick => self.tick(now),
        }
    }

    pub fn scroll_to(&mut self, index: usize, transition: Transition, now: Instant) -> Effect {
        if self.len == 0 || index >= self.len || index == self.index {
            return Effect::None;
        }
        self.fade = match transition {
            Transition::Instant => None,
            Transition::Animated if self.settings.transition.is_zero() => None,
            Transition::Animated => Some(Fade {
                from: self.index,
                started: now,
            }),
        };
        self.index = index;
        self.last_advance = now;
        Effect::SelectionChanged(index)
    }

    pub fn scroll_next(&mut self, now: Instant) -> Effect {
        if self.len == 0 {
            return Effect::None;
        }
        self.scroll_to((self.index + 1) % self.len, Transition::Animated, now)
    }

    pub fn scroll_prev(&mut self, now: Instant) -> Effect {
        if self.len == 0 {
            return Effect::None;
        }
        self.scroll_to((self.index + self.len - 1) % self.len, Transition::Animated, now)
    }

    fn tick(&mut self, now: Instant) -> Effect {
        if let Some(fade) = self.fade {
            if now.saturating_duration_since(fade.started) >= self.settings.transition {
                self.fade = None;
            }
        }

        let Some(interval) = self.settings.autoplay else {
            return Effect::None;
        };
        if self.hovered || self.len < 2 {
            return Effect::None;
        }
        if let Some(last) = self.last_interaction {
            if now.saturating_duration_since(last) < self.settings.interaction_pause {
                return Effect::None;
            }
        }
        if now.saturating_duration_since(self.last_advance) >= interval {
            return self.scroll_next(now);
        }
        Effect::None
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The slide fading out and how far the fade has progressed (0..1).
    #[must_use]
    pub fn fade(&self, now: Instant) -> Option<(usize, f32)> {
        let fade = self.fade?;
        let total = self.settings.transition.as_secs_f32();
        if total <= 0.0 {
            return None;
        }
        let progress = now.saturating_duration_since(fade.started).as_secs_f32() / total;
        (progress < 1.0).then_some((fade.from, progress.clamp(0.0, 1.0)))
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.fade.is_some()
    }

    /// Whether the carousel needs a periodic tick.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.is_animating() || (self.settings.autoplay.is_some() && self.len > 1)
    }

    /// Indices of the active slide and its immediate neighbours.
    #[must_use]
    pub fn near_indices(&self) -> Vec<usize> {
        match self.len {
            0 => Vec::new(),
            1 => vec![0],
            2 => vec![self.index, (self.index + 1) % 2],
            len => vec![(self.index + len - 1) % len, self.index, (self.index + 1) % len],
        }
    }

    /// `3 / 7` style position label.
    #[must_use]
    pub fn position_label(&self) -> String {
        if self.len == 0 {
            String::new()
        } else {
            format!("{} / {}", self.index + 1, self.len)
        }
    }
}

/// Dot indicators; the active dot is filled.
pub fn dots<'a, M: Clone + 'a>(
    state: &State,
    on_select: impl Fn(usize) -> M + 'a,
) -> Element<'a, M> {
    let dots = (0..state.len()).map(|index| {
        let active = index == state.index();
        button(Space::new().width(sizing::DOT_SIZE).height(sizing::DOT_SIZE))
            .padding(0)
            .style(move |_theme: &Theme, status| dot_style(active, status))
            .on_press(on_select(index))
            .into()
    });

    container(row(dots).spacing(spacing::XS))
        .width(Length::Shrink)
        .into()
}

fn dot_style(active: bool, status: button::Status) -> button::Style {
    let alpha = match (active, status) {
        (true, _) => 1.0,
        (false, button::Status::Hovered) => 0.8,
        (false, _) => 0.45,
    };
    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::WHITE
        })),
        border: Border {
            radius: sizing::DOT_SIZE.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings {
            transition: Duration::from_millis(300),
            autoplay: None,
            interaction_pause: Duration::from_secs(8),
        }
    }

    #[test]
    fn opening_at_index_is_instant() {
        let now = Instant::now();
        let carousel = State::new(7, 4, settings(), now);
        assert_eq!(carousel.index(), 4);
        assert!(!carousel.is_animating());
        assert!(carousel.fade(now).is_none());
        assert_eq!(carousel.position_label(), "5 / 7");
    }

    #[test]
    fn start_is_clamped() {
        let carousel = State::new(3, 10, settings(), Instant::now());
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let now = Instant::now();
        let mut carousel = State::new(3, 2, settings(), now);
        assert_eq!(carousel.handle(Message::Next, now), Effect::SelectionChanged(0));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let now = Instant::now();
        let mut carousel = State::new(3, 0, settings(), now);
        assert_eq!(carousel.handle(Message::Previous, now), Effect::SelectionChanged(2));
    }

    #[test]
    fn single_slide_never_changes() {
        let now = Instant::now();
        let mut carousel = State::new(1, 0, settings(), now);
        assert_eq!(carousel.handle(Message::Next, now), Effect::None);
        assert_eq!(carousel.handle(Message::Previous, now), Effect::None);
        assert_eq!(carousel.near_indices(), vec![0]);
    }

    #[test]
    fn animated_move_cross_fades_then_settles() {
        let now = Instant::now();
        let mut carousel = State::new(4, 0, settings(), now);
        carousel.handle(Message::GoTo(2), now);

        let (from, progress) = carousel.fade(now + Duration::from_millis(150)).expect("fading");
        assert_eq!(from, 0);
        assert!((progress - 0.5).abs() < 0.01);

        carousel.handle(Message::Tick, now + Duration::from_millis(300));
        assert!(!carousel.is_animating());
    }

    #[test]
    fn instant_scroll_skips_fade() {
        let now = Instant::now();
        let mut carousel = State::new(4, 0, settings(), now);
        assert_eq!(
            carousel.scroll_to(3, Transition::Instant, now),
            Effect::SelectionChanged(3)
        );
        assert!(!carousel.is_animating());
    }

    #[test]
    fn autoplay_advances_and_pauses_on_hover() {
        let start = Instant::now();
        let mut carousel = State::new(
            3,
            0,
            Settings {
                autoplay: Some(Duration::from_secs(5)),
                ..settings()
            },
            start,
        );
        assert!(carousel.needs_tick());
        assert_eq!(
            carousel.handle(Message::Tick, start + Duration::from_secs(4)),
            Effect::None
        );
        assert_eq!(
            carousel.handle(Message::Tick, start + Duration::from_secs(5)),
            Effect::SelectionChanged(1)
        );

        carousel.handle(Message::Hovered(true), start + Duration::from_secs(6));
        assert_eq!(
            carousel.handle(Message::Tick, start + Duration::from_secs(20)),
            Effect::None
        );
    }

    #[test]
    fn interaction_pauses_autoplay_for_grace_period() {
        let start = Instant::now();
        let mut carousel = State::new(
            3,
            0,
            Settings {
                autoplay: Some(Duration::from_secs(5)),
                ..settings()
            },
            start,
        );
        carousel.handle(Message::Next, start);
        assert_eq!(
            carousel.handle(Message::Tick, start + Duration::from_secs(6)),
            Effect::None
        );
        assert_eq!(
            carousel.handle(Message::Tick, start + Duration::from_secs(8)),
            Effect::SelectionChanged(2)
        );
    }

    #[test]
    fn neighbours_wrap_around() {
        let carousel = State::new(5, 0, settings(), Instant::now());
        assert_eq!(carousel.near_indices(), vec![4, 0, 1]);
    }
}
