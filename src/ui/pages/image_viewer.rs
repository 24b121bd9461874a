// SPDX-License-Identifier: MPL-2.0
//! Full-window single image, addressed as `/image-viewer?src=<url>&alt=<text>`.
//!
//! A viewer route without `src` never gets a state: the app navigates back
//! as soon as it sees one.

use crate::media::{LazyMedia, MediaSource, SlotKey};
use crate::ui::design_tokens::{opacity, palette::WHITE, radius, spacing, typography};
use crate::ui::lazy_image::{self, Frame};
use crate::ui::styles::{self, overlay};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, text, Stack};
use iced::{Element, Length};

pub const SLOT_PREFIX: &str = "viewer/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    src: String,
    alt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Back,
}

impl State {
    #[must_use]
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }

    #[must_use]
    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Back => Event::Back,
        }
    }

    /// Mounts the single image; it is loaded immediately.
    pub fn place_slots(&self, lazy: &mut LazyMedia) -> Vec<SlotKey> {
        let key = image_key();
        let alt = if self.alt.is_empty() { "Image" } else { &self.alt };
        lazy.mount_detached(
            key.clone(),
            MediaSource::new(self.src.clone(), alt).skip_placeholder(),
        );
        vec![key]
    }

    pub fn view<'a>(&'a self, lazy: &'a LazyMedia) -> Element<'a, Message> {
        let back = button(text("‹ Back").size(typography::BODY_LG))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button_overlay(WHITE, opacity::OVERLAY_SUBTLE, opacity::OVERLAY_MEDIUM))
            .on_press(Message::Back);

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(
                container(lazy_image::view(lazy, &image_key(), Frame::contain()))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .padding(spacing::LG)
                    .style(overlay::backdrop),
            )
            .push(container(back).padding(spacing::MD));

        if !self.alt.is_empty() {
            layers = layers.push(
                container(
                    container(text(&self.alt).size(typography::BODY))
                        .padding([spacing::XS, spacing::SM])
                        .style(overlay::indicator(radius::MD)),
                )
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Bottom),
            );
        }
        layers.into()
    }
}

fn image_key() -> SlotKey {
    SlotKey::new(format!("{SLOT_PREFIX}image"))
}
