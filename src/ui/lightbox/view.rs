// SPDX-License-Identifier: MPL-2.0
//! Lightbox rendering.
//!
//! The lightbox is a stack of layers: the dimmed backdrop (pressing it
//! closes), the media (pressing it does nothing), then the chrome drawn over
//! both: arrows, close button, counter and dots.

use super::{poster_key, slide_key, CloseReason, Message, Session, State};
use crate::domain::Modality;
use crate::media::LazyMedia;
use crate::ui::carousel;
use crate::ui::design_tokens::{opacity, palette::WHITE, radius, sizing, spacing, typography};
use crate::ui::lazy_image::{self, Frame};
use crate::ui::styles::{self, overlay};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, center, column, container, mouse_area, opaque, text, Container, Space, Stack};
use iced::{Element, Length, Padding};
use std::time::Instant;

/// Renders the open lightbox, or nothing while it is closed or settling.
#[must_use]
pub fn view<'a>(state: &'a State, lazy: &'a LazyMedia, now: Instant) -> Option<Element<'a, Message>> {
    let session = state.session()?;

    let backdrop = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(overlay::backdrop),
    )
    .on_press(Message::Close(CloseReason::Backdrop));

    let media = match session.modality() {
        Modality::Images => slides(session, lazy, now),
        Modality::Video => video_panel(session, lazy),
    };
    let media = container(media)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .max_height(sizing::CONTENT_MAX_WIDTH * 0.75)
        .width(Length::Fill)
        .height(Length::Fill);
    let content = container(opaque(mouse_area(media).on_press(Message::ContentPressed)))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XXL + spacing::MD)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(content);

    if let Some(carousel) = session.carousel().filter(|c| c.len() > 1) {
        stack = stack
            .push(arrow_zone("◀", Horizontal::Left, carousel::Message::Previous))
            .push(arrow_zone("▶", Horizontal::Right, carousel::Message::Next))
            .push(footer(carousel));
    }

    stack = stack.push(close_button());
    Some(stack.into())
}

fn slides<'a>(session: &'a Session, lazy: &'a LazyMedia, now: Instant) -> Element<'a, Message> {
    let Some(carousel) = session.carousel() else {
        return Space::new().into();
    };

    let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);
    match carousel.fade(now) {
        Some((from, progress)) => {
            layers = layers
                .push(lazy_image::view(
                    lazy,
                    &slide_key(from),
                    Frame::contain().opacity(1.0 - progress),
                ))
                .push(lazy_image::view(
                    lazy,
                    &slide_key(carousel.index()),
                    Frame::contain().opacity(progress),
                ));
        }
        None => {
            layers = layers.push(lazy_image::view(
                lazy,
                &slide_key(carousel.index()),
                Frame::contain(),
            ));
        }
    }
    layers.into()
}

fn video_panel<'a>(session: &'a Session, lazy: &'a LazyMedia) -> Element<'a, Message> {
    let play = button(
        container(text("▶").size(typography::TITLE_LG))
            .padding(spacing::MD)
            .style(overlay::play_badge),
    )
    .padding(0)
    .style(styles::button_overlay(WHITE, 0.0, opacity::OVERLAY_SUBTLE))
    .on_press(Message::PlayVideo);

    let caption = container(text(&session.item().title).size(typography::BODY_LG))
        .padding([spacing::XS, spacing::SM])
        .style(overlay::indicator(radius::MD));

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(lazy_image::view(lazy, &poster_key(), Frame::contain()))
        .push(center(column![play, caption].spacing(spacing::SM).align_x(Horizontal::Center)))
        .into()
}

fn arrow_zone<'a>(
    glyph: &'a str,
    side: Horizontal,
    message: carousel::Message,
) -> Element<'a, Message> {
    let arrow = button(text(glyph).size(typography::TITLE_LG))
        .padding(spacing::SM)
        .style(styles::button_overlay(
            WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(Message::Carousel(message));

    Container::new(arrow)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(side)
        .align_y(Vertical::Center)
        .into()
}

fn close_button<'a>() -> Element<'a, Message> {
    let close = button(text("✕").size(typography::TITLE_MD))
        .padding(spacing::XS)
        .style(styles::button_overlay(
            WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(Message::Close(CloseReason::Button));

    Container::new(close)
        .width(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Right)
        .into()
}

fn footer<'a>(carousel: &carousel::State) -> Element<'a, Message> {
    let counter = container(text(carousel.position_label()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(overlay::indicator(radius::FULL));
    let dots = carousel::dots(carousel, |index| {
        Message::Carousel(carousel::Message::GoTo(index))
    });

    Container::new(column![counter, dots].spacing(spacing::XS).align_x(Horizontal::Center))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding::ZERO.bottom(spacing::LG))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom)
        .into()
}
