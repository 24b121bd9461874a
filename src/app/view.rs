// SPDX-License-Identifier: MPL-2.0
//! Root view: navbar and page, with the overlays stacked above them.
//!
//! Layers from bottom to top: the page shell, the home chat prompt, the
//! config warning, the lightbox, and the boot splash.

use super::route::Page;
use super::update::{visible_rect, PAGE_SCROLL_ID};
use super::{App, Message};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::lightbox;
use crate::ui::navbar::{self, ViewContext};
use crate::ui::pages::{about, layout::PageGeometry};
use crate::ui::splash;
use crate::ui::styles;
use crate::ui::widgets::scroll_gate;
use iced::alignment::Horizontal;
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{button, column, container, row, text, Id, Scrollable, Space, Stack};
use iced::{Element, Length, Padding};
use std::time::Instant;

pub fn view(app: &App) -> Element<'_, Message> {
    let now = Instant::now();
    let theme = app.theme();
    let page = app.navigator.current().page();

    let navbar = navbar::view(ViewContext {
        title: &app.config.about.congregation_name,
        current: page,
        dark: app.dark,
    })
    .map(Message::Navbar);

    let body: Element<'_, Message> = if app.loader.shows_fallback(page, app.splash.is_active()) {
        splash::fallback(app.fallback_rotation, &theme)
    } else if page == Page::ImageViewer {
        // Full-window page; nothing to scroll.
        match &app.pages.image_viewer {
            Some(state) => state.view(&app.lazy).map(Message::ImageViewer),
            None => empty(),
        }
    } else {
        page_shell(app, page, now)
    };

    let shell = column![navbar, body]
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            container(shell)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::page),
        );

    if page == Page::Home && app.lightbox.is_closed() {
        if let Some(prompt) = app.pages.home.as_ref().and_then(|home| home.chat_prompt()) {
            layers = layers.push(prompt.map(Message::Home));
        }
    }

    if app.config_warning.is_some() {
        layers = layers.push(config_warning());
    }

    if let Some(lightbox) = lightbox::view(&app.lightbox, &app.lazy, now) {
        layers = layers.push(lightbox.map(Message::Lightbox));
    }

    if app.splash.is_active() {
        layers = layers.push(splash::view(
            &app.config.about.congregation_name,
            &app.config.about.tagline,
            app.splash.spinner_rotation(),
            &theme,
        ));
    }

    layers.into()
}

/// The scrolling page. While the scroll lock holds the page, wheel and key
/// scrolling are blocked, the scrollbar is hidden and its width is given
/// back as right padding so the content does not shift.
fn page_shell(app: &App, page: Page, now: Instant) -> Element<'_, Message> {
    let style = app.scroll_lock.style();
    let content = container(page_content(app, page, now))
        .width(Length::Fill)
        .padding(Padding::ZERO.right(style.padding_right));

    let scrollbar = if style.overflow.scrolls() {
        Scrollbar::new().width(sizing::SCROLLBAR_WIDTH).scroller_width(sizing::SCROLLBAR_WIDTH)
    } else {
        Scrollbar::hidden()
    };

    let scrollable = Scrollable::new(content)
        .id(Id::new(PAGE_SCROLL_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Vertical(scrollbar))
        .on_scroll(|viewport: Viewport| Message::PageScrolled(visible_rect(&viewport)));

    scroll_gate(scrollable)
        .locked(!style.overflow.scrolls())
        .into()
}

fn page_content(app: &App, page: Page, now: Instant) -> Element<'_, Message> {
    let pages = &app.pages;
    let geometry = PageGeometry::new(app.viewport.width);

    match page {
        Page::Home => pages.home.as_ref().map_or_else(empty, |state| {
            state
                .view(&app.lazy, &app.config.about, now)
                .map(Message::Home)
        }),
        Page::About => about::view(&app.config.about).map(|message| match message {
            about::Message::Navigate(route) => Message::Navigate(route),
        }),
        Page::Events => pages
            .events
            .as_ref()
            .map_or_else(empty, |state| state.view().map(Message::Events)),
        Page::EventDetail => pages.event_detail.as_ref().map_or_else(empty, |state| {
            state.view(&app.lazy).map(Message::EventDetail)
        }),
        Page::Gallery => pages.gallery.as_ref().map_or_else(empty, |state| {
            state.view(&app.lazy, geometry).map(Message::Gallery)
        }),
        Page::Ministries => pages
            .ministries
            .as_ref()
            .map_or_else(empty, |state| state.view().map(Message::Ministries)),
        Page::Sermons => pages
            .sermons
            .as_ref()
            .map_or_else(empty, |state| state.view(&app.lazy).map(Message::Sermons)),
        Page::Contact => pages.contact.as_ref().map_or_else(empty, |state| {
            state.view(&app.config.about).map(Message::Contact)
        }),
        Page::AdminGallery => pages
            .admin_gallery
            .as_ref()
            .map_or_else(empty, |state| state.view().map(Message::AdminGallery)),
        // Drawn outside the scrollable.
        Page::ImageViewer => empty(),
    }
}

fn empty<'a>() -> Element<'a, Message> {
    Space::new().into()
}

fn config_warning<'a>() -> Element<'a, Message> {
    let notice = container(
        row![
            text("Your settings file could not be read; defaults are in use.")
                .size(typography::BODY),
            button(text("Dismiss").size(typography::BODY))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::secondary)
                .on_press(Message::DismissConfigWarning),
        ]
        .spacing(spacing::MD)
        .align_y(iced::Alignment::Center),
    )
    .padding(spacing::SM)
    .style(styles::container::notice(false));

    container(notice)
        .width(Length::Fill)
        .padding(Padding::ZERO.top(sizing::NAVBAR_HEIGHT + spacing::XS))
        .align_x(Horizontal::Center)
        .into()
}
