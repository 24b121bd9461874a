// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown above every page.
//!
//! Carries the congregation name, one link per public page, the admin link
//! and a theme toggle.

use crate::app::route::{Page, Route};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, container, row, text, Row, Space};
use iced::{Element, Length};

/// Public pages in navbar order.
pub const LINKS: [Route; 7] = [
    Route::Home,
    Route::About,
    Route::Events,
    Route::Gallery,
    Route::Ministries,
    Route::Sermons,
    Route::Contact,
];

pub struct ViewContext<'a> {
    pub title: &'a str,
    pub current: Page,
    pub dark: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
    ToggleTheme,
}

/// Events propagated to the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Navigate(Route),
    ToggleTheme,
}

pub fn update(message: Message) -> Event {
    match message {
        Message::Navigate(route) => Event::Navigate(route),
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = button(text(ctx.title).size(typography::TITLE_SM))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::link)
        .on_press(Message::Navigate(Route::Home));

    let links = LINKS.iter().fold(Row::new().spacing(spacing::XXS), |links, route| {
        links.push(link(route.clone(), is_active(route, ctx.current)))
    });

    let admin = link(
        Route::AdminGallery,
        ctx.current == Page::AdminGallery,
    );

    let theme_toggle = button(text(if ctx.dark { "☀" } else { "☾" }).size(typography::BODY_LG))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::secondary)
        .on_press(Message::ToggleTheme);

    container(
        row![
            brand,
            Space::new().width(Length::Fill),
            links,
            Space::new().width(spacing::MD),
            admin,
            theme_toggle,
        ]
        .spacing(spacing::XS)
        .align_y(Vertical::Center),
    )
    .width(Length::Fill)
    .height(sizing::NAVBAR_HEIGHT)
    .padding([0.0, spacing::MD])
    .align_y(Vertical::Center)
    .style(styles::container::navbar)
    .into()
}

fn link<'a>(route: Route, active: bool) -> Element<'a, Message> {
    button(text(route.label()).size(typography::BODY))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::nav_link(active))
        .on_press(Message::Navigate(route))
        .into()
}

/// Event details highlight the events link.
fn is_active(route: &Route, current: Page) -> bool {
    match (route.page(), current) {
        (Page::Events, Page::EventDetail) => true,
        (page, current) => page == current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_detail_highlights_events_link() {
        assert!(is_active(&Route::Events, Page::EventDetail));
        assert!(is_active(&Route::Gallery, Page::Gallery));
        assert!(!is_active(&Route::Home, Page::Gallery));
    }

    #[test]
    fn update_forwards_navigation() {
        assert_eq!(
            update(Message::Navigate(Route::Sermons)),
            Event::Navigate(Route::Sermons)
        );
    }
}
