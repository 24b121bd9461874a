// SPDX-License-Identifier: MPL-2.0
//! About page: static congregation copy from `[about]`.

use super::layout::page_column;
use super::{page_title, section_title};
use crate::app::config::AboutConfig;
use crate::app::route::Route;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, text, Column};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
}

pub fn view(about: &AboutConfig) -> Element<'_, Message> {
    let story = container(text(&about.story).size(typography::BODY_LG))
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card);

    let times = about
        .service_times
        .iter()
        .fold(Column::new().spacing(spacing::XS), |list, line| {
            list.push(text(format!("• {line}")).size(typography::BODY_LG))
        });

    let mut visit = Column::new().spacing(spacing::XS);
    if let Some(address) = &about.address {
        visit = visit.push(text(address).size(typography::BODY));
    }
    if let Some(phone) = &about.phone {
        visit = visit.push(text(format!("Phone: {phone}")).size(typography::BODY));
    }
    if let Some(email) = &about.email {
        visit = visit.push(text(format!("Email: {email}")).size(typography::BODY));
    }

    let contact = button(text("Get in touch"))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::Navigate(Route::Contact));

    page_column(vec![
        page_title(format!("About {}", about.congregation_name)),
        text(&about.tagline).size(typography::TITLE_SM).into(),
        story.into(),
        column![section_title("Service times"), times]
            .spacing(spacing::XS)
            .into(),
        column![section_title("Visit us"), visit, contact]
            .spacing(spacing::SM)
            .into(),
    ])
}
