// SPDX-License-Identifier: MPL-2.0
//! Gallery administration.
//!
//! Lists every item, unpublished ones included, grouped like the public
//! gallery. Edits are applied to the local copy straight away and sent to
//! the store; once the store answers the page reloads so the list reflects
//! what was actually saved.

use super::layout::page_column;
use super::{page_title, section_title, Remote};
use crate::domain::gallery::group_sections;
use crate::domain::{MediaItem, RecordId, SectionGroup};
use crate::error::StoreError;
use crate::store::fetch::GalleryRows;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::empty_state;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, column, container, row, text, Column, Space};
use iced::{Element, Length};

/// A write the page wants sent to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    SetPublished { id: RecordId, published: bool },
    /// Each pair is an item and the order it held before the swap.
    SwapOrder {
        first: (RecordId, i32),
        second: (RecordId, i32),
    },
    /// New `display_order` values for the items of one section whose order
    /// changed when the section was renumbered by position.
    Renumber(Vec<(RecordId, i32)>),
    Delete(RecordId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Default)]
pub struct State {
    groups: Remote<Vec<SectionGroup>>,
    confirming_delete: Option<RecordId>,
    in_flight: usize,
    last_error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<GalleryRows, StoreError>),
    TogglePublished(RecordId),
    Move(RecordId, Direction),
    Delete(RecordId),
    ConfirmDelete,
    CancelDelete,
    Saved(Result<(), StoreError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Ready,
    Request(Request),
    Reload,
}

impl State {
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Loaded(result) => {
                self.groups = Remote::from_result(result, "gallery items")
                    .map_ready(|rows| group_sections(&rows.sections, &rows.items, true));
                Event::Ready
            }
            Message::TogglePublished(id) => match self.item_mut(&id) {
                Some(item) => {
                    item.published = !item.published;
                    let published = item.published;
                    self.sent(Request::SetPublished { id, published })
                }
                None => Event::None,
            },
            Message::Move(id, direction) => match self.swap_with_neighbour(&id, direction) {
                Some(request) => self.sent(request),
                None => Event::None,
            },
            Message::Delete(id) => {
                self.confirming_delete = Some(id);
                Event::None
            }
            Message::CancelDelete => {
                self.confirming_delete = None;
                Event::None
            }
            Message::ConfirmDelete => {
                let Some(id) = self.confirming_delete.take() else {
                    return Event::None;
                };
                if let Remote::Ready(groups) = &mut self.groups {
                    for group in groups.iter_mut() {
                        group.items.retain(|item| item.id != id);
                    }
                    groups.retain(|group| !group.items.is_empty());
                }
                self.sent(Request::Delete(id))
            }
            Message::Saved(result) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                if let Err(err) = result {
                    tracing::warn!(error = %err, "failed to save gallery change");
                    self.last_error = Some(err.to_string());
                }
                // Reload once the last outstanding write has landed.
                if self.in_flight == 0 {
                    Event::Reload
                } else {
                    Event::None
                }
            }
        }
    }

    fn sent(&mut self, request: Request) -> Event {
        self.in_flight += 1;
        self.last_error = None;
        Event::Request(request)
    }

    fn item_mut(&mut self, id: &RecordId) -> Option<&mut MediaItem> {
        let Remote::Ready(groups) = &mut self.groups else {
            return None;
        };
        groups
            .iter_mut()
            .flat_map(|group| group.items.iter_mut())
            .find(|item| &item.id == id)
    }

    /// Swaps an item with its neighbour inside the same section.
    fn swap_with_neighbour(&mut self, id: &RecordId, direction: Direction) -> Option<Request> {
        let Remote::Ready(groups) = &mut self.groups else {
            return None;
        };
        let (group, index) = groups.iter_mut().find_map(|group| {
            let index = group.items.iter().position(|item| &item.id == id)?;
            Some((group, index))
        })?;
        let other = match direction {
            Direction::Up => index.checked_sub(1)?,
            Direction::Down => Some(index + 1).filter(|next| *next < group.items.len())?,
        };

        let tied = group
            .items
            .windows(2)
            .any(|pair| pair[0].display_order == pair[1].display_order);
        if tied {
            // Swapping values cannot order tied items; renumber by position.
            group.items.swap(index, other);
            let changed = group
                .items
                .iter_mut()
                .zip(0_i32..)
                .filter(|(item, position)| item.display_order != *position)
                .map(|(item, position)| {
                    item.display_order = position;
                    (item.id.clone(), position)
                })
                .collect();
            return Some(Request::Renumber(changed));
        }

        let (mine, theirs) = (
            group.items[index].display_order,
            group.items[other].display_order,
        );
        let request = Request::SwapOrder {
            first: (group.items[index].id.clone(), mine),
            second: (group.items[other].id.clone(), theirs),
        };
        group.items[index].display_order = theirs;
        group.items[other].display_order = mine;
        group.items.swap(index, other);
        Some(request)
    }

    #[must_use]
    pub fn groups(&self) -> &Remote<Vec<SectionGroup>> {
        &self.groups
    }

    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.in_flight > 0
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut blocks = vec![page_title("Manage gallery")];

        if let Some(error) = &self.last_error {
            blocks.push(
                container(text(format!("Last change was not saved: {error}")).size(typography::BODY))
                    .padding(spacing::SM)
                    .width(Length::Fill)
                    .style(styles::container::notice(false))
                    .into(),
            );
        }

        match &self.groups {
            Remote::Loading => {}
            Remote::Ready(groups) if !groups.is_empty() => {
                blocks.extend(groups.iter().map(|group| self.section(group)));
            }
            Remote::Ready(_) | Remote::Unavailable => blocks.push(empty_state::view("gallery items")),
        }
        page_column(blocks)
    }

    fn section<'a>(&'a self, group: &'a SectionGroup) -> Element<'a, Message> {
        let last = group.items.len().saturating_sub(1);
        let rows = group
            .items
            .iter()
            .enumerate()
            .fold(Column::new().spacing(spacing::XS), |rows, (index, item)| {
                rows.push(self.item_row(item, index == 0, index == last))
            });
        column![section_title(group.section.name.clone()), rows]
            .spacing(spacing::XS)
            .into()
    }

    fn item_row<'a>(&'a self, item: &'a MediaItem, first: bool, last: bool) -> Element<'a, Message> {
        let status = container(
            text(if item.published { "Published" } else { "Hidden" }).size(typography::CAPTION),
        )
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::chip(if item.published {
            palette::SUCCESS_500
        } else {
            palette::GRAY_400
        }));

        let details = column![
            text(&item.title).size(typography::BODY_LG),
            text(format!(
                "{} image(s){}",
                item.image_count(),
                if item.video_url.is_some() { " · video" } else { "" }
            ))
            .size(typography::CAPTION),
        ]
        .spacing(spacing::XXS);

        let small = |label: &'a str, message: Option<Message>| {
            button(text(label).size(typography::BODY))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::secondary)
                .on_press_maybe(message)
        };

        let actions: Element<'a, Message> = if self.confirming_delete.as_ref() == Some(&item.id) {
            row![
                text("Delete this item?").size(typography::BODY),
                button(text("Delete"))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::button::danger)
                    .on_press(Message::ConfirmDelete),
                small("Cancel", Some(Message::CancelDelete)),
            ]
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .into()
        } else {
            row![
                small("↑", (!first).then(|| Message::Move(item.id.clone(), Direction::Up))),
                small("↓", (!last).then(|| Message::Move(item.id.clone(), Direction::Down))),
                small(
                    if item.published { "Unpublish" } else { "Publish" },
                    Some(Message::TogglePublished(item.id.clone())),
                ),
                button(text("Delete"))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::button::danger)
                    .on_press(Message::Delete(item.id.clone())),
            ]
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .into()
        };

        container(
            row![details, status, Space::new().width(Length::Fill), actions]
                .spacing(spacing::MD)
                .align_y(Vertical::Center),
        )
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
    }
}
