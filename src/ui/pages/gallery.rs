// SPDX-License-Identifier: MPL-2.0
//! Gallery page.
//!
//! Sections in display order, each holding its published items in display
//! order. Sections without items are not drawn at all. A section whose name
//! mentions "video" is drawn as a grid of playable thumbnails with a play
//! badge; every other section is an image grid. Pressing a thumbnail opens
//! the lightbox on that item.

use super::layout::{page_column, FlowLayout, PageGeometry, BLOCK_GAP, HEADING_GAP};
use super::{page_title, section_title, Remote};
use crate::domain::gallery::group_sections;
use crate::domain::{MediaItem, Modality, RecordId, SectionGroup, SectionLayout};
use crate::error::StoreError;
use crate::media::{LazyMedia, MediaSource, SlotKey};
use crate::store::fetch::GalleryRows;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::empty_state;
use crate::ui::lazy_image::{self, Frame};
use crate::ui::styles::{self, overlay};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, column, container, text, Column, Row, Stack};
use iced::{Element, Length, Point, Rectangle};

pub const SLOT_PREFIX: &str = "gallery/";

/// Gap between thumbnails.
pub const CELL_GAP: f32 = spacing::SM;

#[derive(Debug)]
pub struct State {
    groups: Remote<Vec<SectionGroup>>,
    thumbnail: f32,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<GalleryRows, StoreError>),
    Open(RecordId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Ready,
    OpenLightbox {
        item: MediaItem,
        index: usize,
        modality: Modality,
    },
}

/// One thumbnail's place on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedSlot<'a> {
    pub key: SlotKey,
    pub item: &'a MediaItem,
    pub rect: Rectangle,
}

impl State {
    #[must_use]
    pub fn new(thumbnail: f32) -> Self {
        Self {
            groups: Remote::Loading,
            thumbnail,
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Loaded(result) => {
                self.groups = Remote::from_result(result, "gallery").map_ready(|rows| {
                    group_sections(&rows.sections, &rows.items, false)
                });
                Event::Ready
            }
            Message::Open(id) => self.open(&id),
        }
    }

    fn open(&self, id: &RecordId) -> Event {
        let found = self.groups.ready().and_then(|groups| {
            groups.iter().find_map(|group| {
                group
                    .items
                    .iter()
                    .find(|item| &item.id == id)
                    .map(|item| (item, group.layout))
            })
        });
        let Some((item, layout)) = found else {
            return Event::None;
        };
        match item.modality_in(layout) {
            Some(modality) => Event::OpenLightbox {
                item: item.clone(),
                index: 0,
                modality,
            },
            None => {
                tracing::debug!(item = %id, "gallery item has no media to show");
                Event::None
            }
        }
    }

    #[must_use]
    pub fn groups(&self) -> &Remote<Vec<SectionGroup>> {
        &self.groups
    }

    /// Mounts one slot per thumbnail at its page position and drops slots
    /// of items no longer shown.
    pub fn place_slots(&self, lazy: &mut LazyMedia, geometry: PageGeometry) {
        let Some(groups) = self.groups.ready() else {
            lazy.unmount_prefix(SLOT_PREFIX);
            return;
        };
        let placed = layout_slots(groups, geometry, self.thumbnail);
        let keys: Vec<SlotKey> = placed.iter().map(|slot| slot.key.clone()).collect();
        lazy.retain_under(SLOT_PREFIX, &keys);

        for slot in placed {
            if let Some(url) = slot.item.thumbnail_url() {
                lazy.mount(
                    slot.key,
                    MediaSource::new(url, slot.item.title.clone())
                        .sized(self.thumbnail, self.thumbnail),
                    slot.rect,
                );
            }
        }
    }

    pub fn view<'a>(&'a self, lazy: &'a LazyMedia, geometry: PageGeometry) -> Element<'a, Message> {
        let mut blocks = vec![page_title("Gallery")];
        match &self.groups {
            Remote::Loading => {}
            Remote::Ready(groups) if !groups.is_empty() => {
                let flow = FlowLayout::new(geometry.content_width(), self.thumbnail, CELL_GAP);
                blocks.extend(groups.iter().map(|group| section(group, lazy, flow)));
            }
            Remote::Ready(_) | Remote::Unavailable => blocks.push(empty_state::view("photos")),
        }
        page_column(blocks)
    }
}

/// Positions every thumbnail slot for `groups` rendered at `geometry`.
///
/// Mirrors [`State::view`]: title block, then per section a heading and a
/// wrapped grid, blocks separated by [`BLOCK_GAP`].
#[must_use]
pub fn layout_slots(
    groups: &[SectionGroup],
    geometry: PageGeometry,
    thumbnail: f32,
) -> Vec<PlacedSlot<'_>> {
    let flow = FlowLayout::new(geometry.content_width(), thumbnail, CELL_GAP);
    let origin = geometry.origin();
    let mut y = origin.y + sizing::SECTION_HEADER_HEIGHT + BLOCK_GAP;
    let mut placed = Vec::new();

    for group in groups {
        let grid_origin = Point::new(origin.x, y + sizing::SECTION_HEADER_HEIGHT + HEADING_GAP);
        placed.extend(group.items.iter().enumerate().map(|(index, item)| PlacedSlot {
            key: slot_key(&item.id),
            item,
            rect: flow.cell_rect(grid_origin, index),
        }));
        y = grid_origin.y + flow.height(group.items.len()) + BLOCK_GAP;
    }
    placed
}

#[must_use]
pub fn slot_key(id: &RecordId) -> SlotKey {
    SlotKey::new(format!("{SLOT_PREFIX}{id}"))
}

fn section<'a>(group: &'a SectionGroup, lazy: &'a LazyMedia, flow: FlowLayout) -> Element<'a, Message> {
    let columns = flow.columns();
    let rows = group.items.chunks(columns).fold(
        Column::new().spacing(flow.gap),
        |rows, chunk| {
            let row = chunk.iter().fold(Row::new().spacing(flow.gap), |row, item| {
                row.push(cell(item, group.layout, lazy, flow.cell))
            });
            rows.push(row)
        },
    );

    column![section_title(group.section.name.clone()), rows]
        .spacing(HEADING_GAP)
        .into()
}

fn cell<'a>(
    item: &'a MediaItem,
    layout: SectionLayout,
    lazy: &'a LazyMedia,
    size: f32,
) -> Element<'a, Message> {
    let mut layers = Stack::new()
        .width(size)
        .height(size)
        .push(lazy_image::view(lazy, &slot_key(&item.id), Frame::thumbnail(size, size)));

    if item.modality_in(layout) == Some(Modality::Video) {
        layers = layers.push(
            container(
                container(text("▶").size(typography::TITLE_MD))
                    .padding([spacing::XS, spacing::SM])
                    .style(overlay::play_badge),
            )
            .center(Length::Fill),
        );
    } else if item.image_count() > 1 {
        layers = layers.push(
            container(
                container(text(format!("{} photos", item.image_count())).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::XS])
                    .style(overlay::indicator(radius::FULL)),
            )
            .width(Length::Fill)
            .padding(spacing::XS)
            .align_x(Horizontal::Right),
        );
    }

    layers = layers.push(
        container(
            container(text(&item.title).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(overlay::indicator(radius::SM)),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XS)
        .align_y(Vertical::Bottom),
    );

    button(layers)
        .padding(0)
        .style(styles::button::card)
        .on_press(Message::Open(item.id.clone()))
        .into()
}
