// SPDX-License-Identifier: MPL-2.0
//! Gallery records and the rules that turn them into rendered sections.

use super::id::RecordId;
use super::video_link;
use serde::{Deserialize, Serialize};

/// A gallery entry: a sequence of images, a video, or both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    pub section_id: RecordId,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default = "default_published")]
    pub published: bool,
}

fn default_published() -> bool {
    true
}

/// How an item is presented when opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    Images,
    Video,
}

impl MediaItem {
    /// The modality the lightbox uses for this item on its own.
    ///
    /// Images win when both are present; a video-only item opens as video.
    /// Items with neither have no modality and cannot be opened.
    #[must_use]
    pub fn primary_modality(&self) -> Option<Modality> {
        match (self.image_urls.is_empty(), self.video_url.is_some()) {
            (false, _) => Some(Modality::Images),
            (true, true) => Some(Modality::Video),
            (true, false) => None,
        }
    }

    /// The modality used when the item is shown inside a section grid.
    ///
    /// Video sections open their items as video whenever a video URL exists,
    /// treating any images as posters.
    #[must_use]
    pub fn modality_in(&self, layout: SectionLayout) -> Option<Modality> {
        match layout {
            SectionLayout::VideoGrid if self.video_url.is_some() => Some(Modality::Video),
            _ => self.primary_modality(),
        }
    }

    /// Image shown on the grid card.
    #[must_use]
    pub fn thumbnail_url(&self) -> Option<String> {
        self.image_urls
            .first()
            .cloned()
            .or_else(|| self.video_url.as_deref().and_then(video_link::poster_url))
    }

    #[must_use]
    pub fn image_count(&self) -> usize {
        self.image_urls.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GallerySection {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub display_order: i32,
}

/// Grid style chosen for a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLayout {
    /// Plain image thumbnails.
    ImageGrid,
    /// Thumbnails with a play-icon overlay.
    VideoGrid,
}

impl SectionLayout {
    /// Sections whose name mentions "video" (any case) are video grids.
    #[must_use]
    pub fn for_section_name(name: &str) -> Self {
        if name.to_lowercase().contains("video") {
            SectionLayout::VideoGrid
        } else {
            SectionLayout::ImageGrid
        }
    }
}

/// A section ready for rendering: ordered, filtered, never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionGroup {
    pub section: GallerySection,
    pub layout: SectionLayout,
    pub items: Vec<MediaItem>,
}

/// Groups items under their sections.
///
/// Sections are ordered by `display_order` ascending (ties keep store
/// order), items likewise. Unpublished items are dropped unless
/// `include_unpublished` is set, and sections left with no items are omitted
/// entirely. Items pointing at an unknown section are dropped.
#[must_use]
pub fn group_sections(
    sections: &[GallerySection],
    items: &[MediaItem],
    include_unpublished: bool,
) -> Vec<SectionGroup> {
    let mut ordered: Vec<&GallerySection> = sections.iter().collect();
    ordered.sort_by_key(|section| section.display_order);

    ordered
        .into_iter()
        .filter_map(|section| {
            let mut members: Vec<MediaItem> = items
                .iter()
                .filter(|item| item.section_id == section.id)
                .filter(|item| include_unpublished || item.published)
                .cloned()
                .collect();
            if members.is_empty() {
                return None;
            }
            members.sort_by_key(|item| item.display_order);
            Some(SectionGroup {
                layout: SectionLayout::for_section_name(&section.name),
                section: section.clone(),
                items: members,
            })
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn section(id: &str, name: &str, order: i32) -> GallerySection {
        GallerySection {
            id: RecordId::new(id),
            name: name.to_string(),
            display_order: order,
        }
    }

    pub fn image_item(id: &str, section: &str, order: i32, images: usize) -> MediaItem {
        MediaItem {
            id: RecordId::new(id),
            title: format!("Item {id}"),
            description: None,
            image_urls: (0..images)
                .map(|i| format!("https://cdn.example.org/{id}/{i}.jpg"))
                .collect(),
            video_url: None,
            section_id: RecordId::new(section),
            display_order: order,
            published: true,
        }
    }

    pub fn video_item(id: &str, section: &str, order: i32) -> MediaItem {
        MediaItem {
            video_url: Some(format!("https://youtu.be/{id}")),
            ..image_item(id, section, order, 0)
        }
    }
}
