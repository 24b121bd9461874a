// SPDX-License-Identifier: MPL-2.0
//! Domain layer: the records served by the remote store and the pure rules
//! built on them.
//!
//! # Modules
//!
//! - [`id`]: [`RecordId`](id::RecordId), the opaque row identifier
//! - [`gallery`]: [`MediaItem`](gallery::MediaItem), [`GallerySection`](gallery::GallerySection)
//!   and section grouping / layout selection
//! - [`content`]: events, sermons, ministries and contact messages
//! - [`ministry_icon`]: closed icon set for ministries
//! - [`video_link`]: recognising hosted-video URLs and their poster images

pub mod content;
pub mod gallery;
pub mod id;
pub mod ministry_icon;
pub mod video_link;

pub use content::{ContactMessage, Event, Ministry, Sermon};
pub use gallery::{GallerySection, MediaItem, Modality, SectionGroup, SectionLayout};
pub use id::RecordId;
pub use ministry_icon::MinistryIcon;
