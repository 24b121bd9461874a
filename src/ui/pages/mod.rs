// SPDX-License-Identifier: MPL-2.0
//! Site pages.
//!
//! Every page follows the same shape: a `State` created on first visit, a
//! `Message` enum whose `Loaded` variant carries the fetch result, an
//! `Event` enum for what the application must do next, and a `view`.
//! Pages with lazy images also place their slots so the shared
//! [`LazyMedia`](crate::media::LazyMedia) registry can test them against the
//! page viewport.

pub mod about;
pub mod admin_gallery;
pub mod contact;
pub mod event_detail;
pub mod events;
pub mod gallery;
pub mod home;
pub mod image_viewer;
pub mod layout;
pub mod ministries;
pub mod sermons;

use crate::error::StoreError;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::empty_state;
use iced::alignment::Vertical;
use iced::widget::{container, text};
use iced::{Element, Length};

/// Data fetched for a page.
#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    Loading,
    Ready(T),
    /// The fetch failed; the page says nothing is available.
    Unavailable,
}

impl<T> Remote<T> {
    /// Converts a fetch result, logging failures under `what`.
    pub fn from_result(result: Result<T, StoreError>, what: &str) -> Self {
        match result {
            Ok(value) => Remote::Ready(value),
            Err(err) => {
                tracing::warn!(what, error = %err, "fetch failed");
                Remote::Unavailable
            }
        }
    }

    /// Transforms ready data, keeping the other states.
    pub fn map_ready<U>(self, f: impl FnOnce(T) -> U) -> Remote<U> {
        match self {
            Remote::Loading => Remote::Loading,
            Remote::Ready(value) => Remote::Ready(f(value)),
            Remote::Unavailable => Remote::Unavailable,
        }
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Remote::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Remote::Loading)
    }
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Remote::Loading
    }
}

/// Fixed-height page heading. The height is part of the slot geometry.
pub fn page_title<'a, M: 'a>(title: impl Into<String>) -> Element<'a, M> {
    container(text(title.into()).size(typography::TITLE_LG))
        .width(Length::Fill)
        .height(sizing::SECTION_HEADER_HEIGHT)
        .align_y(Vertical::Center)
        .into()
}

/// Fixed-height section heading inside a page.
pub fn section_title<'a, M: 'a>(title: impl Into<String>) -> Element<'a, M> {
    container(text(title.into()).size(typography::TITLE_MD))
        .width(Length::Fill)
        .height(sizing::SECTION_HEADER_HEIGHT)
        .align_y(Vertical::Center)
        .into()
}

/// Renders a list-like [`Remote`]: nothing while loading, the empty state
/// when unavailable or empty, otherwise `content`.
pub fn list_or_empty<'a, T, M: 'a>(
    remote: &'a Remote<Vec<T>>,
    what: &str,
    content: impl FnOnce(&'a [T]) -> Element<'a, M>,
) -> Element<'a, M> {
    match remote {
        Remote::Loading => container(text("")).height(spacing::XXL).into(),
        Remote::Ready(items) if !items.is_empty() => content(items),
        Remote::Ready(_) | Remote::Unavailable => empty_state::view(what),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_fetch_becomes_unavailable() {
        let remote: Remote<Vec<u8>> =
            Remote::from_result(Err(StoreError::Http("offline".into())), "events");
        assert_eq!(remote, Remote::Unavailable);
        assert!(remote.ready().is_none());
    }

    #[test]
    fn default_is_loading() {
        assert!(Remote::<()>::default().is_loading());
    }
}
