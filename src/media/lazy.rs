// SPDX-License-Identifier: MPL-2.0
//! Viewport-driven lazy image loading.
//!
//! Every lazy image on screen is a *slot*: a source URL, alt text and a
//! rectangle in the page's content coordinates. Slots start `NotInView`.
//! The first time a slot touches the viewport grown by the root margin it
//! moves to `InViewLoading` and exactly one download is started; later
//! viewport changes never start another. The download ends in `Loaded` or
//! `Failed`, and neither state is left again.
//!
//! Unmounting a slot drops its abort handle, which cancels the download.
//! Results are also tagged with a ticket, so a late completion for a slot
//! that was unmounted (or remounted with another source) is discarded.

use super::asset::{AssetFetcher, ImageData};
use super::cache::AssetCache;
use super::visibility;
use crate::error::AssetError;
use iced::{task, Rectangle, Task};
use std::collections::HashMap;
use std::fmt;

/// Identifies a slot; pages build keys like `gallery/42` or `hero/3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotKey(String);

impl SlotKey {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle of one slot. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    NotInView,
    InViewLoading,
    Loaded,
    Failed,
}

/// Presentation hints carried with a source.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LazyOptions {
    /// Show nothing instead of the soft placeholder while loading.
    pub skip_placeholder: bool,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediaSource {
    pub url: String,
    pub alt: String,
    pub options: LazyOptions,
}

impl MediaSource {
    #[must_use]
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: alt.into(),
            options: LazyOptions::default(),
        }
    }

    #[must_use]
    pub fn skip_placeholder(mut self) -> Self {
        self.options.skip_placeholder = true;
        self
    }

    #[must_use]
    pub fn sized(mut self, width: f32, height: f32) -> Self {
        self.options.width = Some(width);
        self.options.height = Some(height);
        self
    }
}

/// A download that should start now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub key: SlotKey,
    pub url: String,
    pub ticket: u64,
}

struct Slot {
    source: MediaSource,
    // `None` for slots outside the page flow; only `reveal` loads them.
    rect: Option<Rectangle>,
    state: LoadState,
    ticket: u64,
    image: Option<ImageData>,
    error: Option<AssetError>,
    // Dropping the handle aborts the download.
    abort: Option<task::Handle>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Finished {
        key: SlotKey,
        ticket: u64,
        result: Result<ImageData, AssetError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Loaded(SlotKey),
    Failed(SlotKey),
    /// The result belonged to a slot that is gone or was remounted.
    Discarded,
}

pub struct LazyMedia {
    slots: HashMap<SlotKey, Slot>,
    root_margin: f32,
    viewport: Option<Rectangle>,
    next_ticket: u64,
    cache: AssetCache,
    fetcher: Option<AssetFetcher>,
    started: u64,
}

impl LazyMedia {
    #[must_use]
    pub fn new(root_margin: f32, cache_bytes: usize, fetcher: Option<AssetFetcher>) -> Self {
        Self {
            slots: HashMap::new(),
            root_margin,
            viewport: None,
            next_ticket: 1,
            cache: AssetCache::new(cache_bytes),
            fetcher,
            started: 0,
        }
    }

    /// Registers (or repositions) a slot.
    ///
    /// Re-mounting a key with the same URL keeps its state and only updates
    /// the rectangle. A different URL replaces the slot. Sources already in
    /// the cache are `Loaded` straight away.
    pub fn mount(&mut self, key: SlotKey, source: MediaSource, rect: Rectangle) {
        self.mount_at(key, source, Some(rect));
    }

    /// Registers a slot that is not part of the scrolled page (overlay
    /// slides). It loads only through [`LazyMedia::reveal`].
    pub fn mount_detached(&mut self, key: SlotKey, source: MediaSource) {
        self.mount_at(key, source, None);
    }

    fn mount_at(&mut self, key: SlotKey, source: MediaSource, rect: Option<Rectangle>) {
        if let Some(slot) = self.slots.get_mut(&key) {
            if slot.source.url == source.url {
                slot.rect = rect;
                slot.source = source;
                return;
            }
            self.unmount(&key);
        }

        let (state, image) = match self.cache.get(&source.url) {
            Some(image) => (LoadState::Loaded, Some(image)),
            None => (LoadState::NotInView, None),
        };

        self.slots.insert(
            key,
            Slot {
                source,
                rect,
                state,
                ticket: 0,
                image,
                error: None,
                abort: None,
            },
        );
    }

    /// Removes a slot and cancels its download, if any.
    pub fn unmount(&mut self, key: &SlotKey) {
        if let Some(slot) = self.slots.remove(key) {
            if slot.state == LoadState::InViewLoading {
                tracing::trace!(%key, "lazy slot unmounted while loading");
            }
        }
    }

    /// Unmounts every slot whose key starts with `prefix`.
    pub fn unmount_prefix(&mut self, prefix: &str) {
        self.slots.retain(|key, _| !key.as_str().starts_with(prefix));
    }

    /// Keeps only the slots with keys in `keep` among those under `prefix`.
    pub fn retain_under(&mut self, prefix: &str, keep: &[SlotKey]) {
        self.slots
            .retain(|key, _| !key.as_str().starts_with(prefix) || keep.contains(key));
    }

    /// Records the current viewport and returns the loads it triggers.
    pub fn observe(&mut self, viewport: Rectangle) -> Vec<LoadRequest> {
        self.viewport = Some(viewport);
        let inflated = visibility::inflate(viewport, self.root_margin);

        let mut due: Vec<SlotKey> = self
            .slots
            .iter()
            .filter(|(_, slot)| slot.state == LoadState::NotInView)
            .filter(|(_, slot)| {
                slot.rect
                    .is_some_and(|rect| visibility::intersects(&rect, &inflated))
            })
            .map(|(key, _)| key.clone())
            .collect();
        due.sort();

        due.into_iter()
            .filter_map(|key| self.begin_load(&key))
            .collect()
    }

    /// Re-tests every slot against the last known viewport.
    pub fn reobserve(&mut self) -> Vec<LoadRequest> {
        match self.viewport {
            Some(viewport) => self.observe(viewport),
            None => Vec::new(),
        }
    }

    /// Treats the given slots as near-visible regardless of scroll position.
    ///
    /// Overlays use this for their active and neighbouring slides.
    pub fn reveal(&mut self, keys: &[SlotKey]) -> Vec<LoadRequest> {
        keys.iter().filter_map(|key| self.begin_load(key)).collect()
    }

    fn begin_load(&mut self, key: &SlotKey) -> Option<LoadRequest> {
        let ticket = self.next_ticket;
        let slot = self.slots.get_mut(key)?;
        if slot.state != LoadState::NotInView {
            return None;
        }
        self.next_ticket += 1;
        slot.state = LoadState::InViewLoading;
        slot.ticket = ticket;
        Some(LoadRequest {
            key: key.clone(),
            url: slot.source.url.clone(),
            ticket,
        })
    }

    /// Spawns the downloads for `requests`, keeping an abort handle per slot.
    pub fn start(&mut self, requests: Vec<LoadRequest>) -> Task<Message> {
        let mut tasks = Vec::with_capacity(requests.len());

        for request in requests {
            let LoadRequest { key, url, ticket } = request;
            self.started += 1;

            let Some(fetcher) = self.fetcher.clone() else {
                let _ = self.complete(
                    &key,
                    ticket,
                    Err(AssetError::Http("no HTTP client available".to_string())),
                );
                continue;
            };

            let message_key = key.clone();
            let (task, handle) = Task::perform(fetcher.fetch(url), move |result| {
                Message::Finished {
                    key: message_key.clone(),
                    ticket,
                    result,
                }
            })
            .abortable();

            if let Some(slot) = self.slots.get_mut(&key) {
                slot.abort = Some(handle.abort_on_drop());
            }
            tasks.push(task);
        }

        Task::batch(tasks)
    }

    /// Convenience: observe then start.
    pub fn update_viewport(&mut self, viewport: Rectangle) -> Task<Message> {
        let requests = self.observe(viewport);
        self.start(requests)
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Finished {
                key,
                ticket,
                result,
            } => self.complete(&key, ticket, result),
        }
    }

    fn complete(
        &mut self,
        key: &SlotKey,
        ticket: u64,
        result: Result<ImageData, AssetError>,
    ) -> Effect {
        let Some(slot) = self.slots.get_mut(key) else {
            tracing::debug!(%key, "discarding asset for unmounted slot");
            return Effect::Discarded;
        };
        if slot.ticket != ticket || slot.state != LoadState::InViewLoading {
            tracing::debug!(%key, "discarding stale asset result");
            return Effect::Discarded;
        }

        slot.abort = None;
        match result {
            Ok(image) => {
                self.cache.insert(&slot.source.url, image.clone());
                slot.image = Some(image);
                slot.state = LoadState::Loaded;
                Effect::Loaded(key.clone())
            }
            Err(err) => {
                tracing::warn!(url = %slot.source.url, error = %err, "image failed to load");
                slot.error = Some(err);
                slot.state = LoadState::Failed;
                Effect::Failed(key.clone())
            }
        }
    }

    #[must_use]
    pub fn state(&self, key: &SlotKey) -> Option<LoadState> {
        self.slots.get(key).map(|slot| slot.state)
    }

    #[must_use]
    pub fn image(&self, key: &SlotKey) -> Option<&ImageData> {
        self.slots.get(key).and_then(|slot| slot.image.as_ref())
    }

    #[must_use]
    pub fn source(&self, key: &SlotKey) -> Option<&MediaSource> {
        self.slots.get(key).map(|slot| &slot.source)
    }

    #[must_use]
    pub fn error(&self, key: &SlotKey) -> Option<&AssetError> {
        self.slots.get(key).and_then(|slot| slot.error.as_ref())
    }

    #[must_use]
    pub fn is_mounted(&self, key: &SlotKey) -> bool {
        self.slots.contains_key(key)
    }

    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of downloads started over the registry's lifetime.
    #[must_use]
    pub fn loads_started(&self) -> u64 {
        self.started
    }

    #[must_use]
    pub fn root_margin(&self) -> f32 {
        self.root_margin
    }

    #[must_use]
    pub fn cache(&self) -> &AssetCache {
        &self.cache
    }
}

impl fmt::Debug for LazyMedia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyMedia")
            .field("slots", &self.slots.len())
            .field("root_margin", &self.root_margin)
            .field("viewport", &self.viewport)
            .field("cache", &self.cache)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(y: f32) -> Rectangle {
        Rectangle {
            x: 0.0,
            y,
            width: 200.0,
            height: 200.0,
        }
    }

    fn viewport(y: f32) -> Rectangle {
        Rectangle {
            x: 0.0,
            y,
            width: 800.0,
            height: 600.0,
        }
    }

    fn registry() -> LazyMedia {
        LazyMedia::new(100.0, 8 * 1024 * 1024, None)
    }

    fn pixel() -> ImageData {
        ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    #[test]
    fn offscreen_slot_waits_for_root_margin() {
        let mut lazy = registry();
        let key = SlotKey::new("gallery/a");
        lazy.mount(key.clone(), MediaSource::new("https://cdn/a.jpg", "A"), rect(1000.0));

        assert!(lazy.observe(viewport(0.0)).is_empty());
        assert_eq!(lazy.state(&key), Some(LoadState::NotInView));

        // viewport bottom 899 + margin 100 reaches the slot top at 999..1000
        let requests = lazy.observe(viewport(300.0));
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "https://cdn/a.jpg");
        assert_eq!(lazy.state(&key), Some(LoadState::InViewLoading));
    }

    #[test]
    fn intersection_triggers_only_once() {
        let mut lazy = registry();
        let key = SlotKey::new("gallery/a");
        lazy.mount(key.clone(), MediaSource::new("https://cdn/a.jpg", "A"), rect(0.0));

        assert_eq!(lazy.observe(viewport(0.0)).len(), 1);
        assert!(lazy.observe(viewport(2000.0)).is_empty());
        assert!(lazy.observe(viewport(0.0)).is_empty());
        assert!(lazy.reveal(std::slice::from_ref(&key)).is_empty());
    }

    #[test]
    fn completion_moves_to_loaded_and_fills_cache() {
        let mut lazy = registry();
        let key = SlotKey::new("gallery/a");
        lazy.mount(key.clone(), MediaSource::new("https://cdn/a.jpg", "A"), rect(0.0));
        let request = lazy.observe(viewport(0.0)).remove(0);

        let effect = lazy.handle(Message::Finished {
            key: key.clone(),
            ticket: request.ticket,
            result: Ok(pixel()),
        });
        assert_eq!(effect, Effect::Loaded(key.clone()));
        assert_eq!(lazy.state(&key), Some(LoadState::Loaded));
        assert!(lazy.cache().contains("https://cdn/a.jpg"));

        // remount elsewhere with the same URL: served from cache
        let other = SlotKey::new("lightbox/0");
        lazy.mount(other.clone(), MediaSource::new("https://cdn/a.jpg", "A"), rect(0.0));
        assert_eq!(lazy.state(&other), Some(LoadState::Loaded));
        assert!(lazy.observe(viewport(0.0)).is_empty());
    }

    #[test]
    fn failure_is_terminal() {
        let mut lazy = registry();
        let key = SlotKey::new("gallery/a");
        lazy.mount(key.clone(), MediaSource::new("https://cdn/404.jpg", "A"), rect(0.0));
        let request = lazy.observe(viewport(0.0)).remove(0);

        let effect = lazy.handle(Message::Finished {
            key: key.clone(),
            ticket: request.ticket,
            result: Err(AssetError::Status(404)),
        });
        assert_eq!(effect, Effect::Failed(key.clone()));
        assert_eq!(lazy.error(&key), Some(&AssetError::Status(404)));
        assert!(lazy.observe(viewport(0.0)).is_empty());
        assert_eq!(lazy.state(&key), Some(LoadState::Failed));
    }

    #[test]
    fn late_result_after_unmount_is_discarded() {
        let mut lazy = registry();
        let key = SlotKey::new("gallery/a");
        lazy.mount(key.clone(), MediaSource::new("https://cdn/a.jpg", "A"), rect(0.0));
        let request = lazy.observe(viewport(0.0)).remove(0);
        lazy.unmount(&key);

        let effect = lazy.handle(Message::Finished {
            key: key.clone(),
            ticket: request.ticket,
            result: Ok(pixel()),
        });
        assert_eq!(effect, Effect::Discarded);
        assert!(!lazy.is_mounted(&key));
        assert!(!lazy.cache().contains("https://cdn/a.jpg"));
    }

    #[test]
    fn remount_with_new_source_invalidates_old_ticket() {
        let mut lazy = registry();
        let key = SlotKey::new("hero/0");
        lazy.mount(key.clone(), MediaSource::new("https://cdn/a.jpg", "A"), rect(0.0));
        let old = lazy.observe(viewport(0.0)).remove(0);

        lazy.mount(key.clone(), MediaSource::new("https://cdn/b.jpg", "B"), rect(0.0));
        let new = lazy.observe(viewport(0.0)).remove(0);
        assert_ne!(old.ticket, new.ticket);

        let stale = lazy.handle(Message::Finished {
            key: key.clone(),
            ticket: old.ticket,
            result: Ok(pixel()),
        });
        assert_eq!(stale, Effect::Discarded);
        assert_eq!(lazy.state(&key), Some(LoadState::InViewLoading));
    }

    #[test]
    fn remount_same_source_keeps_state_and_moves_rect() {
        let mut lazy = registry();
        let key = SlotKey::new("gallery/a");
        lazy.mount(key.clone(), MediaSource::new("https://cdn/a.jpg", "A"), rect(5000.0));
        assert!(lazy.observe(viewport(0.0)).is_empty());

        lazy.mount(key.clone(), MediaSource::new("https://cdn/a.jpg", "A"), rect(0.0));
        assert_eq!(lazy.reobserve().len(), 1);
    }

    #[test]
    fn reveal_loads_without_scrolling() {
        let mut lazy = registry();
        let keys: Vec<SlotKey> = (0..3).map(|i| SlotKey::new(format!("lightbox/{i}"))).collect();
        for (i, key) in keys.iter().enumerate() {
            lazy.mount_detached(
                key.clone(),
                MediaSource::new(format!("https://cdn/{i}.jpg"), ""),
            );
        }
        let requests = lazy.reveal(&keys[..2]);
        assert_eq!(requests.len(), 2);
        assert_eq!(lazy.state(&keys[2]), Some(LoadState::NotInView));
    }

    #[test]
    fn detached_slots_ignore_the_page_viewport() {
        let mut lazy = registry();
        let key = SlotKey::new("lightbox/0");
        lazy.mount_detached(key.clone(), MediaSource::new("https://cdn/a.jpg", ""));
        assert!(lazy.observe(viewport(0.0)).is_empty());
        assert_eq!(lazy.reveal(std::slice::from_ref(&key)).len(), 1);
    }

    #[test]
    fn missing_client_fails_slot_immediately() {
        let mut lazy = registry();
        let key = SlotKey::new("gallery/a");
        lazy.mount(key.clone(), MediaSource::new("https://cdn/a.jpg", "A"), rect(0.0));
        let requests = lazy.observe(viewport(0.0));
        let _task = lazy.start(requests);
        assert_eq!(lazy.state(&key), Some(LoadState::Failed));
        assert_eq!(lazy.loads_started(), 1);
    }

    #[test]
    fn prefix_unmount_clears_page_slots() {
        let mut lazy = registry();
        lazy.mount(SlotKey::new("gallery/a"), MediaSource::new("u1", ""), rect(0.0));
        lazy.mount(SlotKey::new("gallery/b"), MediaSource::new("u2", ""), rect(0.0));
        lazy.mount(SlotKey::new("sermons/c"), MediaSource::new("u3", ""), rect(0.0));

        lazy.retain_under("gallery/", &[SlotKey::new("gallery/b")]);
        assert_eq!(lazy.slot_count(), 2);
        lazy.unmount_prefix("gallery/");
        assert_eq!(lazy.slot_count(), 1);
        assert!(lazy.is_mounted(&SlotKey::new("sermons/c")));
    }
}
