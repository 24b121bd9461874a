// SPDX-License-Identifier: MPL-2.0
//! Decoded-asset cache keyed by URL.
//!
//! - **LRU eviction**: least recently shown images go first
//! - **Memory-bounded**: total decoded size limited by `[gallery] asset_cache_mb`
//! - **URL-keyed**: a remounted slot with the same source skips the network

use super::asset::ImageData;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Hard cap on the entry count, whatever the byte budget.
pub const MAX_ENTRIES: usize = 512;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub insertions: u64,
}

impl CacheStats {
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

pub struct AssetCache {
    entries: LruCache<String, ImageData>,
    max_bytes: usize,
    current_bytes: usize,
    stats: CacheStats,
}

impl AssetCache {
    #[must_use]
    pub fn new(max_bytes: usize) -> Self {
        let capacity = NonZeroUsize::new(MAX_ENTRIES).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            max_bytes,
            current_bytes: 0,
            stats: CacheStats::default(),
        }
    }

    /// Stores a decoded image. Images larger than half the budget are not
    /// cached; returns whether the image was kept.
    pub fn insert(&mut self, url: &str, image: ImageData) -> bool {
        let size = image.size_bytes();
        if size > self.max_bytes / 2 {
            return false;
        }

        if let Some(existing) = self.entries.pop(url) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes());
        }

        while self.current_bytes + size > self.max_bytes || self.entries.len() >= MAX_ENTRIES {
            match self.entries.pop_lru() {
                Some((_, evicted)) => {
                    self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes());
                    self.stats.evictions += 1;
                }
                None => break,
            }
        }

        self.current_bytes += size;
        self.entries.put(url.to_string(), image);
        self.stats.insertions += 1;
        true
    }

    /// Looks up an image, marking it recently used.
    pub fn get(&mut self, url: &str) -> Option<ImageData> {
        match self.entries.get(url) {
            Some(image) => {
                self.stats.hits += 1;
                Some(image.clone())
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains(url)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.current_bytes = 0;
    }
}

impl std::fmt::Debug for AssetCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetCache")
            .field("entries", &self.entries.len())
            .field("memory_usage", &self.current_bytes)
            .field("max_bytes", &self.max_bytes)
            .field("stats", &self.stats)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(side: u32) -> ImageData {
        ImageData::from_rgba(side, side, vec![0; (side * side * 4) as usize])
    }

    #[test]
    fn insert_then_get_hits() {
        let mut cache = AssetCache::new(1024 * 1024);
        assert!(cache.insert("https://cdn/a.jpg", image(10)));
        assert_eq!(cache.get("https://cdn/a.jpg").map(|i| i.width), Some(10));
        assert!(cache.get("https://cdn/b.jpg").is_none());
        assert_eq!(cache.stats().hits, 1);
        assert_eq!(cache.stats().misses, 1);
        assert!((cache.stats().hit_rate() - 50.0).abs() < 0.01);
    }

    #[test]
    fn evicts_least_recently_used_within_budget() {
        // each 50x50 image is 10_000 bytes
        let mut cache = AssetCache::new(30_000);
        cache.insert("a", image(50));
        cache.insert("b", image(50));
        cache.insert("c", image(50));
        let _ = cache.get("a");
        cache.insert("d", image(50));

        assert!(cache.contains("a"));
        assert!(!cache.contains("b"));
        assert!(cache.memory_usage() <= 30_000);
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn oversized_image_is_not_cached() {
        let mut cache = AssetCache::new(10_000);
        assert!(!cache.insert("big", image(50)));
        assert!(cache.is_empty());
    }

    #[test]
    fn reinsert_replaces_accounting() {
        let mut cache = AssetCache::new(1024 * 1024);
        cache.insert("a", image(10));
        cache.insert("a", image(20));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.memory_usage(), 20 * 20 * 4);
        cache.clear();
        assert_eq!(cache.memory_usage(), 0);
    }
}
