// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Store**: Remote data store connection
//! - **Gallery**: Lazy loading and asset caching
//! - **Carousel**: Slide transitions and autoplay
//! - **Boot**: Splash screen timing
//! - **Home**: Home page widgets

// ==========================================================================
// Store Defaults
// ==========================================================================

/// Store used when nothing is configured; a local PostgREST instance.
pub const DEFAULT_STORE_URL: &str = "http://localhost:54321";

/// Default HTTP timeout for store requests (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Minimum HTTP timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum HTTP timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Distance around the viewport, in logical pixels, inside which lazy media
/// starts loading.
pub const DEFAULT_ROOT_MARGIN_PX: f32 = 100.0;

/// Maximum root margin accepted from the config file.
pub const MAX_ROOT_MARGIN_PX: f32 = 2000.0;

/// Edge length of a gallery thumbnail cell.
pub const DEFAULT_THUMBNAIL_SIZE: f32 = 220.0;

/// Minimum thumbnail edge length.
pub const MIN_THUMBNAIL_SIZE: f32 = 96.0;

/// Maximum thumbnail edge length.
pub const MAX_THUMBNAIL_SIZE: f32 = 480.0;

/// Default in-memory asset cache budget in megabytes.
pub const DEFAULT_ASSET_CACHE_MB: u32 = 64;

/// Minimum asset cache budget in megabytes.
pub const MIN_ASSET_CACHE_MB: u32 = 8;

/// Maximum asset cache budget in megabytes.
pub const MAX_ASSET_CACHE_MB: u32 = 512;

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Cross-fade duration for animated slide changes.
pub const DEFAULT_TRANSITION_MS: u64 = 300;

/// Longest accepted cross-fade duration.
pub const MAX_TRANSITION_MS: u64 = 2000;

/// Delay between autoplay advances.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 5000;

/// Shortest accepted autoplay interval.
pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = 1000;

/// Autoplay stays paused this long after the user touched the carousel.
pub const DEFAULT_INTERACTION_PAUSE_MS: u64 = 8000;

// ==========================================================================
// Boot Defaults
// ==========================================================================

/// Minimum splash screen duration after the first mount.
pub const DEFAULT_SPLASH_MIN_MS: u64 = 2000;

/// Hard ceiling for the splash screen when waiting for data.
pub const DEFAULT_SPLASH_MAX_MS: u64 = 8000;

// ==========================================================================
// Home Defaults
// ==========================================================================

/// Number of featured images in the home hero carousel.
pub const DEFAULT_HERO_LIMIT: usize = 5;

/// Number of upcoming events shown on the home page.
pub const DEFAULT_UPCOMING_EVENTS: usize = 3;

/// Idle delay before the chat prompt bubble appears.
pub const DEFAULT_CHAT_PROMPT_DELAY_SECS: u64 = 30;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Width used by the lightbox and page layout when the window size is not
/// yet known.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;

/// Height counterpart of [`DEFAULT_WINDOW_WIDTH`].
pub const DEFAULT_WINDOW_HEIGHT: f32 = 760.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_contain_defaults() {
        assert!((MIN_THUMBNAIL_SIZE..=MAX_THUMBNAIL_SIZE).contains(&DEFAULT_THUMBNAIL_SIZE));
        assert!((MIN_ASSET_CACHE_MB..=MAX_ASSET_CACHE_MB).contains(&DEFAULT_ASSET_CACHE_MB));
        assert!(
            (MIN_REQUEST_TIMEOUT_SECS..=MAX_REQUEST_TIMEOUT_SECS)
                .contains(&DEFAULT_REQUEST_TIMEOUT_SECS)
        );
        assert!(DEFAULT_TRANSITION_MS <= MAX_TRANSITION_MS);
        assert!(DEFAULT_AUTOPLAY_INTERVAL_MS >= MIN_AUTOPLAY_INTERVAL_MS);
        assert!(DEFAULT_ROOT_MARGIN_PX <= MAX_ROOT_MARGIN_PX);
    }

    #[test]
    fn splash_ceiling_exceeds_minimum() {
        assert!(DEFAULT_SPLASH_MAX_MS > DEFAULT_SPLASH_MIN_MS);
    }
}
