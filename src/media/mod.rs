// SPDX-License-Identifier: MPL-2.0
//! Remote image handling: download and decode, the decoded-asset cache, and
//! viewport-driven lazy loading.

pub mod asset;
pub mod cache;
pub mod lazy;
pub mod visibility;

pub use asset::{AssetFetcher, ImageData};
pub use cache::AssetCache;
pub use lazy::{LazyMedia, LazyOptions, LoadState, MediaSource, SlotKey};
