// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern: page states
//! return events to `App::update` instead of reaching into shared state.
//!
//! # Pages
//!
//! - [`pages`] - One module per route (home, gallery, events, ...)
//!
//! # Overlays
//!
//! - [`lightbox`] - Modal media viewer over the gallery
//! - [`splash`] - Boot splash and per-page loading fallback
//! - [`scroll_lock`] - Page scroll suppression while an overlay is open
//!
//! # Shared Infrastructure
//!
//! - [`carousel`] - Slide index and transition state
//! - [`lazy_image`] - Rendering of lazily loaded media slots
//! - [`navbar`] - Top navigation bar
//! - [`empty_state`] - Placeholder for empty or unavailable content
//! - [`widgets`] - Custom Iced widgets (spinner, scroll gate)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod carousel;
pub mod design_tokens;
pub mod empty_state;
pub mod lazy_image;
pub mod lightbox;
pub mod navbar;
pub mod pages;
pub mod scroll_lock;
pub mod splash;
pub mod styles;
pub mod theming;
pub mod widgets;
