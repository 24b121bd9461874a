// SPDX-License-Identifier: MPL-2.0
//! `iced_chapel` is a native client for a congregation's content-managed
//! site, built with the Iced GUI framework.
//!
//! Pages read their content from a PostgREST-style store; gallery media is
//! loaded lazily as it scrolls into view and opens in a lightbox.

#![doc(html_root_url = "https://docs.rs/iced_chapel/0.1.0")]

pub mod app;
pub mod domain;
pub mod error;
pub mod logging;
pub mod media;
pub mod store;
pub mod ui;
