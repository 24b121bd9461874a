// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::route::Route;
use crate::media::lazy;
use crate::ui::lightbox;
use crate::ui::navbar;
use crate::ui::pages::{
    admin_gallery, contact, event_detail, events, gallery, home, image_viewer, ministries, sermons,
};
use iced::{Rectangle, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Navigate(Route),
    Back,
    Home(home::Message),
    Events(events::Message),
    EventDetail(event_detail::Message),
    Gallery(gallery::Message),
    Ministries(ministries::Message),
    Sermons(sermons::Message),
    Contact(contact::Message),
    ImageViewer(image_viewer::Message),
    AdminGallery(admin_gallery::Message),
    Lightbox(lightbox::Message),
    Media(lazy::Message),
    /// Visible part of the page, in page coordinates.
    PageScrolled(Rectangle),
    WindowResized(Size),
    DismissConfigWarning,
    Tick(Instant),
}

/// Runtime flags passed from the command line to the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Route to open first, as a site path (`/gallery`, `/events/12`).
    pub route: Option<String>,
    /// Optional configuration directory override.
    pub config_dir: Option<String>,
    /// Store base URL, taking precedence over the config file.
    pub store_url: Option<String>,
    /// Start without the boot splash.
    pub no_splash: bool,
}
