// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between pages and overlays.
//!
//! The `App` struct owns everything shared across pages: the store client,
//! navigation, the lazy media registry, the scroll lock and the lightbox.
//! Page states are created on first visit and kept for the session; their
//! data is fetched again on every visit.

pub mod boot;
pub mod config;
mod message;
pub mod paths;
pub mod route;
pub mod route_loader;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::error::StoreError;
use crate::media::{AssetFetcher, LazyMedia};
use crate::store::StoreClient;
use crate::ui::design_tokens::sizing;
use crate::ui::lightbox;
use crate::ui::pages::{
    admin_gallery, contact, event_detail, events, gallery, home, image_viewer, ministries, sermons,
};
use crate::ui::scroll_lock::{BodyStyle, Overflow, ScrollLock};
use crate::ui::theming::ThemeMode;
use boot::Splash;
use config::Config;
use iced::task;
use iced::{window, Element, Rectangle, Size, Subscription, Task, Theme};
use route::{Navigator, Page, Route};
use route_loader::RouteLoader;
use std::collections::HashMap;
use std::fmt;
use std::time::Instant;

pub const MIN_WINDOW_WIDTH: f32 = 720.0;
pub const MIN_WINDOW_HEIGHT: f32 = 520.0;

/// Page states, each created on the first visit to its route.
#[derive(Debug, Default)]
struct Pages {
    home: Option<home::State>,
    events: Option<events::State>,
    event_detail: Option<event_detail::State>,
    gallery: Option<gallery::State>,
    ministries: Option<ministries::State>,
    sermons: Option<sermons::State>,
    contact: Option<contact::State>,
    image_viewer: Option<image_viewer::State>,
    admin_gallery: Option<admin_gallery::State>,
}

/// Root Iced application state.
pub struct App {
    config: Config,
    /// Warning key from loading the config file, shown until dismissed.
    config_warning: Option<String>,
    store: Result<StoreClient, StoreError>,
    navigator: Navigator,
    loader: RouteLoader,
    splash: Splash,
    /// Page the splash waits on under the at-least policy.
    initial_page: Option<Page>,
    scroll_lock: ScrollLock,
    lazy: LazyMedia,
    lightbox: lightbox::State,
    pages: Pages,
    /// One in-flight fetch per page; replacing the handle aborts the old one.
    fetches: HashMap<Page, task::Handle>,
    theme_mode: ThemeMode,
    dark: bool,
    window_size: Size,
    viewport: Rectangle,
    fallback_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("route", self.navigator.current())
            .field("splash", &self.splash.is_active())
            .field("lightbox_open", &self.lightbox.is_open())
            .field("slots", &self.lazy.slot_count())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 boots through `Fn`, so each call gets its own copy.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        if let Some(url) = flags.store_url.filter(|url| !url.is_empty()) {
            config.store.url = Some(url);
        }

        let store = StoreClient::new(&config.store);
        if let Err(err) = &store {
            tracing::warn!(error = %err, "store client unavailable; pages will show no data");
        }
        let fetcher = match AssetFetcher::new(config.store.request_timeout()) {
            Ok(fetcher) => Some(fetcher),
            Err(err) => {
                tracing::warn!(error = %err, "asset client unavailable; images will not load");
                None
            }
        };

        let now = Instant::now();
        let route = flags
            .route
            .as_deref()
            .map_or(Route::Home, Route::parse);
        let splash = if flags.no_splash {
            Splash::hidden()
        } else {
            Splash::new(&config.boot, now)
        };
        let window_size = Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT);

        let mut app = App {
            lazy: LazyMedia::new(
                config.gallery.root_margin(),
                config.gallery.asset_cache_bytes(),
                fetcher,
            ),
            theme_mode: config.general.theme_mode,
            dark: config.general.theme_mode.is_dark(),
            config,
            config_warning,
            store,
            navigator: Navigator::new(route),
            loader: RouteLoader::new(),
            splash,
            initial_page: None,
            scroll_lock: ScrollLock::new(BodyStyle::with_overflow(Overflow::Auto)),
            lightbox: lightbox::State::default(),
            pages: Pages::default(),
            fetches: HashMap::new(),
            window_size,
            viewport: page_viewport(window_size, 0.0),
            fallback_rotation: 0.0,
        };

        tracing::info!(route = %app.navigator.current(), "starting");
        let task = update::enter_current(&mut app, now);
        (app, task)
    }

    fn title(&self) -> String {
        let name = &self.config.about.congregation_name;
        match self.navigator.current().page() {
            Page::Home => name.clone(),
            _ => format!("{} - {name}", self.navigator.current().label()),
        }
    }

    fn theme(&self) -> Theme {
        if self.dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let page = self.navigator.current().page();
        let home = self
            .pages
            .home
            .as_ref()
            .filter(|_| page == Page::Home);

        let animating = self.splash.is_active()
            || self.loader.shows_fallback(page, self.splash.is_active())
            || self.lightbox.needs_tick()
            || home.is_some_and(home::State::is_animating);
        let idle_timers = home.is_some_and(home::State::needs_tick);

        Subscription::batch([
            subscription::create_event_subscription(self.lightbox.is_open()),
            subscription::create_resize_subscription(),
            subscription::create_tick_subscription(animating, idle_timers),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

/// Visible page area for a window of `size` scrolled to `offset_y`.
fn page_viewport(size: Size, offset_y: f32) -> Rectangle {
    Rectangle {
        x: 0.0,
        y: offset_y,
        width: size.width,
        height: (size.height - sizing::NAVBAR_HEIGHT).max(0.0),
    }
}
