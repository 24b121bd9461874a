// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Pages report what they need through their `Event`s; the handlers here
//! turn those into fetches, navigation, lazy loads and lightbox changes.

use super::route::{Page, Route};
use super::{config, page_viewport, App, Message};
use crate::error::StoreError;
use crate::media::{lazy, SlotKey};
use crate::store::{fetch, StoreClient};
use crate::ui::carousel;
use crate::ui::design_tokens::sizing;
use crate::ui::lightbox::{self, CloseReason};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::pages::layout::PageGeometry;
use crate::ui::pages::{
    admin_gallery, contact, event_detail, events, gallery, home, image_viewer, ministries, sermons,
};
use crate::ui::theming::ThemeMode;
use crate::ui::widgets::animated_spinner;
use chrono::Utc;
use iced::widget::{operation, scrollable::RelativeOffset, Id};
use iced::{Rectangle, Task};
use std::future::Future;
use std::time::Instant;

/// Id of the page scrollable.
pub const PAGE_SCROLL_ID: &str = "page-scroll";

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(message) => match navbar::update(message) {
            NavbarEvent::Navigate(route) => navigate(app, route),
            NavbarEvent::ToggleTheme => {
                toggle_theme(app);
                Task::none()
            }
        },
        Message::Navigate(route) => navigate(app, route),
        Message::Back => back(app),
        Message::Home(message) => handle_home(app, message),
        Message::Events(message) => handle_events(app, message),
        Message::EventDetail(message) => handle_event_detail(app, message),
        Message::Gallery(message) => handle_gallery(app, message),
        Message::Ministries(message) => {
            let Some(state) = app.pages.ministries.as_mut() else {
                return Task::none();
            };
            match state.update(message) {
                ministries::Event::Ready => page_ready(app, Page::Ministries),
            }
        }
        Message::Sermons(message) => {
            let Some(state) = app.pages.sermons.as_mut() else {
                return Task::none();
            };
            match state.update(message) {
                sermons::Event::Ready => page_ready(app, Page::Sermons),
                sermons::Event::OpenExternal(url) => {
                    open_external(&url);
                    Task::none()
                }
            }
        }
        Message::Contact(message) => handle_contact(app, message),
        Message::ImageViewer(message) => {
            let Some(state) = app.pages.image_viewer.as_mut() else {
                return Task::none();
            };
            match state.update(message) {
                image_viewer::Event::Back => back(app),
            }
        }
        Message::AdminGallery(message) => handle_admin_gallery(app, message),
        Message::Lightbox(message) => handle_lightbox(app, message),
        Message::Media(message) => {
            match app.lazy.handle(message) {
                lazy::Effect::Loaded(key) => tracing::trace!(%key, "image ready"),
                lazy::Effect::Failed(_) | lazy::Effect::Discarded | lazy::Effect::None => {}
            }
            Task::none()
        }
        Message::PageScrolled(viewport) => {
            app.viewport = viewport;
            app.lazy.update_viewport(viewport).map(Message::Media)
        }
        Message::WindowResized(size) => {
            app.window_size = size;
            app.viewport = page_viewport(size, app.viewport.y);
            refresh_media(app)
        }
        Message::DismissConfigWarning => {
            app.config_warning = None;
            Task::none()
        }
        Message::Tick(now) => handle_tick(app, now),
    }
}

// =============================================================================
// Navigation
// =============================================================================

fn navigate(app: &mut App, route: Route) -> Task<Message> {
    let previous = app.navigator.current().page();
    if !app.navigator.push(route) {
        return Task::none();
    }
    transition(app, previous)
}

fn back(app: &mut App) -> Task<Message> {
    let previous = app.navigator.current().page();
    if !app.navigator.back() {
        return Task::none();
    }
    transition(app, previous)
}

fn transition(app: &mut App, previous: Page) -> Task<Message> {
    let now = Instant::now();
    let close = if app.lightbox.is_closed() {
        Task::none()
    } else {
        handle_lightbox(app, lightbox::Message::Close(CloseReason::Navigation))
    };
    leave(app, previous);

    app.viewport = page_viewport(app.window_size, 0.0);
    let snap = operation::snap_to(Id::new(PAGE_SCROLL_ID), RelativeOffset { x: 0.0, y: 0.0 });
    Task::batch([close, snap, enter_current(app, now)])
}

fn leave(app: &mut App, page: Page) {
    if let Some(prefix) = slot_prefix(page) {
        app.lazy.unmount_prefix(prefix);
    }
    if page == Page::Home {
        if let Some(home) = app.pages.home.as_mut() {
            home.leave();
        }
    }
    // Dropping the handle aborts a fetch nobody is waiting for.
    app.fetches.remove(&page);
}

/// Routes that cannot be shown as addressed. An image viewer without a
/// source goes back instead.
pub(super) fn redirect_for(route: &Route) -> Option<Message> {
    match route {
        Route::ImageViewer { src: None, .. } => Some(Message::Back),
        _ => None,
    }
}

/// Builds (or reuses) the state for the current route and starts its fetch.
pub(super) fn enter_current(app: &mut App, now: Instant) -> Task<Message> {
    let route = app.navigator.current().clone();
    let page = route.page();
    tracing::info!(%route, "entering page");

    if let Some(redirect) = redirect_for(&route) {
        tracing::debug!(%route, "nothing to show, redirecting");
        return Task::done(redirect);
    }

    let fetch_task = match route {
        Route::Home => {
            let home = app.pages.home.get_or_insert_with(|| {
                home::State::new(
                    &app.config.home,
                    carousel::Settings::autoplay(&app.config.carousel),
                )
            });
            home.enter(now);
            let limit = app.config.home.hero_limit();
            Some(request(app, page, move |client| fetch::home(client, limit), |result| {
                Message::Home(home::Message::Loaded(result))
            }))
        }
        Route::About => None,
        Route::Events => {
            app.pages.events.get_or_insert_with(events::State::default);
            Some(request(app, page, fetch::events, |result| {
                Message::Events(events::Message::Loaded(result))
            }))
        }
        Route::EventDetail(id) => {
            if app.pages.event_detail.as_ref().map(event_detail::State::id) != Some(&id) {
                app.loader.evict(page);
                app.pages.event_detail = Some(event_detail::State::new(id.clone()));
            }
            Some(request(
                app,
                page,
                move |client| fetch::event_by_id(client, id),
                |result| Message::EventDetail(event_detail::Message::Loaded(result)),
            ))
        }
        Route::Gallery => {
            let thumbnail = app.config.gallery.thumbnail();
            app.pages
                .gallery
                .get_or_insert_with(|| gallery::State::new(thumbnail));
            Some(request(app, page, |client| fetch::gallery(client, false), |result| {
                Message::Gallery(gallery::Message::Loaded(result))
            }))
        }
        Route::Ministries => {
            app.pages.ministries.get_or_insert_with(ministries::State::default);
            Some(request(app, page, fetch::ministries, |result| {
                Message::Ministries(ministries::Message::Loaded(result))
            }))
        }
        Route::Sermons => {
            app.pages.sermons.get_or_insert_with(sermons::State::default);
            Some(request(app, page, fetch::sermons, |result| {
                Message::Sermons(sermons::Message::Loaded(result))
            }))
        }
        Route::Contact => {
            app.pages.contact.get_or_insert_with(contact::State::default);
            None
        }
        // Redirected above.
        Route::ImageViewer { src: None, .. } => return Task::none(),
        Route::ImageViewer { src: Some(src), alt } => {
            app.pages.image_viewer = Some(image_viewer::State::new(src, alt));
            None
        }
        Route::AdminGallery => {
            app.pages
                .admin_gallery
                .get_or_insert_with(admin_gallery::State::default);
            Some(request(app, page, |client| fetch::gallery(client, true), |result| {
                Message::AdminGallery(admin_gallery::Message::Loaded(result))
            }))
        }
    };

    let needs_data = fetch_task.is_some();
    let entry = app.loader.enter(page, needs_data);
    tracing::debug!(?page, ?entry, "route entered");

    if app.splash.is_active() {
        app.initial_page = Some(page);
        if !needs_data {
            app.splash.mark_ready();
        }
    }

    Task::batch([fetch_task.unwrap_or_else(Task::none), refresh_media(app)])
}

/// Starts a store read for `page`, replacing any read still running for it.
fn request<T, F, Fut>(
    app: &mut App,
    page: Page,
    fetch: F,
    to_message: impl Fn(Result<T, StoreError>) -> Message + Send + 'static,
) -> Task<Message>
where
    T: Send + 'static,
    F: FnOnce(StoreClient) -> Fut,
    Fut: Future<Output = Result<T, StoreError>> + Send + 'static,
{
    let task = match &app.store {
        Ok(client) => Task::perform(fetch(client.clone()), to_message),
        Err(err) => return Task::done(to_message(Err(err.clone()))),
    };
    let (task, handle) = task.abortable();
    app.fetches.insert(page, handle.abort_on_drop());
    task
}

/// Runs a store write. Writes are never aborted by navigation.
fn write<F, Fut>(
    app: &App,
    write: F,
    to_message: impl Fn(Result<(), StoreError>) -> Message + Send + 'static,
) -> Task<Message>
where
    F: FnOnce(StoreClient) -> Fut,
    Fut: Future<Output = Result<(), StoreError>> + Send + 'static,
{
    match &app.store {
        Ok(client) => Task::perform(write(client.clone()), to_message),
        Err(err) => Task::done(to_message(Err(err.clone()))),
    }
}

/// A page finished a load: it is no longer pending, the splash may go, and
/// its images can be placed.
fn page_ready(app: &mut App, page: Page) -> Task<Message> {
    app.fetches.remove(&page);
    app.loader.complete(page);
    if app.initial_page == Some(page) {
        app.splash.mark_ready();
        app.initial_page = None;
    }
    if app.navigator.current().page() == page {
        refresh_media(app)
    } else {
        Task::none()
    }
}

fn slot_prefix(page: Page) -> Option<&'static str> {
    match page {
        Page::Home => Some(home::SLOT_PREFIX),
        Page::EventDetail => Some(event_detail::SLOT_PREFIX),
        Page::Gallery => Some(gallery::SLOT_PREFIX),
        Page::Sermons => Some(sermons::SLOT_PREFIX),
        Page::ImageViewer => Some(image_viewer::SLOT_PREFIX),
        Page::About | Page::Events | Page::Ministries | Page::Contact | Page::AdminGallery => None,
    }
}

/// Places the current page's slots, then starts loads for everything that
/// is revealed or within the viewport margin.
fn refresh_media(app: &mut App) -> Task<Message> {
    let geometry = PageGeometry::new(app.viewport.width);
    let revealed: Vec<SlotKey> = match app.navigator.current().page() {
        Page::Home => app
            .pages
            .home
            .as_ref()
            .map(|state| state.place_slots(&mut app.lazy))
            .unwrap_or_default(),
        Page::EventDetail => app
            .pages
            .event_detail
            .as_ref()
            .map(|state| state.place_slots(&mut app.lazy))
            .unwrap_or_default(),
        Page::Gallery => {
            if let Some(state) = app.pages.gallery.as_ref() {
                state.place_slots(&mut app.lazy, geometry);
            }
            Vec::new()
        }
        Page::Sermons => {
            if let Some(state) = app.pages.sermons.as_ref() {
                state.place_slots(&mut app.lazy, geometry);
            }
            Vec::new()
        }
        Page::ImageViewer => app
            .pages
            .image_viewer
            .as_ref()
            .map(|state| state.place_slots(&mut app.lazy))
            .unwrap_or_default(),
        Page::About | Page::Events | Page::Ministries | Page::Contact | Page::AdminGallery => {
            Vec::new()
        }
    };

    let mut requests = app.lazy.reveal(&revealed);
    requests.extend(app.lazy.observe(app.viewport));
    app.lazy.start(requests).map(Message::Media)
}

fn reveal(app: &mut App, keys: &[SlotKey]) -> Task<Message> {
    let requests = app.lazy.reveal(keys);
    app.lazy.start(requests).map(Message::Media)
}

// =============================================================================
// Page handlers
// =============================================================================

fn handle_home(app: &mut App, message: home::Message) -> Task<Message> {
    let Some(state) = app.pages.home.as_mut() else {
        return Task::none();
    };
    let event = state.update(message, Instant::now(), Utc::now());
    handle_home_event(app, event)
}

fn handle_home_event(app: &mut App, event: home::Event) -> Task<Message> {
    match event {
        home::Event::None => Task::none(),
        home::Event::Ready => page_ready(app, Page::Home),
        home::Event::Navigate(route) => navigate(app, route),
        home::Event::OpenExternal(url) => {
            open_external(&url);
            Task::none()
        }
        home::Event::Reveal(keys) => reveal(app, &keys),
    }
}

fn handle_events(app: &mut App, message: events::Message) -> Task<Message> {
    let Some(state) = app.pages.events.as_mut() else {
        return Task::none();
    };
    match state.update(message, Utc::now()) {
        events::Event::Ready => page_ready(app, Page::Events),
        events::Event::Navigate(route) => navigate(app, route),
    }
}

fn handle_event_detail(app: &mut App, message: event_detail::Message) -> Task<Message> {
    let Some(state) = app.pages.event_detail.as_mut() else {
        return Task::none();
    };
    match state.update(message) {
        event_detail::Event::None => Task::none(),
        event_detail::Event::Ready => page_ready(app, Page::EventDetail),
        event_detail::Event::Navigate(route) => navigate(app, route),
    }
}

fn handle_gallery(app: &mut App, message: gallery::Message) -> Task<Message> {
    let Some(state) = app.pages.gallery.as_mut() else {
        return Task::none();
    };
    match state.update(message) {
        gallery::Event::None => Task::none(),
        gallery::Event::Ready => page_ready(app, Page::Gallery),
        gallery::Event::OpenLightbox {
            item,
            index,
            modality,
        } => handle_lightbox(
            app,
            lightbox::Message::Open {
                item,
                index,
                modality,
            },
        ),
    }
}

fn handle_contact(app: &mut App, message: contact::Message) -> Task<Message> {
    let Some(state) = app.pages.contact.as_mut() else {
        return Task::none();
    };
    match state.update(message) {
        contact::Event::None => Task::none(),
        contact::Event::Submit(message) => write(
            app,
            move |client| fetch::submit_contact(client, message),
            |result| Message::Contact(contact::Message::Submitted(result)),
        ),
    }
}

fn handle_admin_gallery(app: &mut App, message: admin_gallery::Message) -> Task<Message> {
    let Some(state) = app.pages.admin_gallery.as_mut() else {
        return Task::none();
    };
    let saved = |result| Message::AdminGallery(admin_gallery::Message::Saved(result));
    match state.update(message) {
        admin_gallery::Event::None => Task::none(),
        admin_gallery::Event::Ready => page_ready(app, Page::AdminGallery),
        admin_gallery::Event::Request(admin_gallery::Request::SetPublished { id, published }) => {
            write(
                app,
                move |client| fetch::set_item_published(client, id, published),
                saved,
            )
        }
        admin_gallery::Event::Request(admin_gallery::Request::SwapOrder { first, second }) => {
            write(
                app,
                move |client| fetch::swap_item_order(client, first, second),
                saved,
            )
        }
        admin_gallery::Event::Request(admin_gallery::Request::Renumber(orders)) => write(
            app,
            move |client| fetch::renumber_items(client, orders),
            saved,
        ),
        admin_gallery::Event::Request(admin_gallery::Request::Delete(id)) => {
            write(app, move |client| fetch::delete_item(client, id), saved)
        }
        admin_gallery::Event::Reload => {
            request(app, Page::AdminGallery, |client| fetch::gallery(client, true), |result| {
                Message::AdminGallery(admin_gallery::Message::Loaded(result))
            })
        }
    }
}

// =============================================================================
// Overlays and timers
// =============================================================================

fn handle_lightbox(app: &mut App, message: lightbox::Message) -> Task<Message> {
    let mut ctx = lightbox::Context {
        scroll_lock: &mut app.scroll_lock,
        lazy: &mut app.lazy,
        carousel: carousel::Settings::manual(&app.config.carousel),
        scrollbar_width: sizing::SCROLLBAR_WIDTH,
        now: Instant::now(),
    };
    match app.lightbox.handle(message, &mut ctx) {
        lightbox::Effect::None | lightbox::Effect::Closed => Task::none(),
        lightbox::Effect::Settle => Task::done(Message::Lightbox(lightbox::Message::Settle)),
        lightbox::Effect::SelectionChanged { index, loads } => {
            tracing::trace!(index, "lightbox selection changed");
            app.lazy.start(loads).map(Message::Media)
        }
        lightbox::Effect::Load(requests) => app.lazy.start(requests).map(Message::Media),
        lightbox::Effect::OpenExternal(url) => {
            open_external(&url);
            Task::none()
        }
    }
}

fn handle_tick(app: &mut App, now: Instant) -> Task<Message> {
    app.splash.tick(now);

    let page = app.navigator.current().page();
    if app.loader.shows_fallback(page, app.splash.is_active()) {
        app.fallback_rotation = animated_spinner::advance(app.fallback_rotation);
    }

    let mut tasks = Vec::new();
    if app.lightbox.needs_tick() {
        tasks.push(handle_lightbox(
            app,
            lightbox::Message::Carousel(carousel::Message::Tick),
        ));
    }
    if page == Page::Home {
        if let Some(home) = app.pages.home.as_mut() {
            let event = home.tick(now);
            tasks.push(handle_home_event(app, event));
        }
    }
    Task::batch(tasks)
}

fn toggle_theme(app: &mut App) {
    app.dark = !app.dark;
    app.theme_mode = if app.dark {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    };
    app.config.general.theme_mode = app.theme_mode;
    if let Err(err) = config::save(&app.config) {
        tracing::warn!(error = %err, "failed to save theme preference");
    }
}

/// Hands a URL to the system browser.
fn open_external(url: &str) {
    tracing::info!(url, "opening in browser");
    if let Err(err) = open::that(url) {
        tracing::warn!(url, error = %err, "failed to open URL");
    }
}

/// Converts a scrollable viewport into the visible page rectangle.
pub fn visible_rect(viewport: &iced::widget::scrollable::Viewport) -> Rectangle {
    let offset = viewport.absolute_offset();
    let bounds = viewport.bounds();
    Rectangle {
        x: offset.x,
        y: offset.y,
        width: bounds.width,
        height: bounds.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::route::Navigator;

    #[test]
    fn image_viewer_without_source_redirects_back() {
        let route = Route::parse("/image-viewer?alt=Foo");
        assert!(matches!(redirect_for(&route), Some(Message::Back)));
        assert!(redirect_for(&Route::image_viewer("https://cdn/a.jpg", "Foo")).is_none());
        assert!(redirect_for(&Route::Gallery).is_none());
    }

    #[test]
    fn redirect_back_lands_on_previous_route() {
        let mut navigator = Navigator::new(Route::Home);
        navigator.push(Route::Events);
        navigator.push(Route::parse("/image-viewer?alt=Foo"));
        assert!(redirect_for(navigator.current()).is_some());

        assert!(navigator.back());
        assert_eq!(navigator.current(), &Route::Events);
    }

    #[test]
    fn redirect_back_without_history_lands_home() {
        let mut navigator = Navigator::new(Route::parse("/image-viewer?alt=Foo"));
        assert!(redirect_for(navigator.current()).is_some());

        assert!(navigator.back());
        assert_eq!(navigator.current(), &Route::Home);
    }
}
