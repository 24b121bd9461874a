// SPDX-License-Identifier: MPL-2.0
//! Routes and navigation history.
//!
//! Routes are written as site paths (`/events/42`,
//! `/image-viewer?src=...&alt=...`) so they can be given on the command line
//! and logged. Parsing goes through `url::Url` against a placeholder origin,
//! which takes care of percent-decoding the query.

use crate::domain::RecordId;
use reqwest::Url;
use std::fmt;

const PLACEHOLDER_ORIGIN: &str = "http://chapel.invalid/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Events,
    EventDetail(RecordId),
    Gallery,
    Ministries,
    Sermons,
    Contact,
    /// Full-screen single image. `src` is `None` when the link was malformed.
    ImageViewer {
        src: Option<String>,
        alt: String,
    },
    AdminGallery,
}

/// Route kinds; one page state exists per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Events,
    EventDetail,
    Gallery,
    Ministries,
    Sermons,
    Contact,
    ImageViewer,
    AdminGallery,
}

impl Route {
    /// Parses a path with optional query. Unknown paths resolve to
    /// [`Route::Home`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let Ok(base) = Url::parse(PLACEHOLDER_ORIGIN) else {
            return Route::Home;
        };
        let Ok(url) = base.join(raw.trim()) else {
            tracing::debug!(route = raw, "unparseable route, falling back to home");
            return Route::Home;
        };

        let segments: Vec<&str> = url
            .path_segments()
            .map(|segments| segments.filter(|s| !s.is_empty()).collect())
            .unwrap_or_default();

        match segments.as_slice() {
            [] => Route::Home,
            ["about"] => Route::About,
            ["events"] => Route::Events,
            ["events", id] => Route::EventDetail(RecordId::new(*id)),
            ["gallery"] => Route::Gallery,
            ["ministries"] => Route::Ministries,
            ["sermons"] => Route::Sermons,
            ["contact"] => Route::Contact,
            ["image-viewer"] => {
                let mut src = None;
                let mut alt = String::new();
                for (key, value) in url.query_pairs() {
                    match key.as_ref() {
                        "src" if !value.is_empty() => src = Some(value.into_owned()),
                        "alt" => alt = value.into_owned(),
                        _ => {}
                    }
                }
                Route::ImageViewer { src, alt }
            }
            ["admin", "gallery"] => Route::AdminGallery,
            _ => {
                tracing::debug!(route = raw, "unknown route, falling back to home");
                Route::Home
            }
        }
    }

    /// Route to the image viewer for `src`.
    #[must_use]
    pub fn image_viewer(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Route::ImageViewer {
            src: Some(src.into()),
            alt: alt.into(),
        }
    }

    #[must_use]
    pub fn page(&self) -> Page {
        match self {
            Route::Home => Page::Home,
            Route::About => Page::About,
            Route::Events => Page::Events,
            Route::EventDetail(_) => Page::EventDetail,
            Route::Gallery => Page::Gallery,
            Route::Ministries => Page::Ministries,
            Route::Sermons => Page::Sermons,
            Route::Contact => Page::Contact,
            Route::ImageViewer { .. } => Page::ImageViewer,
            Route::AdminGallery => Page::AdminGallery,
        }
    }

    /// The path form, suitable for [`Route::parse`].
    #[must_use]
    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Events => "/events".to_string(),
            Route::EventDetail(id) => format!("/events/{id}"),
            Route::Gallery => "/gallery".to_string(),
            Route::Ministries => "/ministries".to_string(),
            Route::Sermons => "/sermons".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::AdminGallery => "/admin/gallery".to_string(),
            Route::ImageViewer { src, alt } => {
                let Ok(mut url) = Url::parse(PLACEHOLDER_ORIGIN).and_then(|b| b.join("image-viewer"))
                else {
                    return "/image-viewer".to_string();
                };
                {
                    let mut query = url.query_pairs_mut();
                    if let Some(src) = src {
                        query.append_pair("src", src);
                    }
                    if !alt.is_empty() {
                        query.append_pair("alt", alt);
                    }
                }
                match url.query() {
                    Some(query) if !query.is_empty() => format!("/image-viewer?{query}"),
                    _ => "/image-viewer".to_string(),
                }
            }
        }
    }

    /// Navbar label, for routes reachable from the navbar.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self.page() {
            Page::Home => "Home",
            Page::About => "About",
            Page::Events | Page::EventDetail => "Events",
            Page::Gallery => "Gallery",
            Page::Ministries => "Ministries",
            Page::Sermons => "Sermons",
            Page::Contact => "Contact",
            Page::ImageViewer => "Image",
            Page::AdminGallery => "Admin",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

/// Current route plus the history behind it.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Route,
    history: Vec<Route>,
}

impl Navigator {
    #[must_use]
    pub fn new(initial: Route) -> Self {
        Self {
            current: initial,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Moves to `route`. Navigating to the current route is a no-op and
    /// returns `false`.
    pub fn push(&mut self, route: Route) -> bool {
        if route == self.current {
            return false;
        }
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
        true
    }

    /// Goes back one step. With no history the navigator lands on home,
    /// unless it is already there.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(route) => {
                self.current = route;
                true
            }
            None if self.current != Route::Home => {
                self.current = Route::Home;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.history.len()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_public_path() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/about"), Route::About);
        assert_eq!(Route::parse("/events"), Route::Events);
        assert_eq!(
            Route::parse("/events/42"),
            Route::EventDetail(RecordId::new("42"))
        );
        assert_eq!(Route::parse("/gallery/"), Route::Gallery);
        assert_eq!(Route::parse("/ministries"), Route::Ministries);
        assert_eq!(Route::parse("/sermons"), Route::Sermons);
        assert_eq!(Route::parse("/contact"), Route::Contact);
        assert_eq!(Route::parse("/admin/gallery"), Route::AdminGallery);
    }

    #[test]
    fn unknown_paths_fall_back_to_home() {
        assert_eq!(Route::parse("/nope"), Route::Home);
        assert_eq!(Route::parse("/events/1/extra"), Route::Home);
        assert_eq!(Route::parse("/admin"), Route::Home);
    }

    #[test]
    fn image_viewer_query_is_decoded() {
        let route = Route::parse("/image-viewer?src=https%3A%2F%2Fcdn%2Fa.jpg&alt=Easter%20choir");
        assert_eq!(
            route,
            Route::ImageViewer {
                src: Some("https://cdn/a.jpg".to_string()),
                alt: "Easter choir".to_string(),
            }
        );
    }

    #[test]
    fn image_viewer_without_src_has_none() {
        assert_eq!(
            Route::parse("/image-viewer?alt=x"),
            Route::ImageViewer {
                src: None,
                alt: "x".to_string()
            }
        );
        assert!(matches!(
            Route::parse("/image-viewer?src="),
            Route::ImageViewer { src: None, .. }
        ));
    }

    #[test]
    fn paths_parse_back_to_the_same_route() {
        for route in [
            Route::Home,
            Route::EventDetail(RecordId::new("abc")),
            Route::AdminGallery,
            Route::image_viewer("https://cdn/a b.jpg?x=1&y=2", "A & B"),
        ] {
            assert_eq!(Route::parse(&route.to_path()), route, "{route}");
        }
    }

    #[test]
    fn back_walks_history_then_lands_home() {
        let mut nav = Navigator::new(Route::Gallery);
        assert!(nav.push(Route::Events));
        assert!(!nav.push(Route::Events));
        assert_eq!(nav.depth(), 1);

        assert!(nav.back());
        assert_eq!(nav.current(), &Route::Gallery);
        assert!(nav.back());
        assert_eq!(nav.current(), &Route::Home);
        assert!(!nav.back());
    }
}
