// SPDX-License-Identifier: MPL-2.0
//! First-load bookkeeping for routes.
//!
//! A page's state is created the first time its route is visited and its
//! data is fetched then. Until that first fetch completes the route is
//! *pending*, and the shell shows a fallback spinner in place of the page,
//! except while the boot splash is still covering the window.

use super::route::Page;
use std::collections::HashSet;

/// What the shell should do when entering a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    /// First visit: build the page state and start its fetch.
    FirstVisit,
    /// The page state already exists.
    Revisit,
}

#[derive(Debug, Default)]
pub struct RouteLoader {
    materialised: HashSet<Page>,
    pending: HashSet<Page>,
}

impl RouteLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a visit. Pages that need data stay pending until
    /// [`RouteLoader::complete`] is called.
    pub fn enter(&mut self, page: Page, needs_data: bool) -> Entry {
        if !self.materialised.insert(page) {
            return Entry::Revisit;
        }
        if needs_data {
            self.pending.insert(page);
        }
        Entry::FirstVisit
    }

    /// Forgets a page so the next visit rebuilds it.
    pub fn evict(&mut self, page: Page) {
        self.materialised.remove(&page);
        self.pending.remove(&page);
    }

    /// Marks the first load of `page` as done, whether it succeeded or not.
    pub fn complete(&mut self, page: Page) {
        if self.pending.remove(&page) {
            tracing::debug!(?page, "route ready");
        }
    }

    #[must_use]
    pub fn is_pending(&self, page: Page) -> bool {
        self.pending.contains(&page)
    }

    #[must_use]
    pub fn is_materialised(&self, page: Page) -> bool {
        self.materialised.contains(&page)
    }

    /// Whether the route fallback replaces the page right now.
    #[must_use]
    pub fn shows_fallback(&self, page: Page, splash_active: bool) -> bool {
        !splash_active && self.is_pending(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_visit_is_pending_until_complete() {
        let mut loader = RouteLoader::new();
        assert_eq!(loader.enter(Page::Gallery, true), Entry::FirstVisit);
        assert!(loader.is_pending(Page::Gallery));

        loader.complete(Page::Gallery);
        assert!(!loader.is_pending(Page::Gallery));
        assert_eq!(loader.enter(Page::Gallery, true), Entry::Revisit);
    }

    #[test]
    fn fallback_hidden_while_splash_is_active() {
        let mut loader = RouteLoader::new();
        loader.enter(Page::Events, true);
        assert!(!loader.shows_fallback(Page::Events, true));
        assert!(loader.shows_fallback(Page::Events, false));
        assert!(!loader.shows_fallback(Page::Home, false));
    }

    #[test]
    fn static_pages_are_never_pending() {
        let mut loader = RouteLoader::new();
        assert_eq!(loader.enter(Page::About, false), Entry::FirstVisit);
        assert!(!loader.is_pending(Page::About));
        assert!(loader.is_materialised(Page::About));
    }

    #[test]
    fn evicted_page_is_rebuilt() {
        let mut loader = RouteLoader::new();
        loader.enter(Page::EventDetail, true);
        loader.complete(Page::EventDetail);
        loader.evict(Page::EventDetail);
        assert_eq!(loader.enter(Page::EventDetail, true), Entry::FirstVisit);
        assert!(loader.is_pending(Page::EventDetail));
    }
}
