// SPDX-License-Identifier: MPL-2.0
use iced::{Point, Rectangle, Size};
use iced_chapel::app::config::{self, Config, SplashPolicy};
use iced_chapel::app::route::{Navigator, Page, Route};
use iced_chapel::domain::gallery::group_sections;
use iced_chapel::domain::{GallerySection, MediaItem, Modality, RecordId, SectionLayout};
use iced_chapel::media::{LazyMedia, LoadState, MediaSource, SlotKey};
use iced_chapel::ui::scroll_lock::{BodyStyle, Overflow, ScrollLock};
use iced_chapel::ui::theming::ThemeMode;
use tempfile::tempdir;

fn section(id: &str, name: &str, order: i32) -> GallerySection {
    GallerySection {
        id: RecordId::new(id),
        name: name.to_string(),
        display_order: order,
    }
}

fn item(id: &str, section: &str, order: i32) -> MediaItem {
    MediaItem {
        id: RecordId::new(id),
        title: format!("Item {id}"),
        description: None,
        image_urls: vec![format!("https://cdn.example.org/{id}.jpg")],
        video_url: None,
        section_id: RecordId::new(section),
        display_order: order,
        published: true,
    }
}

#[test]
fn test_route_paths_survive_parsing() {
    let routes = [
        Route::Home,
        Route::About,
        Route::Events,
        Route::EventDetail(RecordId::new("42")),
        Route::Gallery,
        Route::Ministries,
        Route::Sermons,
        Route::Contact,
        Route::image_viewer("https://cdn.example.org/a b.jpg", "Choir & band"),
        Route::AdminGallery,
    ];
    for route in routes {
        assert_eq!(Route::parse(&route.to_path()), route);
    }
    assert_eq!(Route::parse("/no/such/page"), Route::Home);
}

#[test]
fn test_navigator_back_walks_history_then_lands_home() {
    let mut navigator = Navigator::new(Route::Gallery);
    assert!(navigator.push(Route::Events));
    assert!(!navigator.push(Route::Events));

    assert!(navigator.back());
    assert_eq!(navigator.current().page(), Page::Gallery);
    assert!(navigator.back());
    assert_eq!(navigator.current(), &Route::Home);
    assert!(!navigator.back());
}

#[test]
fn test_gallery_grouping_orders_and_filters() {
    let sections = vec![
        section("late", "Sunday Service Videos", 2),
        section("early", "Easter", 0),
        section("empty", "Harvest", 1),
    ];
    let mut hidden = item("h", "early", 0);
    hidden.published = false;
    let mut video = item("v", "late", 0);
    video.video_url = Some("https://youtu.be/abc".to_string());
    let items = vec![
        item("b", "early", 2),
        item("a", "early", 1),
        hidden,
        video,
        item("orphan", "missing", 0),
    ];

    let groups = group_sections(&sections, &items, false);
    let names: Vec<&str> = groups.iter().map(|g| g.section.name.as_str()).collect();
    assert_eq!(names, vec!["Easter", "Sunday Service Videos"]);

    let ids: Vec<String> = groups[0].items.iter().map(|i| i.id.to_string()).collect();
    assert_eq!(ids, vec!["a", "b"]);

    assert_eq!(groups[1].layout, SectionLayout::VideoGrid);
    assert_eq!(
        groups[1].items[0].modality_in(groups[1].layout),
        Some(Modality::Video)
    );

    let with_hidden = group_sections(&sections, &items, true);
    assert_eq!(with_hidden[0].items.len(), 3);
}

#[test]
fn test_config_round_trip_through_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.theme_mode = ThemeMode::Dark;
    config.store.url = Some("https://store.example.org".to_string());
    config.boot.splash_policy = Some(SplashPolicy::Fixed);
    config.gallery.root_margin_px = Some(300.0);
    config.about.congregation_name = "St. Brigid's".to_string();

    config::save_to_path(&config, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config file");
    assert_eq!(loaded, config);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_broken_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[general\ntheme_mode = 3")
        .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_some());
    assert_eq!(config.about, Config::default().about);
}

#[test]
fn test_nested_scroll_locks_restore_original_style() {
    let mut lock = ScrollLock::new(BodyStyle::with_overflow(Overflow::Auto));
    let outer = lock.acquire(12.0);
    let inner = lock.acquire(12.0);
    assert_eq!(lock.style().overflow, Overflow::Hidden);
    assert_eq!(lock.style().padding_right, 12.0);

    // Released out of order.
    lock.release(outer);
    assert!(lock.is_locked());
    lock.release(inner);
    assert!(!lock.is_locked());
    assert_eq!(lock.style(), BodyStyle::with_overflow(Overflow::Auto));
}

#[test]
fn test_lazy_slots_load_only_near_the_viewport() {
    let mut lazy = LazyMedia::new(200.0, 1024 * 1024, None);
    let near = SlotKey::new("gallery/near");
    let far = SlotKey::new("gallery/far");
    lazy.mount(
        near.clone(),
        MediaSource::new("https://cdn.example.org/near.jpg", "near"),
        Rectangle::new(Point::new(0.0, 850.0), Size::new(200.0, 200.0)),
    );
    lazy.mount(
        far.clone(),
        MediaSource::new("https://cdn.example.org/far.jpg", "far"),
        Rectangle::new(Point::new(0.0, 4000.0), Size::new(200.0, 200.0)),
    );

    let requests = lazy.observe(Rectangle::new(Point::ORIGIN, Size::new(1000.0, 700.0)));
    assert_eq!(requests.len(), 1);
    assert_eq!(lazy.state(&near), Some(LoadState::InViewLoading));
    assert_eq!(lazy.state(&far), Some(LoadState::NotInView));
}
