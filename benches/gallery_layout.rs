// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery slot placement and visibility.
//!
//! Measures the performance of:
//! - Grouping store rows into ordered sections
//! - Computing thumbnail rectangles for a large gallery
//! - Re-observing the viewport while scrolling

use criterion::{criterion_group, criterion_main, Criterion};
use iced::{Point, Rectangle, Size};
use iced_chapel::domain::gallery::group_sections;
use iced_chapel::domain::{GallerySection, MediaItem, RecordId};
use iced_chapel::media::{LazyMedia, MediaSource};
use iced_chapel::ui::pages::gallery::layout_slots;
use iced_chapel::ui::pages::layout::PageGeometry;
use std::hint::black_box;

const SECTIONS: usize = 12;
const ITEMS_PER_SECTION: usize = 80;

fn rows() -> (Vec<GallerySection>, Vec<MediaItem>) {
    let sections = (0..SECTIONS)
        .map(|s| GallerySection {
            id: RecordId::new(format!("s{s}")),
            name: if s % 4 == 0 {
                format!("Videos {s}")
            } else {
                format!("Album {s}")
            },
            display_order: (SECTIONS - s) as i32,
        })
        .collect();
    let items = (0..SECTIONS * ITEMS_PER_SECTION)
        .map(|i| MediaItem {
            id: RecordId::new(format!("i{i}")),
            title: format!("Photo {i}"),
            description: None,
            image_urls: vec![format!("https://cdn.example.org/{i}.jpg")],
            video_url: None,
            section_id: RecordId::new(format!("s{}", i % SECTIONS)),
            display_order: (i * 7 % 101) as i32,
            published: i % 9 != 0,
        })
        .collect();
    (sections, items)
}

/// Benchmark grouping of raw store rows.
fn bench_group_sections(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_layout");
    let (sections, items) = rows();

    group.bench_function("group_sections", |b| {
        b.iter(|| black_box(group_sections(&sections, &items, false)));
    });

    group.finish();
}

/// Benchmark slot rectangle computation for the whole page.
fn bench_layout_slots(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_layout");
    let (sections, items) = rows();
    let groups = group_sections(&sections, &items, false);
    let geometry = PageGeometry::new(1280.0);

    group.bench_function("layout_slots", |b| {
        b.iter(|| black_box(layout_slots(&groups, geometry, 180.0).len()));
    });

    group.finish();
}

/// Benchmark a scroll pass: mount every slot, then step the viewport down
/// the page.
fn bench_scroll_observe(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_layout");
    let (sections, items) = rows();
    let groups = group_sections(&sections, &items, false);
    let geometry = PageGeometry::new(1280.0);

    group.bench_function("scroll_observe", |b| {
        b.iter(|| {
            let mut lazy = LazyMedia::new(200.0, 0, None);
            for slot in layout_slots(&groups, geometry, 180.0) {
                lazy.mount(
                    slot.key,
                    MediaSource::new(slot.item.image_urls[0].clone(), slot.item.title.clone()),
                    slot.rect,
                );
            }
            let mut started = 0;
            for step in 0..100 {
                let viewport =
                    Rectangle::new(Point::new(0.0, step as f32 * 400.0), Size::new(1280.0, 720.0));
                started += lazy.observe(viewport).len();
            }
            black_box(started)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_group_sections,
    bench_layout_slots,
    bench_scroll_observe
);
criterion_main!(benches);
