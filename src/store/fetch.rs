// SPDX-License-Identifier: MPL-2.0
//! Per-page data fetchers.
//!
//! Each function owns its client so it can be handed straight to
//! `Task::perform`.

use super::StoreClient;
use crate::domain::{
    ContactMessage, Event, GallerySection, MediaItem, Ministry, RecordId, Sermon,
};
use crate::error::StoreError;
use serde::Serialize;

pub const GALLERY_SECTIONS: &str = "gallery_sections";
pub const GALLERY_ITEMS: &str = "gallery_items";
pub const EVENTS: &str = "events";
pub const SERMONS: &str = "sermons";
pub const MINISTRIES: &str = "ministries";
pub const CONTACT_MESSAGES: &str = "contact_messages";

/// Sections plus items, both in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryRows {
    pub sections: Vec<GallerySection>,
    pub items: Vec<MediaItem>,
}

/// Gallery rows. Admin views pass `include_unpublished`.
pub async fn gallery(
    client: StoreClient,
    include_unpublished: bool,
) -> Result<GalleryRows, StoreError> {
    let sections = client
        .from(GALLERY_SECTIONS)
        .order("display_order", true)
        .fetch::<GallerySection>()
        .await?;

    let mut items = client.from(GALLERY_ITEMS).order("display_order", true);
    if !include_unpublished {
        items = items.eq("published", true);
    }
    let items = items.fetch::<MediaItem>().await?;

    Ok(GalleryRows { sections, items })
}

/// Newest published gallery items, for the home hero.
pub async fn featured_items(client: StoreClient, limit: usize) -> Result<Vec<MediaItem>, StoreError> {
    client
        .from(GALLERY_ITEMS)
        .eq("published", true)
        .order("created_at", false)
        .limit(limit)
        .fetch()
        .await
}

pub async fn events(client: StoreClient) -> Result<Vec<Event>, StoreError> {
    client
        .from(EVENTS)
        .eq("published", true)
        .order("starts_at", true)
        .fetch()
        .await
}

/// A single event; `Ok(None)` when no row matches.
pub async fn event_by_id(client: StoreClient, id: RecordId) -> Result<Option<Event>, StoreError> {
    let rows: Vec<Event> = client.from(EVENTS).eq("id", &id).limit(1).fetch().await?;
    Ok(rows.into_iter().next())
}

pub async fn sermons(client: StoreClient) -> Result<Vec<Sermon>, StoreError> {
    client
        .from(SERMONS)
        .eq("published", true)
        .order("preached_on", false)
        .fetch()
        .await
}

pub async fn latest_sermon(client: StoreClient) -> Result<Option<Sermon>, StoreError> {
    let rows: Vec<Sermon> = client
        .from(SERMONS)
        .eq("published", true)
        .order("preached_on", false)
        .limit(1)
        .fetch()
        .await?;
    Ok(rows.into_iter().next())
}

/// Everything the home page shows, fetched concurrently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeRows {
    pub featured: Vec<MediaItem>,
    pub events: Vec<Event>,
    pub latest_sermon: Option<Sermon>,
}

pub async fn home(client: StoreClient, hero_limit: usize) -> Result<HomeRows, StoreError> {
    let (featured, events, latest_sermon) = futures_util::try_join!(
        featured_items(client.clone(), hero_limit),
        events(client.clone()),
        latest_sermon(client),
    )?;
    Ok(HomeRows {
        featured,
        events,
        latest_sermon,
    })
}

pub async fn ministries(client: StoreClient) -> Result<Vec<Ministry>, StoreError> {
    client
        .from(MINISTRIES)
        .order("display_order", true)
        .fetch()
        .await
}

pub async fn submit_contact(
    client: StoreClient,
    message: ContactMessage,
) -> Result<(), StoreError> {
    client.insert(CONTACT_MESSAGES, &message).await
}

#[derive(Debug, Serialize)]
struct PublishedPatch {
    published: bool,
}

#[derive(Debug, Serialize)]
struct OrderPatch {
    display_order: i32,
}

pub async fn set_item_published(
    client: StoreClient,
    id: RecordId,
    published: bool,
) -> Result<(), StoreError> {
    client
        .update(GALLERY_ITEMS, &id, &PublishedPatch { published })
        .await
}

/// Writes the swapped `display_order` of two neighbouring items.
pub async fn swap_item_order(
    client: StoreClient,
    first: (RecordId, i32),
    second: (RecordId, i32),
) -> Result<(), StoreError> {
    client
        .update(GALLERY_ITEMS, &first.0, &OrderPatch { display_order: second.1 })
        .await?;
    client
        .update(GALLERY_ITEMS, &second.0, &OrderPatch { display_order: first.1 })
        .await
}

/// Writes new `display_order` values one item at a time, stopping at the
/// first failure.
pub async fn renumber_items(
    client: StoreClient,
    orders: Vec<(RecordId, i32)>,
) -> Result<(), StoreError> {
    for (id, display_order) in orders {
        client
            .update(GALLERY_ITEMS, &id, &OrderPatch { display_order })
            .await?;
    }
    Ok(())
}

pub async fn delete_item(client: StoreClient, id: RecordId) -> Result<(), StoreError> {
    client.delete(GALLERY_ITEMS, &id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patches_serialize_single_field() {
        assert_eq!(
            serde_json::to_string(&PublishedPatch { published: false }).expect("json"),
            r#"{"published":false}"#
        );
        assert_eq!(
            serde_json::to_string(&OrderPatch { display_order: 3 }).expect("json"),
            r#"{"display_order":3}"#
        );
    }

    #[tokio::test]
    async fn unreachable_store_is_a_transport_error() {
        let config = crate::app::config::StoreConfig {
            url: Some("http://127.0.0.1:9".into()),
            anon_key: None,
            request_timeout_secs: Some(1),
        };
        let client = StoreClient::new(&config).expect("client");
        let err = events(client).await.expect_err("no server on discard port");
        assert!(err.is_transport(), "{err:?}");
    }
}
