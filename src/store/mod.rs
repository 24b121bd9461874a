// SPDX-License-Identifier: MPL-2.0
//! Client for the remote data store.
//!
//! The store speaks the PostgREST dialect over HTTPS. Every request carries
//! the anonymous key twice, as `apikey` and as a bearer token.
//!
//! [`StoreClient`] is cheap to clone (the underlying `reqwest::Client` is
//! reference counted), so page tasks take an owned copy into their futures.

pub mod fetch;
pub mod query;

pub use query::Query;

use crate::app::config::StoreConfig;
use crate::domain::RecordId;
use crate::error::StoreError;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

const USER_AGENT: &str = concat!("IcedChapel/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    base: Url,
}

impl StoreClient {
    /// Builds a client from the `[store]` config section.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let base = query::parse_base(config.effective_url())?;
        let headers = auth_headers(config.anon_key.as_deref())?;

        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| StoreError::Http(e.to_string()))?;

        Ok(Self { http, base })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Starts a read against `table`.
    #[must_use]
    pub fn from(&self, table: &str) -> Select {
        Select {
            client: self.clone(),
            query: Query::table(table),
        }
    }

    /// Inserts one row.
    pub async fn insert<T: Serialize + ?Sized>(&self, table: &str, row: &T) -> Result<(), StoreError> {
        let url = Query::table(table).write_url(&self.base)?;
        let response = self
            .http
            .post(url)
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await?;
        check_status(response).await.map(drop)
    }

    /// Patches the row with the given id.
    pub async fn update<T: Serialize + ?Sized>(
        &self,
        table: &str,
        id: &RecordId,
        patch: &T,
    ) -> Result<(), StoreError> {
        let url = Query::table(table).eq("id", id).write_url(&self.base)?;
        let response = self
            .http
            .patch(url)
            .header("Prefer", "return=minimal")
            .json(patch)
            .send()
            .await?;
        check_status(response).await.map(drop)
    }

    /// Deletes the row with the given id.
    pub async fn delete(&self, table: &str, id: &RecordId) -> Result<(), StoreError> {
        let url = Query::table(table).eq("id", id).write_url(&self.base)?;
        let response = self.http.delete(url).send().await?;
        check_status(response).await.map(drop)
    }

    async fn get_rows<T: DeserializeOwned>(&self, query: &Query) -> Result<Vec<T>, StoreError> {
        let url = query.read_url(&self.base)?;
        tracing::debug!(table = query.table_name(), %url, "store read");
        let response = self.http.get(url).send().await?;
        let response = check_status(response).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// A pending read; finish it with [`Select::fetch`].
#[derive(Debug, Clone)]
pub struct Select {
    client: StoreClient,
    query: Query,
}

impl Select {
    #[must_use]
    pub fn select(mut self, columns: &str) -> Self {
        self.query = self.query.select(columns);
        self
    }

    #[must_use]
    pub fn eq(mut self, field: &str, value: impl std::fmt::Display) -> Self {
        self.query = self.query.eq(field, value);
        self
    }

    #[must_use]
    pub fn order(mut self, field: &str, ascending: bool) -> Self {
        self.query = self.query.order(field, ascending);
        self
    }

    #[must_use]
    pub fn limit(mut self, count: usize) -> Self {
        self.query = self.query.limit(count);
        self
    }

    #[must_use]
    pub fn query(&self) -> &Query {
        &self.query
    }

    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>, StoreError> {
        self.client.get_rows(&self.query).await
    }
}

fn auth_headers(anon_key: Option<&str>) -> Result<HeaderMap, StoreError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(key) = anon_key.map(str::trim).filter(|k| !k.is_empty()) {
        let apikey =
            HeaderValue::from_str(key).map_err(|e| StoreError::InvalidUrl(e.to_string()))?;
        let mut bearer = HeaderValue::from_str(&format!("Bearer {key}"))
            .map_err(|e| StoreError::InvalidUrl(e.to_string()))?;
        bearer.set_sensitive(true);
        headers.insert("apikey", apikey);
        headers.insert(AUTHORIZATION, bearer);
    }
    Ok(headers)
}

async fn check_status(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(StoreError::Status {
        status: status.as_u16(),
        body: body.chars().take(300).collect(),
    })
}
