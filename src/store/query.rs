// SPDX-License-Identifier: MPL-2.0
//! Query description for the store's REST dialect.
//!
//! A [`Query`] is plain data: a table plus column selection, equality
//! filters, ordering and a limit. It renders to PostgREST query pairs such as
//! `select=*`, `section_id=eq.7`, `order=display_order.asc` and `limit=5`.

use crate::error::StoreError;
use reqwest::Url;
use std::fmt::Display;

/// Path prefix under which the store exposes tables.
pub const REST_PREFIX: &str = "rest/v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub field: String,
    pub ascending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    table: String,
    columns: Option<String>,
    filters: Vec<(String, String)>,
    order: Vec<Order>,
    limit: Option<usize>,
}

impl Query {
    #[must_use]
    pub fn table(name: impl Into<String>) -> Self {
        Self {
            table: name.into(),
            columns: None,
            filters: Vec::new(),
            order: Vec::new(),
            limit: None,
        }
    }

    #[must_use]
    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.columns = Some(columns.into());
        self
    }

    /// Adds `field = value`. Several filters are combined with AND.
    #[must_use]
    pub fn eq(mut self, field: impl Into<String>, value: impl Display) -> Self {
        self.filters.push((field.into(), format!("eq.{value}")));
        self
    }

    /// Appends an ordering key; earlier keys take precedence.
    #[must_use]
    pub fn order(mut self, field: impl Into<String>, ascending: bool) -> Self {
        self.order.push(Order {
            field: field.into(),
            ascending,
        });
        self
    }

    #[must_use]
    pub fn limit(mut self, count: usize) -> Self {
        self.limit = Some(count);
        self
    }

    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// Query-string pairs in a stable order: select, filters, order, limit.
    #[must_use]
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.filters.len() + 3);
        pairs.push((
            "select".to_string(),
            self.columns.clone().unwrap_or_else(|| "*".to_string()),
        ));
        pairs.extend(self.filters.iter().cloned());
        if !self.order.is_empty() {
            let order = self
                .order
                .iter()
                .map(|o| format!("{}.{}", o.field, if o.ascending { "asc" } else { "desc" }))
                .collect::<Vec<_>>()
                .join(",");
            pairs.push(("order".to_string(), order));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }

    /// Filter pairs only, as used by `PATCH` and `DELETE`.
    #[must_use]
    pub fn filter_pairs(&self) -> &[(String, String)] {
        &self.filters
    }

    /// Full request URL for reading rows.
    pub fn read_url(&self, base: &Url) -> Result<Url, StoreError> {
        let mut url = table_url(base, &self.table)?;
        url.query_pairs_mut().extend_pairs(self.pairs());
        Ok(url)
    }

    /// Request URL carrying only the filters, for writes.
    pub fn write_url(&self, base: &Url) -> Result<Url, StoreError> {
        let mut url = table_url(base, &self.table)?;
        if !self.filters.is_empty() {
            url.query_pairs_mut().extend_pairs(self.filters.iter());
        }
        Ok(url)
    }
}

/// `{base}/rest/v1/{table}`, tolerating a trailing slash on `base`.
pub fn table_url(base: &Url, table: &str) -> Result<Url, StoreError> {
    if table.is_empty() || !table.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(StoreError::InvalidUrl(format!("bad table name: {table:?}")));
    }
    let mut root = base.clone();
    if !root.path().ends_with('/') {
        let path = format!("{}/", root.path());
        root.set_path(&path);
    }
    root.join(&format!("{REST_PREFIX}/{table}"))
        .map_err(|e| StoreError::InvalidUrl(e.to_string()))
}

/// Parses the configured base URL.
pub fn parse_base(raw: &str) -> Result<Url, StoreError> {
    let url = Url::parse(raw.trim()).map_err(|e| StoreError::InvalidUrl(format!("{raw}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(StoreError::InvalidUrl(format!("unsupported scheme {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        parse_base("https://abc.store.example/").expect("base")
    }

    #[test]
    fn default_select_is_star() {
        let url = Query::table("events").read_url(&base()).expect("url");
        assert_eq!(
            url.as_str(),
            "https://abc.store.example/rest/v1/events?select=*"
        );
    }

    #[test]
    fn renders_filters_order_and_limit() {
        let query = Query::table("gallery_items")
            .select("id,title")
            .eq("published", true)
            .eq("section_id", "s 1")
            .order("display_order", true)
            .order("created_at", false)
            .limit(5);
        let url = query.read_url(&base()).expect("url");
        assert_eq!(
            url.as_str(),
            "https://abc.store.example/rest/v1/gallery_items?select=id%2Ctitle\
             &published=eq.true&section_id=eq.s+1\
             &order=display_order.asc%2Ccreated_at.desc&limit=5"
        );
    }

    #[test]
    fn write_url_keeps_only_filters() {
        let query = Query::table("gallery_items").eq("id", 9).limit(1);
        let url = query.write_url(&base()).expect("url");
        assert_eq!(
            url.as_str(),
            "https://abc.store.example/rest/v1/gallery_items?id=eq.9"
        );
    }

    #[test]
    fn base_without_trailing_slash_keeps_its_path() {
        let base = parse_base("http://localhost:54321/project").expect("base");
        let url = table_url(&base, "sermons").expect("url");
        assert_eq!(url.as_str(), "http://localhost:54321/project/rest/v1/sermons");
    }

    #[test]
    fn rejects_odd_table_names_and_schemes() {
        assert!(table_url(&base(), "events?x=1").is_err());
        assert!(table_url(&base(), "").is_err());
        assert!(parse_base("ftp://example.org").is_err());
        assert!(parse_base("not a url").is_err());
    }
}
