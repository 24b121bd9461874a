// SPDX-License-Identifier: MPL-2.0
//! Error types shared across the application.
//!
//! Each concern gets its own enum: [`StoreError`] for the remote data store,
//! [`AssetError`] for media downloads, and the crate-level [`Error`] that wraps
//! them alongside configuration and I/O failures.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Store Error: {0}")]
    Store(#[from] StoreError),
    #[error("Asset Error: {0}")]
    Asset(#[from] AssetError),
}

/// Failures talking to the remote data store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store base URL or a query could not be turned into a URL.
    #[error("invalid store URL: {0}")]
    InvalidUrl(String),

    /// Transport-level failure (DNS, TLS, connection reset, timeout).
    #[error("request failed: {0}")]
    Http(String),

    /// The store answered with a non-success status code.
    #[error("store returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected row shape.
    #[error("could not decode rows: {0}")]
    Decode(String),
}

impl StoreError {
    /// Returns true when the failure came from the network rather than the data.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, StoreError::Http(_))
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StoreError::Decode(err.to_string())
        } else {
            StoreError::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Decode(err.to_string())
    }
}

/// Failures loading a single media asset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    #[error("download failed: {0}")]
    Http(String),

    #[error("asset server returned HTTP {0}")]
    Status(u16),

    #[error("could not decode image: {0}")]
    Decode(String),

    /// The owning slot was unmounted before the download finished.
    #[error("load aborted")]
    Aborted,
}

impl From<reqwest::Error> for AssetError {
    fn from(err: reqwest::Error) -> Self {
        AssetError::Http(err.to_string())
    }
}

impl From<image_rs::ImageError> for AssetError {
    fn from(err: image_rs::ImageError) -> Self {
        AssetError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
