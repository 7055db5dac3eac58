//! Catalog loading.
//!
//! The catalog is a static JSON document listing every product. It is read
//! fresh on every load: remote sources are requested with cache-bypassing
//! headers and local files are re-read from disk. There is no retry and no
//! in-process cache, so a failed load surfaces immediately to the caller.

use std::fmt;
use std::path::{Path, PathBuf};

use reqwest::header::{CACHE_CONTROL, HeaderValue, PRAGMA};
use thiserror::Error;
use toyshop_core::Product;
use tracing::{debug, instrument, warn};
use url::Url;

/// Errors that can occur while loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog server answered with a non-success status.
    #[error("Catalog request returned status {0}")]
    Status(reqwest::StatusCode),

    /// Reading the local catalog file failed.
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a list of products.
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the catalog document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Fetched over HTTP(S).
    Remote(Url),
    /// Read from the local filesystem.
    Local(PathBuf),
}

impl CatalogSource {
    /// Interpret `raw` as a URL when it has an http(s) scheme, otherwise as a path.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if `raw` looks like a URL but does not parse.
    pub fn parse(raw: &str) -> Result<Self, url::ParseError> {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Ok(Self::Remote(Url::parse(trimmed)?))
        } else {
            Ok(Self::Local(PathBuf::from(trimmed)))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(url) => write!(f, "{url}"),
            Self::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Loads the product catalog from its configured source.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    client: reqwest::Client,
    source: CatalogSource,
}

impl CatalogLoader {
    /// Create a loader for `source`.
    #[must_use]
    pub fn new(source: CatalogSource) -> Self {
        Self {
            client: reqwest::Client::new(),
            source,
        }
    }

    /// The source this loader reads from.
    #[must_use]
    pub const fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Load the full product list.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the source cannot be read, answers with a
    /// non-success status, or does not contain a JSON array of products.
    #[instrument(skip(self), fields(source = %self.source))]
    pub async fn load_catalog(&self) -> Result<Vec<Product>, CatalogError> {
        let result = match &self.source {
            CatalogSource::Remote(url) => self.fetch_remote(url).await,
            CatalogSource::Local(path) => read_local(path).await,
        };

        match &result {
            Ok(products) => debug!(count = products.len(), "Catalog loaded"),
            Err(e) => warn!(error = %e, "Catalog load failed"),
        }
        result
    }

    async fn fetch_remote(&self, url: &Url) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .client
            .get(url.clone())
            .header(CACHE_CONTROL, HeaderValue::from_static("no-store"))
            .header(PRAGMA, HeaderValue::from_static("no-cache"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

async fn read_local(path: &Path) -> Result<Vec<Product>, CatalogError> {
    let body = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(serde_json::from_str(&body)?)
}
