//! HTTP client for the catalog backend.

use crate::error::{CatalogClientError, Result};
use crate::types::{CatalogConfig, SongRecord};
use reqwest::{Client, RequestBuilder};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Client for the catalog backend's song endpoints.
///
/// # Example
///
/// ```ignore
/// use cadenza_catalog_client::{CatalogClient, CatalogConfig};
///
/// let client = CatalogClient::new(CatalogConfig::new("https://music.example.com"))?;
/// let songs = client.songs().await?;
/// println!("Catalog has {} songs", songs.len());
/// ```
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new client with the given configuration.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(CatalogClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        let parsed =
            Url::parse(&base_url).map_err(|e| CatalogClientError::InvalidUrl(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CatalogClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(format!("Cadenza/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Every song in the catalog (`GET /canciones`).
    pub async fn songs(&self) -> Result<Vec<SongRecord>> {
        let url = format!("{}/canciones", self.base_url);
        debug!(url = %url, "Fetching catalog");

        self.get_records(self.http.get(&url)).await
    }

    /// Songs the backend ranks as similar to `title`
    /// (`GET /canciones/similares?titulo=..&limite=..`).
    pub async fn similar_songs(&self, title: &str, limit: usize) -> Result<Vec<SongRecord>> {
        let url = format!("{}/canciones/similares", self.base_url);
        debug!(url = %url, title, limit, "Fetching similar songs");

        let limit = limit.to_string();
        let request = self
            .http
            .get(&url)
            .query(&[("titulo", title), ("limite", limit.as_str())]);
        self.get_records(request).await
    }

    async fn get_records(&self, request: RequestBuilder) -> Result<Vec<SongRecord>> {
        let response = request.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                CatalogClientError::ServerUnreachable(e.to_string())
            } else {
                CatalogClientError::Request(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(CatalogClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Option<Vec<SongRecord>> = serde_json::from_str(&body).map_err(|e| {
            CatalogClientError::ParseError(format!("Failed to parse song list: {}", e))
        })?;
        let records = records.unwrap_or_default();

        debug!(count = records.len(), "Fetched songs");
        Ok(records)
    }
}
