//! `CatalogAdapter` implementation backed by the HTTP client.

use crate::client::CatalogClient;
use crate::types::SongRecord;
use async_trait::async_trait;
use cadenza_core::{CatalogAdapter, Track};

#[async_trait]
impl CatalogAdapter for CatalogClient {
    async fn fetch_all(&self) -> cadenza_core::Result<Vec<Track>> {
        let records = self.songs().await?;
        Ok(records.into_iter().map(SongRecord::into_track).collect())
    }

    async fn fetch_similar(&self, title: &str, limit: usize) -> cadenza_core::Result<Vec<Track>> {
        let records = self.similar_songs(title, limit).await?;
        Ok(records.into_iter().map(SongRecord::into_track).collect())
    }
}
