/// Core traits for Cadenza
use crate::error::Result;
use crate::types::Track;
use async_trait::async_trait;

/// Source of tracks for the radio subsystem and the host UI
///
/// Implementations are responsible for normalising their backend's schema
/// into [`Track`] before returning; consumers never inspect raw records.
#[async_trait]
pub trait CatalogAdapter: Send + Sync {
    /// Fetch every track the catalog knows about
    ///
    /// # Errors
    /// Returns an error if the catalog cannot be read
    async fn fetch_all(&self) -> Result<Vec<Track>>;

    /// Ask the catalog for up to `limit` tracks similar to `title`, already ranked
    ///
    /// # Errors
    /// Returns an error if the catalog cannot answer; callers fall back to
    /// scoring the full catalog themselves
    async fn fetch_similar(&self, title: &str, limit: usize) -> Result<Vec<Track>>;
}

#[async_trait]
impl<T: CatalogAdapter + ?Sized> CatalogAdapter for Box<T> {
    async fn fetch_all(&self) -> Result<Vec<Track>> {
        (**self).fetch_all().await
    }

    async fn fetch_similar(&self, title: &str, limit: usize) -> Result<Vec<Track>> {
        (**self).fetch_similar(title, limit).await
    }
}
