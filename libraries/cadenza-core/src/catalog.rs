//! In-memory catalog
//!
//! Serves a fixed track list, e.g. one loaded from a JSON file. It has no
//! similarity endpoint, so the radio subsystem always scores it locally.

use crate::error::{CadenzaError, Result};
use crate::traits::CatalogAdapter;
use crate::types::Track;
use async_trait::async_trait;
use std::path::Path;

/// Catalog backed by a track list held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    tracks: Vec<Track>,
}

impl StaticCatalog {
    /// Create a catalog from already-normalised tracks
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    /// Load a catalog from a JSON array of tracks
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let tracks: Vec<Track> = serde_json::from_str(&raw)?;
        Ok(Self::new(tracks))
    }

    /// Tracks in catalog order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[async_trait]
impl CatalogAdapter for StaticCatalog {
    async fn fetch_all(&self) -> Result<Vec<Track>> {
        Ok(self.tracks.clone())
    }

    async fn fetch_similar(&self, _title: &str, _limit: usize) -> Result<Vec<Track>> {
        Err(CadenzaError::Unsupported("similar-track lookup"))
    }
}
