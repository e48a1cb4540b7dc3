//! Similar-track lookup with catalog fallback

use crate::config::RadioConfig;
use crate::error::{RadioError, Result};
use crate::scoring::rank_similar;
use cadenza_core::{CatalogAdapter, Track};
use tracing::{debug, info, warn};

/// Builds radio stations from a catalog
///
/// Each call is independent: nothing is cached and concurrent calls do not
/// coordinate. Use [`crate::RadioRequests`] to ignore stale results.
#[derive(Debug)]
pub struct RadioRecommender<C> {
    catalog: C,
    config: RadioConfig,
}

impl<C: CatalogAdapter> RadioRecommender<C> {
    pub fn new(catalog: C) -> Self {
        Self::with_config(catalog, RadioConfig::default())
    }

    pub fn with_config(catalog: C, config: RadioConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &RadioConfig {
        &self.config
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Up to `limit` tracks similar to the track titled `seed_title`
    ///
    /// The catalog's own similar-track query is tried first and trusted as
    /// ranked. If it fails, the full catalog is fetched and scored locally.
    /// A seed title the catalog does not know yields an empty list.
    ///
    /// # Errors
    /// Returns [`RadioError::Unavailable`] when the full catalog cannot be
    /// fetched either.
    pub async fn similar_tracks(&self, seed_title: &str, limit: usize) -> Result<Vec<Track>> {
        let remote = match self.catalog.fetch_similar(seed_title, limit).await {
            Ok(tracks) => {
                debug!(seed = seed_title, count = tracks.len(), "Similar tracks from catalog");
                return Ok(tracks);
            }
            Err(e) => e,
        };

        warn!(seed = seed_title, error = %remote, "Similar-track query failed, scoring full catalog");

        let catalog = self
            .catalog
            .fetch_all()
            .await
            .map_err(|source| RadioError::Unavailable { remote, source })?;

        let Some(seed) = catalog.iter().find(|track| track.title == seed_title) else {
            warn!(seed = seed_title, "Seed track not found in catalog");
            return Ok(Vec::new());
        };

        let ranked = rank_similar(seed, &catalog, limit);
        debug!(seed = seed_title, count = ranked.len(), "Similar tracks scored locally");
        Ok(ranked)
    }

    /// Similar tracks using the configured default limit
    pub async fn similar_tracks_default(&self, seed_title: &str) -> Result<Vec<Track>> {
        self.similar_tracks(seed_title, self.config.default_limit).await
    }

    /// Candidate list for a radio station seeded from `seed_title`
    ///
    /// Requests `station_size` tracks; the playback controller takes care of
    /// de-duplication and shuffling when the station is activated.
    pub async fn start_radio(&self, seed_title: &str) -> Result<Vec<Track>> {
        let tracks = self
            .similar_tracks(seed_title, self.config.station_size)
            .await?;
        info!(seed = seed_title, count = tracks.len(), "Radio station ready");
        Ok(tracks)
    }
}
