//! Subcommand implementations
//!
//! Each command wires catalog, radio and controller together and returns
//! plain data; printing is left to the binary.

use crate::config::CliConfig;
use crate::error::Result;
use crate::player::{PlayedTrack, SimulatedElement};
use cadenza_catalog_client::CatalogClient;
use cadenza_core::{CatalogAdapter, StaticCatalog, Track};
use cadenza_playback::{format_clock, PlaybackController, PlaybackSnapshot};
use cadenza_radio::{RadioRecommender, RadioRequests};
use std::path::Path;
use tracing::{info, warn};

/// Catalog selected on the command line
pub type DynCatalog = Box<dyn CatalogAdapter>;

/// Open the JSON library at `library`, or the HTTP catalog from `config`
pub fn open_catalog(config: &CliConfig, library: Option<&Path>) -> Result<DynCatalog> {
    if let Some(path) = library {
        let catalog = StaticCatalog::from_json_file(path)?;
        info!(path = %path.display(), tracks = catalog.len(), "Loaded local library");
        return Ok(Box::new(catalog));
    }

    let client = CatalogClient::new(config.catalog.clone())?;
    info!(base_url = client.base_url(), "Using HTTP catalog");
    Ok(Box::new(client))
}

/// One-line description of a track for listings
pub fn describe(track: &Track) -> String {
    let mut line = if track.artist.is_empty() {
        track.title.clone()
    } else {
        format!("{} - {}", track.title, track.artist)
    };

    let details: Vec<String> = [
        track.genre.clone(),
        track.year.map(|year| year.to_string()),
        track.duration_seconds.map(format_clock),
    ]
    .into_iter()
    .flatten()
    .collect();

    if !details.is_empty() {
        line.push_str(&format!(" ({})", details.join(", ")));
    }
    line
}

// ===== similar =====

/// Ranked tracks similar to `title`; `None` uses the configured limit
pub async fn similar<C: CatalogAdapter>(
    radio: &RadioRecommender<C>,
    title: &str,
    limit: Option<usize>,
) -> Result<Vec<Track>> {
    let tracks = match limit {
        Some(limit) => radio.similar_tracks(title, limit).await?,
        None => radio.similar_tracks_default(title).await?,
    };
    Ok(tracks)
}

// ===== radio =====

/// Outcome of a simulated radio session
#[derive(Debug, Clone)]
pub struct RadioRun {
    /// `false` when no station could be built from the seed
    pub started: bool,
    pub played: Vec<PlayedTrack>,
    pub snapshot: PlaybackSnapshot,
}

/// Start a station seeded by `seed_title` and play up to `tracks` songs
pub async fn radio<C: CatalogAdapter>(
    radio: &RadioRecommender<C>,
    requests: &RadioRequests,
    controller: &mut PlaybackController,
    seed_title: &str,
    tracks: usize,
) -> Result<RadioRun> {
    let ticket = requests.begin();
    let candidates = radio.start_radio(seed_title).await?;

    if !requests.is_current(ticket) {
        warn!(seed = seed_title, "Discarding superseded radio results");
        return Ok(RadioRun {
            started: false,
            played: Vec::new(),
            snapshot: controller.snapshot(),
        });
    }

    // The seed only needs a title: identity falls back to it
    let seed = Track::untitled(seed_title, "");
    if !controller.start_radio_mode(seed, candidates) {
        info!(seed = seed_title, "No similar tracks, radio not started");
        return Ok(RadioRun {
            started: false,
            played: Vec::new(),
            snapshot: controller.snapshot(),
        });
    }

    let played = play_for(controller, tracks);
    Ok(RadioRun {
        started: true,
        played,
        snapshot: controller.snapshot(),
    })
}

// ===== recent =====

/// Play the first `count` catalog tracks in order and return the
/// recently-played list, most recent first
pub async fn recent<C: CatalogAdapter + ?Sized>(
    catalog: &C,
    controller: &mut PlaybackController,
    count: usize,
) -> Result<Vec<Track>> {
    let mut tracks = catalog.fetch_all().await?;
    tracks.truncate(count);

    let Some(first) = tracks.first().cloned() else {
        info!("Catalog is empty");
        return Ok(Vec::new());
    };
    let total = tracks.len();
    controller.play(first, Some(tracks));
    play_for(controller, total);

    Ok(controller.recently_played().into_iter().cloned().collect())
}

/// Let the simulated element play until `limit` tracks ended or playback stopped
fn play_for(controller: &mut PlaybackController, limit: usize) -> Vec<PlayedTrack> {
    let mut element = SimulatedElement::new();
    let mut played = Vec::with_capacity(limit);
    while played.len() < limit {
        match element.play_through(controller) {
            Some(track) => played.push(track),
            None => break,
        }
    }
    played
}
