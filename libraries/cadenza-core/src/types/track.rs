//! Track domain type
use crate::media::MediaKind;
use crate::types::TrackId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Playable track
///
/// Tracks are values: catalogs build them once, already normalised, and the
/// playback engine never mutates them afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier (some adapters cannot supply one)
    #[serde(default)]
    pub id: Option<TrackId>,

    /// Track title
    #[serde(default)]
    pub title: String,

    /// Artist name
    #[serde(default)]
    pub artist: String,

    /// Album name
    #[serde(default)]
    pub album: Option<String>,

    /// Genre
    #[serde(default)]
    pub genre: Option<String>,

    /// Release year
    #[serde(default)]
    pub year: Option<i32>,

    /// Catalog duration in seconds; the media element reports the real one
    #[serde(default)]
    pub duration_seconds: Option<f64>,

    /// Playable resource locator
    #[serde(default)]
    pub media_url: Option<String>,

    /// Cover art reference
    #[serde(default)]
    pub cover_url: Option<String>,
}

impl Track {
    /// Create a new track with minimal metadata
    pub fn new(id: impl Into<TrackId>, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::untitled(title, artist)
        }
    }

    /// Create a track without an id (e.g. from an adapter with no stable key)
    pub fn untitled(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            artist: artist.into(),
            album: None,
            genre: None,
            year: None,
            duration_seconds: None,
            media_url: None,
            cover_url: None,
        }
    }

    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_duration_seconds(mut self, seconds: f64) -> Self {
        self.duration_seconds = Some(seconds);
        self
    }

    pub fn with_media_url(mut self, url: impl Into<String>) -> Self {
        self.media_url = Some(url.into());
        self
    }

    pub fn with_cover_url(mut self, url: impl Into<String>) -> Self {
        self.cover_url = Some(url.into());
        self
    }

    /// Get the catalog duration as a Duration
    pub fn duration(&self) -> Option<Duration> {
        self.duration_seconds
            .filter(|secs| secs.is_finite() && *secs >= 0.0)
            .map(Duration::from_secs_f64)
    }

    /// Whether a media element has anything to load
    pub fn is_playable(&self) -> bool {
        self.media_url.as_deref().is_some_and(|url| !url.is_empty())
    }

    /// Which kind of media element this track needs, if any
    pub fn media_kind(&self) -> Option<MediaKind> {
        self.media_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .map(MediaKind::detect)
    }
}
