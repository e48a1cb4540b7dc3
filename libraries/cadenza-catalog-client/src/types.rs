//! Types for the catalog backend API.
//!
//! The backend speaks its own (Spanish) schema. [`SongRecord::into_track`] is
//! the only place where its field names and fallbacks are interpreted.

use cadenza_core::{Track, TrackId};
use serde::{Deserialize, Deserializer, Serialize};

/// Default base URL of the catalog backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Artist name used when a record carries none.
pub const UNKNOWN_ARTIST: &str = "Unknown";

/// Configuration for connecting to the catalog backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base URL of the backend (e.g., "https://music.example.com")
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl CatalogConfig {
    /// Create a new config with just the URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

// =============================================================================
// Backend records
// =============================================================================

/// Song as returned by `/canciones` and `/canciones/similares`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SongRecord {
    #[serde(default)]
    pub id: Option<TrackId>,
    /// Document id used by some backend versions instead of `id`
    #[serde(default, rename = "_id")]
    pub document_id: Option<TrackId>,
    #[serde(default)]
    pub titulo: Option<String>,
    #[serde(default)]
    pub artista: Option<ArtistRecord>,
    #[serde(default)]
    pub album: Option<AlbumRecord>,
    #[serde(default, rename = "URLPortadaCancion")]
    pub cover_url: Option<String>,
    #[serde(default, rename = "URLCancion")]
    pub media_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "urlCancion")]
    pub legacy_media_url: Option<String>,
    /// Duration in seconds
    #[serde(default)]
    pub duracion: Option<f64>,
    #[serde(default)]
    pub genero: Option<String>,
    #[serde(default, deserialize_with = "lenient_year")]
    pub anio: Option<i32>,
}

/// Artist embedded in a song record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ArtistRecord {
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default, rename = "urlfotoArtista")]
    pub photo_url: Option<String>,
}

/// Album embedded in a song record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AlbumRecord {
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default, rename = "URLPortadaAlbum")]
    pub cover_url: Option<String>,
}

impl SongRecord {
    /// Normalise this record into a [`Track`].
    ///
    /// - id: `id`, else `_id`
    /// - artist: artist name, else `"Unknown"`
    /// - cover: song cover, else album cover, else artist photo
    /// - media URL: `URLCancion`, else `url`, else `urlCancion`
    ///
    /// Empty strings count as missing; a zero duration is unknown.
    pub fn into_track(self) -> Track {
        let artist = self.artista.unwrap_or_default();
        let album = self.album.unwrap_or_default();

        Track {
            id: self.id.or(self.document_id),
            title: self.titulo.unwrap_or_default(),
            artist: present(artist.nombre).unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
            album: present(album.nombre),
            genre: present(self.genero),
            year: self.anio,
            duration_seconds: self.duracion.filter(|d| d.is_finite() && *d > 0.0),
            media_url: present(self.media_url)
                .or_else(|| present(self.url))
                .or_else(|| present(self.legacy_media_url)),
            cover_url: present(self.cover_url)
                .or_else(|| present(album.cover_url))
                .or_else(|| present(artist.photo_url)),
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Accept the year as a number or a numeric string; anything else is unknown.
fn lenient_year<'de, D>(deserializer: D) -> std::result::Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawYear {
        Number(i64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    let year = match Option::<RawYear>::deserialize(deserializer)? {
        Some(RawYear::Number(n)) => i32::try_from(n).ok(),
        Some(RawYear::Text(s)) => s.trim().parse().ok(),
        Some(RawYear::Other(_)) | None => None,
    };
    Ok(year.filter(|y| *y > 0))
}
