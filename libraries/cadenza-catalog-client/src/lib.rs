//! Cadenza Catalog Client
//!
//! HTTP client for the catalog backend, and the `CatalogAdapter` the radio
//! subsystem consumes.
//!
//! # Features
//!
//! - **Catalog**: fetch every song
//! - **Similar songs**: ask the backend for a ranked similar-song list
//! - **Normalisation**: backend song records become [`cadenza_core::Track`]
//!   values in exactly one place ([`SongRecord::into_track`])
//!
//! # Example
//!
//! ```ignore
//! use cadenza_catalog_client::{CatalogClient, CatalogConfig};
//! use cadenza_core::CatalogAdapter;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CatalogClient::new(CatalogConfig::new("https://music.example.com"))?;
//!
//!     let similar = client.fetch_similar("Clair de Lune", 20).await?;
//!     for track in similar {
//!         println!("{} - {}", track.artist, track.title);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod adapter;
mod client;
mod error;
mod types;

// Re-export main types
pub use client::CatalogClient;
pub use error::{CatalogClientError, Result};
pub use types::{
    AlbumRecord, ArtistRecord, CatalogConfig, SongRecord, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS,
    UNKNOWN_ARTIST,
};
