//! Cadenza - Radio
//!
//! Builds "radio" stations: ranked lists of tracks similar to a seed track.
//!
//! The catalog is asked first. When its similar-track query fails, the full
//! catalog is fetched and scored locally on genre, artist, album and release
//! year. The resulting list is handed to
//! `PlaybackController::start_radio_mode` by the host.
//!
//! # Example
//!
//! ```rust
//! use cadenza_core::{StaticCatalog, Track};
//! use cadenza_radio::RadioRecommender;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), cadenza_radio::RadioError> {
//! let catalog = StaticCatalog::new(vec![
//!     Track::new("1", "Seed", "Band").with_genre("Jazz"),
//!     Track::new("2", "Other", "Band").with_genre("Jazz"),
//! ]);
//!
//! // StaticCatalog has no similar-track query, so this scores locally
//! let radio = RadioRecommender::new(catalog);
//! let similar = radio.similar_tracks("Seed", 10).await?;
//! assert_eq!(similar[0].title, "Other");
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod recommender;
pub mod scoring;
mod ticket;

pub use config::{RadioConfig, DEFAULT_LIMIT, DEFAULT_STATION_SIZE};
pub use error::{RadioError, Result};
pub use recommender::RadioRecommender;
pub use scoring::{rank_similar, similarity_score};
pub use ticket::{RadioRequests, RequestTicket};
