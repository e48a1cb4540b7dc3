//! Cadenza Core
//!
//! Platform-agnostic track model and catalog contract shared by the playback
//! engine, the radio subsystem and every catalog backend.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `TrackId`, `MediaKind`
//! - **Identity**: `track_identity` / `same_track`, the one rule used wherever
//!   two tracks are compared
//! - **Core Traits**: `CatalogAdapter`, implemented by HTTP and in-memory catalogs
//! - **Error Handling**: Unified `CadenzaError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use cadenza_core::{same_track, Track};
//!
//! let a = Track::new("1", "Blue in Green", "Miles Davis").with_year(1959);
//! let b = Track::new("1", "Blue in Green (Take 2)", "Miles Davis");
//!
//! // Both carry an id, so the ids decide
//! assert!(same_track(&a, &b));
//! ```

#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod identity;
pub mod media;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use catalog::StaticCatalog;
pub use error::{CadenzaError, Result};
pub use identity::{position_of, same_track, track_identity, TrackIdentity};
pub use media::MediaKind;
pub use traits::CatalogAdapter;
pub use types::{Track, TrackId};
