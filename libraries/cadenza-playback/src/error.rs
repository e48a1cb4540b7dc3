//! Error types for playback management
//!
//! Transport operations never fail: an empty queue or a missing track is a
//! silent no-op. Errors only come from invalid configuration.

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Volume outside 0.0..=1.0 or not a number
    #[error("Invalid volume: {0}")]
    InvalidVolume(f32),

    /// History must be able to hold at least one track
    #[error("History size must be at least 1")]
    EmptyHistory,

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
