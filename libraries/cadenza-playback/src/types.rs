//! Core types for playback management

use crate::error::{PlaybackError, Result};
use cadenza_core::Track;
use serde::{Deserialize, Serialize};

/// Loop mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopMode {
    /// Stop when queue ends
    #[default]
    Off,

    /// Replay current track when it ends
    One,

    /// Wrap to the start of the queue
    All,
}

impl LoopMode {
    /// Next mode in the `off → one → all → off` cycle
    pub fn cycle(self) -> Self {
        match self {
            LoopMode::Off => LoopMode::One,
            LoopMode::One => LoopMode::All,
            LoopMode::All => LoopMode::Off,
        }
    }
}

/// Partial progress report from a media element
///
/// Only the fields that are present are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub played_seconds: Option<f64>,
    pub played_fraction: Option<f64>,
}

impl ProgressUpdate {
    pub fn seconds(played_seconds: f64) -> Self {
        Self {
            played_seconds: Some(played_seconds),
            played_fraction: None,
        }
    }

    pub fn fraction(played_fraction: f64) -> Self {
        Self {
            played_seconds: None,
            played_fraction: Some(played_fraction),
        }
    }
}

/// Active radio station
///
/// Lives from `start_radio_mode` until `exit_radio_mode`. While present,
/// next/previous resolve against `queue` here instead of the normal queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadioSession {
    seed: Track,
    queue: Vec<Track>,
}

impl RadioSession {
    pub(crate) fn new(seed: Track, queue: Vec<Track>) -> Self {
        Self { seed, queue }
    }

    /// Track the station was started from
    pub fn seed(&self) -> &Track {
        &self.seed
    }

    /// Station order (already shuffled if shuffle was on at activation)
    pub fn queue(&self) -> &[Track] {
        &self.queue
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Read-only view of the controller for UI layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    pub current: Option<Track>,
    pub is_playing: bool,
    pub played_seconds: f64,
    pub duration_seconds: f64,
    pub played_fraction: f64,
    pub volume: f32,
    pub muted: bool,
    pub shuffle: bool,
    pub loop_mode: LoopMode,
    pub radio_active: bool,
}

/// Configuration for the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Maximum history size (default: 50)
    pub history_size: usize,

    /// Initial volume (0.0-1.0, default: 0.8)
    pub volume: f32,

    /// Initial shuffle flag (default: off)
    pub shuffle: bool,

    /// Initial loop mode (default: Off)
    pub loop_mode: LoopMode,

    /// Recently played list size (default: 10)
    pub recent_limit: usize,
}

impl PlaybackConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.volume.is_finite() || !(0.0..=1.0).contains(&self.volume) {
            return Err(PlaybackError::InvalidVolume(self.volume));
        }
        if self.history_size == 0 {
            return Err(PlaybackError::EmptyHistory);
        }
        if self.recent_limit == 0 {
            return Err(PlaybackError::InvalidConfig(
                "recent_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            history_size: 50,
            volume: 0.8,
            shuffle: false,
            loop_mode: LoopMode::Off,
            recent_limit: 10,
        }
    }
}
