//! Playback position bookkeeping
//!
//! Seconds are the source of truth; the played fraction is always derived
//! from them so the two can never disagree. Once the duration is known the
//! played position never exceeds it.

use crate::types::ProgressUpdate;

/// Played position and known duration of the current track
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Progress {
    played_seconds: f64,
    duration_seconds: f64,
}

impl Progress {
    pub fn played_seconds(&self) -> f64 {
        self.played_seconds
    }

    /// `0.0` until the media element reports a duration
    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    /// `played / duration`; `0.0` until the duration is known
    pub fn fraction(&self) -> f64 {
        if self.duration_seconds > 0.0 {
            self.played_seconds / self.duration_seconds
        } else {
            0.0
        }
    }

    /// Upper bound for a range control; never zero
    pub fn max(&self) -> f64 {
        self.duration_seconds.max(1.0)
    }

    /// Apply a partial update
    ///
    /// Seconds win when both fields are present. A fraction alone is only
    /// usable once the duration is known. Positions past a known duration are
    /// clamped to it. Returns `true` if anything changed.
    pub fn apply(&mut self, update: ProgressUpdate) -> bool {
        let seconds = match (update.played_seconds, update.played_fraction) {
            (Some(seconds), _) if is_valid(seconds) => Some(seconds),
            (_, Some(fraction)) if is_valid(fraction) && self.duration_seconds > 0.0 => {
                Some(fraction.min(1.0) * self.duration_seconds)
            }
            _ => None,
        };

        match seconds.map(|seconds| self.within_duration(seconds)) {
            Some(seconds) if seconds != self.played_seconds => {
                self.played_seconds = seconds;
                true
            }
            _ => false,
        }
    }

    /// Record the duration; returns `true` if it changed
    ///
    /// A shorter duration pulls the played position back within it.
    pub fn set_duration(&mut self, seconds: f64) -> bool {
        if !is_valid(seconds) || seconds == self.duration_seconds {
            return false;
        }
        self.duration_seconds = seconds;
        self.played_seconds = self.within_duration(self.played_seconds);
        true
    }

    /// Rewind to the start, keeping the duration
    pub fn rewind(&mut self) {
        self.played_seconds = 0.0;
    }

    /// Forget position and duration (new track)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn within_duration(&self, seconds: f64) -> f64 {
        if self.duration_seconds > 0.0 {
            seconds.min(self.duration_seconds)
        } else {
            seconds
        }
    }
}

fn is_valid(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Render seconds as `m:ss`
///
/// Zero, negative and non-finite input all render as `0:00`.
pub fn format_clock(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
