//! Simulated media element
//!
//! Stands in for the audio tag or embedded video widget a graphical host
//! would mount. It reports duration, progress and "ended" to the controller
//! and honours seeks issued through the controller's binding. When the next
//! track needs a different kind of element the binding is swapped.

use cadenza_core::{MediaKind, Track};
use cadenza_playback::{PlaybackController, ProgressUpdate, SeekBinding};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Duration assumed for tracks whose length the catalog does not know
pub const FALLBACK_DURATION_SECS: f64 = 180.0;

/// Progress reports sent per track
const PROGRESS_STEPS: u32 = 4;

#[derive(Debug, Default)]
struct ElementState {
    position: f64,
    duration: f64,
    seeks: usize,
}

impl ElementState {
    fn seek(&mut self, seconds: f64) {
        if seconds.is_finite() {
            self.position = seconds.clamp(0.0, self.duration.max(0.0));
        }
        self.seeks += 1;
    }
}

/// A track the element played to its end
#[derive(Debug, Clone, PartialEq)]
pub struct PlayedTrack {
    pub track: Track,
    pub kind: MediaKind,
    pub duration_seconds: f64,
    pub from_radio: bool,
}

/// Media element driven by the CLI instead of a real decoder
#[derive(Debug, Default)]
pub struct SimulatedElement {
    state: Arc<Mutex<ElementState>>,
    mounted: Option<MediaKind>,
}

impl SimulatedElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kind of element currently bound to the controller
    pub fn mounted(&self) -> Option<MediaKind> {
        self.mounted
    }

    /// Playback position in seconds
    pub fn position(&self) -> f64 {
        self.state.lock().map(|s| s.position).unwrap_or_default()
    }

    /// Number of seeks the controller issued
    pub fn seek_count(&self) -> usize {
        self.state.lock().map(|s| s.seeks).unwrap_or_default()
    }

    /// Bind this element's seek functions for `kind`
    pub fn mount(&mut self, controller: &mut PlaybackController, kind: MediaKind) {
        let by_seconds = Arc::clone(&self.state);
        let by_fraction = Arc::clone(&self.state);

        controller.set_controller(
            SeekBinding::new()
                .on_seconds(move |seconds| {
                    if let Ok(mut state) = by_seconds.lock() {
                        state.seek(seconds);
                    }
                })
                .on_fraction(move |fraction| {
                    if let Ok(mut state) = by_fraction.lock() {
                        let target = fraction.clamp(0.0, 1.0) * state.duration;
                        state.seek(target);
                    }
                }),
        );

        debug!(?kind, "Mounted media element");
        self.mounted = Some(kind);
    }

    /// Play the current track to its end and signal "ended"
    ///
    /// Returns `None` when the controller is paused or idle.
    pub fn play_through(&mut self, controller: &mut PlaybackController) -> Option<PlayedTrack> {
        if !controller.is_playing() {
            return None;
        }
        let track = controller.current()?.clone();
        let kind = track.media_kind().unwrap_or(MediaKind::Audio);
        if self.mounted != Some(kind) {
            self.mount(controller, kind);
        }

        let duration = track
            .duration_seconds
            .filter(|seconds| seconds.is_finite() && *seconds > 0.0)
            .unwrap_or(FALLBACK_DURATION_SECS);
        self.load(duration);
        controller.set_duration(duration);

        for step in 1..=PROGRESS_STEPS {
            let position = duration * f64::from(step) / f64::from(PROGRESS_STEPS);
            if let Ok(mut state) = self.state.lock() {
                state.position = position;
            }
            controller.set_progress(ProgressUpdate::seconds(position));
        }

        let played = PlayedTrack {
            track,
            kind,
            duration_seconds: duration,
            from_radio: controller.is_radio_active(),
        };
        controller.on_media_ended();
        Some(played)
    }

    fn load(&self, duration: f64) {
        if let Ok(mut state) = self.state.lock() {
            state.position = 0.0;
            state.duration = duration;
        }
    }
}
