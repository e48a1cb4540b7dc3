//! Playback Events
//!
//! Typed notifications for whatever drives the UI. Observers are called
//! synchronously, in subscription order, right after the state transition
//! that produced the event has been applied. Events are also buffered so a
//! polling host can pick them up with `drain_events`.

use crate::types::LoopMode;
use cadenza_core::Track;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Buffered events kept for polling hosts before the oldest are dropped
const MAX_PENDING_EVENTS: usize = 256;

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlaybackEvent {
    /// Transport started or stopped
    StateChanged {
        is_playing: bool,
    },

    /// A different track became current
    TrackChanged {
        track: Track,
        /// Track that was current before the transition (if any)
        previous: Option<Track>,
    },

    /// Current track was rewound to the start (repeat-one)
    TrackRestarted {
        track: Track,
    },

    ProgressUpdated {
        played_seconds: f64,
        played_fraction: f64,
    },

    DurationChanged {
        duration_seconds: f64,
    },

    /// Normal queue replaced or extended
    QueueChanged {
        length: usize,
    },

    /// Shuffle flag or loop mode changed
    ModeChanged {
        shuffle: bool,
        loop_mode: LoopMode,
    },

    VolumeChanged {
        volume: f32,
        muted: bool,
    },

    RadioStarted {
        seed: Track,
        /// Number of tracks in the station
        length: usize,
    },

    RadioEnded,
}

/// Receiver of playback events
pub trait PlaybackObserver: Send {
    fn on_event(&mut self, event: &PlaybackEvent);
}

impl<F> PlaybackObserver for F
where
    F: FnMut(&PlaybackEvent) + Send,
{
    fn on_event(&mut self, event: &PlaybackEvent) {
        self(event);
    }
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Observer registry plus the pending-event buffer
#[derive(Default)]
pub(crate) struct EventBus {
    observers: Vec<(SubscriptionId, Box<dyn PlaybackObserver>)>,
    pending: VecDeque<PlaybackEvent>,
    next_id: u64,
}

impl EventBus {
    pub(crate) fn subscribe(&mut self, observer: Box<dyn PlaybackObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Returns `false` if the subscription was not found
    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub(crate) fn emit(&mut self, event: PlaybackEvent) {
        for (_, observer) in &mut self.observers {
            observer.on_event(&event);
        }

        if self.pending.len() >= MAX_PENDING_EVENTS {
            self.pending.pop_front();
        }
        self.pending.push_back(event);
    }

    pub(crate) fn drain(&mut self) -> Vec<PlaybackEvent> {
        self.pending.drain(..).collect()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("observers", &self.observers.len())
            .field("pending", &self.pending.len())
            .finish()
    }
}
