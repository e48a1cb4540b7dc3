//! Cadenza - Playback Management
//!
//! Platform-agnostic playback state machine for Cadenza.
//!
//! This crate provides:
//! - Current track and transport state (playing/paused, progress, duration)
//! - Normal queue with sequential, shuffled and looping next-track resolution
//! - Bounded playback history for "previous"
//! - Radio mode: a separately ranked station that governs next/previous
//! - Volume control (0.0-1.0, mute/unmute)
//! - Seek passthrough to whatever media element is mounted
//! - Recently played list and typed event observers
//!
//! # Architecture
//!
//! `cadenza-playback` never touches audio or the network. The host mounts a
//! media element, binds its seek functions with `set_controller` and feeds
//! progress, duration and "ended" callbacks back into the controller. Radio
//! candidates come from `cadenza-radio`.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use cadenza_core::Track;
//! use cadenza_playback::{PlaybackConfig, PlaybackController};
//!
//! let a = Track::new("1", "Intro", "Band");
//! let b = Track::new("2", "Verse", "Band");
//!
//! let mut controller = PlaybackController::new(PlaybackConfig::default());
//! controller.play(a.clone(), Some(vec![a, b]));
//!
//! assert!(controller.play_next());
//! assert_eq!(controller.current().unwrap().title, "Verse");
//!
//! assert!(controller.play_previous());
//! assert_eq!(controller.current().unwrap().title, "Intro");
//! ```
//!
//! # Example: Binding a media element
//!
//! ```rust
//! use cadenza_playback::{PlaybackController, ProgressUpdate, SeekBinding};
//!
//! let mut controller = PlaybackController::default();
//! controller.set_controller(SeekBinding::new().on_seconds(|seconds| {
//!     println!("media element seeks to {seconds}");
//! }));
//!
//! controller.set_duration(120.0);
//! controller.set_progress(ProgressUpdate::seconds(30.0));
//! assert_eq!(controller.played_fraction(), 0.25);
//! ```

mod controller;
mod error;
mod events;
mod history;
mod progress;
mod queue;
mod recent;
mod seek;
mod shuffle;
pub mod types;
mod volume;

// Public exports
pub use controller::PlaybackController;
pub use error::{PlaybackError, Result};
pub use events::{PlaybackEvent, PlaybackObserver, SubscriptionId};
pub use progress::format_clock;
pub use seek::SeekBinding;
pub use types::{LoopMode, PlaybackConfig, PlaybackSnapshot, ProgressUpdate, RadioSession};
