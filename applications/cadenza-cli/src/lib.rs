//! Cadenza CLI Library
//!
//! Command-line host for the playback engine: loads configuration, opens a
//! catalog and drives the controller through a simulated media element.
//!
//! This library exposes the command implementations for testing purposes.

pub mod commands;
pub mod config;
pub mod error;
pub mod player;

// Re-export commonly used types for convenience
pub use config::CliConfig;
pub use error::{CliError, Result};
pub use player::{PlayedTrack, SimulatedElement};
