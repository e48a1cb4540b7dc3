//! Media element selection
//!
//! The host mounts a different concrete element depending on where a track's
//! media lives. The playback engine only needs to know which kind it is.

use serde::{Deserialize, Serialize};
use url::Url;

const EMBEDDED_VIDEO_HOSTS: [&str; 2] = ["youtube.com", "youtu.be"];

/// Kind of media element a URL needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    /// Plain audio resource (audio tag, native decoder)
    Audio,
    /// Embedded video widget that exposes its own player API
    EmbeddedVideo,
}

impl MediaKind {
    /// Classify a media URL
    ///
    /// Unparseable URLs (including relative paths) are treated as audio.
    pub fn detect(url: &str) -> Self {
        let Ok(parsed) = Url::parse(url) else {
            return Self::Audio;
        };
        match parsed.host_str() {
            Some(host) if EMBEDDED_VIDEO_HOSTS.iter().any(|known| host.contains(known)) => {
                Self::EmbeddedVideo
            }
            _ => Self::Audio,
        }
    }
}
