//! Recently played list
//!
//! Most recent first, bounded, with at most one entry per track. Tracks
//! without an id are keyed by their title, artist and album together.

use cadenza_core::Track;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct RecentTracks {
    tracks: VecDeque<Track>,
    limit: usize,
}

impl RecentTracks {
    pub fn new(limit: usize) -> Self {
        Self {
            tracks: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Move `track` to the front, dropping an older entry for it
    pub fn record(&mut self, track: &Track) {
        if self.limit == 0 {
            return;
        }
        let key = recent_key(track);
        self.tracks.retain(|existing| recent_key(existing) != key);
        self.tracks.push_front(track.clone());
        self.tracks.truncate(self.limit);
    }

    /// Iterate most recent first
    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

}

impl Default for RecentTracks {
    fn default() -> Self {
        Self::new(10)
    }
}

fn recent_key(track: &Track) -> String {
    match &track.id {
        Some(id) => id.to_string(),
        None => format!(
            "{}-{}-{}",
            track.title,
            track.artist,
            track.album.as_deref().unwrap_or_default()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(recent: &RecentTracks) -> Vec<&str> {
        recent.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn most_recent_comes_first() {
        let mut recent = RecentTracks::new(5);
        recent.record(&Track::new("1", "One", "A"));
        recent.record(&Track::new("2", "Two", "A"));

        assert_eq!(titles(&recent), vec!["Two", "One"]);
    }

    #[test]
    fn replaying_moves_track_to_front() {
        let mut recent = RecentTracks::new(5);
        recent.record(&Track::new("1", "One", "A"));
        recent.record(&Track::new("2", "Two", "A"));
        recent.record(&Track::new("1", "One", "A"));

        assert_eq!(titles(&recent), vec!["One", "Two"]);
    }

    #[test]
    fn list_is_bounded() {
        let mut recent = RecentTracks::new(2);
        for i in 1..=3 {
            recent.record(&Track::new(i.to_string(), format!("T{}", i), "A"));
        }
        assert_eq!(titles(&recent), vec!["T3", "T2"]);
    }

    #[test]
    fn tracks_without_id_use_composite_key() {
        let mut recent = RecentTracks::new(5);
        recent.record(&Track::untitled("Song", "A").with_album("X"));
        recent.record(&Track::untitled("Song", "A").with_album("Y"));
        recent.record(&Track::untitled("Song", "A").with_album("X"));

        assert_eq!(recent.iter().count(), 2);
        assert_eq!(recent.iter().next().unwrap().album.as_deref(), Some("X"));
    }
}
