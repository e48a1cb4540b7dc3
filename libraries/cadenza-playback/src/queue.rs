//! Play queue and index resolution
//!
//! The normal queue is a plain ordered list; the position of the current
//! track is looked up by identity on every transition instead of being
//! cached, so replacing the queue can never leave a stale cursor behind.
//! The same resolution rules serve the radio station queue.

use crate::shuffle::random_index_excluding;
use cadenza_core::Track;
use rand::Rng;

/// Ordered "up next" list for normal (non-radio) playback
#[derive(Debug, Clone, Default)]
pub struct PlayQueue {
    tracks: Vec<Track>,
}

impl PlayQueue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self { tracks: Vec::new() }
    }

    /// Replace the whole queue
    pub fn replace(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
    }

    /// Append track at the end
    pub fn push(&mut self, track: Track) {
        self.tracks.push(track);
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }
}

/// How a "next" lookup treats the end of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AtEnd {
    Stop,
    Wrap,
}

/// Resolve the index that follows `current` in a list of `len` tracks
///
/// With shuffle on and more than one track, any index other than `current`
/// is picked uniformly. Otherwise the successor is `current + 1` (or `0` when
/// the current track is not in the list), wrapping only when asked to.
pub(crate) fn next_index<R: Rng + ?Sized>(
    len: usize,
    current: Option<usize>,
    shuffle: bool,
    at_end: AtEnd,
    rng: &mut R,
) -> Option<usize> {
    if len == 0 {
        return None;
    }

    if shuffle && len > 1 {
        return random_index_excluding(len, current, rng);
    }

    let next = current.map_or(0, |index| index + 1);
    if next < len {
        Some(next)
    } else if at_end == AtEnd::Wrap {
        Some(0)
    } else {
        None
    }
}

/// Resolve the index before `current`; there is no wraparound on "previous"
pub(crate) fn previous_index(current: Option<usize>) -> Option<usize> {
    current.filter(|index| *index > 0).map(|index| index - 1)
}
