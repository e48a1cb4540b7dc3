//! Track identity resolution
//!
//! Tracks coming from different adapters do not always carry a stable id, so
//! identity falls back from the id to the title. Every place that compares
//! tracks (queue lookup, history, radio de-duplication) goes through here.

use crate::types::{Track, TrackId};

/// What a track can be recognised by
///
/// The id decides when both sides have one; otherwise the title does.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackIdentity {
    id: Option<TrackId>,
    title: Option<String>,
}

impl TrackIdentity {
    pub fn id(&self) -> Option<&TrackId> {
        self.id.as_ref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Whether both identities refer to the same item
    pub fn matches(&self, other: &TrackIdentity) -> bool {
        match (&self.id, &other.id) {
            (Some(left), Some(right)) => left == right,
            _ => match (&self.title, &other.title) {
                (Some(left), Some(right)) => left == right,
                _ => false,
            },
        }
    }
}

/// Resolve the identity of a track
///
/// Returns `None` when the track has neither an id nor a non-empty title.
/// Such a track never matches anything, including itself.
pub fn track_identity(track: &Track) -> Option<TrackIdentity> {
    let title = Some(track.title.as_str())
        .filter(|title| !title.is_empty())
        .map(str::to_string);
    if track.id.is_none() && title.is_none() {
        return None;
    }
    Some(TrackIdentity {
        id: track.id.clone(),
        title,
    })
}

/// Whether two tracks refer to the same item
///
/// Every comparison of tracks goes through [`track_identity`].
pub fn same_track(a: &Track, b: &Track) -> bool {
    match (track_identity(a), track_identity(b)) {
        (Some(left), Some(right)) => left.matches(&right),
        _ => false,
    }
}

/// Index of the first track in `tracks` identical to `target`
pub fn position_of(tracks: &[Track], target: &Track) -> Option<usize> {
    tracks.iter().position(|track| same_track(track, target))
}
