/// ID types for Cadenza entities
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Track identifier
///
/// Backends hand out either numeric or string ids; both are stored as text so
/// identity comparisons never depend on the wire representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    /// Create a new track ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TrackId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TrackId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for TrackId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTrackId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl<'de> Deserialize<'de> for TrackId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawTrackId::deserialize(deserializer)? {
            RawTrackId::Text(text) => TrackId(text),
            RawTrackId::Signed(n) => TrackId(n.to_string()),
            RawTrackId::Unsigned(n) => TrackId(n.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_id_from_string() {
        let id = TrackId::new("track-123");
        assert_eq!(id.as_str(), "track-123");
    }

    #[test]
    fn track_id_display() {
        let id = TrackId::from(42u64);
        assert_eq!(format!("{}", id), "42");
    }

    #[test]
    fn numeric_and_string_ids_deserialize_to_same_value() {
        let numeric: TrackId = serde_json::from_str("17").unwrap();
        let text: TrackId = serde_json::from_str("\"17\"").unwrap();
        assert_eq!(numeric, text);
    }

    #[test]
    fn track_id_serializes_as_string() {
        let json = serde_json::to_string(&TrackId::from(7u64)).unwrap();
        assert_eq!(json, "\"7\"");
    }
}
