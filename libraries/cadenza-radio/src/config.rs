//! Radio configuration

use crate::error::{RadioError, Result};
use serde::{Deserialize, Serialize};

/// Default number of similar tracks per request
pub const DEFAULT_LIMIT: usize = 20;

/// Default number of tracks requested for a radio station
pub const DEFAULT_STATION_SIZE: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadioConfig {
    /// Tracks per "similar songs" request (default: 20)
    pub default_limit: usize,

    /// Tracks requested when starting a station (default: 50)
    pub station_size: usize,
}

impl RadioConfig {
    pub fn validate(&self) -> Result<()> {
        if self.default_limit == 0 {
            return Err(RadioError::InvalidConfig(
                "default_limit must be at least 1".to_string(),
            ));
        }
        if self.station_size == 0 {
            return Err(RadioError::InvalidConfig(
                "station_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RadioConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            station_size: DEFAULT_STATION_SIZE,
        }
    }
}
