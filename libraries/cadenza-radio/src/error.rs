/// Radio error types
use cadenza_core::CadenzaError;
use thiserror::Error;

/// Result type for radio operations
pub type Result<T> = std::result::Result<T, RadioError>;

/// Radio errors
///
/// A seed title missing from the catalog is not an error: it yields an
/// empty station.
#[derive(Error, Debug)]
pub enum RadioError {
    /// Both the similar-track query and the full-catalog fallback failed
    #[error("Radio unavailable: similar-track query failed ({remote}), catalog fallback failed: {source}")]
    Unavailable {
        /// Why the catalog's own similar-track query failed
        remote: CadenzaError,
        /// Why fetching the full catalog failed
        source: CadenzaError,
    },

    /// Invalid configuration value
    #[error("Invalid radio configuration: {0}")]
    InvalidConfig(String),
}
