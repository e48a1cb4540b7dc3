/// Core error types for Cadenza
use thiserror::Error;

/// Result type alias using `CadenzaError`
pub type Result<T> = std::result::Result<T, CadenzaError>;

/// Core error type for Cadenza
///
/// Only failures cross this type. "Nothing to play" and "track not found"
/// are modelled as empty results, never as errors.
#[derive(Error, Debug)]
pub enum CadenzaError {
    /// The catalog backend could not be reached or timed out
    #[error("Network error: {0}")]
    Network(String),

    /// The catalog answered, but with a failure or an unusable payload
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// The adapter does not implement the requested query
    #[error("Unsupported catalog operation: {0}")]
    Unsupported(&'static str),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CadenzaError {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
