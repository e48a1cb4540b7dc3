//! Error types for the catalog client.

use cadenza_core::CadenzaError;
use thiserror::Error;

/// Errors that can occur when talking to the catalog backend.
#[derive(Error, Debug)]
pub enum CatalogClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Invalid catalog base URL
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

/// Result type for catalog client operations.
pub type Result<T> = std::result::Result<T, CatalogClientError>;

impl From<CatalogClientError> for CadenzaError {
    fn from(err: CatalogClientError) -> Self {
        match err {
            CatalogClientError::Request(_) | CatalogClientError::ServerUnreachable(_) => {
                CadenzaError::network(err.to_string())
            }
            CatalogClientError::ServerError { .. } | CatalogClientError::ParseError(_) => {
                CadenzaError::catalog(err.to_string())
            }
            CatalogClientError::InvalidUrl(_) => CadenzaError::invalid_input(err.to_string()),
        }
    }
}
