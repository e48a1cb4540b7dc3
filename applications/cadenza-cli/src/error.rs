/// CLI error types
use cadenza_catalog_client::CatalogClientError;
use cadenza_core::CadenzaError;
use cadenza_playback::PlaybackError;
use cadenza_radio::RadioError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Playback error: {0}")]
    Playback(#[from] PlaybackError),

    #[error("Radio error: {0}")]
    Radio(#[from] RadioError),

    #[error("Catalog client error: {0}")]
    Catalog(#[from] CatalogClientError),

    #[error(transparent)]
    Core(#[from] CadenzaError),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}
