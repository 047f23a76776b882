use reqwest::StatusCode;
use thiserror::Error;

/// Result alias used across the catalog client
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Catalog transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Catalog API returned {status} for {url}")]
    UnexpectedStatus { url: String, status: StatusCode },

    #[error("Catalog response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Catalog API unexpected response: {0}")]
    MalformedResponse(String),

    #[error("Artist {0} not found in catalog")]
    ArtistNotFound(String),

    #[error("Artist {artist} has no field {field:?}")]
    MissingField { artist: String, field: String },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}

impl From<std::num::ParseIntError> for Error {
    fn from(err: std::num::ParseIntError) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}
