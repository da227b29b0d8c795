use thiserror::Error;

/// Errors surfaced by the endpoint.
///
/// Only configuration loading and URL parsing can fail; every other
/// operation accepts plain values and always succeeds.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid network url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("failed to load configuration: {0}")]
    Config(#[from] figment::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
