use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Invalid symbol '{0}'")]
    InvalidSymbol(String),

    #[error("Instrument not found: {0}")]
    InstrumentNotFound(String),

    #[error("Market data source unavailable: {0}")]
    DataSourceUnavailable(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::DataSourceUnavailable(e.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidSymbol(s) => ApiError::InvalidSymbol(s),
            // Anything else means the provider handed back data we cannot trust.
            other => ApiError::DataSourceUnavailable(other.to_string()),
        }
    }
}
