use analytics::AnalyticsError;
use api_client::error::ApiError;
use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    #[error("Instrument not found: {0}")]
    InstrumentNotFound(String),

    #[error("Benchmark not found: {0}")]
    BenchmarkNotFound(String),

    #[error("Market data source unavailable: {0}")]
    DataSourceUnavailable(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl EngineError {
    /// A single line suitable for showing to the person who made the request.
    pub fn user_message(&self) -> String {
        match self {
            EngineError::InvalidSymbol(input) => format!(
                "'{}' is not a valid ticker symbol. Use 1 to 5 letters, for example AAPL or BRK.B.",
                input
            ),
            EngineError::InstrumentNotFound(_) => "No market data was found for that symbol. \
                 Check that it is a listed, actively traded instrument."
                .to_string(),
            EngineError::BenchmarkNotFound(benchmark) => format!(
                "No market data was found for the benchmark {}. Choose another benchmark symbol.",
                benchmark
            ),
            EngineError::DataSourceUnavailable(_) => {
                "The market data provider could not be reached. Please try again later.".to_string()
            }
            EngineError::Configuration(detail) => {
                format!("The application is misconfigured: {}", detail)
            }
        }
    }
}

impl From<ApiError> for EngineError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::InvalidSymbol(s) => EngineError::InvalidSymbol(s),
            ApiError::InstrumentNotFound(s) => EngineError::InstrumentNotFound(s),
            ApiError::DataSourceUnavailable(s) => EngineError::DataSourceUnavailable(s),
        }
    }
}

impl From<CoreError> for EngineError {
    fn from(e: CoreError) -> Self {
        ApiError::from(e).into()
    }
}

impl From<AnalyticsError> for EngineError {
    fn from(e: AnalyticsError) -> Self {
        EngineError::Configuration(e.to_string())
    }
}
