use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Analytics engine received invalid parameters: {0}")]
    InvalidParameters(String),
}
