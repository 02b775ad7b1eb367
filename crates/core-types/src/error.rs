use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid symbol '{0}': expected 1-5 uppercase letters or dots")]
    InvalidSymbol(String),

    #[error("Unknown interval '{0}': expected one of 6mo, 1y, 5y, max")]
    InvalidInterval(String),

    #[error("Price history violates its invariants: {0}")]
    InvalidHistory(String),
}
