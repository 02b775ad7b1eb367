use crate::error::ApiError;
use async_trait::async_trait;
use core_types::{FetchedHistory, Interval, Symbol};

pub mod cache;
pub mod error;
pub mod responses;
pub mod yahoo;

// --- Public API ---
pub use cache::{CachedSource, HistoryCache};
pub use yahoo::YahooClient;

/// The abstract interface to a market data provider.
///
/// This trait is the only seam through which the rest of the system touches the
/// network, allowing the underlying implementation (live or stub) to be swapped
/// out. Implementations fetch once per call and never retry on their own.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetches the daily price history and descriptive metadata of `symbol`.
    ///
    /// # Errors
    ///
    /// * `ApiError::InstrumentNotFound` - the provider has no tradable quote for the symbol.
    /// * `ApiError::DataSourceUnavailable` - transport or provider-side failure.
    async fn fetch(&self, symbol: &Symbol, interval: Interval)
    -> Result<FetchedHistory, ApiError>;
}
