use crate::error::EngineError;
use analytics::{BenchmarkComparison, EnrichedHistory, align};
use api_client::MarketDataSource;
use api_client::error::ApiError;
use core_types::Symbol;
use std::sync::Arc;

/// Fetches the benchmark over the instrument's interval and overlays the two series.
pub struct BenchmarkComparator {
    source: Arc<dyn MarketDataSource>,
    benchmark: Symbol,
}

impl BenchmarkComparator {
    /// `source` should be the same cached source the instrument came from, so a
    /// benchmark already fetched for an earlier request is not fetched again.
    pub fn new(source: Arc<dyn MarketDataSource>, benchmark: Symbol) -> Self {
        Self { source, benchmark }
    }

    pub fn benchmark(&self) -> &Symbol {
        &self.benchmark
    }

    pub async fn compare(
        &self,
        instrument: &EnrichedHistory,
    ) -> Result<BenchmarkComparison, EngineError> {
        let interval = instrument.history().interval();
        let fetched = self
            .source
            .fetch(&self.benchmark, interval)
            .await
            .map_err(|e| match e {
                // The user's own symbol was fine; name the benchmark instead.
                ApiError::InstrumentNotFound(_) | ApiError::InvalidSymbol(_) => {
                    EngineError::BenchmarkNotFound(self.benchmark.to_string())
                }
                other => other.into(),
            })?;

        let comparison = align(instrument, &fetched.history);
        tracing::debug!(
            benchmark = %self.benchmark,
            instrument_points = comparison.instrument.len(),
            benchmark_points = comparison.benchmark.len(),
            "aligned benchmark"
        );
        Ok(comparison)
    }
}
