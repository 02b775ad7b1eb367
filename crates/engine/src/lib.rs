//! # Tickerlens Engine
//!
//! Wires the data source, cache, analytics and summarizer together into a
//! single request: fetch, enrich, compare against the benchmark, analyze and
//! describe one instrument.

use crate::error::EngineError;
use analytics::{
    BenchmarkComparison, EnrichedHistory, IndicatorEngine, PerformanceAnalyzer, PerformanceReport,
};
use api_client::{CachedSource, HistoryCache, MarketDataSource};
use configuration::Config;
use core_types::{InstrumentMetadata, Interval, Symbol};
use serde::Serialize;
use std::sync::Arc;
use summarizer::Summarizer;
use tracing::Instrument;
use uuid::Uuid;

pub mod comparator;
pub mod error;

pub use comparator::BenchmarkComparator;

/// Everything produced for one request. Read-only input to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub request_id: Uuid,
    pub interval: Interval,
    pub metadata: InstrumentMetadata,
    pub summary: String,
    pub history: EnrichedHistory,
    pub performance: PerformanceReport,
    pub benchmark: BenchmarkComparison,
}

/// The request-scoped orchestrator.
///
/// Holds no per-request state; the only thing shared between runs is the
/// `HistoryCache` behind the data source.
pub struct AnalysisPipeline {
    source: Arc<dyn MarketDataSource>,
    cache: HistoryCache,
    summarizer: Arc<dyn Summarizer>,
    indicators: IndicatorEngine,
    analyzer: PerformanceAnalyzer,
    comparator: BenchmarkComparator,
}

impl AnalysisPipeline {
    /// Creates a new pipeline. Every fetch, including the benchmark's, goes
    /// through `cache` before reaching `source`.
    pub fn new(
        source: Arc<dyn MarketDataSource>,
        cache: HistoryCache,
        summarizer: Arc<dyn Summarizer>,
        config: &Config,
    ) -> Result<Self, EngineError> {
        let source: Arc<dyn MarketDataSource> = Arc::new(CachedSource::new(source, cache.clone()));
        let indicators = IndicatorEngine::new(config.indicators.clone())?;
        let analyzer = PerformanceAnalyzer::new(&config.analytics);
        let comparator = BenchmarkComparator::new(source.clone(), config.benchmark.symbol.clone());

        Ok(Self {
            source,
            cache,
            summarizer,
            indicators,
            analyzer,
            comparator,
        })
    }

    pub fn cache(&self) -> &HistoryCache {
        &self.cache
    }

    /// Runs one analysis of `symbol` over `interval`.
    ///
    /// The symbol is validated before any I/O. Trailing windows are measured
    /// back from the last observed date.
    pub async fn run(
        &self,
        symbol: &str,
        interval: Interval,
    ) -> Result<AnalysisReport, EngineError> {
        let symbol = Symbol::parse(symbol)?;
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("analysis", %request_id, %symbol, %interval);

        let result = self
            .execute(request_id, &symbol, interval)
            .instrument(span.clone())
            .await;

        if let Err(e) = &result {
            span.in_scope(|| tracing::error!(error = %e, "analysis failed"));
        }
        result
    }

    async fn execute(
        &self,
        request_id: Uuid,
        symbol: &Symbol,
        interval: Interval,
    ) -> Result<AnalysisReport, EngineError> {
        tracing::info!("analysis started");

        let fetched = self.source.fetch(symbol, interval).await?;
        let as_of = fetched
            .history
            .last()
            .map(|p| p.date)
            .ok_or_else(|| {
                EngineError::InstrumentNotFound(format!("{} has no price history", symbol))
            })?;

        let history = self.indicators.enrich(&fetched.history);
        let benchmark = self.comparator.compare(&history).await?;
        let performance = self.analyzer.analyze(history.history(), as_of);
        let summary = self.summarizer.summarize(&fetched.metadata).await;

        tracing::info!(%as_of, observations = history.len(), "analysis complete");

        Ok(AnalysisReport {
            request_id,
            interval,
            metadata: fetched.metadata,
            summary,
            history,
            performance,
            benchmark,
        })
    }
}
