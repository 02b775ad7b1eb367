use crate::indicators::{EnrichedHistory, normalized_closes};
use chrono::NaiveDate;
use core_types::{PriceHistory, PricePoint, Symbol};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedPoint {
    pub date: NaiveDate,
    /// Close relative to the series' first close, which maps to 100.
    pub value: f64,
}

/// An instrument and its benchmark over the instrument's observed range, each
/// rebased to 100 at its own first observation.
///
/// The two series keep their own trading calendars; a date present in one
/// may be absent from the other.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkComparison {
    pub symbol: Symbol,
    pub benchmark_symbol: Symbol,
    pub instrument: Vec<NormalizedPoint>,
    pub benchmark: Vec<NormalizedPoint>,
}

impl BenchmarkComparison {
    /// Last normalized value of each series, in `(instrument, benchmark)` order.
    pub fn last_values(&self) -> (Option<f64>, Option<f64>) {
        (
            self.instrument.last().map(|p| p.value),
            self.benchmark.last().map(|p| p.value),
        )
    }

    /// Difference between the last normalized values, in index points.
    pub fn relative_performance(&self) -> Option<f64> {
        match self.last_values() {
            (Some(instrument), Some(benchmark)) => Some(instrument - benchmark),
            _ => None,
        }
    }
}

/// Restricts `benchmark` to `[first, last)` of the instrument's dates and
/// rebases both series.
pub fn align(instrument: &EnrichedHistory, benchmark: &PriceHistory) -> BenchmarkComparison {
    let history = instrument.history();

    let benchmark_points = match history.date_range() {
        Some((start, end)) => benchmark.between(start, end).points().to_vec(),
        None => Vec::new(),
    };

    let instrument_series = instrument
        .rows()
        .iter()
        .map(|row| NormalizedPoint {
            date: row.date,
            value: row.normalized_close,
        })
        .collect();

    BenchmarkComparison {
        symbol: history.symbol().clone(),
        benchmark_symbol: benchmark.symbol().clone(),
        instrument: instrument_series,
        benchmark: rebase(&benchmark_points),
    }
}

fn rebase(points: &[PricePoint]) -> Vec<NormalizedPoint> {
    points
        .iter()
        .zip(normalized_closes(points))
        .map(|(p, value)| NormalizedPoint { date: p.date, value })
        .collect()
}
