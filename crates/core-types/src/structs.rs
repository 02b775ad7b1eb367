use crate::enums::Interval;
use crate::error::CoreError;
use crate::symbol::Symbol;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A single daily OHLCV observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Calendar date in the exchange's local calendar, without time-of-day.
    pub date: NaiveDate,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: u64,
}

/// The raw daily price history of one symbol over one interval.
///
/// Construction validates that dates are strictly increasing and that every
/// price is strictly positive, so downstream ratio computations can divide by
/// any close without checking. Once built the history is never mutated; derived
/// columns live in separate, computed structures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceHistory {
    symbol: Symbol,
    interval: Interval,
    points: Vec<PricePoint>,
}

impl PriceHistory {
    pub fn new(
        symbol: Symbol,
        interval: Interval,
        points: Vec<PricePoint>,
    ) -> Result<Self, CoreError> {
        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(CoreError::InvalidHistory(format!(
                    "{}: date {} does not follow {}",
                    symbol, pair[1].date, pair[0].date
                )));
            }
        }

        if let Some(bad) = points.iter().find(|p| {
            p.open <= Decimal::ZERO
                || p.high <= Decimal::ZERO
                || p.low <= Decimal::ZERO
                || p.close <= Decimal::ZERO
        }) {
            return Err(CoreError::InvalidHistory(format!(
                "{}: non-positive price on {}",
                symbol, bad.date
            )));
        }

        Ok(Self {
            symbol,
            interval,
            points,
        })
    }

    pub fn empty(symbol: Symbol, interval: Interval) -> Self {
        Self {
            symbol,
            interval,
            points: Vec::new(),
        }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// The first and last observed dates, if any.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.first()?.date, self.last()?.date))
    }

    /// Observations dated on or after `start`.
    pub fn since(&self, start: NaiveDate) -> &[PricePoint] {
        let idx = self.points.partition_point(|p| p.date < start);
        &self.points[idx..]
    }

    /// A copy restricted to `start <= date < end`.
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> PriceHistory {
        let from = self.points.partition_point(|p| p.date < start);
        let to = self.points.partition_point(|p| p.date < end).max(from);
        Self {
            symbol: self.symbol.clone(),
            interval: self.interval,
            points: self.points[from..to].to_vec(),
        }
    }
}

/// Descriptive information about an instrument. Every field except the symbol
/// may be missing from the provider, and a missing field is not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentMetadata {
    pub symbol: Symbol,
    pub long_name: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub country: Option<String>,
    pub description: Option<String>,
    pub previous_close: Option<Decimal>,
    pub open: Option<Decimal>,
    pub current_price: Option<Decimal>,
    pub beta: Option<f64>,
}

impl InstrumentMetadata {
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            long_name: None,
            sector: None,
            industry: None,
            country: None,
            description: None,
            previous_close: None,
            open: None,
            current_price: None,
            beta: None,
        }
    }

    /// An instrument is tradable when the provider quotes a current market price.
    pub fn is_tradable(&self) -> bool {
        self.current_price.is_some()
    }
}

/// Renders an optional field, using "NA" when it is absent.
pub fn or_na<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "NA".to_string(), |v| v.to_string())
}

/// What a market data source returns for one (symbol, interval) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchedHistory {
    pub history: PriceHistory,
    pub metadata: InstrumentMetadata,
}
