use crate::as_f64;
use crate::error::AnalyticsError;
use chrono::NaiveDate;
use configuration::IndicatorParams;
use core_types::{PriceHistory, PricePoint};
use serde::Serialize;
use statrs::statistics::Statistics;
use ta::indicators::SimpleMovingAverage as Sma;
use ta::{Next, Reset};

/// Derived columns for one observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorRow {
    pub date: NaiveDate,
    /// Trailing mean of close; `None` until the window has filled.
    pub moving_average: Option<f64>,
    pub upper_band: Option<f64>,
    pub lower_band: Option<f64>,
    /// Close relative to the first close of the history, which maps to 100.
    pub normalized_close: f64,
}

/// A raw price history together with the columns derived from it.
///
/// The raw history is kept untouched so the derivation can always be re-run
/// from it and yield the same rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedHistory {
    history: PriceHistory,
    rows: Vec<IndicatorRow>,
}

impl EnrichedHistory {
    pub fn history(&self) -> &PriceHistory {
        &self.history
    }

    pub fn rows(&self) -> &[IndicatorRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Observations paired with their derived columns.
    pub fn iter(&self) -> impl Iterator<Item = (&PricePoint, &IndicatorRow)> {
        self.history.points().iter().zip(self.rows.iter())
    }
}

/// Computes the moving average, Bollinger bands and normalized close of a history.
#[derive(Debug, Clone)]
pub struct IndicatorEngine {
    params: IndicatorParams,
    sma: Sma,
}

impl IndicatorEngine {
    /// Creates a new `IndicatorEngine`, validating the window and band width.
    pub fn new(params: IndicatorParams) -> Result<Self, AnalyticsError> {
        if !(params.band_width > 0.0) {
            return Err(AnalyticsError::InvalidParameters(
                "Band width must be positive".to_string(),
            ));
        }
        let sma = Sma::new(params.window).map_err(|e| {
            AnalyticsError::InvalidParameters(format!(
                "Failed to initialize moving average: {:?}",
                e
            ))
        })?;

        Ok(Self { params, sma })
    }

    /// Returns a new enriched history; `history` itself is left as it was.
    pub fn enrich(&self, history: &PriceHistory) -> EnrichedHistory {
        let window = self.params.window;
        let closes: Vec<f64> = history.points().iter().map(|p| as_f64(p.close)).collect();
        let normalized = normalized_closes(history.points());

        let mut sma = self.sma.clone();
        sma.reset();

        let rows = history
            .points()
            .iter()
            .enumerate()
            .map(|(i, point)| {
                // The indicator must see every close, including the warm-up ones.
                let mean = sma.next(closes[i]);

                let (moving_average, upper_band, lower_band) = if i + 1 >= window {
                    let std_dev = closes[i + 1 - window..=i].iter().std_dev();
                    if std_dev.is_finite() {
                        let half_width = self.params.band_width * std_dev;
                        (Some(mean), Some(mean + half_width), Some(mean - half_width))
                    } else {
                        (Some(mean), None, None)
                    }
                } else {
                    (None, None, None)
                };

                IndicatorRow {
                    date: point.date,
                    moving_average,
                    upper_band,
                    lower_band,
                    normalized_close: normalized[i],
                }
            })
            .collect();

        tracing::debug!(
            symbol = %history.symbol(),
            rows = history.len(),
            window,
            "enriched history"
        );

        EnrichedHistory {
            history: history.clone(),
            rows,
        }
    }
}

/// `close[i] / close[0] * 100`; empty when `points` is empty.
///
/// Closes are strictly positive by construction of `PriceHistory`, so the
/// anchor is always a valid divisor.
pub fn normalized_closes(points: &[PricePoint]) -> Vec<f64> {
    let Some(anchor) = points.first().map(|p| as_f64(p.close)) else {
        return Vec::new();
    };
    points
        .iter()
        .map(|p| as_f64(p.close) / anchor * 100.0)
        .collect()
}
