use crate::as_f64;
use crate::periods::{CAGR_YEARS, RETURN_WINDOWS, WindowStart, window};
use crate::report::{CagrRow, PerformanceReport, PerformanceRow};
use chrono::NaiveDate;
use configuration::AnalyticsParams;
use core_types::{PriceHistory, PricePoint};
use rust_decimal::Decimal;
use statrs::statistics::Statistics;

/// Compound annual growth rate, `(end / start)^(1 / years) - 1`.
///
/// Undetermined when `start` is not positive, `years` is not positive, or the
/// result is not a finite number.
pub fn cagr(start: Decimal, end: Decimal, years: f64) -> Option<f64> {
    if start <= Decimal::ZERO || !(years > 0.0) {
        return None;
    }
    let ratio = as_f64(end) / as_f64(start);
    let rate = ratio.powf(1.0 / years) - 1.0;
    rate.is_finite().then_some(rate)
}

/// Produces the returns, CAGR and volatility of a price history.
#[derive(Debug, Clone)]
pub struct PerformanceAnalyzer {
    trading_days_per_year: u32,
}

impl PerformanceAnalyzer {
    pub fn new(params: &AnalyticsParams) -> Self {
        Self {
            trading_days_per_year: params.trading_days_per_year,
        }
    }

    /// Percentage change between the first and last close of each trailing window.
    pub fn windowed_returns(
        &self,
        history: &PriceHistory,
        as_of: NaiveDate,
    ) -> Vec<PerformanceRow> {
        RETURN_WINDOWS
            .iter()
            .map(|w| PerformanceRow {
                label: w.label,
                return_pct: percent_change(window(history, as_of, w.start)),
            })
            .collect()
    }

    pub fn cagr_table(&self, history: &PriceHistory, as_of: NaiveDate) -> Vec<CagrRow> {
        CAGR_YEARS
            .iter()
            .map(|&years| {
                let points = window(history, as_of, WindowStart::Years(years));
                let rate = match (points.first(), points.last()) {
                    (Some(first), Some(last)) => cagr(first.close, last.close, f64::from(years)),
                    _ => None,
                };
                CagrRow { years, rate }
            })
            .collect()
    }

    /// Sample standard deviation of period-over-period close changes, scaled
    /// by the square root of the trading days in a year.
    pub fn annualized_volatility(&self, history: &PriceHistory) -> Option<f64> {
        let changes: Vec<f64> = history
            .points()
            .windows(2)
            .map(|pair| as_f64(pair[1].close) / as_f64(pair[0].close) - 1.0)
            .collect();

        let std_dev = match changes.len() {
            0 => return None,
            // A single change has no dispersion.
            1 => 0.0,
            _ => changes.iter().std_dev(),
        };
        let annualized = std_dev * f64::from(self.trading_days_per_year).sqrt();
        annualized.is_finite().then_some(annualized)
    }

    pub fn analyze(&self, history: &PriceHistory, as_of: NaiveDate) -> PerformanceReport {
        let report = PerformanceReport {
            as_of,
            returns: self.windowed_returns(history, as_of),
            cagr: self.cagr_table(history, as_of),
            annualized_volatility: self.annualized_volatility(history),
        };
        tracing::debug!(
            symbol = %history.symbol(),
            %as_of,
            volatility = ?report.annualized_volatility,
            "computed performance report"
        );
        report
    }
}

fn percent_change(points: &[PricePoint]) -> Option<Decimal> {
    let (first, last) = (points.first()?, points.last()?);
    let change = (last.close - first.close).checked_div(first.close)?;
    Some(change * Decimal::ONE_HUNDRED)
}
