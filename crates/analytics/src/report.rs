use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Return over one trailing window. `None` when the window holds no observations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceRow {
    pub label: &'static str,
    pub return_pct: Option<Decimal>,
}

/// Compound annual growth rate over a number of years, as a fraction (0.25 = 25%).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CagrRow {
    pub years: u32,
    pub rate: Option<f64>,
}

/// Summary statistics of one price history.
///
/// Every metric is computed independently, so an undetermined value in one
/// slot says nothing about the others.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceReport {
    /// The date every trailing window is measured back from.
    pub as_of: NaiveDate,
    pub returns: Vec<PerformanceRow>,
    pub cagr: Vec<CagrRow>,
    /// Annualized standard deviation of daily returns, as a fraction.
    pub annualized_volatility: Option<f64>,
}
