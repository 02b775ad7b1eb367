//! The trailing windows reported for every instrument, as data.

use chrono::{Datelike, Months, NaiveDate};
use core_types::{PriceHistory, PricePoint};

/// How a window's first admissible date is derived from the as-of date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowStart {
    /// Calendar months back; the day clamps to the end of a shorter month.
    Months(u32),
    /// Calendar years back, with the same clamping (29 Feb -> 28 Feb).
    Years(u32),
    /// January 1 of the as-of year.
    YearToDate,
}

impl WindowStart {
    pub fn resolve(&self, as_of: NaiveDate) -> NaiveDate {
        let start = match *self {
            WindowStart::Months(n) => as_of.checked_sub_months(Months::new(n)),
            WindowStart::Years(n) => as_of.checked_sub_months(Months::new(n.saturating_mul(12))),
            WindowStart::YearToDate => NaiveDate::from_ymd_opt(as_of.year(), 1, 1),
        };
        // Only reachable for dates near the representable minimum.
        start.unwrap_or(NaiveDate::MIN)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailingWindow {
    pub label: &'static str,
    pub start: WindowStart,
}

/// Windows of the returns table, in display order.
pub const RETURN_WINDOWS: [TrailingWindow; 6] = [
    TrailingWindow {
        label: "1 month",
        start: WindowStart::Months(1),
    },
    TrailingWindow {
        label: "3 months",
        start: WindowStart::Months(3),
    },
    TrailingWindow {
        label: "YTD",
        start: WindowStart::YearToDate,
    },
    TrailingWindow {
        label: "1 year",
        start: WindowStart::Years(1),
    },
    TrailingWindow {
        label: "3 years",
        start: WindowStart::Years(3),
    },
    TrailingWindow {
        label: "5 years",
        start: WindowStart::Years(5),
    },
];

/// Horizons of the CAGR table, in years.
pub const CAGR_YEARS: [u32; 3] = [1, 3, 5];

/// Observations dated on or after the window start. Empty when the history
/// ends before the window begins.
pub fn window(history: &PriceHistory, as_of: NaiveDate, start: WindowStart) -> &[PricePoint] {
    history.since(start.resolve(as_of))
}
