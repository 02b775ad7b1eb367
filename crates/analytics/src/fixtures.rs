use chrono::{Days, NaiveDate};
use core_types::{Interval, PriceHistory, PricePoint, Symbol};
use rust_decimal::prelude::*;

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub(crate) fn point(date: NaiveDate, close: f64) -> PricePoint {
    let close = Decimal::from_f64(close).unwrap();
    PricePoint {
        date,
        open: close,
        high: close,
        low: close,
        close,
        volume: 1_000,
    }
}

/// One observation per calendar day starting 2024-01-01.
pub(crate) fn history_from_closes(closes: &[f64]) -> PriceHistory {
    let start = date(2024, 1, 1);
    let points = closes
        .iter()
        .enumerate()
        .map(|(i, &c)| point(start.checked_add_days(Days::new(i as u64)).unwrap(), c))
        .collect();
    PriceHistory::new(Symbol::parse("TEST").unwrap(), Interval::Max, points).unwrap()
}

pub(crate) fn history_from(symbol: &str, dated: &[(NaiveDate, f64)]) -> PriceHistory {
    let points = dated.iter().map(|&(d, c)| point(d, c)).collect();
    PriceHistory::new(Symbol::parse(symbol).unwrap(), Interval::Max, points).unwrap()
}
