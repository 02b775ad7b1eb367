//! # Tickerlens Analytics Engine
//!
//! This crate derives everything the application reports about a price history:
//! technical indicators, trailing-window returns, compound annual growth rates,
//! annualized volatility and the benchmark overlay.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of providers
//!   or caches. It depends only on `core-types` and `configuration`.
//! - **Stateless Calculation:** The engines take a borrowed `PriceHistory` and
//!   return new values. The input, which may be a cached copy, is never mutated.
//! - **Undetermined is data:** A metric whose preconditions are not met (a window
//!   with no observations, a non-positive base) is `None`, never an error.
//!
//! ## Public API
//!
//! - `IndicatorEngine` / `EnrichedHistory`: moving average, Bollinger bands, normalized close.
//! - `PerformanceAnalyzer` / `PerformanceReport`: returns, CAGR and volatility.
//! - `benchmark::align`: the instrument vs. benchmark normalized overlay.
//! - `periods`: the declarative table of trailing windows.

// Declare the modules that constitute this crate.
pub mod benchmark;
pub mod error;
#[cfg(test)]
mod fixtures;
pub mod indicators;
pub mod performance;
pub mod periods;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use benchmark::{BenchmarkComparison, NormalizedPoint, align};
pub use error::AnalyticsError;
pub use indicators::{EnrichedHistory, IndicatorEngine, IndicatorRow};
pub use performance::{PerformanceAnalyzer, cagr};
pub use periods::{CAGR_YEARS, RETURN_WINDOWS, TrailingWindow, WindowStart};
pub use report::{CagrRow, PerformanceReport, PerformanceRow};

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// The `ta` and `statrs` crates work in `f64`; this is the single conversion point.
pub(crate) fn as_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
