//! # Tickerlens Core Types
//!
//! The shared vocabulary of the workspace: validated symbols, the fixed set of
//! history intervals, daily price observations and instrument metadata.
//!
//! As the Layer 0 crate it has no knowledge of providers, caching or analytics.
//! Everything above it (the API client, the analytics engine, the pipeline)
//! speaks in these types.

pub mod enums;
pub mod error;
pub mod structs;
pub mod symbol;

// Re-export the core types to provide a clean public API.
pub use enums::Interval;
pub use error::CoreError;
pub use structs::{FetchedHistory, InstrumentMetadata, PriceHistory, PricePoint, or_na};
pub use symbol::Symbol;
