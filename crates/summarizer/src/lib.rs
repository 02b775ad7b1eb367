//! # Tickerlens Summarizer
//!
//! Turns an instrument's descriptive metadata into readable prose. The remote
//! adapter asks a generative language model for a translated summary; the plain
//! adapter renders the fields as they are.
//!
//! Summarization never fails from the caller's point of view. Each adapter
//! owns its failure handling and answers with a fallback text instead.

use async_trait::async_trait;
use core_types::InstrumentMetadata;

mod error;
pub mod gemini;
pub mod plain;

pub use gemini::GeminiSummarizer;
pub use plain::PlainSummarizer;

/// Produces a human-readable description of an instrument.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, metadata: &InstrumentMetadata) -> String;
}
