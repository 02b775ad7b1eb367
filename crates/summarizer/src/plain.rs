use crate::Summarizer;
use async_trait::async_trait;
use core_types::{InstrumentMetadata, or_na};

/// Renders the description and classification fields verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainSummarizer;

#[async_trait]
impl Summarizer for PlainSummarizer {
    async fn summarize(&self, metadata: &InstrumentMetadata) -> String {
        metadata_text(metadata)
    }
}

/// The block of text both adapters start from.
pub(crate) fn metadata_text(metadata: &InstrumentMetadata) -> String {
    format!(
        "Description:\n{}\n\nSector: {}\nIndustry: {}\nCountry: {}",
        or_na(metadata.description.as_deref()),
        or_na(metadata.sector.as_deref()),
        or_na(metadata.industry.as_deref()),
        or_na(metadata.country.as_deref()),
    )
}
