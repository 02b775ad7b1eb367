use crate::Summarizer;
use crate::error::SummarizerError;
use crate::plain::metadata_text;
use async_trait::async_trait;
use configuration::SummarizerConfig;
use core_types::InstrumentMetadata;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const RATE_LIMITS_URL: &str = "https://ai.google.dev/gemini-api/docs/rate-limits";

/// The JSON payload for the `generateContent` endpoint.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct CandidateContent {
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct CandidatePart {
    text: String,
}

impl GenerateResponse {
    /// Text of the first candidate, its parts joined.
    fn into_text(self) -> Option<String> {
        let candidate = self.candidates.into_iter().next()?;
        let text: String = candidate
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect();
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

/// A summarizer backed by Google's Gemini `generateContent` endpoint.
pub struct GeminiSummarizer {
    client: Client,
    url: String,
    api_key: String,
    language: String,
}

impl GeminiSummarizer {
    /// Creates a new `GeminiSummarizer`.
    ///
    /// Returns `None` when no API key is configured or the HTTP client cannot be
    /// built, so the caller can fall back to plain rendering.
    pub fn new(config: &SummarizerConfig) -> Option<Self> {
        if config.api_key.is_empty() {
            tracing::info!("Summarizer API key is not configured; metadata will be shown as-is.");
            return None;
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| tracing::warn!(error = %e, "Failed to build summarizer HTTP client."))
            .ok()?;

        Some(Self {
            client,
            url: format!(
                "{}/models/{}:generateContent",
                config.endpoint.trim_end_matches('/'),
                config.model
            ),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
        })
    }

    fn prompt(&self, metadata: &InstrumentMetadata) -> String {
        format!(
            "Translate into {} clearly and professionally, without headings, the following \
             technical text about a company. Include the description and a summary, and show \
             the sector, the industry and the country in a separate paragraph.\n\n{}",
            self.language,
            metadata_text(metadata)
        )
    }

    async fn generate(&self, prompt: &str) -> Result<String, SummarizerError> {
        let payload = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to decode error response".to_string());
            return Err(SummarizerError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let answer: GenerateResponse = response.json().await?;
        answer.into_text().ok_or(SummarizerError::EmptyAnswer)
    }
}

#[async_trait]
impl Summarizer for GeminiSummarizer {
    async fn summarize(&self, metadata: &InstrumentMetadata) -> String {
        match self.generate(&self.prompt(metadata)).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    symbol = %metadata.symbol,
                    error = %e,
                    "Summary unavailable, using fallback notice."
                );
                fallback_notice()
            }
        }
    }
}

/// Shown in place of the summary when the remote service cannot answer.
pub fn fallback_notice() -> String {
    format!(
        "Could not summarize the company information because the Gemini API usage limit \
         was reached or the service is unavailable.\n\nPlease try again later or check your \
         usage quota at: {}",
        RATE_LIMITS_URL
    )
}
