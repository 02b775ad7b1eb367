use thiserror::Error;

/// Why a remote summary could not be produced. Never leaves the crate: the
/// `Summarizer` contract replaces every failure with a fallback notice.
#[derive(Error, Debug)]
pub(crate) enum SummarizerError {
    #[error("Summary request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Summary service returned status {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Summary service returned no text")]
    EmptyAnswer,
}
