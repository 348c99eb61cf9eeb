use thiserror::Error;

/// Failures of the transcript acquisition chain.
///
/// `NoCaptions` and `Unretrievable` are deliberately distinct: the first means
/// the video has no caption tracks at all, the second that a track exists but
/// the cue fetch produced nothing usable, which may be transient.
#[derive(Error, Debug)]
pub enum TranscriptError {
    #[error("no captions available for this video")]
    NoCaptions,

    #[error("captions exist but could not be retrieved")]
    Unretrievable,

    #[error("timedtext request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Failures of the summarization call.
#[derive(Error, Debug)]
pub enum SummaryError {
    /// Validation failure, correctable by the caller
    #[error("transcript is required")]
    EmptyTranscript,

    /// Configuration failure; never carries credential detail
    #[error("summarization API key is not configured")]
    MissingApiKey,

    /// Provider communication failure (network, timeout, non-2xx)
    #[error("summarization request failed: {0}")]
    Request(String),

    /// The provider answered but outside its documented response contract
    #[error("summarization provider returned an unexpected response shape")]
    UnexpectedShape,
}

impl From<reqwest::Error> for SummaryError {
    fn from(err: reqwest::Error) -> Self {
        SummaryError::Request(err.to_string())
    }
}
