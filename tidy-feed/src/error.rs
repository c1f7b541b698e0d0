use thiserror::Error;

/// Failure to get a page of todos from the remote feed.
///
/// Surfaced to the list view as a failed state; nothing retries.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("feed unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("feed returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode feed response: {0}")]
    Decode(#[from] serde_json::Error),
}
