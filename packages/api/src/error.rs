use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to the remote user store.
///
/// There is intentionally no retry and no finer taxonomy: the UI treats every
/// variant the same way — log it and leave local state untouched.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed: connection refused, DNS, body decode, …
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered, but not with a success status.
    #[error("server returned {0}")]
    Status(StatusCode),
}
