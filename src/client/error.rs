use std::time::Duration;
use thiserror::Error;

/// Every way a `SearchClient::find_users` call can fail.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("limit must be >= 0")]
    InvalidLimit,

    #[error("offset must be >= 0")]
    InvalidOffset,

    #[error("bad AccessToken")]
    Unauthorized,

    #[error("timeout after {0:?}")]
    Timeout(Duration),

    #[error("unknown error")]
    Transport(#[source] reqwest::Error),

    #[error("order field {0:?} invalid")]
    BadOrderField(String),

    #[error("unknown bad request error: {0}")]
    BadRequest(String),

    #[error("unknown status {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("failed to unpack result json")]
    Decode(#[source] serde_json::Error),
}

impl ClientError {
    /// True for failures detected before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::InvalidLimit | ClientError::InvalidOffset)
    }
}
