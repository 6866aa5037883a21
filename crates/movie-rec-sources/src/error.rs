use reqwest::StatusCode;

/// Failure of one remote operation against the recommender, the feedback
/// store, or the image CDN.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Transport-level failure (connect, timeout, TLS).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response other than 401/404.
    #[error("unexpected status {0}")]
    Status(StatusCode),

    /// 401 from the remote. Never retried.
    #[error("authentication rejected")]
    Auth,

    /// 404 from the remote. Never retried.
    #[error("not found: {0}")]
    NotFound(String),

    /// Response body did not match the expected shape.
    #[error("invalid payload: {0}")]
    Payload(String),
}

impl SourceError {
    /// Map a non-success HTTP status to its error class.
    /// `what` names the thing that was requested, for 404 messages.
    pub fn from_status(status: StatusCode, what: &str) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => SourceError::Auth,
            StatusCode::NOT_FOUND => SourceError::NotFound(what.to_string()),
            other => SourceError::Status(other),
        }
    }

    /// Permanent failures are not worth retrying: the same request will
    /// keep failing until credentials or the resource change.
    pub fn is_permanent(&self) -> bool {
        matches!(self, SourceError::Auth | SourceError::NotFound(_))
    }
}
