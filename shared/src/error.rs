use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Client-side pre-flight rejection; no request was sent.
    #[error("{0}")]
    IncompleteInput(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    /// Non-2xx response carrying the server-supplied reason, verbatim.
    #[error("{0}")]
    ServiceRejected(String),
    #[error("network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),
    #[error("malformed user record: {0}")]
    MalformedUserRecord(String),
    /// A superseded selection response; discarded, never user-visible.
    #[error("stale selection response discarded")]
    StaleSelection,
}

pub type AppResult<T> = Result<T, AppError>;
