use thiserror::Error;

/// Failures from a backend call, including the local file read that
/// precedes an upload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The backend answered with `success: false` and this message.
    #[error("backend rejected the request: {0}")]
    Rejected(String),
    #[error("invalid backend base url: {0}")]
    InvalidBaseUrl(String),
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    /// The reply was not the JSON envelope the backend is supposed to send.
    #[error("unexpected backend response: {0}")]
    InvalidResponse(String),
    #[error("could not read notes file: {0}")]
    FileRead(String),
    #[error("notes file too large (max {max_bytes} bytes, actual {actual})")]
    NotesTooLarge { max_bytes: u64, actual: u64 },
}
