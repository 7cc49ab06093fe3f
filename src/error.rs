use reqwest::StatusCode;
use thiserror::Error;

pub type WebHdfsResult<T> = Result<T, Error>;

/// Enum for provider errors
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The remote service rejected the request (HTTP 400)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// Authentication failure (HTTP 401)
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    /// Authorization failure or remote I/O problem (HTTP 403)
    #[error("I/O: {0}")]
    Io(String),
    /// The remote node does not exist (HTTP 404 on a listing or open query)
    #[error("Not found: {0}")]
    NotFound(String),
    /// Remote internal error, or an operation the service cannot perform
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
    /// The response body could not be decoded as the expected envelope
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    /// Any transport-level failure reported by the HTTP client
    #[error("Transport: {0}")]
    Transport(String),
    /// Modification time outside the representable timestamp range
    #[error("Timestamp out of range: {0} ms")]
    TimestampOutOfRange(i64),
    /// Watching for changes is not supported by the remote protocol
    #[error("Watching for changes is not supported")]
    WatchNotSupported,
}

impl Error {
    /// Maps a non-success remote status to the local taxonomy, keeping the
    /// remote message text.
    pub(crate) fn from_remote(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::BAD_REQUEST => Self::InvalidArgument(message),
            StatusCode::UNAUTHORIZED => Self::PermissionDenied(message),
            StatusCode::FORBIDDEN => Self::Io(message),
            StatusCode::NOT_FOUND => Self::NotFound(message),
            _ => Self::InvalidOperation(message),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}
