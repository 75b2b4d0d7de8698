use thiserror::Error;

/// Client-side request errors.
///
/// Every variant except the internal refresh-retry path is terminal: it has
/// already been reported through the notification sink by the time the
/// caller sees it.
#[derive(Debug, Error, Clone)]
pub enum ApiError {
    /// The credential store could not be read or its contents were corrupt.
    #[error("configuration error: {message}")]
    ConfigurationError { message: String },

    /// No response was received (connection refused, DNS failure, timeout).
    #[error("network error: {message}")]
    NetworkError { message: String },

    /// The server answered with a non-2xx status.
    #[error("server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// No refresh token was available when one was required.
    #[error("session expired")]
    SessionExpired,

    /// The refresh endpoint rejected the refresh token or was unreachable.
    #[error("token refresh failed: {message}")]
    RefreshFailed { message: String },
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::ConfigurationError {
            message: err.to_string(),
        }
    }
}

/// Result type for client operations
pub type ApiResult<T> = Result<T, ApiError>;
