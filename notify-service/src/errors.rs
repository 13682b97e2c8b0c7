use thiserror::Error;

/// Convenient alias for crate-wide results.
pub type NotifyServiceResult<T> = Result<T, NotifyServiceError>;

/// Errors raised while delivering a notification.
#[derive(Debug, Error)]
pub enum NotifyServiceError {
    /// Timeout at transport level.
    #[error("timeout")]
    Timeout,

    /// Non-2xx HTTP status from the messaging service.
    #[error("http status error: status {0}")]
    HttpStatus(u16),

    /// Network/transport failure without HTTP status (DNS/connect/reset).
    #[error("network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for NotifyServiceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return NotifyServiceError::Timeout;
        }

        if let Some(status) = e.status() {
            return NotifyServiceError::HttpStatus(status.as_u16());
        }

        NotifyServiceError::Network(e.to_string())
    }
}
