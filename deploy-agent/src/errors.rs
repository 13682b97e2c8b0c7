use thiserror::Error;

/// Convenient alias for crate-wide results.
pub type DeployAgentResult<T> = Result<T, DeployAgentError>;

/// Errors raised while calling the deploy agent.
#[derive(Debug, Error)]
pub enum DeployAgentError {
    /// Timeout at transport level.
    #[error("timeout")]
    Timeout,

    /// Non-2xx HTTP status from the agent.
    #[error("http status error: status {0}")]
    HttpStatus(u16),

    /// Network/transport failure without HTTP status (DNS/connect/reset).
    #[error("network error: {0}")]
    Network(String),

    /// The agent answered but its response body could not be read.
    #[error("body read error: {0}")]
    BodyRead(String),
}

impl From<reqwest::Error> for DeployAgentError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return DeployAgentError::Timeout;
        }

        if let Some(status) = e.status() {
            return DeployAgentError::HttpStatus(status.as_u16());
        }

        if e.is_body() || e.is_decode() {
            return DeployAgentError::BodyRead(e.to_string());
        }

        DeployAgentError::Network(e.to_string())
    }
}
