use deploy_agent::DeployAgentError;
use notify_service::NotifyServiceError;
use thiserror::Error;

use crate::core::app_state::ConfigError;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error(transparent)]
    Config(#[from] ConfigError),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),
}

/// Handy result alias used across the crate.
pub type AppResult<T> = Result<T, AppError>;

/// Fault raised inside the notify-then-trigger sequence of the redeploy
/// pipeline.
///
/// Callers of the HTTP endpoint only ever see the generic 500 body; this
/// type keeps the concrete collaborator failure available for the error
/// log, where the operator reads it.
#[derive(Debug, Error)]
pub enum ExecuteError {
    /// Operator notification could not be delivered.
    #[error("notification failed: {0}")]
    Notify(#[from] NotifyServiceError),

    /// Deploy agent call failed or returned an unusable response.
    #[error("deploy agent call failed: {0}")]
    Trigger(#[from] DeployAgentError),
}
