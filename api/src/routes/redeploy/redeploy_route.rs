use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::Method,
    response::{IntoResponse, Response},
};
use chrono::Local;
use tracing::{error, info, instrument};

use crate::{
    core::app_state::AppState,
    error_handler::ExecuteError,
    routes::redeploy::{
        redeploy_params::RedeployParams,
        redeploy_response::{RedeployReject, RedeploySuccess},
    },
};

/// HTTP endpoint for triggering a redeploy of the target host.
///
/// Expects `POST /redeploy?secret=...`. When the secret matches the
/// configured deploy key, an operator notification is sent first and the
/// deploy agent is called second; the agent's raw reply is passed through
/// to the caller. Any fault after authorization collapses to a generic
/// 500 with the cause kept in the error log.
#[instrument(name = "redeploy_route", skip(state, method, params))]
pub async fn redeploy_route(
    State(state): State<Arc<AppState>>,
    method: Method,
    Query(params): Query<RedeployParams>,
) -> Response {
    // --- Method gate ------------------------------------------------------
    if method != Method::POST {
        return RedeployReject::method_not_allowed().into_response();
    }

    // --- Validate shared secret -------------------------------------------
    // Exact byte-for-byte comparison; a missing parameter is the same
    // mismatch as a wrong one. The secret itself must never reach the log.
    let expected = state.config.deploy_key.as_str();
    match params.secret.as_deref() {
        Some(provided) if provided == expected => {}
        _ => return RedeployReject::forbidden().into_response(),
    }

    info!("redeploy authorized, starting notify-then-trigger sequence");

    // --- Notify, then trigger ---------------------------------------------
    match execute(&state).await {
        Ok(agent_reply) => RedeploySuccess::new(agent_reply).into_response(),
        Err(err) => {
            // Operator-facing diagnostics only; the caller gets the
            // uniform body regardless of which step failed.
            error!(error = %err, "redeploy pipeline failed");
            RedeployReject::internal_server_error().into_response()
        }
    }
}

/// Runs the ordered side effects of an authorized request.
///
/// The notification is sent exactly once per authorized request; a fault
/// while sending it aborts the sequence before the agent is called.
async fn execute(state: &AppState) -> Result<String, ExecuteError> {
    state.notifier.send_message(&notification_text()).await?;

    let reply = state.agent.trigger_redeploy().await?;

    Ok(reply)
}

/// Operator notification body: fixed label plus the current local time.
fn notification_text() -> String {
    format!(
        "🚀 Redeploy triggered!\n\nTime: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )
}
