use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Success body returned once the deploy agent has acknowledged the
/// trigger.
#[derive(Debug, Serialize)]
pub struct RedeploySuccess {
    pub success: bool,
    /// Fixed human-readable confirmation.
    pub message: &'static str,
    /// Raw acknowledgement text from the deploy agent, passed through
    /// verbatim.
    #[serde(rename = "piResponse")]
    pub pi_response: String,
}

impl RedeploySuccess {
    pub fn new(pi_response: String) -> Self {
        Self {
            success: true,
            message: "Redeploy triggered successfully",
            pi_response,
        }
    }
}

impl IntoResponse for RedeploySuccess {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Rejection body shared by every non-success outcome of the endpoint.
///
/// The `error` string is fixed per status; internal fault detail never
/// travels through here.
#[derive(Debug, Serialize)]
pub struct RedeployReject {
    #[serde(skip)]
    status: StatusCode,
    error: &'static str,
}

impl RedeployReject {
    pub fn method_not_allowed() -> Self {
        Self {
            status: StatusCode::METHOD_NOT_ALLOWED,
            error: "Method not allowed",
        }
    }

    pub fn forbidden() -> Self {
        Self {
            status: StatusCode::FORBIDDEN,
            error: "Forbidden",
        }
    }

    pub fn internal_server_error() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: "Internal Server Error",
        }
    }
}

impl IntoResponse for RedeployReject {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(self)).into_response()
    }
}
