use serde::Deserialize;

/// Query parameters accepted by the redeploy endpoint.
///
/// `secret` is optional at the type level so that a request without a query
/// string is treated as an ordinary credential mismatch (403) instead of an
/// extractor rejection.
#[derive(Debug, Deserialize)]
pub struct RedeployParams {
    /// Shared secret, compared against the configured deploy key.
    pub secret: Option<String>,
}
