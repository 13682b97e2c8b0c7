//! Client for the remote deploy agent.
//!
//! Endpoint used:
//!   * POST /redeploy  (authenticated via the `x-deploy-key` header)

mod client;
mod errors;

pub use client::DeployAgentClient;
pub use errors::{DeployAgentError, DeployAgentResult};
