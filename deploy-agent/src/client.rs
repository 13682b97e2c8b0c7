use reqwest::Client;
use tracing::debug;

use crate::errors::DeployAgentResult;

/// HTTP client for the remote deploy agent.
///
/// The agent verifies authenticity on its side through the deploy key
/// header; this client carries the key on every trigger call.
#[derive(Debug, Clone)]
pub struct DeployAgentClient {
    http: Client,
    base_url: String, // e.g. "http://192.168.68.200:9090"
    deploy_key: String,
}

impl DeployAgentClient {
    /// Constructs a deploy agent client with a shared HTTP instance.
    pub fn new(http: Client, base_url: String, deploy_key: String) -> Self {
        debug!("Creating DeployAgentClient with base_url={}", base_url);
        Self {
            http,
            base_url,
            deploy_key,
        }
    }

    /// Asks the agent to redeploy and returns its acknowledgement text
    /// verbatim.
    ///
    /// The body is opaque to this client: whatever the agent prints is
    /// handed back unparsed.
    pub async fn trigger_redeploy(&self) -> DeployAgentResult<String> {
        let url = format!("{}/redeploy", self.base_url);
        debug!("agent trigger_redeploy: {}", url);

        let reply = self
            .http
            .post(url)
            .header("x-deploy-key", &self.deploy_key)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DeployAgentError;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> DeployAgentClient {
        DeployAgentClient::new(Client::new(), server.uri(), "abc123".into())
    }

    #[tokio::test]
    async fn trigger_redeploy_sends_key_and_returns_reply_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/redeploy"))
            .and(header("x-deploy-key", "abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_string("redeployed@1700000000"))
            .expect(1)
            .mount(&server)
            .await;

        let reply = client(&server).trigger_redeploy().await.unwrap();

        assert_eq!(reply, "redeployed@1700000000");
    }

    #[tokio::test]
    async fn trigger_redeploy_maps_non_2xx_to_http_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/redeploy"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client(&server).trigger_redeploy().await.unwrap_err();

        match err {
            DeployAgentError::HttpStatus(status) => assert_eq!(status, 503),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
