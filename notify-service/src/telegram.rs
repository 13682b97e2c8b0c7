use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::errors::NotifyServiceResult;

/// Telegram Bot API client used for operator notifications.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: Client,
    base_api: String, // e.g. "https://api.telegram.org"
    token: String,
    chat_id: String,
}

impl TelegramClient {
    /// Constructs a Telegram client with a shared HTTP instance.
    pub fn new(http: Client, base_api: String, token: String, chat_id: String) -> Self {
        debug!("Creating TelegramClient with base_api={}", base_api);
        Self {
            http,
            base_api,
            token,
            chat_id,
        }
    }

    /// Sends a plain-text message to the configured chat.
    ///
    /// The response body is ignored; a non-2xx status or transport failure
    /// is the only signal the caller receives. The request URL embeds the
    /// bot token, so it is never logged.
    pub async fn send_message(&self, text: &str) -> NotifyServiceResult<()> {
        let url = format!("{}/bot{}/sendMessage", self.base_api, self.token);
        debug!(chat_id = %self.chat_id, "Telegram send_message");

        let payload = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };

        self.http
            .post(&url)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

/// Payload for the sendMessage endpoint (subset).
#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::NotifyServiceError;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> TelegramClient {
        TelegramClient::new(
            Client::new(),
            server.uri(),
            "test-token".into(),
            "42".into(),
        )
    }

    #[tokio::test]
    async fn send_message_posts_chat_id_and_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/bottest-token/sendMessage"))
            .and(body_json(json!({"chat_id": "42", "text": "hello"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        client(&server).send_message("hello").await.unwrap();
    }

    #[tokio::test]
    async fn send_message_maps_non_2xx_to_http_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/bottest-token/sendMessage"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let err = client(&server).send_message("hello").await.unwrap_err();

        match err {
            NotifyServiceError::HttpStatus(status) => assert_eq!(status, 502),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
