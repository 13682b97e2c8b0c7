use std::env;

use deploy_agent::DeployAgentClient;
use notify_service::TelegramClient;
use thiserror::Error;

/// Process-wide configuration, read from the environment once at startup
/// and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to, e.g. "0.0.0.0:3000".
    pub bind_addr: String,
    /// Shared secret authorizing redeploy requests. Never logged, never
    /// echoed in responses.
    pub deploy_key: String,
    /// API base for the Telegram Bot API, e.g. "https://api.telegram.org".
    pub telegram_api_base: String,
    /// Bot token for the Telegram Bot API.
    pub telegram_token: String,
    /// Chat the operator notification is delivered to.
    pub chat_id: String,
    /// Base URL of the deploy agent, e.g. "http://192.168.68.200:9090".
    pub agent_base_url: String,
}

/// Errors raised while loading [`Config`] at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnv(&'static str),
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required variables fail fast here so a misconfigured process refuses
    /// to boot instead of failing on the first request.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: env::var("API_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".into()),
            deploy_key: require("DEPLOY_KEY")?,
            telegram_api_base: env::var("TELEGRAM_API_BASE")
                .unwrap_or_else(|_| "https://api.telegram.org".into()),
            telegram_token: require("TELEGRAM_TOKEN")?,
            chat_id: require("CHAT_ID")?,
            agent_base_url: require("AGENT_URL")?,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingEnv(name))
}

/// Shared state for all HTTP handlers.
///
/// Built once at startup; handlers receive it behind an `Arc`. Both
/// collaborator clients share one HTTP connection pool.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub notifier: TelegramClient,
    pub agent: DeployAgentClient,
}

impl AppState {
    /// Construct shared state and collaborator clients from configuration.
    pub fn new(config: Config) -> Self {
        let http = reqwest::Client::new();

        let notifier = TelegramClient::new(
            http.clone(),
            config.telegram_api_base.clone(),
            config.telegram_token.clone(),
            config.chat_id.clone(),
        );

        let agent = DeployAgentClient::new(
            http,
            config.agent_base_url.clone(),
            config.deploy_key.clone(),
        );

        Self {
            config,
            notifier,
            agent,
        }
    }
}
