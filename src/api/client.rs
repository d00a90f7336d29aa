use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{ApiError, BotApi};
use crate::types::{BotCommand, BotStatus, CommandAck, Credentials, DashboardSnapshot, LoginResponse};
use async_trait::async_trait;

/// reqwest-backed client for the Trinkenbot backend.
///
/// Carries the session token (attached as a bearer to the data endpoints
/// once logged in) and the control API key (attached only to start/stop).
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: String,
    session_token: Option<String>,
    control_key: String,
}

impl HttpApiClient {
    pub fn new(base_url: impl Into<String>, control_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
            session_token: None,
            control_key: control_key.into(),
        }
    }

    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await?;
            return Err(ApiError::from_error_body(status, &body));
        }
        Ok(resp.json().await?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let mut req = self.client.get(self.url(path));
        if let Some(token) = &self.session_token {
            req = req.bearer_auth(token);
        }
        Self::read_json(req.send().await?).await
    }
}

#[async_trait]
impl BotApi for HttpApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        debug!("POST /api/auth/login");
        let resp = self
            .client
            .post(self.url("/api/auth/login"))
            .json(credentials)
            .send()
            .await?;
        Self::read_json(resp).await
    }

    async fn dashboard_data(&self) -> Result<DashboardSnapshot, ApiError> {
        self.get_json("/api/dashboard-data").await
    }

    async fn bot_status(&self) -> Result<BotStatus, ApiError> {
        self.get_json("/api/bot/status").await
    }

    async fn bot_command(&self, command: BotCommand) -> Result<CommandAck, ApiError> {
        debug!("POST /api/bot/{}", command);
        let resp = self
            .client
            .post(self.url(&format!("/api/bot/{}", command.as_str())))
            .bearer_auth(&self.control_key)
            .json(&serde_json::json!({}))
            .send()
            .await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await?;
            return Err(ApiError::from_error_body(status, &body));
        }
        // Any 2xx counts as accepted; the ack body is informational only.
        Ok(resp.json().await.unwrap_or_default())
    }
}
