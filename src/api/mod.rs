#![allow(dead_code)]
pub mod client;
pub mod error;

pub use client::*;
pub use error::*;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::types::{BotCommand, BotStatus, CommandAck, Credentials, DashboardSnapshot, LoginResponse};

/// Everything the dashboard needs from the bot backend. The auth gate,
/// poller, and control action all talk through this seam so they can be
/// exercised against fakes.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BotApi: Send + Sync {
    /// `POST /api/auth/login`. Sent without any auth header.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// `GET /api/dashboard-data`.
    async fn dashboard_data(&self) -> Result<DashboardSnapshot, ApiError>;

    /// `GET /api/bot/status`.
    async fn bot_status(&self) -> Result<BotStatus, ApiError>;

    /// `POST /api/bot/start` or `/api/bot/stop`, authorized with the
    /// control API key.
    async fn bot_command(&self, command: BotCommand) -> Result<CommandAck, ApiError>;
}
