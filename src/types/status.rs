#![allow(dead_code)]
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Payload of `GET /api/bot/status`. Fields other than `running` are
/// optional so a minimal status still decodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotStatus {
    #[serde(default)]
    pub running: bool,
    #[serde(default)]
    pub uptime: Option<String>,
    #[serde(default)]
    pub pairs_scanned: Option<u32>,
    #[serde(default)]
    pub active_positions: Option<u32>,
    #[serde(default)]
    pub total_profit: Option<Decimal>,
    #[serde(default)]
    pub last_signal: Option<String>,
    #[serde(default)]
    pub xt_connection: Option<String>,
}

/// Control command sent to `POST /api/bot/{start,stop}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotCommand {
    Start,
    Stop,
}

impl BotCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            BotCommand::Start => "start",
            BotCommand::Stop => "stop",
        }
    }

    /// Command that flips the given running state.
    pub fn toggle_from(running: bool) -> Self {
        if running {
            BotCommand::Stop
        } else {
            BotCommand::Start
        }
    }
}

impl fmt::Display for BotCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandAck {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
