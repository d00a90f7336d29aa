#![allow(dead_code)]
use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};

use super::poller::fetch_bot_status;
use super::state::SnapshotStore;
use crate::api::BotApi;
use crate::types::{BotCommand, CommandAck};

/// Alert text shown whenever a start/stop request fails.
pub const CONTROL_FAILED: &str = "Помилка управління ботом";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", CONTROL_FAILED)]
pub struct ControlError {
    pub cause: String,
}

#[derive(Debug, Clone)]
pub struct ToggleOutcome {
    pub command: BotCommand,
    pub ack: CommandAck,
}

/// The dashboard's start/stop button. Picks the command from the
/// last-known status and refreshes that status right after a successful
/// toggle instead of waiting for the next poll tick.
pub struct BotControl {
    api: Arc<dyn BotApi>,
    store: SnapshotStore,
}

impl BotControl {
    pub fn new(api: Arc<dyn BotApi>, store: SnapshotStore) -> Self {
        Self { api, store }
    }

    pub async fn toggle(&self) -> Result<ToggleOutcome, ControlError> {
        let running = self
            .store
            .status()
            .await
            .map(|s| s.running)
            .unwrap_or(false);
        let command = BotCommand::toggle_from(running);

        match self.api.bot_command(command).await {
            Ok(ack) => {
                info!("bot {command} accepted");
                fetch_bot_status(self.api.clone(), self.store.clone()).await;
                Ok(ToggleOutcome { command, ack })
            }
            Err(err) => {
                error!("bot {command} failed: {err}");
                Err(ControlError {
                    cause: err.to_string(),
                })
            }
        }
    }
}
