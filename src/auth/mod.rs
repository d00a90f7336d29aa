#![allow(dead_code)]
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::api::{ApiError, BotApi};
use crate::session::SessionStore;
use crate::types::{Credentials, LoginResponse};

/// Error box text when the backend rejects the credentials.
pub const LOGIN_FAILED: &str = "Помилка входу";
/// Error box text when the backend is unreachable or gave no detail.
pub const CONNECT_FAILED: &str = "Помилка підключення до сервера";
/// Submit label while the login request is in flight.
pub const SUBMIT_BUSY_LABEL: &str = "Перевірка...";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("login request already in flight")]
    InFlight,

    /// Backend rejected the login; carries the server detail when one was
    /// given, otherwise the fixed login-failed message.
    #[error("{0}")]
    Rejected(String),

    #[error("{}", CONNECT_FAILED)]
    ConnectionFailed,

    #[error("session storage failed: {0}")]
    Storage(String),
}

#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub message: Option<String>,
    pub futures_count: Option<u32>,
}

/// The login form's behavior: validate before touching the network, allow
/// one request at a time, and persist the token only on success.
pub struct AuthGate {
    api: Arc<dyn BotApi>,
    session: Arc<SessionStore>,
    in_flight: AtomicBool,
}

impl AuthGate {
    pub fn new(api: Arc<dyn BotApi>, session: Arc<SessionStore>) -> Self {
        Self {
            api,
            session,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submit the login form. Exactly one session write happens, and only
    /// when the backend accepted the credentials and returned a token.
    pub async fn submit(&self, credentials: &Credentials) -> Result<LoginOutcome, AuthError> {
        if let Some(field) = credentials.missing_field() {
            return Err(AuthError::MissingField(field));
        }

        if self.in_flight.swap(true, Ordering::Acquire) {
            return Err(AuthError::InFlight);
        }

        let result = self.api.login(credentials).await;
        let outcome = self.finish_login(result);
        self.in_flight.store(false, Ordering::Release);
        outcome
    }

    fn finish_login(
        &self,
        result: Result<LoginResponse, ApiError>,
    ) -> Result<LoginOutcome, AuthError> {
        match result {
            Ok(resp) if resp.success => {
                let token = match resp.token {
                    Some(token) => token,
                    None => {
                        warn!("login response claimed success without a token");
                        return Err(AuthError::Rejected(LOGIN_FAILED.to_string()));
                    }
                };
                self.session
                    .login(&token)
                    .map_err(|e| AuthError::Storage(e.to_string()))?;
                info!("login accepted, session stored");
                Ok(LoginOutcome {
                    message: resp.message,
                    futures_count: resp.futures_count,
                })
            }
            Ok(_) => Err(AuthError::Rejected(LOGIN_FAILED.to_string())),
            Err(err) => {
                error!("login request failed: {err}");
                match err {
                    ApiError::Api {
                        detail: Some(detail),
                        ..
                    } => Err(AuthError::Rejected(detail)),
                    _ => Err(AuthError::ConnectionFailed),
                }
            }
        }
    }
}
