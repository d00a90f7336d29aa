#![allow(dead_code)]
use anyhow::Result;
use std::path::Path;
use tracing::debug;

/// Storage key the dashboard has always used for its session token.
pub const TOKEN_KEY: &str = "trinkenbot-token";

/// A restored login. Holding one is what authorizes mounting the dashboard.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
}

/// Persistent keeper of the opaque session token. Presence of the token is
/// the only authentication state there is; no expiry is tracked.
pub struct SessionStore {
    db: sled::Db,
}

impl SessionStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    /// Token from a previous login, if any.
    pub fn restore(&self) -> Result<Option<Session>> {
        match self.db.get(TOKEN_KEY)? {
            Some(raw) => {
                let token = String::from_utf8(raw.to_vec())?;
                Ok(Some(Session { token }))
            }
            None => Ok(None),
        }
    }

    /// Persist the token handed back by a successful login. Overwrites any
    /// previous session.
    pub fn login(&self, token: &str) -> Result<()> {
        self.db.insert(TOKEN_KEY, token.as_bytes())?;
        self.db.flush()?;
        debug!("session token persisted");
        Ok(())
    }

    /// Forget the stored token. A no-op when nothing is stored.
    pub fn logout(&self) -> Result<()> {
        self.db.remove(TOKEN_KEY)?;
        self.db.flush()?;
        debug!("session cleared");
        Ok(())
    }

    pub fn is_authenticated(&self) -> Result<bool> {
        Ok(self.db.contains_key(TOKEN_KEY)?)
    }
}
