use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";
// Must match the API_KEY the backend itself defaults to, or start/stop
// requests come back 401.
pub const DEFAULT_CONTROL_API_KEY: &str = "trinkenbot-api-key-2024";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;
const DEFAULT_DATA_DIR: &str = ".trinkenbot";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub backend_url: String,
    pub poll_interval_secs: u64,
    pub control_api_key: String,
    pub data_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            control_api_key: DEFAULT_CONTROL_API_KEY.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl Settings {
    /// Defaults, then the optional config file, then `TRINKENBOT_*`
    /// environment variables.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("backend_url", DEFAULT_BACKEND_URL)?
            .set_default("poll_interval_secs", DEFAULT_POLL_INTERVAL_SECS)?
            .set_default("control_api_key", DEFAULT_CONTROL_API_KEY)?
            .set_default("data_dir", DEFAULT_DATA_DIR)?;

        builder = match config_path {
            Some(path) => builder.add_source(config::File::with_name(path)),
            None => builder.add_source(config::File::with_name("dashboard").required(false)),
        };

        let cfg = builder
            .add_source(config::Environment::with_prefix("TRINKENBOT"))
            .build()?;
        Ok(cfg.try_deserialize()?)
    }

    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !self.backend_url.starts_with("http://") && !self.backend_url.starts_with("https://") {
            errors.push("backend_url must start with http:// or https://".to_string());
        }
        if self.poll_interval_secs == 0 {
            errors.push("poll_interval_secs must be > 0".to_string());
        }
        if self.control_api_key.trim().is_empty() {
            errors.push("control_api_key must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// Where the session token lives on disk.
    pub fn session_path(&self) -> PathBuf {
        self.data_dir.join("session")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate_and_match_the_backend_contract() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.backend_url, "http://localhost:8001");
        assert_eq!(settings.poll_interval_secs, 10);
        assert_eq!(settings.control_api_key, "trinkenbot-api-key-2024");
        assert_eq!(settings.session_path(), PathBuf::from(".trinkenbot/session"));
    }

    #[test]
    fn zero_poll_interval_is_rejected() {
        let settings = Settings {
            poll_interval_secs: 0,
            ..Default::default()
        };
        let errors = settings.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("poll_interval_secs")));
    }

    #[test]
    fn bad_backend_url_is_rejected() {
        let settings = Settings {
            backend_url: "localhost:8001".to_string(),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn environment_overrides_defaults() {
        std::env::set_var("TRINKENBOT_BACKEND_URL", "https://bot.example.com");
        let settings = Settings::load(None).unwrap();
        std::env::remove_var("TRINKENBOT_BACKEND_URL");

        assert_eq!(settings.backend_url, "https://bot.example.com");
        assert_eq!(settings.poll_interval_secs, 10);
    }
}
