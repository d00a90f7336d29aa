#![allow(dead_code)]
use serde::{Deserialize, Serialize};

/// Login form payload for `POST /api/auth/login`. All three fields are
/// required by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
    pub password: String,
}

impl Credentials {
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            password: password.into(),
        }
    }

    /// First empty field, if any. The login form refuses to submit until
    /// every field is filled.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.api_key.trim().is_empty() {
            Some("api_key")
        } else if self.api_secret.trim().is_empty() {
            Some("api_secret")
        } else if self.password.trim().is_empty() {
            Some("password")
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub futures_count: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_reports_first_empty() {
        let creds = Credentials::new("", "secret", "pass");
        assert_eq!(creds.missing_field(), Some("api_key"));

        let creds = Credentials::new("key", "  ", "pass");
        assert_eq!(creds.missing_field(), Some("api_secret"));

        let creds = Credentials::new("key", "secret", "");
        assert_eq!(creds.missing_field(), Some("password"));

        let creds = Credentials::new("key", "secret", "pass");
        assert_eq!(creds.missing_field(), None);
    }

    #[test]
    fn login_response_tolerates_missing_optionals() {
        let raw = r#"{"success": false}"#;
        let resp: LoginResponse = serde_json::from_str(raw).unwrap();
        assert!(!resp.success);
        assert!(resp.token.is_none());
        assert!(resp.futures_count.is_none());
    }
}
