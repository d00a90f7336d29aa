use thiserror::Error;

/// Failures talking to the bot backend.
///
/// `Api` means the backend answered with a non-success status; the FastAPI
/// `detail` field is carried along when the body had one. `Transport`
/// covers everything where no usable response arrived.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("backend returned {status}: {}", .detail.as_deref().unwrap_or("(no detail)"))]
    Api { status: u16, detail: Option<String> },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Server-provided error detail, if the response body carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Api { detail, .. } => detail.as_deref(),
            ApiError::Transport(_) => None,
        }
    }

    pub(crate) fn from_error_body(status: reqwest::StatusCode, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_owned));
        ApiError::Api {
            status: status.as_u16(),
            detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn extracts_fastapi_detail() {
        let err = ApiError::from_error_body(
            StatusCode::UNAUTHORIZED,
            r#"{"detail": "Невірні облікові дані"}"#,
        );
        assert_eq!(err.detail(), Some("Невірні облікові дані"));
    }

    #[test]
    fn tolerates_non_json_error_body() {
        let err = ApiError::from_error_body(StatusCode::BAD_GATEWAY, "<html>upstream</html>");
        assert_eq!(err.detail(), None);
        match err {
            ApiError::Api { status, .. } => assert_eq!(status, 502),
            ApiError::Transport(_) => panic!("expected Api variant"),
        }
    }
}
