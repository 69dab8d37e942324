use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors raised while acquiring, refreshing, or reading the stored token.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    // ── Caller Errors ───────────────────────────────────────────────────
    #[error("Missing code parameter")]
    MissingCode,

    // ── Storage Errors ──────────────────────────────────────────────────
    #[error("Unable to read {path}: {source}")]
    TokenFileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to parse {path}: {source}")]
    TokenFileParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to save token file {path}: {source}")]
    TokenFileWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize token: {0}")]
    Serialize(#[source] serde_json::Error),

    // ── Provider Errors ─────────────────────────────────────────────────
    #[error("Failed to make token request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Failed to read token response: {0}")]
    ResponseRead(#[source] reqwest::Error),

    #[error("Failed to parse token response: {0}")]
    ResponseParse(#[source] serde_json::Error),

    // ── State Errors ────────────────────────────────────────────────────
    #[error("No refresh_token found in {0}")]
    MissingRefreshToken(String),

    #[error("No access_token found in {0}")]
    MissingAccessToken(String),
}

impl TokenError {
    pub fn status(&self) -> StatusCode {
        match self {
            TokenError::MissingCode => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TokenError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
