use anyhow::{Context, Result};
use url::Url;

/// Google's OAuth 2.0 token endpoint.
pub const GOOGLE_TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";

/// Application configuration, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // ── Server ──────────────────────────────────────────────────────────
    pub http_scheme: String,
    pub http_host: String,
    pub http_port: u16,

    // ── OAuth Provider Credentials ──────────────────────────────────────
    pub google_client_id: String,
    pub google_client_secret: String,
    pub token_endpoint: Url,

    // ── Storage ─────────────────────────────────────────────────────────
    /// File the token JSON is persisted to.
    pub token_json_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. `from_env` is this with
    /// `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            http_scheme: lookup("HTTP_SCHEME").unwrap_or_else(|| "http".into()),
            http_host: lookup("HTTP_HOST").unwrap_or_else(|| "localhost".into()),
            http_port: lookup("HTTP_PORT")
                .unwrap_or_else(|| "8080".into())
                .parse()
                .context("Invalid HTTP_PORT")?,

            google_client_id: lookup("GOOGLE_CLIENT_ID")
                .context("GOOGLE_CLIENT_ID is required")?,
            google_client_secret: lookup("GOOGLE_CLIENT_SECRET")
                .context("GOOGLE_CLIENT_SECRET is required")?,
            token_endpoint: lookup("TOKEN_ENDPOINT")
                .as_deref()
                .unwrap_or(GOOGLE_TOKEN_ENDPOINT)
                .parse()
                .context("Invalid TOKEN_ENDPOINT")?,

            token_json_path: lookup("TOKEN_JSON_PATH").unwrap_or_else(|| "token.json".into()),
        })
    }

    /// The redirect URI registered with the provider. Also the address this
    /// service is reachable at.
    pub fn redirect_uri(&self) -> String {
        format!("{}://{}:{}", self.http_scheme, self.http_host, self.http_port)
    }
}
