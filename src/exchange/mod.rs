//! Token operations: first-time code exchange, refresh, and access-token lookup.
//!
//! Each operation takes the configuration explicitly and touches the token
//! file at `Config::token_json_path`.

pub mod acquire;
pub mod refresh;

pub use acquire::acquire_token;
pub use refresh::refresh_token;

use crate::config::Config;
use crate::error::TokenError;
use crate::store::TokenFile;

/// Read the stored access token.
pub async fn current_access_token(config: &Config) -> Result<String, TokenError> {
    let store = TokenFile::new(&config.token_json_path);
    let token = store.load().await?;

    if token.access_token.is_empty() {
        return Err(TokenError::MissingAccessToken(config.token_json_path.clone()));
    }

    Ok(token.access_token)
}
