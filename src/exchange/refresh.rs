use tracing::info;

use crate::config::Config;
use crate::error::TokenError;
use crate::providers::GoogleProvider;
use crate::store::TokenFile;
use crate::token::Token;

/// Exchange the stored refresh token for a new access token and rewrite
/// the token file.
///
/// Google usually omits `refresh_token` on refresh; the stored one is then
/// carried over so it is never lost. Nothing is written unless the whole
/// exchange succeeds. Returns the bytes written (indented JSON).
pub async fn refresh_token(
    config: &Config,
    provider: &GoogleProvider,
) -> Result<Vec<u8>, TokenError> {
    let store = TokenFile::new(&config.token_json_path);
    let previous = store.load().await?;

    let refresh_token = previous
        .refresh_token
        .as_deref()
        .ok_or_else(|| TokenError::MissingRefreshToken(config.token_json_path.clone()))?;

    let body = provider
        .refresh_token(refresh_token, &config.redirect_uri())
        .await?;

    let refreshed = Token::from_slice(&body).map_err(TokenError::ResponseParse)?;
    let rotated = refreshed.refresh_token.is_some();
    let merged = refreshed.merge_refresh(&previous);

    let bytes = merged.to_pretty_json().map_err(TokenError::Serialize)?;
    store.write(&bytes).await?;

    info!(rotated, "Refreshed token at {}", store.path());
    Ok(bytes)
}
