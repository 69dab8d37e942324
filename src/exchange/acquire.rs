use bytes::Bytes;
use tracing::info;

use crate::config::Config;
use crate::error::TokenError;
use crate::providers::GoogleProvider;
use crate::store::TokenFile;

/// Exchange an authorization code and persist the provider's response
/// verbatim. Returns the same bytes that were written.
pub async fn acquire_token(
    config: &Config,
    provider: &GoogleProvider,
    code: &str,
) -> Result<Bytes, TokenError> {
    if code.is_empty() {
        return Err(TokenError::MissingCode);
    }

    let body = provider.exchange_code(code, &config.redirect_uri()).await?;

    let store = TokenFile::new(&config.token_json_path);
    store.write(&body).await?;

    info!("Stored new token at {}", store.path());
    Ok(body)
}
