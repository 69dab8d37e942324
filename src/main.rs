use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use oauth_token_helper::providers::GoogleProvider;
use oauth_token_helper::{api, AppState, Config, SharedState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "oauth_token_helper=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;
    info!("oauth-token-helper v{}", env!("CARGO_PKG_VERSION"));
    info!("Token file: {}", config.token_json_path);

    let provider = GoogleProvider::from_config(&config);
    let state: SharedState = Arc::new(AppState { config, provider });

    api::serve(state).await
}
