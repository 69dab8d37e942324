pub mod api;
pub mod config;
pub mod error;
pub mod exchange;
pub mod providers;
pub mod store;
pub mod token;

pub use config::Config;
pub use error::TokenError;
pub use token::Token;

use std::sync::Arc;

/// Shared application state passed to all API handlers.
pub struct AppState {
    pub config: Config,
    pub provider: providers::GoogleProvider,
}

pub type SharedState = Arc<AppState>;
