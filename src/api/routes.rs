//! Route handlers. Both return the token JSON on success and a plain-text
//! error otherwise.

use axum::{
    extract::{RawQuery, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tracing::warn;

use crate::error::TokenError;
use crate::exchange;
use crate::SharedState;

pub fn token_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(token_acquire))
        .route("/token/refresh", get(token_refresh))
        .with_state(state)
}

/// First `code` value in the query string, or empty when absent.
fn code_param(query: Option<&str>) -> String {
    query
        .and_then(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .find(|(key, _)| key == "code")
                .map(|(_, value)| value.into_owned())
        })
        .unwrap_or_default()
}

/// GET /: OAuth redirect target. Exchanges `code` and stores the token.
async fn token_acquire(
    State(state): State<SharedState>,
    RawQuery(query): RawQuery,
) -> Result<Response, TokenError> {
    let code = code_param(query.as_deref());
    let body = exchange::acquire_token(&state.config, &state.provider, &code)
        .await
        .inspect_err(|e| warn!("Token exchange failed: {e}"))?;

    Ok(json_response(body))
}

/// GET /token/refresh: Refresh the stored token.
async fn token_refresh(State(state): State<SharedState>) -> Result<Response, TokenError> {
    let body = exchange::refresh_token(&state.config, &state.provider)
        .await
        .inspect_err(|e| warn!("Token refresh failed: {e}"))?;

    Ok(json_response(body))
}

fn json_response(body: impl Into<axum::body::Body>) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body.into()).into_response()
}
