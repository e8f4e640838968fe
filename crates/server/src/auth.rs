use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::state::ServerState;

/// Bearer-token gate for the store API.
///
/// Disabled when no token is configured. A missing or malformed
/// `Authorization` header yields 401; a well-formed but wrong token yields 403.
pub async fn require_bearer_token(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let Some(expected) = state.auth.bearer_token.as_deref() else {
        return Ok(next.run(req).await);
    };

    let path = req.uri().path().to_owned();
    let authz = req.headers().get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    let Some(token) = authz.and_then(bearer_token) else {
        warn!(path = %path, "missing or malformed Authorization header");
        return Err(StatusCode::UNAUTHORIZED);
    };
    if token != expected {
        warn!(path = %path, "bearer token rejected");
        return Err(StatusCode::FORBIDDEN);
    }
    Ok(next.run(req).await)
}

/// Token of an `Authorization: Bearer <token>` value; the scheme is case-insensitive.
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim_start().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
