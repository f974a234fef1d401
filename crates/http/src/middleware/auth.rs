use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use shelf_authz::TokenService;

use crate::error::AppError;

pub const BEARER_PREFIX: &str = "Bearer ";

/// Rejects the request with 401 unless it carries a valid bearer token.
///
/// Verified [`shelf_authz::Claims`] are inserted into the request extensions.
pub async fn require_bearer(
    State(tokens): State<Arc<TokenService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::unauthorized("Missing token"))?;

    let token = header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| AppError::unauthorized("Invalid authorization header"))?;

    let claims = tokens
        .verify(token)
        .map_err(|_| AppError::unauthorized("Invalid token"))?;

    tracing::debug!(username = %claims.username, "bearer token accepted");
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
