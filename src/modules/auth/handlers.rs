use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use shelf_http::{AppError, JsonPayload};

use super::AuthState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /login
pub async fn login(
    State(state): State<AuthState>,
    JsonPayload(request): JsonPayload<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = state
        .credentials
        .authenticate(&request.username, &request.password)
        .ok_or_else(|| AppError::unauthorized("Invalid username or password"))?;

    let token = state
        .tokens
        .issue(&user.username)
        .map_err(|err| AppError::internal("Error generating token", err))?;

    tracing::debug!(username = %user.username, user_id = %user.id, "token issued");
    Ok(Json(LoginResponse { token }))
}
