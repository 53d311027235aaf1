use axum::{Json, extract::State};
use chrono::Utc;
use tracing::info;

use crate::error::HuntError;
use crate::router::HuntState;
use crate::types::api::{LoginRequest, LoginResponse};

/// POST /api/login -> verifies credentials and records the login.
///
/// The returned token is an opaque marker for the frontend, not a verified
/// credential: nothing checks it afterwards and it never expires.
pub async fn login_handler(
    State(state): State<HuntState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HuntError> {
    if !state.credentials.verify(&req.username, &req.password) {
        return Err(HuntError::InvalidCredentials);
    }

    let is_admin = state.credentials.is_admin(&req.username);
    state
        .storage
        .record_login(&req.username, &req.team_captain_entry, is_admin)
        .await?;

    info!(username = %req.username, is_admin, "login recorded");

    let token = format!("token_{}_{}", req.username, Utc::now().timestamp_millis());
    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful!".to_string(),
        is_admin,
        token: Some(token),
    }))
}
