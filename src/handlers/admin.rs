use axum::{Json, extract::State};
use tracing::info;

use crate::db::UserRecord;
use crate::error::HuntError;
use crate::router::HuntState;
use crate::types::api::{Winner, WinnerRequest, WinnerResponse};

// TODO: both routes below ship without an authorization check; add one
// before exposing them beyond the event network.

/// GET /api/admin/users -> every recorded login, most recent first.
pub async fn list_users_handler(
    State(state): State<HuntState>,
) -> Result<Json<Vec<UserRecord>>, HuntError> {
    let users = state.storage.list_all().await?;
    Ok(Json(users))
}

/// POST /api/admin/declare-winner -> confirms the winner's identity by row id.
pub async fn declare_winner_handler(
    State(state): State<HuntState>,
    Json(req): Json<WinnerRequest>,
) -> Result<Json<WinnerResponse>, HuntError> {
    let user = state
        .storage
        .find_by_id(req.user_id)
        .await?
        .ok_or(HuntError::UserNotFound(req.user_id))?;

    info!(username = %user.username, team = %user.team_captain_entry, "winner declared");

    Ok(Json(WinnerResponse {
        success: true,
        message: format!(
            "Winner declared: {} (Team: {})",
            user.username, user.team_captain_entry
        ),
        winner: Winner {
            username: user.username,
            team_captain_entry: user.team_captain_entry,
        },
    }))
}
