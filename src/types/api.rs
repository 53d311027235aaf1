use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub team_captain_entry: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub is_admin: bool,
    pub token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WinnerRequest {
    pub user_id: i64,
}

#[derive(Debug, Serialize)]
pub struct Winner {
    pub username: String,
    pub team_captain_entry: String,
}

#[derive(Debug, Serialize)]
pub struct WinnerResponse {
    pub success: bool,
    pub message: String,
    pub winner: Winner,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: String,
    pub service: &'static str,
    pub version: &'static str,
}
