use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One recorded login. The row's `password` column is a fixed sentinel and
/// is never read back, so it has no field here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub team_captain_entry: String,
    pub login_time: DateTime<Utc>,
    pub is_admin: bool,
}
