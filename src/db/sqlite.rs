use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use tokio::sync::Mutex;

use crate::db::models::UserRecord;
use crate::db::schema::SQLITE_INIT;
use crate::error::HuntError;

pub type SqlitePool = Pool<Sqlite>;

/// Sentinel stored in the `password` column instead of the real password.
const PASSWORD_SENTINEL: &str = "***";

/// How long a session waits on a locked database file before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct UserStorage {
    pool: SqlitePool,
    // SQLite's file-level locking does not reliably serialize concurrent
    // writers under load; sessions are serialized here instead. Clones
    // share the same lock.
    db_lock: Arc<Mutex<()>>,
}

impl UserStorage {
    /// Open (creating if missing) the database file and initialize the schema.
    pub async fn connect(database_url: &str) -> Result<Self, HuntError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .busy_timeout(BUSY_TIMEOUT);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;

        let storage = Self {
            pool,
            db_lock: Arc::new(Mutex::new(())),
        };
        storage.init_schema().await?;
        Ok(storage)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL. Idempotent.
    async fn init_schema(&self) -> Result<(), HuntError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Upsert by unique username, refreshing the login timestamp. Returns
    /// the row id, which a replacement keeps stable.
    /// Uses SQLite `INSERT ... ON CONFLICT(username) DO UPDATE`.
    pub async fn record_login(
        &self,
        username: &str,
        team_captain_entry: &str,
        is_admin: bool,
    ) -> Result<i64, HuntError> {
        let _guard = self.db_lock.lock().await;

        sqlx::query(
            r#"
            INSERT INTO users (username, password, team_captain_entry, login_time, is_admin)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(username) DO UPDATE SET
                password=excluded.password,
                team_captain_entry=excluded.team_captain_entry,
                login_time=excluded.login_time,
                is_admin=excluded.is_admin
            "#,
        )
        .bind(username)
        .bind(PASSWORD_SENTINEL)
        .bind(team_captain_entry)
        .bind(Utc::now())
        .bind(is_admin)
        .execute(&self.pool)
        .await?;

        // Fetch id after upsert
        let rec: (i64,) = sqlx::query_as("SELECT id FROM users WHERE username = ?")
            .bind(username)
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }

    /// Every recorded login, most recent first. Unbounded.
    pub async fn list_all(&self) -> Result<Vec<UserRecord>, HuntError> {
        let _guard = self.db_lock.lock().await;

        let rows = sqlx::query_as::<_, UserRecord>(
            r#"SELECT id, username, team_captain_entry, login_time, is_admin
               FROM users ORDER BY login_time DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>, HuntError> {
        let _guard = self.db_lock.lock().await;

        let row = sqlx::query_as::<_, UserRecord>(
            r#"SELECT id, username, team_captain_entry, login_time, is_admin
               FROM users WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}
