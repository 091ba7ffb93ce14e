use super::model::{Lobby, LobbyStatus};
use sqlx::SqlitePool;

/// Current time in epoch milliseconds, evaluated by SQLite. `'now'` is fixed
/// for the duration of one statement, so both halves agree.
const SERVER_NOW_MS: &str =
    "CAST(strftime('%s', 'now') AS INTEGER) * 1000 + CAST(substr(strftime('%f', 'now'), 4) AS INTEGER)";

type LobbyRow = (String, Option<String>, String, Option<i64>, Option<String>);

#[derive(Clone)]
pub struct LobbyRepository {
    pool: SqlitePool,
}

impl LobbyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch a lobby by its normalized code.
    pub async fn get(&self, code: &str) -> Result<Option<Lobby>, sqlx::Error> {
        let row: Option<LobbyRow> = sqlx::query_as(
            "SELECT code, host_uid, status, started_at, settings FROM lobbies WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        row.map(into_lobby).transpose()
    }

    /// Set the lobby to `started` and stamp `started_at` with the store's
    /// clock. Returns false if the lobby no longer exists.
    pub async fn mark_started(&self, code: &str) -> Result<bool, sqlx::Error> {
        let sql = format!(
            "UPDATE lobbies SET status = $1, started_at = {SERVER_NOW_MS} WHERE code = $2"
        );
        let result = sqlx::query(&sql)
            .bind(LobbyStatus::Started.as_str())
            .bind(code)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Replace the lobby's settings object. Returns false if the lobby no
    /// longer exists.
    pub async fn replace_settings(
        &self,
        code: &str,
        settings: &serde_json::Value,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE lobbies SET settings = $1 WHERE code = $2")
            .bind(settings.to_string())
            .bind(code)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() == 1)
    }
}

fn into_lobby(row: LobbyRow) -> Result<Lobby, sqlx::Error> {
    let (code, host_uid, status, started_at, settings) = row;
    let settings = settings
        .map(|raw| serde_json::from_str(&raw))
        .transpose()
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

    Ok(Lobby {
        code,
        host_uid,
        status: LobbyStatus::from(status),
        started_at,
        settings,
    })
}
