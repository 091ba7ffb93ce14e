use sqlx::SqlitePool;

pub struct NewLobby {
    pub code: String,
    pub host_uid: String,
    pub settings: Option<serde_json::Value>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum SeedOutcome {
    Inserted,
    Replaced,
    AlreadyExists,
}

/// Insert a waiting lobby. With `replace`, an existing lobby with the same
/// code is reset to waiting under the new host.
pub async fn seed_lobby(
    pool: &SqlitePool,
    lobby: &NewLobby,
    replace: bool,
) -> Result<SeedOutcome, sqlx::Error> {
    let code = lobby.code.to_uppercase();
    let settings = lobby.settings.as_ref().map(|s| s.to_string());

    let existing: Option<(String,)> = sqlx::query_as("SELECT code FROM lobbies WHERE code = $1")
        .bind(&code)
        .fetch_optional(pool)
        .await?;

    if existing.is_some() && !replace {
        return Ok(SeedOutcome::AlreadyExists);
    }

    sqlx::query(
        "INSERT OR REPLACE INTO lobbies (code, host_uid, status, started_at, settings) \
         VALUES ($1, $2, 'waiting', NULL, $3)",
    )
    .bind(&code)
    .bind(&lobby.host_uid)
    .bind(settings)
    .execute(pool)
    .await?;

    Ok(if existing.is_some() {
        SeedOutcome::Replaced
    } else {
        SeedOutcome::Inserted
    })
}
