use sqlx::SqlitePool;

#[sqlx::test]
async fn migrations_create_lobbies_table(pool: SqlitePool) {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM lobbies")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}

#[sqlx::test]
async fn new_lobby_defaults_to_waiting(pool: SqlitePool) {
    sqlx::query("INSERT INTO lobbies (code, host_uid) VALUES ($1, $2)")
        .bind("ABC1")
        .bind("alice")
        .execute(&pool)
        .await
        .unwrap();

    let row: (String, Option<i64>) =
        sqlx::query_as("SELECT status, started_at FROM lobbies WHERE code = $1")
            .bind("ABC1")
            .fetch_one(&pool)
            .await
            .unwrap();

    assert_eq!(row.0, "waiting");
    assert!(row.1.is_none());
}

#[sqlx::test]
async fn lobby_codes_are_unique(pool: SqlitePool) {
    let insert = "INSERT INTO lobbies (code, host_uid) VALUES ('ABC1', 'alice')";
    sqlx::query(insert).execute(&pool).await.unwrap();

    assert!(sqlx::query(insert).execute(&pool).await.is_err());
}
