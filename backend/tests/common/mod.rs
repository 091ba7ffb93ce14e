#![allow(dead_code)]

use sqlx::SqlitePool;
use tokio::net::TcpListener;

pub struct TestServer {
    base_url: String,
    pub pool: SqlitePool,
}

impl TestServer {
    pub fn http_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn post(&self, path: &str, body: serde_json::Value) -> (u16, serde_json::Value) {
        let response = reqwest::Client::new()
            .post(self.http_url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = response.status().as_u16();
        (status, response.json().await.unwrap())
    }

    pub async fn get(&self, path: &str) -> (u16, serde_json::Value) {
        let response = reqwest::get(self.http_url(path)).await.unwrap();
        let status = response.status().as_u16();
        (status, response.json().await.unwrap())
    }
}

pub async fn spawn_test_server() -> TestServer {
    let pool = lobbykeeper::db::connect_in_memory().await.unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let app = lobbykeeper::app(pool.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        base_url: format!("http://{}", addr),
        pool,
    }
}

/// Insert a waiting lobby the way the lobby-creation flow would.
pub async fn create_lobby(pool: &SqlitePool, code: &str, host_uid: &str) {
    sqlx::query("INSERT INTO lobbies (code, host_uid, status) VALUES ($1, $2, 'waiting')")
        .bind(code)
        .bind(host_uid)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn lobby_status(pool: &SqlitePool, code: &str) -> (String, Option<i64>) {
    sqlx::query_as("SELECT status, started_at FROM lobbies WHERE code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn now_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis() as i64
}
