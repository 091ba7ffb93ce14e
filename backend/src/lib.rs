pub mod db;
pub mod error;
pub mod lobby;

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use lobby::{LobbyRepository, handlers};
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};

async fn health() -> &'static str {
    "ok"
}

#[derive(Clone)]
pub struct AppState {
    pub lobbies: LobbyRepository,
}

/// Browsers call the endpoints directly from the game client.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn app(pool: SqlitePool) -> Router {
    let state = AppState {
        lobbies: LobbyRepository::new(pool),
    };

    Router::new()
        .route("/health", get(health))
        .route(
            "/startGame",
            post(handlers::start_game).fallback(handlers::method_not_allowed),
        )
        .route(
            "/updateSettings",
            post(handlers::update_settings).fallback(handlers::method_not_allowed),
        )
        .route(
            "/getLobby",
            get(handlers::get_lobby).fallback(handlers::method_not_allowed),
        )
        .layer(cors())
        .with_state(state)
}
