use super::code::{non_empty, normalize_code};
use super::messages::{Ack, LobbyQuery, LobbyResponse, StartGameRequest, UpdateSettingsRequest};
use crate::AppState;
use crate::error::ApiError;
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use tracing::info;

/// Move a lobby from `waiting` to `started` on behalf of its host.
///
/// The update is applied unconditionally once the host check passes, so a
/// repeated request simply re-stamps `started_at`.
pub async fn start_game(
    State(state): State<AppState>,
    payload: Result<Json<StartGameRequest>, JsonRejection>,
) -> Result<Json<Ack>, ApiError> {
    let Json(request) = payload?;

    let (Some(lobby_code), Some(host_id)) = (
        normalize_code(request.lobby_code.as_deref()),
        non_empty(request.host_id),
    ) else {
        return Err(ApiError::validation("Missing lobbyCode or hostId"));
    };

    let lobby = state.lobbies.get(&lobby_code).await?.ok_or(ApiError::NotFound)?;
    if !lobby.is_hosted_by(&host_id) {
        return Err(ApiError::Forbidden("Only host can start the game"));
    }

    if !state.lobbies.mark_started(&lobby_code).await? {
        return Err(ApiError::NotFound);
    }

    info!(lobby_code, host_id, previous = %lobby.status, "Lobby started");
    Ok(Json(Ack::ok()))
}

/// Replace a lobby's settings object on behalf of its host.
pub async fn update_settings(
    State(state): State<AppState>,
    payload: Result<Json<UpdateSettingsRequest>, JsonRejection>,
) -> Result<Json<Ack>, ApiError> {
    let Json(request) = payload?;

    let (Some(lobby_code), Some(host_id), Some(settings)) = (
        normalize_code(request.lobby_code.as_deref()),
        non_empty(request.host_id),
        request.settings,
    ) else {
        return Err(ApiError::validation(
            "Missing lobbyCode, hostId, or settings",
        ));
    };
    if !settings.is_object() {
        return Err(ApiError::validation("settings must be a JSON object"));
    }

    let lobby = state.lobbies.get(&lobby_code).await?.ok_or(ApiError::NotFound)?;
    if !lobby.is_hosted_by(&host_id) {
        return Err(ApiError::Forbidden("Only host can update settings"));
    }

    if !state.lobbies.replace_settings(&lobby_code, &settings).await? {
        return Err(ApiError::NotFound);
    }

    info!(lobby_code, host_id, "Lobby settings updated");
    Ok(Json(Ack::ok()))
}

/// Read a lobby by code for clients polling its state.
pub async fn get_lobby(
    State(state): State<AppState>,
    query: Result<Query<LobbyQuery>, QueryRejection>,
) -> Result<Json<LobbyResponse>, ApiError> {
    let Query(query) = query?;
    let Some(lobby_code) = normalize_code(query.lobby_code.as_deref()) else {
        return Err(ApiError::validation("Missing lobbyCode"));
    };

    let lobby = state.lobbies.get(&lobby_code).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(LobbyResponse::new(lobby)))
}

/// Wrong-method requests still get the JSON failure body.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
