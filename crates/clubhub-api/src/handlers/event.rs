//! Event handlers. Event routes do not require authentication.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use clubhub_entity::event::{Event, EventPatch, NewEvent};

use crate::error::ApiResult;
use crate::extractors::JsonBody;
use crate::state::AppState;

/// GET /api/events
pub async fn list_events(State(state): State<AppState>) -> ApiResult<Json<Vec<Event>>> {
    Ok(Json(state.event_service.list_events().await?))
}

/// GET /api/boards/{id}/events
pub async fn list_board_events(
    State(state): State<AppState>,
    Path(board_id): Path<String>,
) -> ApiResult<Json<Vec<Event>>> {
    Ok(Json(state.event_service.list_for_board(&board_id).await?))
}

/// GET /api/events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Event>> {
    Ok(Json(state.event_service.get_event(&id).await?))
}

/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewEvent>,
) -> ApiResult<(StatusCode, Json<Event>)> {
    let event = state.event_service.create_event(payload).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// PATCH /api/events/{id}
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<EventPatch>,
) -> ApiResult<Json<Event>> {
    Ok(Json(state.event_service.update_event(&id, patch).await?))
}

/// DELETE /api/events/{id}
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Event>> {
    Ok(Json(state.event_service.delete_event(&id).await?))
}
