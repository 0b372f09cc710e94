//! Board handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use clubhub_entity::board::{Board, BoardPatch, NewBoard};

use crate::error::ApiResult;
use crate::extractors::{AuthUser, JsonBody};
use crate::state::AppState;

/// GET /api/boards
pub async fn list_boards(State(state): State<AppState>) -> ApiResult<Json<Vec<Board>>> {
    Ok(Json(state.board_service.list_boards().await?))
}

/// GET /api/boards/{id}
pub async fn get_board(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Board>> {
    Ok(Json(state.board_service.get_board(&id).await?))
}

/// POST /api/boards
pub async fn create_board(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(payload): JsonBody<NewBoard>,
) -> ApiResult<(StatusCode, Json<Board>)> {
    let board = state.board_service.create_board(&auth, payload).await?;
    Ok((StatusCode::CREATED, Json(board)))
}

/// PATCH /api/boards/{id}
pub async fn update_board(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<BoardPatch>,
) -> ApiResult<Json<Board>> {
    Ok(Json(state.board_service.update_board(&auth, &id, patch).await?))
}

/// DELETE /api/boards/{id}
pub async fn delete_board(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Board>> {
    Ok(Json(state.board_service.delete_board(&auth, &id).await?))
}
