//! Club handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use clubhub_entity::club::{Club, ClubPatch, ClubPreview};
use clubhub_entity::event::EventSummary;

use crate::dto::ClubListQuery;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ClubForm, JsonBody};
use crate::state::AppState;

/// GET /api/clubs
pub async fn list_clubs(
    State(state): State<AppState>,
    Query(query): Query<ClubListQuery>,
) -> ApiResult<Json<Vec<ClubPreview>>> {
    let previews = state
        .club_service
        .list_previews(&query.into_filter())
        .await?;
    Ok(Json(previews))
}

/// GET /api/clubs/{id}
pub async fn get_club(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Club>> {
    Ok(Json(state.club_service.get_club(&id).await?))
}

/// GET /api/clubs/{id}/events
pub async fn get_club_events(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<EventSummary>>> {
    Ok(Json(state.club_service.get_events(&id).await?))
}

/// POST /api/clubs
pub async fn create_club(
    State(state): State<AppState>,
    auth: AuthUser,
    form: ClubForm,
) -> ApiResult<(StatusCode, Json<Club>)> {
    let club = state
        .club_service
        .create_club(&auth, form.club, form.logo)
        .await?;
    Ok((StatusCode::CREATED, Json(club)))
}

/// PATCH /api/clubs/{id}
pub async fn update_club(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<ClubPatch>,
) -> ApiResult<Json<Club>> {
    Ok(Json(state.club_service.update_club(&auth, &id, patch).await?))
}

/// DELETE /api/clubs/{id}
pub async fn delete_club(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Club>> {
    Ok(Json(state.club_service.delete_club(&auth, &id).await?))
}
