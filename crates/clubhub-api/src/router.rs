//! Route definitions for the ClubHub HTTP API.
//!
//! All routes are organized by resource and mounted under `/api`.

use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware as axum_middleware,
    routing::get,
};
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.server.max_upload_size_bytes as usize;
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    let api_routes = Router::new()
        .merge(club_routes())
        .merge(event_routes())
        .merge(board_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(request_timeout(timeout))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Requests running past `timeout` are answered with `408 Request Timeout`.
fn request_timeout(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

/// Club listing, profiles and their events
fn club_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/clubs",
            get(handlers::club::list_clubs).post(handlers::club::create_club),
        )
        .route(
            "/clubs/{id}",
            get(handlers::club::get_club)
                .patch(handlers::club::update_club)
                .delete(handlers::club::delete_club),
        )
        .route("/clubs/{id}/events", get(handlers::club::get_club_events))
}

/// Event CRUD
fn event_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/events",
            get(handlers::event::list_events).post(handlers::event::create_event),
        )
        .route(
            "/events/{id}",
            get(handlers::event::get_event)
                .patch(handlers::event::update_event)
                .delete(handlers::event::delete_event),
        )
}

/// Board CRUD and the events posted to a board
fn board_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/boards",
            get(handlers::board::list_boards).post(handlers::board::create_board),
        )
        .route(
            "/boards/{id}",
            get(handlers::board::get_board)
                .patch(handlers::board::update_board)
                .delete(handlers::board::delete_board),
        )
        .route("/boards/{id}/events", get(handlers::event::list_board_events))
}

/// Liveness and store connectivity
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
