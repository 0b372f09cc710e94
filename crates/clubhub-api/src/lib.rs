//! # clubhub-api
//!
//! HTTP API layer for ClubHub built on Axum.
//!
//! Provides the REST endpoints for clubs, events, boards and health,
//! the bearer-token extractor, request logging and CORS middleware, and
//! the mapping from [`clubhub_core::AppError`] to `{ "error": ... }`
//! responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use state::AppState;
