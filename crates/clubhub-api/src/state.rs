//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use clubhub_auth::JwtDecoder;
use clubhub_core::config::AppConfig;
use clubhub_database::{StoreHealth, Stores};
use clubhub_service::{BoardService, ClubService, EventService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    pub config: Arc<AppConfig>,
    /// When the process started serving.
    pub started_at: Instant,

    // ── Infrastructure ───────────────────────────────────────
    /// Connectivity check of the active store.
    pub store_health: Arc<dyn StoreHealth>,
    /// Identity token verifier.
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Services ─────────────────────────────────────────────
    pub club_service: Arc<ClubService>,
    pub event_service: Arc<EventService>,
    pub board_service: Arc<BoardService>,
}

impl AppState {
    /// Wire the services on top of `stores`.
    pub fn new(config: AppConfig, stores: Stores) -> Self {
        let club_service = ClubService::new(
            Arc::clone(&stores.clubs),
            Arc::clone(&stores.events),
            config.clubs.auto_validate,
        );
        let event_service = EventService::new(
            Arc::clone(&stores.events),
            Arc::clone(&stores.boards),
            Arc::clone(&stores.clubs),
        );
        let board_service = BoardService::new(Arc::clone(&stores.boards));

        Self {
            jwt_decoder: Arc::new(JwtDecoder::new(&config.auth)),
            config: Arc::new(config),
            started_at: Instant::now(),
            store_health: stores.health,
            club_service: Arc::new(club_service),
            event_service: Arc::new(event_service),
            board_service: Arc::new(board_service),
        }
    }
}
