//! Store traits shared by the PostgreSQL and in-memory backends.
//!
//! Writes that touch several documents (an event and the lists that
//! reference it) are single trait calls so that each backend can apply
//! them atomically.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use clubhub_core::result::AppResult;
use clubhub_entity::board::Board;
use clubhub_entity::club::{Club, ClubFilter, ClubPreview};
use clubhub_entity::event::Event;

/// Club persistence.
#[async_trait]
pub trait ClubStore: Send + Sync + std::fmt::Debug + 'static {
    /// Summaries of the clubs matching `filter`, sorted by name ascending.
    async fn find_previews(&self, filter: &ClubFilter) -> AppResult<Vec<ClubPreview>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Club>>;

    /// Insert a new club and return the stored document.
    async fn insert(&self, club: &Club) -> AppResult<Club>;

    /// Overwrite the patchable fields of an existing club.
    async fn update(&self, club: &Club) -> AppResult<Club>;

    /// Delete the club together with every event in its list. The deleted
    /// events are also pulled from any board list.
    async fn delete_cascade(&self, club: &Club) -> AppResult<()>;
}

/// Event persistence, including maintenance of board and club lists.
#[async_trait]
pub trait EventStore: Send + Sync + std::fmt::Debug + 'static {
    /// Every event, newest first.
    async fn find_all(&self) -> AppResult<Vec<Event>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Event>>;

    /// The events among `ids` that still exist, newest first.
    async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Event>>;

    /// Insert the event and append its id to its board's list and, when
    /// set, its club's list.
    async fn insert(&self, event: &Event) -> AppResult<Event>;

    /// Overwrite an event. When `previous_board` differs from
    /// `event.belongs_to_board` the id is moved between the two lists.
    async fn update(&self, event: &Event, previous_board: Uuid) -> AppResult<Event>;

    /// Delete the event and pull its id from every board and club list.
    async fn delete(&self, event: &Event) -> AppResult<()>;
}

/// Board persistence.
#[async_trait]
pub trait BoardStore: Send + Sync + std::fmt::Debug + 'static {
    /// Public boards sorted by name ascending.
    async fn find_public(&self) -> AppResult<Vec<Board>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Board>>;

    async fn insert(&self, board: &Board) -> AppResult<Board>;

    async fn update(&self, board: &Board) -> AppResult<Board>;

    /// Delete the board and every event in its list. The deleted events
    /// are also pulled from any club list.
    async fn delete_cascade(&self, board: &Board) -> AppResult<()>;
}

/// Connectivity check for the health endpoint.
#[async_trait]
pub trait StoreHealth: Send + Sync + std::fmt::Debug + 'static {
    /// Short backend name, e.g. `postgres`.
    fn provider(&self) -> &'static str;

    async fn ping(&self) -> AppResult<bool>;
}

/// The full set of stores handed to the service layer.
#[derive(Debug, Clone)]
pub struct Stores {
    pub clubs: Arc<dyn ClubStore>,
    pub events: Arc<dyn EventStore>,
    pub boards: Arc<dyn BoardStore>,
    pub health: Arc<dyn StoreHealth>,
}

impl Stores {
    /// PostgreSQL-backed stores sharing one pool.
    pub fn postgres(db: crate::DatabasePool) -> Self {
        use crate::repositories::{BoardRepository, ClubRepository, EventRepository};

        let pool = db.pool().clone();
        Self {
            clubs: Arc::new(ClubRepository::new(pool.clone())),
            events: Arc::new(EventRepository::new(pool.clone())),
            boards: Arc::new(BoardRepository::new(pool)),
            health: Arc::new(db),
        }
    }

    /// Stores backed by a single in-memory instance.
    pub fn memory(store: Arc<crate::MemoryStore>) -> Self {
        Self {
            clubs: store.clone(),
            events: store.clone(),
            boards: store.clone(),
            health: store,
        }
    }
}
