//! Events and their place in board and club lists.
//!
//! Event mutation is not restricted to any owner.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use clubhub_core::result::AppResult;
use clubhub_core::types::{Resource, new_object_id, parse_object_id};
use clubhub_database::store::{BoardStore, ClubStore, EventStore};
use clubhub_entity::event::{Event, EventPatch, NewEvent};
use clubhub_entity::validation::validate_document;

/// Manages event documents.
#[derive(Debug, Clone)]
pub struct EventService {
    events: Arc<dyn EventStore>,
    boards: Arc<dyn BoardStore>,
    clubs: Arc<dyn ClubStore>,
}

impl EventService {
    pub fn new(
        events: Arc<dyn EventStore>,
        boards: Arc<dyn BoardStore>,
        clubs: Arc<dyn ClubStore>,
    ) -> Self {
        Self {
            events,
            boards,
            clubs,
        }
    }

    /// Every event, newest first.
    pub async fn list_events(&self) -> AppResult<Vec<Event>> {
        self.events.find_all().await
    }

    /// The events in a board's list, newest first.
    pub async fn list_for_board(&self, raw_board_id: &str) -> AppResult<Vec<Event>> {
        let board_id = parse_object_id(raw_board_id, Resource::Board)?;
        let board = self
            .boards
            .find_by_id(board_id)
            .await?
            .ok_or_else(|| Resource::Board.not_found())?;
        self.events.find_by_ids(&board.events).await
    }

    pub async fn get_event(&self, raw_id: &str) -> AppResult<Event> {
        let id = parse_object_id(raw_id, Resource::Event)?;
        self.events
            .find_by_id(id)
            .await?
            .ok_or_else(|| Resource::Event.not_found())
    }

    /// Create an event on an existing board, optionally attached to a club.
    pub async fn create_event(&self, mut payload: NewEvent) -> AppResult<Event> {
        let board = self
            .resolve_board(payload.belongs_to_board.take().as_deref())
            .await?;
        let club = match payload.belongs_to_club.take() {
            Some(raw) => Some(self.resolve_club(&raw).await?),
            None => None,
        };

        let now = Utc::now();
        let event = payload.into_document(new_object_id(), board, club, now);
        validate_document(&event, Resource::Event)?;

        let event = self.events.insert(&event).await?;
        info!(event_id = %event.id, board_id = %board, "Event created");
        Ok(event)
    }

    /// Merge `patch` into an event. A changed board moves the event from
    /// the old board's list to the new one.
    pub async fn update_event(&self, raw_id: &str, mut patch: EventPatch) -> AppResult<Event> {
        let mut event = self.get_event(raw_id).await?;
        let previous_board = event.belongs_to_board;

        if let Some(raw) = patch.belongs_to_board.take() {
            let board = parse_object_id(&raw, Resource::Board)?;
            if board != previous_board {
                event.belongs_to_board = self.resolve_board(Some(&raw)).await?;
            }
        }

        patch.apply(&mut event, Utc::now());
        validate_document(&event, Resource::Event)?;

        let event = self.events.update(&event, previous_board).await?;
        if event.belongs_to_board != previous_board {
            info!(
                event_id = %event.id,
                from = %previous_board,
                to = %event.belongs_to_board,
                "Event moved to another board"
            );
        } else {
            info!(event_id = %event.id, "Event updated");
        }
        Ok(event)
    }

    /// Delete an event and pull it from its lists. Returns the deleted document.
    pub async fn delete_event(&self, raw_id: &str) -> AppResult<Event> {
        let event = self.get_event(raw_id).await?;
        self.events.delete(&event).await?;
        info!(event_id = %event.id, board_id = %event.belongs_to_board, "Event deleted");
        Ok(event)
    }

    async fn resolve_board(&self, raw: Option<&str>) -> AppResult<Uuid> {
        let raw = raw.ok_or_else(|| Resource::Board.not_found())?;
        let id = parse_object_id(raw, Resource::Board)?;
        match self.boards.find_by_id(id).await? {
            Some(board) => Ok(board.id),
            None => Err(Resource::Board.not_found()),
        }
    }

    async fn resolve_club(&self, raw: &str) -> AppResult<Uuid> {
        let id = parse_object_id(raw, Resource::Club)?;
        match self.clubs.find_by_id(id).await? {
            Some(club) => Ok(club.id),
            None => Err(Resource::Club.not_found()),
        }
    }
}
