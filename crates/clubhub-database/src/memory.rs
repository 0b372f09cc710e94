//! In-memory store built on `dashmap`.
//!
//! Each collection is its own concurrent map. Writes that touch more than
//! one collection take a store-wide write lock so that list maintenance
//! is never observed half done. Nothing survives a restart.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use clubhub_core::error::AppError;
use clubhub_core::result::AppResult;
use clubhub_entity::board::Board;
use clubhub_entity::club::{Club, ClubFilter, ClubPreview};
use clubhub_entity::event::Event;

use crate::store::{BoardStore, ClubStore, EventStore, StoreHealth};

/// Process-local implementation of every store trait.
#[derive(Debug, Default)]
pub struct MemoryStore {
    clubs: DashMap<Uuid, Club>,
    events: DashMap<Uuid, Event>,
    boards: DashMap<Uuid, Board>,
    writes: Mutex<()>,
    queries: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of store calls served so far.
    pub fn queries(&self) -> u64 {
        self.queries.load(Ordering::Relaxed)
    }

    fn touch(&self) {
        self.queries.fetch_add(1, Ordering::Relaxed);
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.writes.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn newest_first(mut events: Vec<Event>) -> Vec<Event> {
        events.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        events
    }

    /// Remove the given events and pull their ids from every list.
    fn purge_events(&self, ids: &[Uuid]) {
        for id in ids {
            self.events.remove(id);
        }
        for mut board in self.boards.iter_mut() {
            board.events.retain(|e| !ids.contains(e));
        }
        for mut club in self.clubs.iter_mut() {
            club.events.retain(|e| !ids.contains(e));
        }
    }

    fn update_club(&self, club: &Club) -> AppResult<Club> {
        let _guard = self.lock();
        let mut stored = self
            .clubs
            .get_mut(&club.id)
            .ok_or_else(|| AppError::not_found("Club not found."))?;

        let updated = Club {
            owner: stored.owner.clone(),
            events: stored.events.clone(),
            validation: stored.validation,
            logo: stored.logo.clone(),
            created_at: stored.created_at,
            ..club.clone()
        };
        *stored = updated.clone();
        Ok(updated)
    }

    fn delete_club(&self, club: &Club) {
        let _guard = self.lock();
        let mut doomed: Vec<Uuid> = self
            .clubs
            .get(&club.id)
            .map(|c| c.events.clone())
            .unwrap_or_else(|| club.events.clone());
        doomed.extend(
            self.events
                .iter()
                .filter(|e| e.belongs_to_club == Some(club.id))
                .map(|e| e.id),
        );
        self.purge_events(&doomed);
        self.clubs.remove(&club.id);
    }

    fn insert_event(&self, event: &Event) -> AppResult<Event> {
        let _guard = self.lock();
        if !self.boards.contains_key(&event.belongs_to_board) {
            return Err(AppError::not_found("Board not found."));
        }
        if let Some(club_id) = event.belongs_to_club {
            if !self.clubs.contains_key(&club_id) {
                return Err(AppError::not_found("Club not found."));
            }
        }

        self.events.insert(event.id, event.clone());
        if let Some(mut board) = self.boards.get_mut(&event.belongs_to_board) {
            board.events.push(event.id);
        }
        if let Some(club_id) = event.belongs_to_club {
            if let Some(mut club) = self.clubs.get_mut(&club_id) {
                club.events.push(event.id);
            }
        }
        Ok(event.clone())
    }

    fn update_event(&self, event: &Event, previous_board: Uuid) -> AppResult<Event> {
        let _guard = self.lock();
        let (belongs_to_club, created_at) = match self.events.get(&event.id) {
            Some(stored) => (stored.belongs_to_club, stored.created_at),
            None => return Err(AppError::not_found("Event not found.")),
        };

        if previous_board != event.belongs_to_board {
            if !self.boards.contains_key(&event.belongs_to_board) {
                return Err(AppError::not_found("Board not found."));
            }
            if let Some(mut old) = self.boards.get_mut(&previous_board) {
                old.events.retain(|e| *e != event.id);
            }
            if let Some(mut new) = self.boards.get_mut(&event.belongs_to_board) {
                new.events.push(event.id);
            }
        }

        let updated = Event {
            belongs_to_club,
            created_at,
            ..event.clone()
        };
        self.events.insert(event.id, updated.clone());
        Ok(updated)
    }

    fn delete_event(&self, event: &Event) {
        let _guard = self.lock();
        self.purge_events(&[event.id]);
    }

    fn update_board(&self, board: &Board) -> AppResult<Board> {
        let _guard = self.lock();
        let mut stored = self
            .boards
            .get_mut(&board.id)
            .ok_or_else(|| AppError::not_found("Board not found."))?;

        let updated = Board {
            owner: stored.owner.clone(),
            events: stored.events.clone(),
            created_at: stored.created_at,
            ..board.clone()
        };
        *stored = updated.clone();
        Ok(updated)
    }

    fn delete_board(&self, board: &Board) {
        let _guard = self.lock();
        let mut doomed: Vec<Uuid> = self
            .boards
            .get(&board.id)
            .map(|b| b.events.clone())
            .unwrap_or_else(|| board.events.clone());
        doomed.extend(
            self.events
                .iter()
                .filter(|e| e.belongs_to_board == board.id)
                .map(|e| e.id),
        );
        self.purge_events(&doomed);
        self.boards.remove(&board.id);
    }
}

#[async_trait]
impl ClubStore for MemoryStore {
    async fn find_previews(&self, filter: &ClubFilter) -> AppResult<Vec<ClubPreview>> {
        self.touch();
        let mut previews: Vec<ClubPreview> = self
            .clubs
            .iter()
            .filter(|c| filter.matches(c.value()))
            .map(|c| ClubPreview::from(c.value()))
            .collect();
        previews.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(previews)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Club>> {
        self.touch();
        Ok(self.clubs.get(&id).map(|c| c.value().clone()))
    }

    async fn insert(&self, club: &Club) -> AppResult<Club> {
        self.touch();
        self.clubs.insert(club.id, club.clone());
        Ok(club.clone())
    }

    async fn update(&self, club: &Club) -> AppResult<Club> {
        self.touch();
        self.update_club(club)
    }

    async fn delete_cascade(&self, club: &Club) -> AppResult<()> {
        self.touch();
        self.delete_club(club);
        Ok(())
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn find_all(&self) -> AppResult<Vec<Event>> {
        self.touch();
        Ok(Self::newest_first(
            self.events.iter().map(|e| e.value().clone()).collect(),
        ))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Event>> {
        self.touch();
        Ok(self.events.get(&id).map(|e| e.value().clone()))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Event>> {
        self.touch();
        Ok(Self::newest_first(
            ids.iter()
                .filter_map(|id| self.events.get(id).map(|e| e.value().clone()))
                .collect(),
        ))
    }

    async fn insert(&self, event: &Event) -> AppResult<Event> {
        self.touch();
        self.insert_event(event)
    }

    async fn update(&self, event: &Event, previous_board: Uuid) -> AppResult<Event> {
        self.touch();
        self.update_event(event, previous_board)
    }

    async fn delete(&self, event: &Event) -> AppResult<()> {
        self.touch();
        self.delete_event(event);
        Ok(())
    }
}

#[async_trait]
impl BoardStore for MemoryStore {
    async fn find_public(&self) -> AppResult<Vec<Board>> {
        self.touch();
        let mut boards: Vec<Board> = self
            .boards
            .iter()
            .filter(|b| b.public_status)
            .map(|b| b.value().clone())
            .collect();
        boards.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(boards)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Board>> {
        self.touch();
        Ok(self.boards.get(&id).map(|b| b.value().clone()))
    }

    async fn insert(&self, board: &Board) -> AppResult<Board> {
        self.touch();
        self.boards.insert(board.id, board.clone());
        Ok(board.clone())
    }

    async fn update(&self, board: &Board) -> AppResult<Board> {
        self.touch();
        self.update_board(board)
    }

    async fn delete_cascade(&self, board: &Board) -> AppResult<()> {
        self.touch();
        self.delete_board(board);
        Ok(())
    }
}

#[async_trait]
impl StoreHealth for MemoryStore {
    fn provider(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> AppResult<bool> {
        Ok(true)
    }
}
