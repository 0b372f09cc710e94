//! Event repository implementation.
//!
//! Every write that changes an event's membership also updates the
//! `events` arrays of the referenced board and club inside the same
//! transaction.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use clubhub_core::error::{AppError, ErrorKind};
use clubhub_core::result::AppResult;
use clubhub_entity::event::Event;

use crate::store::EventStore;

/// PostgreSQL-backed [`EventStore`].
#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_error(message: &'static str) -> impl Fn(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::Database, message, e)
}

async fn push_to_board(
    tx: &mut Transaction<'_, Postgres>,
    board_id: Uuid,
    event_id: Uuid,
) -> Result<u64, sqlx::Error> {
    sqlx::query(
        "UPDATE boards SET events = array_append(events, $2), updated_at = NOW() WHERE id = $1",
    )
    .bind(board_id)
    .bind(event_id)
    .execute(&mut **tx)
    .await
    .map(|r| r.rows_affected())
}

#[async_trait]
impl EventStore for EventRepository {
    async fn find_all(&self) -> AppResult<Vec<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY created_at DESC, id DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list events"))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find event"))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Event>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, Event>(
            "SELECT * FROM events WHERE id = ANY($1) ORDER BY created_at DESC, id DESC",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list events"))
    }

    async fn insert(&self, event: &Event) -> AppResult<Event> {
        let err = db_error("Failed to create event");
        let mut tx = self.pool.begin().await.map_err(&err)?;

        // Lists before the row: a missing board or club is a not-found,
        // never a foreign key violation.
        if push_to_board(&mut tx, event.belongs_to_board, event.id)
            .await
            .map_err(&err)?
            == 0
        {
            return Err(AppError::not_found("Board not found."));
        }

        if let Some(club_id) = event.belongs_to_club {
            let updated = sqlx::query(
                "UPDATE clubs SET events = array_append(events, $2), updated_at = NOW() WHERE id = $1",
            )
            .bind(club_id)
            .bind(event.id)
            .execute(&mut *tx)
            .await
            .map_err(&err)?
            .rows_affected();
            if updated == 0 {
                return Err(AppError::not_found("Club not found."));
            }
        }

        let created = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (
                id, title, description, contact, tags, date, time, location,
                preview, belongs_to_board, belongs_to_club, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(event.id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.contact)
        .bind(&event.tags)
        .bind(event.date)
        .bind(&event.time)
        .bind(&event.location)
        .bind(&event.preview)
        .bind(event.belongs_to_board)
        .bind(event.belongs_to_club)
        .bind(event.created_at)
        .bind(event.updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(&err)?;

        tx.commit().await.map_err(&err)?;
        Ok(created)
    }

    async fn update(&self, event: &Event, previous_board: Uuid) -> AppResult<Event> {
        let err = db_error("Failed to update event");
        let mut tx = self.pool.begin().await.map_err(&err)?;

        if previous_board != event.belongs_to_board {
            sqlx::query(
                "UPDATE boards SET events = array_remove(events, $2), updated_at = NOW() WHERE id = $1",
            )
            .bind(previous_board)
            .bind(event.id)
            .execute(&mut *tx)
            .await
            .map_err(&err)?;

            if push_to_board(&mut tx, event.belongs_to_board, event.id)
                .await
                .map_err(&err)?
                == 0
            {
                return Err(AppError::not_found("Board not found."));
            }
        }

        let updated = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events SET
                title = $2, description = $3, contact = $4, tags = $5, date = $6,
                time = $7, location = $8, preview = $9, belongs_to_board = $10,
                updated_at = $11
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(event.id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.contact)
        .bind(&event.tags)
        .bind(event.date)
        .bind(&event.time)
        .bind(&event.location)
        .bind(&event.preview)
        .bind(event.belongs_to_board)
        .bind(event.updated_at)
        .fetch_optional(&mut *tx)
        .await
        .map_err(&err)?
        .ok_or_else(|| AppError::not_found("Event not found."))?;

        tx.commit().await.map_err(&err)?;
        Ok(updated)
    }

    async fn delete(&self, event: &Event) -> AppResult<()> {
        let err = db_error("Failed to delete event");
        let mut tx = self.pool.begin().await.map_err(&err)?;

        sqlx::query(
            "UPDATE boards SET events = array_remove(events, $1), updated_at = NOW() WHERE $1 = ANY(events)",
        )
        .bind(event.id)
        .execute(&mut *tx)
        .await
        .map_err(&err)?;

        sqlx::query(
            "UPDATE clubs SET events = array_remove(events, $1), updated_at = NOW() WHERE $1 = ANY(events)",
        )
        .bind(event.id)
        .execute(&mut *tx)
        .await
        .map_err(&err)?;

        sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(event.id)
            .execute(&mut *tx)
            .await
            .map_err(&err)?;

        tx.commit().await.map_err(&err)
    }
}
