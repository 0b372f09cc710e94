//! Board repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use clubhub_core::error::{AppError, ErrorKind};
use clubhub_core::result::AppResult;
use clubhub_entity::board::Board;

use crate::store::BoardStore;

/// PostgreSQL-backed [`BoardStore`].
#[derive(Debug, Clone)]
pub struct BoardRepository {
    pool: PgPool,
}

impl BoardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BoardStore for BoardRepository {
    async fn find_public(&self) -> AppResult<Vec<Board>> {
        sqlx::query_as::<_, Board>(
            "SELECT * FROM boards WHERE public_status = TRUE ORDER BY name ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list boards", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Board>> {
        sqlx::query_as::<_, Board>("SELECT * FROM boards WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find board", e))
    }

    async fn insert(&self, board: &Board) -> AppResult<Board> {
        sqlx::query_as::<_, Board>(
            r#"
            INSERT INTO boards (
                id, name, about, public_status, owner, admins, subscribers,
                location, events, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(board.id)
        .bind(&board.name)
        .bind(&board.about)
        .bind(board.public_status)
        .bind(&board.owner)
        .bind(&board.admins)
        .bind(&board.subscribers)
        .bind(&board.location)
        .bind(&board.events)
        .bind(board.created_at)
        .bind(board.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create board", e))
    }

    async fn update(&self, board: &Board) -> AppResult<Board> {
        sqlx::query_as::<_, Board>(
            r#"
            UPDATE boards SET
                name = $2, about = $3, public_status = $4, admins = $5,
                subscribers = $6, location = $7, updated_at = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(board.id)
        .bind(&board.name)
        .bind(&board.about)
        .bind(board.public_status)
        .bind(&board.admins)
        .bind(&board.subscribers)
        .bind(&board.location)
        .bind(board.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update board", e))?
        .ok_or_else(|| AppError::not_found("Board not found."))
    }

    async fn delete_cascade(&self, board: &Board) -> AppResult<()> {
        let db_err =
            |e: sqlx::Error| AppError::with_source(ErrorKind::Database, "Failed to delete board", e);

        let mut tx = self.pool.begin().await.map_err(db_err)?;

        let events: Vec<Uuid> =
            sqlx::query_scalar("SELECT id FROM events WHERE belongs_to_board = $1 OR id = ANY($2)")
                .bind(board.id)
                .bind(&board.events)
                .fetch_all(&mut *tx)
                .await
                .map_err(db_err)?;

        if !events.is_empty() {
            sqlx::query(
                r#"
                UPDATE clubs
                SET events = ARRAY(SELECT e FROM unnest(events) AS e WHERE e <> ALL($1))
                WHERE events && $1
                "#,
            )
            .bind(&events)
            .execute(&mut *tx)
            .await
            .map_err(db_err)?;

            sqlx::query("DELETE FROM events WHERE id = ANY($1)")
                .bind(&events)
                .execute(&mut *tx)
                .await
                .map_err(db_err)?;
        }

        sqlx::query("DELETE FROM boards WHERE id = $1")
            .bind(board.id)
            .execute(&mut *tx)
            .await
            .map_err(db_err)?;

        tx.commit().await.map_err(db_err)
    }
}
