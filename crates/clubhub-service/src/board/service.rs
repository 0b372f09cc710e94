//! Boards: the aggregation root for events.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use clubhub_core::error::AppError;
use clubhub_core::result::AppResult;
use clubhub_core::types::{Resource, new_object_id, parse_object_id};
use clubhub_database::store::BoardStore;
use clubhub_entity::board::{Board, BoardPatch, NewBoard};
use clubhub_entity::validation::validate_document;

use crate::context::RequestContext;

/// Manages board documents.
#[derive(Debug, Clone)]
pub struct BoardService {
    boards: Arc<dyn BoardStore>,
}

impl BoardService {
    pub fn new(boards: Arc<dyn BoardStore>) -> Self {
        Self { boards }
    }

    /// Public boards sorted by name.
    pub async fn list_boards(&self) -> AppResult<Vec<Board>> {
        self.boards.find_public().await
    }

    pub async fn get_board(&self, raw_id: &str) -> AppResult<Board> {
        let id = parse_object_id(raw_id, Resource::Board)?;
        self.boards
            .find_by_id(id)
            .await?
            .ok_or_else(|| Resource::Board.not_found())
    }

    pub async fn create_board(&self, ctx: &RequestContext, payload: NewBoard) -> AppResult<Board> {
        let board = payload.into_document(new_object_id(), ctx.caller.clone(), ctx.request_time);
        validate_document(&board, Resource::Board)?;

        let board = self.boards.insert(&board).await?;
        info!(board_id = %board.id, owner = %board.owner, "Board created");
        Ok(board)
    }

    pub async fn update_board(
        &self,
        ctx: &RequestContext,
        raw_id: &str,
        patch: BoardPatch,
    ) -> AppResult<Board> {
        let mut board = self.get_board(raw_id).await?;
        if !board.is_owned_by(&ctx.caller) {
            return Err(AppError::forbidden("Can not update a board you do not own."));
        }

        patch.apply(&mut board, Utc::now());
        validate_document(&board, Resource::Board)?;

        let board = self.boards.update(&board).await?;
        info!(board_id = %board.id, "Board updated");
        Ok(board)
    }

    /// Delete an owned board and every event posted to it.
    pub async fn delete_board(&self, ctx: &RequestContext, raw_id: &str) -> AppResult<Board> {
        let board = self.get_board(raw_id).await?;
        if !board.is_owned_by(&ctx.caller) {
            return Err(AppError::forbidden("Can not delete a board you do not own."));
        }

        self.boards.delete_cascade(&board).await?;
        info!(board_id = %board.id, events = board.events.len(), "Board deleted");
        Ok(board)
    }
}
