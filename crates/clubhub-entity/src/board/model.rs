//! Board document model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use clubhub_core::types::Resource;

use crate::validation::{DocumentPayload, required};

/// A bulletin board that aggregates events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[validate(
        custom(function = "required"),
        length(max = 60, message = "Board name can not be longer than 60 characters.")
    )]
    pub name: String,
    #[validate(length(max = 500, message = "Board about can not be longer than 500 characters."))]
    pub about: Option<String>,
    /// Private boards are reachable by id but not listed.
    pub public_status: bool,
    pub owner: String,
    pub admins: Vec<String>,
    pub subscribers: Vec<String>,
    pub location: Option<String>,
    /// Events posted to this board, oldest first.
    pub events: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    pub fn is_owned_by(&self, caller: &str) -> bool {
        self.owner == caller
    }
}

/// Fields accepted when creating a board.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBoard {
    pub name: Option<String>,
    pub about: Option<String>,
    pub public_status: Option<bool>,
    #[serde(default)]
    pub admins: Vec<String>,
    #[serde(default)]
    pub subscribers: Vec<String>,
    pub location: Option<String>,
}

impl NewBoard {
    pub fn into_document(self, id: Uuid, owner: String, now: DateTime<Utc>) -> Board {
        Board {
            id,
            name: self.name.unwrap_or_default(),
            about: self.about,
            public_status: self.public_status.unwrap_or(true),
            owner,
            admins: self.admins,
            subscribers: self.subscribers,
            location: self.location,
            events: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A partial update to a board. `owner` and `events` are not patchable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardPatch {
    pub name: Option<String>,
    pub about: Option<String>,
    pub public_status: Option<bool>,
    pub admins: Option<Vec<String>>,
    pub subscribers: Option<Vec<String>>,
    pub location: Option<String>,
}

impl BoardPatch {
    pub fn apply(self, board: &mut Board, now: DateTime<Utc>) {
        if let Some(v) = self.name {
            board.name = v;
        }
        if let Some(v) = self.public_status {
            board.public_status = v;
        }
        if let Some(v) = self.admins {
            board.admins = v;
        }
        if let Some(v) = self.subscribers {
            board.subscribers = v;
        }
        board.about = self.about.or(board.about.take());
        board.location = self.location.or(board.location.take());
        board.updated_at = now;
    }
}

impl DocumentPayload for NewBoard {
    const RESOURCE: Resource = Resource::Board;
}

impl DocumentPayload for BoardPatch {
    const RESOURCE: Resource = Resource::Board;
}
