//! Event document model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use clubhub_core::types::Resource;

use crate::validation::{DocumentPayload, required};

/// An event posted to a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique event identifier.
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[validate(
        custom(function = "required"),
        length(max = 30, message = "Event title can not be longer than 30 characters.")
    )]
    pub title: String,
    #[validate(custom(function = "required"))]
    pub description: String,
    pub contact: Option<String>,
    pub tags: Vec<String>,
    #[validate(required)]
    pub date: Option<DateTime<Utc>>,
    /// Free-form time of day, e.g. `6pm`.
    pub time: Option<String>,
    pub location: Option<String>,
    /// Base64-encoded preview image.
    pub preview: Option<String>,
    /// The board whose list contains this event.
    pub belongs_to_board: Uuid,
    /// The club whose list contains this event, if any.
    pub belongs_to_club: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Summary fields returned by event lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub preview: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Event> for EventSummary {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            title: event.title.clone(),
            description: event.description.clone(),
            tags: event.tags.clone(),
            preview: event.preview.clone(),
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

/// Fields accepted when creating an event.
///
/// References arrive as raw strings and are resolved by the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub contact: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "super::date::deserialize_optional")]
    pub date: Option<DateTime<Utc>>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub preview: Option<String>,
    pub belongs_to_board: Option<String>,
    pub belongs_to_club: Option<String>,
}

impl NewEvent {
    /// Assemble the document for an already resolved board and club.
    pub fn into_document(
        self,
        id: Uuid,
        board: Uuid,
        club: Option<Uuid>,
        now: DateTime<Utc>,
    ) -> Event {
        Event {
            id,
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            contact: self.contact,
            tags: self.tags,
            date: self.date,
            time: self.time,
            location: self.location,
            preview: self.preview,
            belongs_to_board: board,
            belongs_to_club: club,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A partial update to an event.
///
/// A new `belongsToBoard` is resolved by the service before the patch is
/// applied; the club reference can not be changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub contact: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "super::date::deserialize_optional")]
    pub date: Option<DateTime<Utc>>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub preview: Option<String>,
    pub belongs_to_board: Option<String>,
}

impl EventPatch {
    /// Merge the provided fields into `event`. The board reference is
    /// left untouched.
    pub fn apply(self, event: &mut Event, now: DateTime<Utc>) {
        if let Some(v) = self.title {
            event.title = v;
        }
        if let Some(v) = self.description {
            event.description = v;
        }
        if let Some(v) = self.tags {
            event.tags = v;
        }
        if self.date.is_some() {
            event.date = self.date;
        }
        event.contact = self.contact.or(event.contact.take());
        event.time = self.time.or(event.time.take());
        event.location = self.location.or(event.location.take());
        event.preview = self.preview.or(event.preview.take());
        event.updated_at = now;
    }
}

impl DocumentPayload for NewEvent {
    const RESOURCE: Resource = Resource::Event;
}

impl DocumentPayload for EventPatch {
    const RESOURCE: Resource = Resource::Event;
}
