//! Club document model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use clubhub_core::types::Resource;

use crate::validation::{DocumentPayload, required};

/// An uploaded club logo kept inline with the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logo {
    /// Base64-encoded image bytes.
    pub data: String,
    /// Mime type derived from the uploaded file name, e.g. `image/png`.
    pub extension: String,
}

impl Logo {
    /// Build a logo from an uploaded file's name and raw bytes.
    pub fn from_upload(file_name: &str, bytes: &[u8]) -> Self {
        use base64::Engine as _;

        let ext = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or(file_name)
            .to_ascii_lowercase();

        Self {
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
            extension: format!("image/{ext}"),
        }
    }
}

/// A club profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    /// Unique club identifier.
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Display name.
    #[validate(
        custom(function = "required"),
        length(max = 60, message = "Club name can not be longer than 60 characters.")
    )]
    pub name: String,
    /// One-line pitch shown on preview cards.
    #[validate(
        custom(function = "required"),
        length(max = 200, message = "Club overview can not be longer than 200 characters.")
    )]
    pub overview: String,
    /// Long-form profile text.
    #[validate(
        custom(function = "required"),
        length(max = 2000, message = "Club description can not be longer than 2000 characters.")
    )]
    pub description: String,
    /// Category used by the genre filter.
    #[validate(custom(function = "required"))]
    pub genre: String,
    pub color_theme: Option<String>,
    /// Membership cost; the listing filter treats it as an upper bound.
    #[validate(range(min = 0, message = "Club cost can not be negative."))]
    pub cost: i32,
    /// Member count; the listing filter treats it as an upper bound.
    #[validate(range(min = 0, message = "Club size can not be negative."))]
    pub size: i32,
    pub location: Option<String>,
    pub meetings_frequency: Option<String>,
    #[validate(email(message = "Club email must be a valid email address."))]
    pub email: Option<String>,
    pub instagram: Option<String>,
    pub discord: Option<String>,
    pub facebook: Option<String>,
    #[serde(rename = "apply_link")]
    pub apply_link: Option<String>,
    pub facts: Vec<String>,
    pub logo: Option<Logo>,
    pub is_active: bool,
    /// Moderation flag; only validated clubs are listed.
    pub validation: bool,
    pub featured: bool,
    /// Identity of the creator. Never changes after creation.
    pub owner: String,
    /// Events attached to this club, oldest first.
    pub events: Vec<Uuid>,
    /// When the club was created.
    pub created_at: DateTime<Utc>,
    /// When the club was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Club {
    /// Flat ownership check: the caller must be the recorded owner.
    pub fn is_owned_by(&self, caller: &str) -> bool {
        self.owner == caller
    }
}

/// Summary fields returned by the club listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ClubPreview {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub overview: String,
    pub genre: String,
    pub cost: i32,
    pub size: i32,
    pub is_active: bool,
    pub color_theme: Option<String>,
}

impl From<&Club> for ClubPreview {
    fn from(club: &Club) -> Self {
        Self {
            id: club.id,
            name: club.name.clone(),
            overview: club.overview.clone(),
            genre: club.genre.clone(),
            cost: club.cost,
            size: club.size,
            is_active: club.is_active,
            color_theme: club.color_theme.clone(),
        }
    }
}

/// Fields accepted when creating a club.
///
/// Everything is optional here; missing required fields surface as
/// validation errors on the assembled document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClub {
    pub name: Option<String>,
    pub overview: Option<String>,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub color_theme: Option<String>,
    pub cost: Option<i32>,
    pub size: Option<i32>,
    pub location: Option<String>,
    pub meetings_frequency: Option<String>,
    pub email: Option<String>,
    pub instagram: Option<String>,
    pub discord: Option<String>,
    pub facebook: Option<String>,
    #[serde(rename = "apply_link")]
    pub apply_link: Option<String>,
    #[serde(default)]
    pub facts: Vec<String>,
    pub is_active: Option<bool>,
    pub featured: Option<bool>,
}

impl NewClub {
    /// Assemble the document that will be validated and stored.
    pub fn into_document(
        self,
        id: Uuid,
        owner: String,
        validation: bool,
        logo: Option<Logo>,
        now: DateTime<Utc>,
    ) -> Club {
        Club {
            id,
            name: self.name.unwrap_or_default(),
            overview: self.overview.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            genre: self.genre.unwrap_or_default(),
            color_theme: self.color_theme,
            cost: self.cost.unwrap_or(0),
            size: self.size.unwrap_or(0),
            location: self.location,
            meetings_frequency: self.meetings_frequency,
            email: self.email,
            instagram: self.instagram,
            discord: self.discord,
            facebook: self.facebook,
            apply_link: self.apply_link,
            facts: self.facts,
            logo,
            is_active: self.is_active.unwrap_or(true),
            validation,
            featured: self.featured.unwrap_or(false),
            owner,
            events: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A partial update to a club.
///
/// Identity, ownership, moderation and the event list are not patchable;
/// unknown keys in the request body are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubPatch {
    pub name: Option<String>,
    pub overview: Option<String>,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub color_theme: Option<String>,
    pub cost: Option<i32>,
    pub size: Option<i32>,
    pub location: Option<String>,
    pub meetings_frequency: Option<String>,
    pub email: Option<String>,
    pub instagram: Option<String>,
    pub discord: Option<String>,
    pub facebook: Option<String>,
    #[serde(rename = "apply_link")]
    pub apply_link: Option<String>,
    pub facts: Option<Vec<String>>,
    pub is_active: Option<bool>,
    pub featured: Option<bool>,
}

impl ClubPatch {
    /// Merge the provided fields into `club`.
    pub fn apply(self, club: &mut Club, now: DateTime<Utc>) {
        if let Some(v) = self.name {
            club.name = v;
        }
        if let Some(v) = self.overview {
            club.overview = v;
        }
        if let Some(v) = self.description {
            club.description = v;
        }
        if let Some(v) = self.genre {
            club.genre = v;
        }
        if let Some(v) = self.cost {
            club.cost = v;
        }
        if let Some(v) = self.size {
            club.size = v;
        }
        if let Some(v) = self.facts {
            club.facts = v;
        }
        if let Some(v) = self.is_active {
            club.is_active = v;
        }
        if let Some(v) = self.featured {
            club.featured = v;
        }
        club.color_theme = self.color_theme.or(club.color_theme.take());
        club.location = self.location.or(club.location.take());
        club.meetings_frequency = self.meetings_frequency.or(club.meetings_frequency.take());
        club.email = self.email.or(club.email.take());
        club.instagram = self.instagram.or(club.instagram.take());
        club.discord = self.discord.or(club.discord.take());
        club.facebook = self.facebook.or(club.facebook.take());
        club.apply_link = self.apply_link.or(club.apply_link.take());
        club.updated_at = now;
    }
}

impl DocumentPayload for NewClub {
    const RESOURCE: Resource = Resource::Club;
}

impl DocumentPayload for ClubPatch {
    const RESOURCE: Resource = Resource::Club;
}
