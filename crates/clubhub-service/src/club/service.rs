//! Club profiles: listing, details, ownership-checked mutation.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use clubhub_core::error::AppError;
use clubhub_core::result::AppResult;
use clubhub_core::types::{Resource, new_object_id, parse_object_id};
use clubhub_database::store::{ClubStore, EventStore};
use clubhub_entity::club::{Club, ClubFilter, ClubPatch, ClubPreview, Logo, NewClub};
use clubhub_entity::event::EventSummary;
use clubhub_entity::validation::validate_document;

use crate::context::RequestContext;

/// Manages club documents.
#[derive(Debug, Clone)]
pub struct ClubService {
    clubs: Arc<dyn ClubStore>,
    events: Arc<dyn EventStore>,
    /// Moderation flag given to new clubs.
    auto_validate: bool,
}

impl ClubService {
    pub fn new(clubs: Arc<dyn ClubStore>, events: Arc<dyn EventStore>, auto_validate: bool) -> Self {
        Self {
            clubs,
            events,
            auto_validate,
        }
    }

    /// Summaries of listed clubs, sorted by name. Never fails on an empty result.
    pub async fn list_previews(&self, filter: &ClubFilter) -> AppResult<Vec<ClubPreview>> {
        self.clubs.find_previews(filter).await
    }

    /// Full club document.
    pub async fn get_club(&self, raw_id: &str) -> AppResult<Club> {
        let id = parse_object_id(raw_id, Resource::Club)?;
        self.clubs
            .find_by_id(id)
            .await?
            .ok_or_else(|| Resource::Club.not_found())
    }

    /// The club's events, newest first.
    pub async fn get_events(&self, raw_id: &str) -> AppResult<Vec<EventSummary>> {
        let club = self.get_club(raw_id).await?;
        let events = self.events.find_by_ids(&club.events).await?;
        Ok(events.iter().map(EventSummary::from).collect())
    }

    /// Create a club owned by the caller.
    pub async fn create_club(
        &self,
        ctx: &RequestContext,
        payload: NewClub,
        logo: Option<Logo>,
    ) -> AppResult<Club> {
        let club = payload.into_document(
            new_object_id(),
            ctx.caller.clone(),
            self.auto_validate,
            logo,
            ctx.request_time,
        );
        validate_document(&club, Resource::Club)?;

        let club = self.clubs.insert(&club).await?;
        info!(club_id = %club.id, owner = %club.owner, "Club created");
        Ok(club)
    }

    /// Merge `patch` into an owned club and re-validate.
    pub async fn update_club(
        &self,
        ctx: &RequestContext,
        raw_id: &str,
        patch: ClubPatch,
    ) -> AppResult<Club> {
        let mut club = self.get_club(raw_id).await?;
        if !club.is_owned_by(&ctx.caller) {
            return Err(AppError::forbidden("Can not update a club you do not own."));
        }

        patch.apply(&mut club, Utc::now());
        validate_document(&club, Resource::Club)?;

        let club = self.clubs.update(&club).await?;
        info!(club_id = %club.id, "Club updated");
        Ok(club)
    }

    /// Delete an owned club together with its events. Returns the deleted document.
    pub async fn delete_club(&self, ctx: &RequestContext, raw_id: &str) -> AppResult<Club> {
        let club = self.get_club(raw_id).await?;
        if !club.is_owned_by(&ctx.caller) {
            return Err(AppError::forbidden("Can not delete a club you do not own."));
        }

        self.clubs.delete_cascade(&club).await?;
        info!(club_id = %club.id, events = club.events.len(), "Club deleted");
        Ok(club)
    }
}
