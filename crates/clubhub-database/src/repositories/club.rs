//! Club repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use clubhub_core::error::{AppError, ErrorKind};
use clubhub_core::result::AppResult;
use clubhub_entity::club::{Club, ClubFilter, ClubPreview, Logo};

use crate::store::ClubStore;

const PREVIEW_COLUMNS: &str = "id, name, overview, genre, cost, size, is_active, color_theme";

/// Row shape of the `clubs` table; the logo is split over two columns.
#[derive(Debug, sqlx::FromRow)]
struct ClubRow {
    id: Uuid,
    name: String,
    overview: String,
    description: String,
    genre: String,
    color_theme: Option<String>,
    cost: i32,
    size: i32,
    location: Option<String>,
    meetings_frequency: Option<String>,
    email: Option<String>,
    instagram: Option<String>,
    discord: Option<String>,
    facebook: Option<String>,
    apply_link: Option<String>,
    facts: Vec<String>,
    logo_data: Option<String>,
    logo_extension: Option<String>,
    is_active: bool,
    validation: bool,
    featured: bool,
    owner: String,
    events: Vec<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ClubRow> for Club {
    fn from(row: ClubRow) -> Self {
        let logo = match (row.logo_data, row.logo_extension) {
            (Some(data), Some(extension)) => Some(Logo { data, extension }),
            _ => None,
        };
        Club {
            id: row.id,
            name: row.name,
            overview: row.overview,
            description: row.description,
            genre: row.genre,
            color_theme: row.color_theme,
            cost: row.cost,
            size: row.size,
            location: row.location,
            meetings_frequency: row.meetings_frequency,
            email: row.email,
            instagram: row.instagram,
            discord: row.discord,
            facebook: row.facebook,
            apply_link: row.apply_link,
            facts: row.facts,
            logo,
            is_active: row.is_active,
            validation: row.validation,
            featured: row.featured,
            owner: row.owner,
            events: row.events,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL-backed [`ClubStore`].
#[derive(Debug, Clone)]
pub struct ClubRepository {
    pool: PgPool,
}

impl ClubRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClubStore for ClubRepository {
    async fn find_previews(&self, filter: &ClubFilter) -> AppResult<Vec<ClubPreview>> {
        let mut query = QueryBuilder::<Postgres>::new(format!(
            "SELECT {PREVIEW_COLUMNS} FROM clubs WHERE validation = TRUE"
        ));
        if let Some(pattern) = filter.name_pattern() {
            query.push(" AND name ILIKE ").push_bind(pattern);
        }
        if let Some(genre) = &filter.genre {
            query.push(" AND genre = ").push_bind(genre.clone());
        }
        if let Some(max_cost) = filter.max_cost {
            query.push(" AND cost <= ").push_bind(max_cost);
        }
        if let Some(max_size) = filter.max_size {
            query.push(" AND size <= ").push_bind(max_size);
        }
        if !filter.include_inactive {
            query.push(" AND is_active = TRUE");
        }
        if filter.featured_only {
            query.push(" AND featured = TRUE");
        }
        query.push(" ORDER BY name ASC");

        query
            .build_query_as::<ClubPreview>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list clubs", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Club>> {
        sqlx::query_as::<_, ClubRow>("SELECT * FROM clubs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map(|row| row.map(Club::from))
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find club", e))
    }

    async fn insert(&self, club: &Club) -> AppResult<Club> {
        let (logo_data, logo_extension) = match &club.logo {
            Some(logo) => (Some(logo.data.as_str()), Some(logo.extension.as_str())),
            None => (None, None),
        };
        sqlx::query_as::<_, ClubRow>(
            r#"
            INSERT INTO clubs (
                id, name, overview, description, genre, color_theme, cost, size,
                location, meetings_frequency, email, instagram, discord, facebook,
                apply_link, facts, logo_data, logo_extension, is_active, validation,
                featured, owner, events, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                    $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25)
            RETURNING *
            "#,
        )
        .bind(club.id)
        .bind(&club.name)
        .bind(&club.overview)
        .bind(&club.description)
        .bind(&club.genre)
        .bind(&club.color_theme)
        .bind(club.cost)
        .bind(club.size)
        .bind(&club.location)
        .bind(&club.meetings_frequency)
        .bind(&club.email)
        .bind(&club.instagram)
        .bind(&club.discord)
        .bind(&club.facebook)
        .bind(&club.apply_link)
        .bind(&club.facts)
        .bind(logo_data)
        .bind(logo_extension)
        .bind(club.is_active)
        .bind(club.validation)
        .bind(club.featured)
        .bind(&club.owner)
        .bind(&club.events)
        .bind(club.created_at)
        .bind(club.updated_at)
        .fetch_one(&self.pool)
        .await
        .map(Club::from)
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create club", e))
    }

    async fn update(&self, club: &Club) -> AppResult<Club> {
        sqlx::query_as::<_, ClubRow>(
            r#"
            UPDATE clubs SET
                name = $2, overview = $3, description = $4, genre = $5,
                color_theme = $6, cost = $7, size = $8, location = $9,
                meetings_frequency = $10, email = $11, instagram = $12,
                discord = $13, facebook = $14, apply_link = $15, facts = $16,
                is_active = $17, featured = $18, updated_at = $19
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(club.id)
        .bind(&club.name)
        .bind(&club.overview)
        .bind(&club.description)
        .bind(&club.genre)
        .bind(&club.color_theme)
        .bind(club.cost)
        .bind(club.size)
        .bind(&club.location)
        .bind(&club.meetings_frequency)
        .bind(&club.email)
        .bind(&club.instagram)
        .bind(&club.discord)
        .bind(&club.facebook)
        .bind(&club.apply_link)
        .bind(&club.facts)
        .bind(club.is_active)
        .bind(club.featured)
        .bind(club.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update club", e))?
        .map(Club::from)
        .ok_or_else(|| AppError::not_found("Club not found."))
    }

    async fn delete_cascade(&self, club: &Club) -> AppResult<()> {
        let db_err =
            |e: sqlx::Error| AppError::with_source(ErrorKind::Database, "Failed to delete club", e);

        let mut tx = self.pool.begin().await.map_err(db_err)?;

        // Events may have been added to the club after it was loaded.
        let events: Vec<Uuid> =
            sqlx::query_scalar("SELECT id FROM events WHERE belongs_to_club = $1 OR id = ANY($2)")
                .bind(club.id)
                .bind(&club.events)
                .fetch_all(&mut *tx)
                .await
                .map_err(db_err)?;

        if !events.is_empty() {
            sqlx::query(
                r#"
                UPDATE boards
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

        sqlx::query("DELETE FROM clubs WHERE id = $1")
            .bind(club.id)
            .execute(&mut *tx)
            .await
            .map_err(db_err)?;

        tx.commit().await.map_err(db_err)
    }
}
