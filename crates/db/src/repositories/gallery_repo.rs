//! Repository for the `gallery_events` table.

use esdeco_core::gallery::GalleryEventDraft;
use esdeco_core::types::DbId;
use sqlx::PgPool;

use crate::models::gallery::GalleryEvent;

const COLUMNS: &str = "id, title, description, event_date, location, attendees, category, \
                       thumbnail, images, details, highlights, created_at, updated_at";

pub struct GalleryRepo;

impl GalleryRepo {
    pub async fn create(
        pool: &PgPool,
        input: &GalleryEventDraft,
    ) -> Result<GalleryEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO gallery_events
                (title, description, event_date, location, attendees, category,
                 thumbnail, images, details, highlights)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryEvent>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.event_date)
            .bind(&input.location)
            .bind(input.attendees)
            .bind(&input.category)
            .bind(&input.thumbnail)
            .bind(&input.images)
            .bind(&input.details)
            .bind(&input.highlights)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GalleryEvent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gallery_events WHERE id = $1");
        sqlx::query_as::<_, GalleryEvent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Most recent events first, optionally one category, at most `limit` rows.
    pub async fn list(
        pool: &PgPool,
        category: Option<&str>,
        limit: Option<i64>,
    ) -> Result<Vec<GalleryEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM gallery_events
             WHERE ($1::TEXT IS NULL OR category = $1)
             ORDER BY event_date DESC, id DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, GalleryEvent>(&query)
            .bind(category)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &GalleryEventDraft,
    ) -> Result<Option<GalleryEvent>, sqlx::Error> {
        let query = format!(
            "UPDATE gallery_events SET
                title = $2,
                description = $3,
                event_date = $4,
                location = $5,
                attendees = $6,
                category = $7,
                thumbnail = $8,
                images = $9,
                details = $10,
                highlights = $11
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryEvent>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.event_date)
            .bind(&input.location)
            .bind(input.attendees)
            .bind(&input.category)
            .bind(&input.thumbnail)
            .bind(&input.images)
            .bind(&input.details)
            .bind(&input.highlights)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gallery_events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
