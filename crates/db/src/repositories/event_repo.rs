//! Repository for the `events` table.

use chrono::NaiveDate;
use esdeco_core::event::{EventDraft, EventStatus};
use esdeco_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::Event;

const COLUMNS: &str =
    "id, title, event_date, event_time, location, description, status, created_at, updated_at";

pub struct EventRepo;

impl EventRepo {
    pub async fn create(pool: &PgPool, input: &EventDraft) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (title, event_date, event_time, location, description, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.title)
            .bind(input.event_date)
            .bind(input.event_time)
            .bind(&input.location)
            .bind(&input.description)
            .bind(input.status.as_str())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List events in schedule order, optionally filtered by status.
    pub async fn list(
        pool: &PgPool,
        status: Option<EventStatus>,
    ) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events
             WHERE ($1::TEXT IS NULL OR status = $1)
             ORDER BY event_date ASC, event_time ASC, id ASC"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(status.map(EventStatus::as_str))
            .fetch_all(pool)
            .await
    }

    /// The next `limit` upcoming events on or after `from`.
    pub async fn list_upcoming(
        pool: &PgPool,
        from: NaiveDate,
        limit: i64,
    ) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events
             WHERE status = 'upcoming' AND event_date >= $1
             ORDER BY event_date ASC, event_time ASC, id ASC
             LIMIT $2"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(from)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &EventDraft,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET
                title = $2,
                event_date = $3,
                event_time = $4,
                location = $5,
                description = $6,
                status = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.event_date)
            .bind(input.event_time)
            .bind(&input.location)
            .bind(&input.description)
            .bind(input.status.as_str())
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
