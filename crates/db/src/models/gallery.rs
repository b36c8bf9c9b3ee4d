use chrono::NaiveDate;
use esdeco_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `gallery_events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GalleryEvent {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub event_date: NaiveDate,
    pub location: String,
    pub attendees: i32,
    pub category: String,
    pub thumbnail: String,
    pub images: Vec<String>,
    pub details: String,
    pub highlights: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
