use esdeco_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LatestWork {
    pub id: DbId,
    pub title: String,
    pub link: String,
    pub thumbnail: String,
    pub category: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
