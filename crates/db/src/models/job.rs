//! Job listing and job application rows.

use esdeco_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `job_listings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobListing {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    /// Serialized as `type` to match the careers page payload.
    #[serde(rename = "type")]
    pub job_type: String,
    pub icon: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `job_applications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobApplication {
    pub id: DbId,
    pub job_listing_id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience: String,
    pub address: Option<String>,
    pub resume: Option<String>,
    /// One of `pending`, `approved`, `rejected`.
    pub status: String,
    pub applied_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Application joined with the title of the listing it was sent against.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobApplicationWithPosition {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub application: JobApplication,
    pub position: String,
}
