//! Repository for the `job_listings` table.

use esdeco_core::job::JobListingDraft;
use esdeco_core::types::DbId;
use sqlx::PgPool;

use crate::models::job::JobListing;

const COLUMNS: &str =
    "id, title, description, requirements, job_type, icon, is_active, created_at, updated_at";

pub struct JobListingRepo;

impl JobListingRepo {
    pub async fn create(pool: &PgPool, input: &JobListingDraft) -> Result<JobListing, sqlx::Error> {
        let query = format!(
            "INSERT INTO job_listings (title, description, requirements, job_type, icon, is_active)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobListing>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.requirements)
            .bind(&input.job_type)
            .bind(&input.icon)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a listing by id. Inactive listings are hidden unless `include_inactive`.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        include_inactive: bool,
    ) -> Result<Option<JobListing>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM job_listings WHERE id = $1 AND ($2 OR is_active = true)"
        );
        sqlx::query_as::<_, JobListing>(&query)
            .bind(id)
            .bind(include_inactive)
            .fetch_optional(pool)
            .await
    }

    /// List listings oldest first, so the careers page order is stable.
    pub async fn list(pool: &PgPool, include_inactive: bool) -> Result<Vec<JobListing>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM job_listings
             WHERE ($1 OR is_active = true)
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, JobListing>(&query)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &JobListingDraft,
    ) -> Result<Option<JobListing>, sqlx::Error> {
        let query = format!(
            "UPDATE job_listings SET
                title = $2,
                description = $3,
                requirements = $4,
                job_type = $5,
                icon = $6,
                is_active = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobListing>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.requirements)
            .bind(&input.job_type)
            .bind(&input.icon)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a listing and, through the FK cascade, its applications.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM job_listings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
