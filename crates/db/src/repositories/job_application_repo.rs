//! Repository for the `job_applications` table.

use esdeco_core::job::{ApplicationStatus, JobApplicationDraft};
use esdeco_core::types::DbId;
use sqlx::PgPool;

use crate::models::job::{JobApplication, JobApplicationWithPosition};

const COLUMNS: &str = "id, job_listing_id, name, email, phone, experience, address, resume, \
                       status, applied_at, created_at, updated_at";

/// Same columns qualified for the listing join.
const JOINED_COLUMNS: &str = "a.id, a.job_listing_id, a.name, a.email, a.phone, a.experience, \
                              a.address, a.resume, a.status, a.applied_at, a.created_at, \
                              a.updated_at, l.title AS position";

/// Optional filters for [`JobApplicationRepo::list`].
#[derive(Debug, Default)]
pub struct ApplicationFilter {
    pub status: Option<ApplicationStatus>,
    pub job_listing_id: Option<DbId>,
}

pub struct JobApplicationRepo;

impl JobApplicationRepo {
    /// Insert a new application in the `pending` state, stamped with the server clock.
    pub async fn create(
        pool: &PgPool,
        input: &JobApplicationDraft,
    ) -> Result<JobApplication, sqlx::Error> {
        let query = format!(
            "INSERT INTO job_applications
                (job_listing_id, name, email, phone, experience, address, resume)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(input.job_listing_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.experience)
            .bind(&input.address)
            .bind(&input.resume)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<JobApplication>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM job_applications WHERE id = $1");
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Newest applications first, each joined with its listing title.
    pub async fn list(
        pool: &PgPool,
        filter: &ApplicationFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<JobApplicationWithPosition>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM job_applications a
             JOIN job_listings l ON l.id = a.job_listing_id
             WHERE ($1::TEXT IS NULL OR a.status = $1)
               AND ($2::BIGINT IS NULL OR a.job_listing_id = $2)
             ORDER BY a.applied_at DESC, a.id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, JobApplicationWithPosition>(&query)
            .bind(filter.status.map(ApplicationStatus::as_str))
            .bind(filter.job_listing_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Set the review status. Returns `false` if the application does not exist.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: ApplicationStatus,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE job_applications SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status.as_str())
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
