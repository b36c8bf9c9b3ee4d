//! Repository for the `inquiries` table.

use esdeco_core::inquiry::InquiryDraft;
use esdeco_core::types::DbId;
use sqlx::PgPool;

use crate::models::inquiry::Inquiry;

const COLUMNS: &str =
    "id, name, email, subject, message, is_solved, solved_at, created_at, updated_at";

pub struct InquiryRepo;

impl InquiryRepo {
    /// Store a new, unsolved inquiry.
    pub async fn create(pool: &PgPool, input: &InquiryDraft) -> Result<Inquiry, sqlx::Error> {
        let query = format!(
            "INSERT INTO inquiries (name, email, subject, message)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.subject)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Inquiry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inquiries WHERE id = $1");
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List inquiries newest first. Solved ones are skipped unless `include_solved`.
    pub async fn list(
        pool: &PgPool,
        include_solved: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Inquiry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM inquiries
             WHERE ($1 OR is_solved = false)
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(include_solved)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Mark an inquiry solved. Already-solved inquiries keep their original `solved_at`.
    ///
    /// Returns `false` if no row with the given `id` exists.
    pub async fn mark_solved(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE inquiries SET
                is_solved = true,
                solved_at = COALESCE(solved_at, NOW())
             WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
