//! Repository for the `latest_works` table.

use esdeco_core::latest_work::LatestWorkDraft;
use esdeco_core::types::DbId;
use sqlx::PgPool;

use crate::models::latest_work::LatestWork;

const COLUMNS: &str = "id, title, link, thumbnail, category, created_at, updated_at";

pub struct LatestWorkRepo;

impl LatestWorkRepo {
    pub async fn create(pool: &PgPool, input: &LatestWorkDraft) -> Result<LatestWork, sqlx::Error> {
        let query = format!(
            "INSERT INTO latest_works (title, link, thumbnail, category)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LatestWork>(&query)
            .bind(&input.title)
            .bind(&input.link)
            .bind(&input.thumbnail)
            .bind(&input.category)
            .fetch_one(pool)
            .await
    }

    /// Newest works first.
    pub async fn list(pool: &PgPool) -> Result<Vec<LatestWork>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM latest_works ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, LatestWork>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &LatestWorkDraft,
    ) -> Result<Option<LatestWork>, sqlx::Error> {
        let query = format!(
            "UPDATE latest_works SET title = $2, link = $3, thumbnail = $4, category = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LatestWork>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.link)
            .bind(&input.thumbnail)
            .bind(&input.category)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM latest_works WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
