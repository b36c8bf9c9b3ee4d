//! Repository for the `faqs` table.

use esdeco_core::faq::FaqDraft;
use esdeco_core::types::DbId;
use sqlx::PgPool;

use crate::models::faq::Faq;

const COLUMNS: &str = "id, question, answer, category, created_at, updated_at";

pub struct FaqRepo;

impl FaqRepo {
    pub async fn create(pool: &PgPool, input: &FaqDraft) -> Result<Faq, sqlx::Error> {
        let query = format!(
            "INSERT INTO faqs (question, answer, category)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(&input.category)
            .fetch_one(pool)
            .await
    }

    /// List FAQs in insertion order, optionally restricted to one category.
    pub async fn list(pool: &PgPool, category: Option<&str>) -> Result<Vec<Faq>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM faqs
             WHERE ($1::TEXT IS NULL OR category = $1)
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// Replace every editable field. Returns `None` if the FAQ does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &FaqDraft,
    ) -> Result<Option<Faq>, sqlx::Error> {
        let query = format!(
            "UPDATE faqs SET question = $2, answer = $3, category = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(id)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(&input.category)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
