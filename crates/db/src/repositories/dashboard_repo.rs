//! Aggregate queries backing the admin dashboard.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::dashboard::{ActivityItem, DashboardStats};

pub struct DashboardRepo;

impl DashboardRepo {
    /// Headline counters. `today` decides which events still count as upcoming.
    pub async fn stats(pool: &PgPool, today: NaiveDate) -> Result<DashboardStats, sqlx::Error> {
        sqlx::query_as::<_, DashboardStats>(
            "SELECT
                (SELECT COUNT(*) FROM events) AS total_events,
                (SELECT COUNT(*) FROM events
                    WHERE status = 'upcoming' AND event_date >= $1) AS upcoming_events,
                (SELECT COUNT(*) FROM inquiries WHERE is_solved = false) AS open_inquiries,
                (SELECT COUNT(*) FROM job_applications) AS job_applications,
                (SELECT COUNT(*) FROM job_applications
                    WHERE status = 'pending') AS pending_applications",
        )
        .bind(today)
        .fetch_one(pool)
        .await
    }

    /// Latest inquiries and applications merged into one feed, newest first.
    pub async fn recent_activity(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<ActivityItem>, sqlx::Error> {
        sqlx::query_as::<_, ActivityItem>(
            "SELECT kind, description, occurred_at FROM (
                SELECT 'inquiry' AS kind,
                       subject || ' inquiry from ' || name AS description,
                       created_at AS occurred_at
                FROM inquiries
                UNION ALL
                SELECT 'job_application' AS kind,
                       'New application for ' || l.title || ' from ' || a.name AS description,
                       a.applied_at AS occurred_at
                FROM job_applications a
                JOIN job_listings l ON l.id = a.job_listing_id
             ) feed
             ORDER BY occurred_at DESC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
