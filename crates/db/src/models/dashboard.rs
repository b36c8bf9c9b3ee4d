//! Read-only aggregates for the admin dashboard.

use esdeco_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

/// Headline counters shown at the top of the dashboard.
#[derive(Debug, Clone, Default, FromRow, Serialize)]
pub struct DashboardStats {
    pub total_events: i64,
    pub upcoming_events: i64,
    pub open_inquiries: i64,
    pub job_applications: i64,
    pub pending_applications: i64,
}

/// One entry in the merged "recent activity" feed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActivityItem {
    /// `inquiry` or `job_application`.
    pub kind: String,
    pub description: String,
    pub occurred_at: Timestamp,
}
