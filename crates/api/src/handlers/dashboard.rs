//! Handler for the admin dashboard overview.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use esdeco_db::models::dashboard::{ActivityItem, DashboardStats};
use esdeco_db::models::event::Event;
use esdeco_db::repositories::{DashboardRepo, EventRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

const RECENT_ACTIVITY_LIMIT: i64 = 10;
const UPCOMING_EVENTS_LIMIT: i64 = 5;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub recent_activity: Vec<ActivityItem>,
    pub upcoming_events: Vec<Event>,
}

/// GET /api/v1/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    _auth: AuthAdmin,
) -> AppResult<Json<DashboardResponse>> {
    let today = Utc::now().date_naive();

    let (stats, recent_activity, upcoming_events) = tokio::try_join!(
        DashboardRepo::stats(&state.pool, today),
        DashboardRepo::recent_activity(&state.pool, RECENT_ACTIVITY_LIMIT),
        EventRepo::list_upcoming(&state.pool, today, UPCOMING_EVENTS_LIMIT),
    )?;

    Ok(Json(DashboardResponse {
        stats,
        recent_activity,
        upcoming_events,
    }))
}
