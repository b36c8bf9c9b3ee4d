//! Handlers for the `/events` schedule.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use esdeco_core::event::{EventDraft, EventStatus};
use esdeco_core::types::DbId;
use esdeco_db::models::event::Event;
use esdeco_db::repositories::EventRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::response::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EventListParams {
    pub status: Option<String>,
}

/// GET /api/v1/events
///
/// Ordered by date, then time. `?status=` narrows to one status.
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<EventListParams>,
) -> AppResult<Json<Vec<Event>>> {
    let status = match params.status.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(s) => Some(s.parse::<EventStatus>()?),
    };
    Ok(Json(EventRepo::list(&state.pool, status).await?))
}

/// GET /api/v1/events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Event>> {
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Event", id))?;
    Ok(Json(event))
}

/// POST /api/v1/events
pub async fn create_event(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Json(input): Json<EventDraft>,
) -> AppResult<(StatusCode, Json<Event>)> {
    let draft = input.validate()?;
    let event = EventRepo::create(&state.pool, &draft).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// PUT /api/v1/events/{id}
pub async fn update_event(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<EventDraft>,
) -> AppResult<Json<Event>> {
    let draft = input.validate()?;
    let event = EventRepo::update(&state.pool, id, &draft)
        .await?
        .ok_or_else(|| AppError::not_found("Event", id))?;
    Ok(Json(event))
}

/// DELETE /api/v1/events/{id}
pub async fn delete_event(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !EventRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Event", id));
    }
    Ok(Json(MessageResponse::new("Event deleted successfully")))
}
