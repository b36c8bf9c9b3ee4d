//! Handlers for the `/gallery` of past events.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use esdeco_core::gallery::GalleryEventDraft;
use esdeco_core::types::DbId;
use esdeco_core::validation::distinct_in_order;
use esdeco_db::models::gallery::GalleryEvent;
use esdeco_db::repositories::GalleryRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::query::CategoryParams;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/v1/gallery
///
/// Newest events first, optionally narrowed by `?category=`.
pub async fn list_gallery(
    State(state): State<AppState>,
    Query(params): Query<CategoryParams>,
) -> AppResult<Json<Vec<GalleryEvent>>> {
    let events = GalleryRepo::list(&state.pool, params.category(), None).await?;
    Ok(Json(events))
}

/// GET /api/v1/gallery/categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let events = GalleryRepo::list(&state.pool, None, None).await?;
    Ok(Json(distinct_in_order(
        events.iter().map(|e| e.category.as_str()),
    )))
}

/// GET /api/v1/gallery/{id}
pub async fn get_gallery_event(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<GalleryEvent>> {
    let event = GalleryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Gallery event", id))?;
    Ok(Json(event))
}

/// POST /api/v1/gallery
pub async fn create_gallery_event(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Json(input): Json<GalleryEventDraft>,
) -> AppResult<(StatusCode, Json<GalleryEvent>)> {
    let draft = input.validate()?;
    let event = GalleryRepo::create(&state.pool, &draft).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// PUT /api/v1/gallery/{id}
pub async fn update_gallery_event(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<GalleryEventDraft>,
) -> AppResult<Json<GalleryEvent>> {
    let draft = input.validate()?;
    let event = GalleryRepo::update(&state.pool, id, &draft)
        .await?
        .ok_or_else(|| AppError::not_found("Gallery event", id))?;
    Ok(Json(event))
}

/// DELETE /api/v1/gallery/{id}
pub async fn delete_gallery_event(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !GalleryRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Gallery event", id));
    }
    Ok(Json(MessageResponse::new("Gallery event deleted successfully")))
}
