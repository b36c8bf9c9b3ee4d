//! Handlers for the `/job-listings` resource.
//!
//! Public readers only ever see active listings. An admin token unlocks
//! `?include_inactive=true` for the back-office.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use esdeco_core::job::JobListingDraft;
use esdeco_core::types::DbId;
use esdeco_db::models::job::JobListing;
use esdeco_db::repositories::JobListingRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthAdmin, OptionalAdmin};
use crate::query::IncludeInactiveParams;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/v1/job-listings
pub async fn list_job_listings(
    State(state): State<AppState>,
    viewer: OptionalAdmin,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<Json<Vec<JobListing>>> {
    let include_inactive = params.include_inactive && viewer.is_admin();
    let listings = JobListingRepo::list(&state.pool, include_inactive).await?;
    Ok(Json(listings))
}

/// GET /api/v1/job-listings/{id}
pub async fn get_job_listing(
    State(state): State<AppState>,
    viewer: OptionalAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<JobListing>> {
    let listing = JobListingRepo::find_by_id(&state.pool, id, viewer.is_admin())
        .await?
        .ok_or_else(|| AppError::not_found("Job listing", id))?;
    Ok(Json(listing))
}

/// POST /api/v1/job-listings
pub async fn create_job_listing(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Json(input): Json<JobListingDraft>,
) -> AppResult<(StatusCode, Json<JobListing>)> {
    let draft = input.validate()?;
    let listing = JobListingRepo::create(&state.pool, &draft).await?;
    Ok((StatusCode::CREATED, Json(listing)))
}

/// PUT /api/v1/job-listings/{id}
pub async fn update_job_listing(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<JobListingDraft>,
) -> AppResult<Json<JobListing>> {
    let draft = input.validate()?;
    let listing = JobListingRepo::update(&state.pool, id, &draft)
        .await?
        .ok_or_else(|| AppError::not_found("Job listing", id))?;
    Ok(Json(listing))
}

/// DELETE /api/v1/job-listings/{id}
///
/// Applications sent against the listing are removed with it.
pub async fn delete_job_listing(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !JobListingRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Job listing", id));
    }
    Ok(Json(MessageResponse::new("Job listing deleted successfully")))
}
