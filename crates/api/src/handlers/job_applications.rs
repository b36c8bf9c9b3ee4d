//! Handlers for the `/job-applications` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use esdeco_core::job::{ApplicationStatus, JobApplicationDraft};
use esdeco_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use esdeco_core::types::DbId;
use esdeco_db::models::job::{JobApplication, JobApplicationWithPosition};
use esdeco_db::repositories::job_application_repo::ApplicationFilter;
use esdeco_db::repositories::{JobApplicationRepo, JobListingRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::response::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ApplicationListParams {
    pub status: Option<String>,
    pub job_listing_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Body for `PATCH /job-applications/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

/// Validate an application and store it against an active listing.
/// Shared by the JSON endpoint and the careers page form.
pub async fn submit_application(
    state: &AppState,
    draft: JobApplicationDraft,
) -> AppResult<JobApplication> {
    let draft = draft.validate()?;

    if JobListingRepo::find_by_id(&state.pool, draft.job_listing_id, false)
        .await?
        .is_none()
    {
        return Err(AppError::BadRequest(
            "Job listing not found or no longer accepting applications".into(),
        ));
    }

    let application = JobApplicationRepo::create(&state.pool, &draft).await?;
    tracing::info!(
        application_id = application.id,
        job_listing_id = application.job_listing_id,
        "Job application received"
    );
    Ok(application)
}

/// POST /api/v1/job-applications
pub async fn create_job_application(
    State(state): State<AppState>,
    Json(input): Json<JobApplicationDraft>,
) -> AppResult<(StatusCode, Json<JobApplication>)> {
    let application = submit_application(&state, input).await?;
    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /api/v1/job-applications
pub async fn list_job_applications(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Query(params): Query<ApplicationListParams>,
) -> AppResult<Json<Vec<JobApplicationWithPosition>>> {
    let status = match params.status.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(s) => Some(s.parse::<ApplicationStatus>()?),
    };
    let filter = ApplicationFilter {
        status,
        job_listing_id: params.job_listing_id,
    };
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);

    let applications = JobApplicationRepo::list(&state.pool, &filter, limit, offset).await?;
    Ok(Json(applications))
}

/// GET /api/v1/job-applications/{id}
pub async fn get_job_application(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<JobApplication>> {
    let application = JobApplicationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Job application", id))?;
    Ok(Json(application))
}

/// PATCH /api/v1/job-applications/{id}/status
///
/// Approve or reject an application. Setting the status it already has is
/// accepted and reported as success.
pub async fn update_application_status(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<StatusUpdate>,
) -> AppResult<Json<MessageResponse>> {
    let status = ApplicationStatus::parse_decision(&input.status)?;

    if !JobApplicationRepo::update_status(&state.pool, id, status).await? {
        return Err(AppError::not_found("Job application", id));
    }

    tracing::info!(application_id = id, %status, admin_id = auth.admin_id, "Application reviewed");
    Ok(Json(MessageResponse::new(format!(
        "Application {status} successfully"
    ))))
}
