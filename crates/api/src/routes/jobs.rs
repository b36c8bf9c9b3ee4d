//! Route definitions for job listings and applications.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::{job_applications, job_listings};
use crate::state::AppState;

/// Routes merged at the `/api/v1` root.
///
/// ```text
/// GET    /job-listings                    -> list_job_listings (public)
/// POST   /job-listings                    -> create_job_listing
/// GET    /job-listings/{id}               -> get_job_listing (public)
/// PUT    /job-listings/{id}               -> update_job_listing
/// DELETE /job-listings/{id}               -> delete_job_listing
/// POST   /job-applications                -> create_job_application (public)
/// GET    /job-applications                -> list_job_applications
/// PATCH  /job-applications/{id}/status    -> update_application_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/job-listings",
            get(job_listings::list_job_listings).post(job_listings::create_job_listing),
        )
        .route(
            "/job-listings/{id}",
            get(job_listings::get_job_listing)
                .put(job_listings::update_job_listing)
                .delete(job_listings::delete_job_listing),
        )
        .route(
            "/job-applications",
            get(job_applications::list_job_applications)
                .post(job_applications::create_job_application),
        )
        .route(
            "/job-applications/{id}",
            get(job_applications::get_job_application),
        )
        .route(
            "/job-applications/{id}/status",
            patch(job_applications::update_application_status),
        )
}
