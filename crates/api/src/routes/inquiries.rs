//! Route definitions for the `/inquiries` inbox.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::inquiries;
use crate::state::AppState;

/// Routes mounted at `/inquiries`. All require an admin token.
///
/// ```text
/// GET   /              -> list_inquiries
/// GET   /{id}          -> get_inquiry
/// PATCH /{id}/solve    -> solve_inquiry
/// POST  /{id}/reply    -> reply_to_inquiry
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(inquiries::list_inquiries))
        .route("/{id}", get(inquiries::get_inquiry))
        .route("/{id}/solve", patch(inquiries::solve_inquiry))
        .route("/{id}/reply", post(inquiries::reply_to_inquiry))
}
