//! Route definitions for the `/latest-works` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::latest_works;
use crate::state::AppState;

/// Routes mounted at `/latest-works`.
///
/// ```text
/// GET    /      -> list_latest_works (public)
/// POST   /      -> create_latest_work
/// PUT    /{id}  -> update_latest_work
/// DELETE /{id}  -> delete_latest_work
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(latest_works::list_latest_works).post(latest_works::create_latest_work),
        )
        .route(
            "/{id}",
            put(latest_works::update_latest_work).delete(latest_works::delete_latest_work),
        )
}
