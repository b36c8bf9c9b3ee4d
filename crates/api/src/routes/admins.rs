//! Route definitions for the `/admins` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::admins;
use crate::state::AppState;

/// Routes mounted at `/admins`. All require an admin token.
///
/// ```text
/// GET    /       -> list_admins
/// POST   /       -> create_admin
/// PATCH  /{id}   -> update_admin
/// DELETE /{id}   -> deactivate_admin
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(admins::list_admins).post(admins::create_admin))
        .route(
            "/{id}",
            patch(admins::update_admin).delete(admins::deactivate_admin),
        )
}
