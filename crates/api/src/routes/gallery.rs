//! Route definitions for the `/gallery` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::gallery;
use crate::state::AppState;

/// Routes mounted at `/gallery`.
///
/// ```text
/// GET    /            -> list_gallery (public)
/// POST   /            -> create_gallery_event
/// GET    /categories  -> list_categories (public)
/// GET    /{id}        -> get_gallery_event (public)
/// PUT    /{id}        -> update_gallery_event
/// DELETE /{id}        -> delete_gallery_event
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(gallery::list_gallery).post(gallery::create_gallery_event),
        )
        .route("/categories", get(gallery::list_categories))
        .route(
            "/{id}",
            get(gallery::get_gallery_event)
                .put(gallery::update_gallery_event)
                .delete(gallery::delete_gallery_event),
        )
}
