//! Route definitions for the `/faqs` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::faqs;
use crate::state::AppState;

/// Routes mounted at `/faqs`.
///
/// ```text
/// GET    /            -> list_faqs (public)
/// POST   /            -> create_faq
/// GET    /categories  -> list_categories (public)
/// PUT    /{id}        -> update_faq
/// DELETE /{id}        -> delete_faq
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(faqs::list_faqs).post(faqs::create_faq))
        .route("/categories", get(faqs::list_categories))
        .route("/{id}", put(faqs::update_faq).delete(faqs::delete_faq))
}
