//! Server-rendered public website.

pub mod forms;
pub mod pages;
pub mod templates;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Public page routes, mounted at the root.
///
/// ```text
/// GET  /               -> home
/// POST /contact        -> submit_contact
/// GET  /gallery        -> gallery
/// GET  /gallery/{id}   -> gallery_detail
/// GET  /careers        -> careers
/// POST /careers/apply  -> apply
/// GET  /faq            -> faq
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/contact", post(pages::submit_contact))
        .route("/gallery", get(pages::gallery))
        .route("/gallery/{id}", get(pages::gallery_detail))
        .route("/careers", get(pages::careers))
        .route("/careers/apply", post(pages::apply))
        .route("/faq", get(pages::faq))
}
