pub mod admins;
pub mod auth;
pub mod events;
pub mod faqs;
pub mod gallery;
pub mod health;
pub mod inquiries;
pub mod jobs;
pub mod latest_works;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                         login (public, form-encoded)
/// /auth/me                            current admin
///
/// /admins                             list, create (admin)
/// /admins/{id}                        update (PATCH), deactivate (DELETE)
///
/// /contact                            submit inquiry (public)
/// /inquiries                          list (admin)
/// /inquiries/{id}                     get (admin)
/// /inquiries/{id}/solve               mark solved (PATCH)
/// /inquiries/{id}/reply               email the inquirer (POST)
///
/// /faqs                               list (public), create (admin)
/// /faqs/categories                    distinct categories (public)
/// /faqs/{id}                          update, delete (admin)
///
/// /latest-works                       list (public), create (admin)
/// /latest-works/{id}                  update, delete (admin)
///
/// /job-listings                       list (public), create (admin)
/// /job-listings/{id}                  get (public), update, delete (admin)
/// /job-applications                   apply (public), list (admin)
/// /job-applications/{id}              get (admin)
/// /job-applications/{id}/status       approve / reject (PATCH)
///
/// /events                             list (public), create (admin)
/// /events/{id}                        get (public), update, delete (admin)
///
/// /gallery                            list (public), create (admin)
/// /gallery/categories                 distinct categories (public)
/// /gallery/{id}                       get (public), update, delete (admin)
///
/// /dashboard                          overview (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/admins", admins::router())
        .route("/contact", post(handlers::inquiries::create_inquiry))
        .nest("/inquiries", inquiries::router())
        .nest("/faqs", faqs::router())
        .nest("/latest-works", latest_works::router())
        .merge(jobs::router())
        .nest("/events", events::router())
        .nest("/gallery", gallery::router())
        .route("/dashboard", get(handlers::dashboard::get_dashboard))
}
