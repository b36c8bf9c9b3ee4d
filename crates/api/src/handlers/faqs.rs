//! Handlers for the `/faqs` resource.
//!
//! Reads are public; writes require an admin.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use esdeco_core::faq::FaqDraft;
use esdeco_core::types::DbId;
use esdeco_core::validation::distinct_in_order;
use esdeco_db::models::faq::Faq;
use esdeco_db::repositories::FaqRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::query::CategoryParams;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/v1/faqs
pub async fn list_faqs(
    State(state): State<AppState>,
    Query(params): Query<CategoryParams>,
) -> AppResult<Json<Vec<Faq>>> {
    let faqs = FaqRepo::list(&state.pool, params.category()).await?;
    Ok(Json(faqs))
}

/// GET /api/v1/faqs/categories
///
/// Distinct categories in the order they first appear.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let faqs = FaqRepo::list(&state.pool, None).await?;
    Ok(Json(distinct_in_order(faqs.iter().map(|f| f.category.as_str()))))
}

/// POST /api/v1/faqs
pub async fn create_faq(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Json(input): Json<FaqDraft>,
) -> AppResult<(StatusCode, Json<Faq>)> {
    let draft = input.validate()?;
    let faq = FaqRepo::create(&state.pool, &draft).await?;
    Ok((StatusCode::CREATED, Json(faq)))
}

/// PUT /api/v1/faqs/{id}
pub async fn update_faq(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<FaqDraft>,
) -> AppResult<Json<Faq>> {
    let draft = input.validate()?;
    let faq = FaqRepo::update(&state.pool, id, &draft)
        .await?
        .ok_or_else(|| AppError::not_found("FAQ", id))?;
    Ok(Json(faq))
}

/// DELETE /api/v1/faqs/{id}
pub async fn delete_faq(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !FaqRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("FAQ", id));
    }
    Ok(Json(MessageResponse::new("FAQ deleted successfully")))
}
