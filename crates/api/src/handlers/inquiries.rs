//! Handlers for the public contact form and the admin inquiry inbox.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use esdeco_core::error::CoreError;
use esdeco_core::inquiry::{InquiryDraft, ReplyDraft, REPLY_SUBJECT, SUBMITTED_MESSAGE};
use esdeco_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use esdeco_core::types::DbId;
use esdeco_db::models::inquiry::Inquiry;
use esdeco_db::repositories::InquiryRepo;
use esdeco_mail::OutgoingEmail;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::response::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct InquiryListParams {
    #[serde(default)]
    pub include_solved: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Validate and store a contact-form submission. Shared by the JSON
/// endpoint and the HTML form on the home page.
pub async fn submit_inquiry(state: &AppState, draft: InquiryDraft) -> AppResult<Inquiry> {
    let draft = draft.validate()?;
    let inquiry = InquiryRepo::create(&state.pool, &draft).await?;
    tracing::info!(inquiry_id = inquiry.id, "Inquiry received");
    Ok(inquiry)
}

/// POST /api/v1/contact
pub async fn create_inquiry(
    State(state): State<AppState>,
    Json(input): Json<InquiryDraft>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    submit_inquiry(&state, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(SUBMITTED_MESSAGE)),
    ))
}

/// GET /api/v1/inquiries
///
/// Unsolved inquiries newest first; `?include_solved=true` adds the rest.
pub async fn list_inquiries(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Query(params): Query<InquiryListParams>,
) -> AppResult<Json<Vec<Inquiry>>> {
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);
    let inquiries = InquiryRepo::list(&state.pool, params.include_solved, limit, offset).await?;
    Ok(Json(inquiries))
}

/// GET /api/v1/inquiries/{id}
pub async fn get_inquiry(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Inquiry>> {
    let inquiry = InquiryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Inquiry", id))?;
    Ok(Json(inquiry))
}

/// PATCH /api/v1/inquiries/{id}/solve
pub async fn solve_inquiry(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !InquiryRepo::mark_solved(&state.pool, id).await? {
        return Err(AppError::not_found("Inquiry", id));
    }
    Ok(Json(MessageResponse::new("Inquiry marked as solved")))
}

/// POST /api/v1/inquiries/{id}/reply
///
/// Email the inquirer and mark the inquiry solved. The inquiry is only
/// marked solved once the mail transport accepted the message.
pub async fn reply_to_inquiry(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<ReplyDraft>,
) -> AppResult<Json<MessageResponse>> {
    let reply = input.validate()?;

    let mailer = state.mailer.as_ref().ok_or_else(|| {
        AppError::Core(CoreError::Unavailable(
            "Email delivery is not configured".into(),
        ))
    })?;

    let inquiry = InquiryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Inquiry", id))?;

    let email = OutgoingEmail {
        to: inquiry.email.clone(),
        subject: REPLY_SUBJECT.to_string(),
        plain_text_body: reply.plain_text_body,
        html_body: reply.html_body,
    };

    if let Err(e) = mailer.send(&email).await {
        tracing::error!(inquiry_id = id, error = %e, "Failed to send inquiry reply");
        return Err(AppError::Core(CoreError::Internal(
            "Failed to send reply".into(),
        )));
    }

    InquiryRepo::mark_solved(&state.pool, id).await?;
    tracing::info!(inquiry_id = id, admin_id = auth.admin_id, "Inquiry replied");

    Ok(Json(MessageResponse::new("Reply sent successfully")))
}
