//! Handlers for the server-rendered public pages.
//!
//! These never surface raw errors: failures are logged and the visitor gets a
//! notice on the page or the error page.

use askama::Template;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use esdeco_core::faq::group_by_category;
use esdeco_core::gallery::HOME_PREVIEW_COUNT;
use esdeco_core::inquiry::{SUBMITTED_MESSAGE, SUBMIT_FAILED_MESSAGE};
use esdeco_core::job::JobApplicationDraft;
use esdeco_core::site;
use esdeco_core::types::DbId;
use esdeco_core::validation::distinct_in_order;
use esdeco_db::repositories::{FaqRepo, GalleryRepo, JobListingRepo, LatestWorkRepo};

use super::forms::{ApplicationForm, ContactForm};
use super::templates::{
    category_chips, CareersTemplate, ErrorPageTemplate, FaqSection, FaqTemplate, GalleryCard,
    GalleryDetailTemplate, GalleryTemplate, HomeTemplate, Notice,
};
use crate::error::AppError;
use crate::handlers::inquiries::submit_inquiry;
use crate::handlers::job_applications::submit_application;
use crate::query::CategoryParams;
use crate::state::AppState;

pub const APPLICATION_SUBMITTED_MESSAGE: &str = "Application submitted successfully!";

// ---------------------------------------------------------------------------
// Rendering helpers
// ---------------------------------------------------------------------------

fn render<T: Template>(status: StatusCode, template: T) -> Response {
    match template.render() {
        Ok(body) => (status, Html(body)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Template render failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<h1>Something went wrong</h1>".to_string()),
            )
                .into_response()
        }
    }
}

fn error_page(status: StatusCode, heading: &'static str, message: &'static str) -> Response {
    render(
        status,
        ErrorPageTemplate {
            business_name: site::BUSINESS_NAME,
            contact: site::CONTACT,
            status_code: status.as_u16(),
            heading,
            message,
        },
    )
}

/// Log a load failure and show the generic error page.
fn page_failed(page: &'static str, err: sqlx::Error) -> Response {
    tracing::error!(page, error = %err, "Failed to load page data");
    error_page(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Something went wrong",
        "We could not load this page. Please try again in a moment.",
    )
}

/// Fallback for every unmatched path.
pub async fn not_found() -> Response {
    error_page(
        StatusCode::NOT_FOUND,
        "Page not found",
        "The page you are looking for does not exist or has been moved.",
    )
}

// ---------------------------------------------------------------------------
// Home + contact form
// ---------------------------------------------------------------------------

async fn render_home(
    state: &AppState,
    status: StatusCode,
    notice: Option<Notice>,
    form: ContactForm,
) -> Response {
    let loaded = tokio::try_join!(
        LatestWorkRepo::list(&state.pool),
        GalleryRepo::list(&state.pool, None, Some(HOME_PREVIEW_COUNT)),
    );
    let (latest_works, preview) = match loaded {
        Ok(data) => data,
        Err(e) => return page_failed("home", e),
    };

    render(
        status,
        HomeTemplate {
            business_name: site::BUSINESS_NAME,
            taglines: site::HERO_TAGLINES,
            about_intro: site::ABOUT_INTRO,
            milestones: site::MILESTONES,
            services: site::SERVICES,
            team: site::TEAM,
            contact: site::CONTACT,
            latest_works,
            gallery_preview: preview.into_iter().map(GalleryCard::from).collect(),
            notice,
            form,
        },
    )
}

/// GET /
pub async fn home(State(state): State<AppState>) -> Response {
    render_home(&state, StatusCode::OK, None, ContactForm::default()).await
}

/// POST /contact
///
/// On success the form is cleared; on failure the visitor's input is kept.
pub async fn submit_contact(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Response {
    match submit_inquiry(&state, form.clone().into()).await {
        Ok(_) => {
            render_home(
                &state,
                StatusCode::OK,
                Some(Notice::success(SUBMITTED_MESSAGE)),
                ContactForm::default(),
            )
            .await
        }
        Err(e) => {
            tracing::warn!(error = %e, "Contact form submission failed");
            render_home(
                &state,
                e.status(),
                Some(Notice::error(SUBMIT_FAILED_MESSAGE)),
                form,
            )
            .await
        }
    }
}

// ---------------------------------------------------------------------------
// Gallery
// ---------------------------------------------------------------------------

/// GET /gallery
pub async fn gallery(
    State(state): State<AppState>,
    Query(params): Query<CategoryParams>,
) -> Response {
    let selected = params.category();
    let loaded = tokio::try_join!(
        GalleryRepo::list(&state.pool, selected, None),
        GalleryRepo::list(&state.pool, None, None),
    );
    let (events, all_events) = match loaded {
        Ok(data) => data,
        Err(e) => return page_failed("gallery", e),
    };

    let categories = distinct_in_order(all_events.iter().map(|e| e.category.as_str()));

    render(
        StatusCode::OK,
        GalleryTemplate {
            business_name: site::BUSINESS_NAME,
            contact: site::CONTACT,
            events: events.into_iter().map(GalleryCard::from).collect(),
            chips: category_chips(categories, selected),
            showing_all: selected.is_none(),
        },
    )
}

/// GET /gallery/{id}
pub async fn gallery_detail(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Ok(id) = id.parse::<DbId>() else {
        return not_found().await;
    };
    let event = match GalleryRepo::find_by_id(&state.pool, id).await {
        Ok(Some(event)) => event,
        Ok(None) => return not_found().await,
        Err(e) => return page_failed("gallery_detail", e),
    };

    let details = event.details.clone();
    let images = event.images.clone();
    let highlights = event.highlights.clone();

    render(
        StatusCode::OK,
        GalleryDetailTemplate {
            business_name: site::BUSINESS_NAME,
            contact: site::CONTACT,
            card: GalleryCard::from(event),
            details,
            images,
            highlights,
        },
    )
}

// ---------------------------------------------------------------------------
// Careers
// ---------------------------------------------------------------------------

async fn render_careers(
    state: &AppState,
    status: StatusCode,
    notice: Option<Notice>,
    form: ApplicationForm,
) -> Response {
    let listings = match JobListingRepo::list(&state.pool, false).await {
        Ok(listings) => listings,
        Err(e) => return page_failed("careers", e),
    };
    render(
        status,
        CareersTemplate {
            business_name: site::BUSINESS_NAME,
            contact: site::CONTACT,
            listings,
            notice,
            form,
        },
    )
}

/// GET /careers
pub async fn careers(State(state): State<AppState>) -> Response {
    render_careers(&state, StatusCode::OK, None, ApplicationForm::default()).await
}

/// POST /careers/apply
pub async fn apply(State(state): State<AppState>, Form(form): Form<ApplicationForm>) -> Response {
    let result = match JobApplicationDraft::try_from(form.clone()) {
        Ok(draft) => submit_application(&state, draft).await.map(|_| ()),
        Err(e) => Err(AppError::Core(e)),
    };

    match result {
        Ok(()) => {
            render_careers(
                &state,
                StatusCode::OK,
                Some(Notice::success(APPLICATION_SUBMITTED_MESSAGE)),
                ApplicationForm::default(),
            )
            .await
        }
        Err(e) => {
            tracing::warn!(error = %e, "Job application submission failed");
            let status = e.status();
            let text = if status.is_client_error() {
                format!("{SUBMIT_FAILED_MESSAGE}: {}", visitor_reason(&e))
            } else {
                SUBMIT_FAILED_MESSAGE.to_string()
            };
            render_careers(&state, status, Some(Notice::error(text)), form).await
        }
    }
}

/// The part of a rejected submission that is safe and useful to show.
fn visitor_reason(err: &AppError) -> String {
    match err {
        AppError::Core(esdeco_core::error::CoreError::Validation(msg)) | AppError::BadRequest(msg) => {
            msg.clone()
        }
        _ => "please check the form and try again".to_string(),
    }
}

// ---------------------------------------------------------------------------
// FAQ
// ---------------------------------------------------------------------------

/// GET /faq
pub async fn faq(State(state): State<AppState>, Query(params): Query<CategoryParams>) -> Response {
    let faqs = match FaqRepo::list(&state.pool, None).await {
        Ok(faqs) => faqs,
        Err(e) => return page_failed("faq", e),
    };
    let selected = params.category();
    let categories = distinct_in_order(faqs.iter().map(|f| f.category.as_str()));

    let shown: Vec<_> = faqs
        .into_iter()
        .filter(|f| selected.map_or(true, |c| f.category == c))
        .collect();
    let sections = group_by_category(shown.iter().map(|f| f.category.as_str()))
        .into_iter()
        .map(|group| FaqSection {
            items: group.members.iter().map(|&i| shown[i].clone()).collect(),
            category: group.category,
        })
        .collect();

    render(
        StatusCode::OK,
        FaqTemplate {
            business_name: site::BUSINESS_NAME,
            contact: site::CONTACT,
            sections,
            chips: category_chips(categories, selected),
            showing_all: selected.is_none(),
        },
    )
}
