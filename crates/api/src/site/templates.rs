//! Askama template structs for the public site and the view models they render.

use askama::Template;
use esdeco_core::site::{ContactDetails, Milestone, Service, TeamMember};
use esdeco_core::types::DbId;
use esdeco_db::models::faq::Faq;
use esdeco_db::models::gallery::GalleryEvent;
use esdeco_db::models::job::JobListing;
use esdeco_db::models::latest_work::LatestWork;

use super::forms::{ApplicationForm, ContactForm};

/// Dates on the site read like "March 14, 2024".
pub const DATE_FORMAT: &str = "%B %-d, %Y";

/// Banner shown above a form after it was submitted.
#[derive(Debug, Clone)]
pub struct Notice {
    /// `success` or `error`; doubles as the CSS modifier.
    pub kind: &'static str,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: "success",
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: "error",
            text: text.into(),
        }
    }
}

/// Filter pill on the gallery and FAQ pages.
#[derive(Debug, Clone)]
pub struct CategoryChip {
    pub name: String,
    pub active: bool,
}

/// Build chips for `categories`, marking `selected` as active.
pub fn category_chips(categories: Vec<String>, selected: Option<&str>) -> Vec<CategoryChip> {
    categories
        .into_iter()
        .map(|name| CategoryChip {
            active: selected == Some(name.as_str()),
            name,
        })
        .collect()
}

/// Gallery event as shown on a card.
#[derive(Debug, Clone)]
pub struct GalleryCard {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub date_label: String,
    pub location: String,
    pub attendees: i32,
    pub category: String,
    pub thumbnail: String,
}

impl From<GalleryEvent> for GalleryCard {
    fn from(event: GalleryEvent) -> Self {
        Self {
            id: event.id,
            date_label: event.event_date.format(DATE_FORMAT).to_string(),
            title: event.title,
            description: event.description,
            location: event.location,
            attendees: event.attendees,
            category: event.category,
            thumbnail: event.thumbnail,
        }
    }
}

/// FAQs filed under one category heading.
#[derive(Debug, Clone)]
pub struct FaqSection {
    pub category: String,
    pub items: Vec<Faq>,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub business_name: &'static str,
    pub taglines: &'static [&'static str],
    pub about_intro: &'static str,
    pub milestones: &'static [Milestone],
    pub services: &'static [Service],
    pub team: &'static [TeamMember],
    pub contact: ContactDetails,
    pub latest_works: Vec<LatestWork>,
    pub gallery_preview: Vec<GalleryCard>,
    pub notice: Option<Notice>,
    pub form: ContactForm,
}

#[derive(Template)]
#[template(path = "gallery.html")]
pub struct GalleryTemplate {
    pub business_name: &'static str,
    pub contact: ContactDetails,
    pub events: Vec<GalleryCard>,
    pub chips: Vec<CategoryChip>,
    pub showing_all: bool,
}

#[derive(Template)]
#[template(path = "gallery_detail.html")]
pub struct GalleryDetailTemplate {
    pub business_name: &'static str,
    pub contact: ContactDetails,
    pub card: GalleryCard,
    pub details: String,
    pub images: Vec<String>,
    pub highlights: Vec<String>,
}

#[derive(Template)]
#[template(path = "careers.html")]
pub struct CareersTemplate {
    pub business_name: &'static str,
    pub contact: ContactDetails,
    pub listings: Vec<JobListing>,
    pub notice: Option<Notice>,
    pub form: ApplicationForm,
}

#[derive(Template)]
#[template(path = "faq.html")]
pub struct FaqTemplate {
    pub business_name: &'static str,
    pub contact: ContactDetails,
    pub sections: Vec<FaqSection>,
    pub chips: Vec<CategoryChip>,
    pub showing_all: bool,
}

/// Used for the 404 page and for pages that failed to load.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPageTemplate {
    pub business_name: &'static str,
    pub contact: ContactDetails,
    pub status_code: u16,
    pub heading: &'static str,
    pub message: &'static str,
}
