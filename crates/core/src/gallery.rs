//! Gallery entries: past events with a thumbnail, a photo set and highlights.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::CoreError;
use crate::validation::{self, MAX_LONG_TEXT, MAX_SHORT_TEXT};

/// Number of gallery entries previewed on the home page.
pub const HOME_PREVIEW_COUNT: i64 = 6;

#[derive(Debug, Clone, Deserialize)]
pub struct GalleryEventDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(alias = "date")]
    pub event_date: NaiveDate,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub attendees: i32,
    pub category: String,
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl GalleryEventDraft {
    pub fn validate(self) -> Result<Self, CoreError> {
        if self.attendees < 0 {
            return Err(CoreError::validation("Attendees cannot be negative"));
        }
        let thumbnail = validation::link("Thumbnail", &self.thumbnail)?;
        let mut images = validation::clean_list(&self.images);
        for image in &images {
            validation::link("Image", image)?;
        }
        if images.is_empty() {
            images.push(thumbnail.clone());
        }
        Ok(Self {
            title: validation::required_text("Title", &self.title, MAX_SHORT_TEXT)?,
            description: self.description.trim().to_string(),
            event_date: self.event_date,
            location: self.location.trim().to_string(),
            attendees: self.attendees,
            category: validation::required_text("Category", &self.category, MAX_SHORT_TEXT)?,
            thumbnail,
            images,
            details: validation::optional_text("Details", Some(&self.details), MAX_LONG_TEXT)?
                .unwrap_or_default(),
            highlights: validation::clean_list(&self.highlights),
        })
    }
}
