//! "Latest works": short showcase entries linking to finished projects.

use serde::Deserialize;

use crate::error::CoreError;
use crate::validation::{self, MAX_SHORT_TEXT};

#[derive(Debug, Clone, Deserialize)]
pub struct LatestWorkDraft {
    pub title: String,
    pub link: String,
    pub thumbnail: String,
    pub category: String,
}

impl LatestWorkDraft {
    pub fn validate(self) -> Result<Self, CoreError> {
        Ok(Self {
            title: validation::required_text("Title", &self.title, MAX_SHORT_TEXT)?,
            link: validation::link("Link", &self.link)?,
            thumbnail: validation::link("Thumbnail", &self.thumbnail)?,
            category: validation::required_text("Category", &self.category, MAX_SHORT_TEXT)?,
        })
    }
}
