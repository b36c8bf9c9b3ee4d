//! Form bodies posted by the public pages.
//!
//! Every field defaults to empty so a partially filled form reaches
//! validation instead of failing extraction, and the page can be re-rendered
//! with what the visitor typed.

use esdeco_core::error::CoreError;
use esdeco_core::inquiry::InquiryDraft;
use esdeco_core::job::JobApplicationDraft;
use esdeco_core::types::DbId;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl From<ContactForm> for InquiryDraft {
    fn from(form: ContactForm) -> Self {
        InquiryDraft {
            name: form.name,
            email: form.email,
            subject: form.subject,
            message: form.message,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApplicationForm {
    pub job_listing_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience: String,
    pub address: String,
    pub resume: String,
}

impl ApplicationForm {
    /// Listing the form was last submitted for, if any.
    pub fn listing_id(&self) -> Option<DbId> {
        self.job_listing_id.trim().parse().ok()
    }

    /// Takes a reference because templates hand over borrowed fields.
    pub fn is_for(&self, listing_id: &DbId) -> bool {
        self.listing_id() == Some(*listing_id)
    }
}

impl TryFrom<ApplicationForm> for JobApplicationDraft {
    type Error = CoreError;

    fn try_from(form: ApplicationForm) -> Result<Self, Self::Error> {
        let job_listing_id = form
            .listing_id()
            .ok_or_else(|| CoreError::validation("Please choose a position"))?;
        Ok(JobApplicationDraft {
            job_listing_id,
            name: form.name,
            email: form.email,
            phone: form.phone,
            experience: form.experience,
            address: Some(form.address),
            resume: Some(form.resume),
        })
    }
}
