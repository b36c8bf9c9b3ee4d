//! Contact-form inquiries submitted from the public site.

use serde::Deserialize;

use crate::error::CoreError;
use crate::validation::{self, MAX_LONG_TEXT, MAX_SHORT_TEXT};

/// Message shown to a visitor after a successful contact-form submission.
pub const SUBMITTED_MESSAGE: &str = "Form submitted successfully!";

/// Message shown to a visitor when the submission could not be stored.
pub const SUBMIT_FAILED_MESSAGE: &str = "Error submitting form";

/// Subject line of the email sent when an admin replies to an inquiry.
pub const REPLY_SUBJECT: &str = "Reply to Your Inquiry - E&S Decorations";

/// A contact-form submission as typed by the visitor.
#[derive(Debug, Clone, Deserialize)]
pub struct InquiryDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl InquiryDraft {
    /// Validate every field and return the normalized draft.
    pub fn validate(self) -> Result<Self, CoreError> {
        Ok(Self {
            name: validation::required_text("Name", &self.name, MAX_SHORT_TEXT)?,
            email: validation::email("Email", &self.email)?,
            subject: validation::required_text("Subject", &self.subject, MAX_SHORT_TEXT)?,
            message: validation::required_text("Message", &self.message, MAX_LONG_TEXT)?,
        })
    }
}

/// Body of an admin reply. Both renditions are sent as `multipart/alternative`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplyDraft {
    pub plain_text_body: String,
    pub html_body: String,
}

impl ReplyDraft {
    pub fn validate(self) -> Result<Self, CoreError> {
        Ok(Self {
            plain_text_body: validation::required_text(
                "Plain text body",
                &self.plain_text_body,
                MAX_LONG_TEXT * 4,
            )?,
            html_body: validation::required_text("HTML body", &self.html_body, MAX_LONG_TEXT * 4)?,
        })
    }
}
