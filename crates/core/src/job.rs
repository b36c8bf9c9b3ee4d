//! Job listings shown on the careers page and the applications sent against them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;
use crate::validation::{self, MAX_LONG_TEXT, MAX_SHORT_TEXT};

/// Icon used when a listing does not name one.
pub const DEFAULT_ICON: &str = "Users";

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct JobListingDraft {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(rename = "type", alias = "job_type")]
    pub job_type: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default = "default_true", alias = "isActive")]
    pub is_active: bool,
}

impl JobListingDraft {
    pub fn validate(self) -> Result<Self, CoreError> {
        let icon = self.icon.trim();
        Ok(Self {
            title: validation::required_text("Title", &self.title, MAX_SHORT_TEXT)?,
            description: validation::required_text(
                "Description",
                &self.description,
                MAX_LONG_TEXT,
            )?,
            requirements: validation::clean_list(&self.requirements),
            job_type: validation::required_text("Type", &self.job_type, MAX_SHORT_TEXT)?,
            icon: if icon.is_empty() {
                default_icon()
            } else {
                icon.to_string()
            },
            is_active: self.is_active,
        })
    }
}

// ---------------------------------------------------------------------------
// Application status
// ---------------------------------------------------------------------------

/// Review state of a job application. New applications start as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    /// Parse a reviewer decision. Only `approved` and `rejected` are accepted;
    /// an application can never be moved back to `pending`.
    pub fn parse_decision(value: &str) -> Result<Self, CoreError> {
        match value.parse::<Self>() {
            Ok(status @ (ApplicationStatus::Approved | ApplicationStatus::Rejected)) => Ok(status),
            _ => Err(CoreError::validation("Invalid status")),
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(ApplicationStatus::Pending),
            "approved" => Ok(ApplicationStatus::Approved),
            "rejected" => Ok(ApplicationStatus::Rejected),
            other => Err(CoreError::validation(format!(
                "Unknown application status '{other}'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Applications
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct JobApplicationDraft {
    #[serde(alias = "jobId")]
    pub job_listing_id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub resume: Option<String>,
}

impl JobApplicationDraft {
    pub fn validate(self) -> Result<Self, CoreError> {
        Ok(Self {
            job_listing_id: self.job_listing_id,
            name: validation::required_text("Name", &self.name, MAX_SHORT_TEXT)?,
            email: validation::email("Email", &self.email)?,
            phone: validate_phone(&self.phone)?,
            experience: validation::required_text("Experience", &self.experience, MAX_LONG_TEXT)?,
            address: validation::optional_text(
                "Address",
                self.address.as_deref(),
                MAX_LONG_TEXT,
            )?,
            resume: validation::optional_text("Resume", self.resume.as_deref(), 2048)?,
        })
    }
}

/// Phone numbers: 7-20 characters drawn from digits, spaces and `+ - ( )`.
pub fn validate_phone(value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    let len = trimmed.chars().count();
    let allowed = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'));
    let digits = trimmed.chars().filter(char::is_ascii_digit).count();
    if !(7..=20).contains(&len) || !allowed || digits == 0 {
        return Err(CoreError::validation("Phone must be a valid phone number"));
    }
    Ok(trimmed.to_string())
}
