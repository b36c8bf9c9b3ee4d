//! Shared query parameter types for API handlers.
//!
//! Query structs that appear across multiple handler modules live here.

use serde::Deserialize;

/// `?include_inactive=` flag for job listings. Only honoured for admins.
#[derive(Debug, Default, Deserialize)]
pub struct IncludeInactiveParams {
    #[serde(default)]
    pub include_inactive: bool,
}

/// `?category=` filter used by FAQs and the gallery. Blank means "all".
#[derive(Debug, Default, Deserialize)]
pub struct CategoryParams {
    pub category: Option<String>,
}

impl CategoryParams {
    pub fn category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}
