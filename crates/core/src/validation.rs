//! Field-level validation helpers shared by every entity module.
//!
//! Each helper returns the normalized value (trimmed, blanks removed) so
//! callers can validate and clean an input in one pass.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Maximum length for short text fields (titles, names, subjects).
pub const MAX_SHORT_TEXT: usize = 200;

/// Maximum length for long text fields (messages, answers, descriptions).
pub const MAX_LONG_TEXT: usize = 5000;

/// Trim `value` and require it to be non-empty and at most `max` characters.
pub fn required_text(field: &str, value: &str, max: usize) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation(format!("{field} is required")));
    }
    if trimmed.chars().count() > max {
        return Err(CoreError::validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Like [`required_text`] but blank input collapses to `None`.
pub fn optional_text(
    field: &str,
    value: Option<&str>,
    max: usize,
) -> Result<Option<String>, CoreError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => required_text(field, v, max).map(Some),
    }
}

/// Trim and syntactically validate an email address.
pub fn email(field: &str, value: &str) -> Result<String, CoreError> {
    let trimmed = required_text(field, value, MAX_SHORT_TEXT)?;
    if !trimmed.validate_email() {
        return Err(CoreError::validation(format!(
            "{field} must be a valid email address"
        )));
    }
    Ok(trimmed)
}

/// Validate a link or image reference: absolute http(s) URL or site-relative path.
pub fn link(field: &str, value: &str) -> Result<String, CoreError> {
    let trimmed = required_text(field, value, 2048)?;
    let ok = trimmed.starts_with("http://")
        || trimmed.starts_with("https://")
        || trimmed.starts_with('/');
    if !ok {
        return Err(CoreError::validation(format!(
            "{field} must be an http(s) URL or a path starting with '/'"
        )));
    }
    Ok(trimmed)
}

/// Trim every entry and drop the blank ones.
pub fn clean_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

/// Return the distinct values of `items` in first-appearance order.
pub fn distinct_in_order<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        if !seen.iter().any(|s| s == item) {
            seen.push(item.to_string());
        }
    }
    seen
}
