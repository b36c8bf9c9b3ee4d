//! Back-office administrator accounts.

use serde::Deserialize;

use crate::error::CoreError;
use crate::validation::{self, MAX_SHORT_TEXT};

/// Minimum password length for admin accounts.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Consecutive failed logins that lock an account.
pub const MAX_FAILED_ATTEMPTS: i32 = 5;

/// How long a locked account stays locked.
pub const LOCK_DURATION_MINS: i64 = 15;

/// Validate that a password meets the minimum length.
pub fn validate_password_strength(password: &str) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }
    Ok(())
}

/// Request to add a new admin. The password is still plaintext here.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAdmin {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewAdmin {
    pub fn validate(self) -> Result<Self, CoreError> {
        validate_password_strength(&self.password)?;
        Ok(Self {
            name: validation::required_text("Name", &self.name, MAX_SHORT_TEXT)?,
            email: validation::email("Email", &self.email)?.to_lowercase(),
            password: self.password,
        })
    }
}

/// Partial update of an admin account. At least one field must be present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub new_password: Option<String>,
}

impl AdminChanges {
    pub fn validate(self) -> Result<Self, CoreError> {
        let name = validation::optional_text("Name", self.name.as_deref(), MAX_SHORT_TEXT)?;
        let email = match self.email.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(e) => Some(validation::email("Email", e)?.to_lowercase()),
        };
        let new_password = match self.new_password {
            Some(p) if !p.is_empty() => {
                validate_password_strength(&p)?;
                Some(p)
            }
            _ => None,
        };
        if name.is_none() && email.is_none() && new_password.is_none() {
            return Err(CoreError::validation("No update data provided"));
        }
        Ok(Self {
            name,
            email,
            new_password,
        })
    }
}
