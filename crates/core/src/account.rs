//! Account rules: registration, login input, profile edits, experience
//! levels and the admin predicate.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Minimum length of a display name.
pub const MIN_NAME_LEN: usize = 2;

/// Minimum length of a password.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Email of the account that owns imported tracks.
pub const SYSTEM_USER_EMAIL: &str = "system@trackside.local";

/// Display name of the account that owns imported tracks.
pub const SYSTEM_USER_NAME: &str = "Trackside System";

// ---------------------------------------------------------------------------
// Experience levels
// ---------------------------------------------------------------------------

/// Self-reported driver experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Pro,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "BEGINNER",
            Self::Intermediate => "INTERMEDIATE",
            Self::Advanced => "ADVANCED",
            Self::Pro => "PRO",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "BEGINNER" => Ok(Self::Beginner),
            "INTERMEDIATE" => Ok(Self::Intermediate),
            "ADVANCED" => Ok(Self::Advanced),
            "PRO" => Ok(Self::Pro),
            _ => Err(CoreError::Validation(
                "Invalid experience level".to_string(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().chars().count() < MIN_NAME_LEN {
        return Err(CoreError::Validation(
            "Name must be at least 2 characters".to_string(),
        ));
    }
    Ok(())
}

/// Validate a registration request.
pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), CoreError> {
    validate_name(name)?;
    if email.trim().is_empty() {
        return Err(CoreError::Validation("Email is required".to_string()));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(CoreError::Validation(
            "Password must be at least 8 characters".to_string(),
        ));
    }
    if password != confirm_password {
        return Err(CoreError::Validation("Passwords do not match".to_string()));
    }
    Ok(())
}

/// Validate that a login request carries both credentials.
pub fn validate_login(email: &str, password: &str) -> Result<(), CoreError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(CoreError::Validation(
            "Email and password are required".to_string(),
        ));
    }
    Ok(())
}

/// Validate a profile edit, returning the parsed experience level.
pub fn validate_profile_update(name: &str, experience: &str) -> Result<ExperienceLevel, CoreError> {
    validate_name(name)?;
    ExperienceLevel::parse(experience)
}

/// Whether the given email may run administrative operations.
pub fn is_admin_email(email: &str) -> bool {
    email.contains("admin") || email == SYSTEM_USER_EMAIL
}
