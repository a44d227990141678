//! Garage rules: car year bounds and modification categories.
//!
//! Used by the car and car-mod handlers before anything reaches the
//! repository layer.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Earliest model year accepted for a car.
pub const MIN_CAR_YEAR: i32 = 1900;

/// Latest model year accepted for a car.
pub const MAX_CAR_YEAR: i32 = 2030;

// ---------------------------------------------------------------------------
// Mod categories
// ---------------------------------------------------------------------------

/// Category of an aftermarket modification fitted to a car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModCategory {
    Engine,
    Suspension,
    Aero,
    Brakes,
    WheelsTires,
    Drivetrain,
    Exhaust,
    Interior,
    Exterior,
    Electronics,
    Other,
}

impl ModCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Engine => "ENGINE",
            Self::Suspension => "SUSPENSION",
            Self::Aero => "AERO",
            Self::Brakes => "BRAKES",
            Self::WheelsTires => "WHEELS_TIRES",
            Self::Drivetrain => "DRIVETRAIN",
            Self::Exhaust => "EXHAUST",
            Self::Interior => "INTERIOR",
            Self::Exterior => "EXTERIOR",
            Self::Electronics => "ELECTRONICS",
            Self::Other => "OTHER",
        }
    }

    /// Parse a category from its wire form. Matching is exact (uppercase).
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "ENGINE" => Ok(Self::Engine),
            "SUSPENSION" => Ok(Self::Suspension),
            "AERO" => Ok(Self::Aero),
            "BRAKES" => Ok(Self::Brakes),
            "WHEELS_TIRES" => Ok(Self::WheelsTires),
            "DRIVETRAIN" => Ok(Self::Drivetrain),
            "EXHAUST" => Ok(Self::Exhaust),
            "INTERIOR" => Ok(Self::Interior),
            "EXTERIOR" => Ok(Self::Exterior),
            "ELECTRONICS" => Ok(Self::Electronics),
            "OTHER" => Ok(Self::Other),
            _ => Err(CoreError::Validation("Invalid mod category".to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate the fields of a car create/update request.
///
/// Make and model must be non-blank and the year must fall within
/// [`MIN_CAR_YEAR`]..=[`MAX_CAR_YEAR`]. Every failure reports the same
/// generic message.
pub fn validate_car(make: &str, model: &str, year: i32) -> Result<(), CoreError> {
    if make.trim().is_empty() || model.trim().is_empty() {
        return Err(CoreError::Validation("Validation failed".to_string()));
    }
    if !(MIN_CAR_YEAR..=MAX_CAR_YEAR).contains(&year) {
        return Err(CoreError::Validation("Validation failed".to_string()));
    }
    Ok(())
}

/// Validate a mod create request, returning the parsed category.
pub fn validate_car_mod(name: &str, category: &str) -> Result<ModCategory, CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Mod name is required".to_string()));
    }
    ModCategory::parse(category)
}
