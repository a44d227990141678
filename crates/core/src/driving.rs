//! Driving conditions, review ratings and lap record checks.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lowest accepted review rating.
pub const MIN_RATING: i32 = 1;

/// Highest accepted review rating.
pub const MAX_RATING: i32 = 5;

/// Surface conditions a review, tip or lap record was recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DrivingCondition {
    Dry,
    Wet,
}

impl DrivingCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dry => "DRY",
            Self::Wet => "WET",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "DRY" => Ok(Self::Dry),
            "WET" => Ok(Self::Wet),
            _ => Err(CoreError::Validation("Invalid conditions".to_string())),
        }
    }

    /// Parse an optional condition; `None` and the empty string both mean "unspecified".
    pub fn parse_optional(s: Option<&str>) -> Result<Option<Self>, CoreError> {
        match s {
            None | Some("") => Ok(None),
            Some(v) => Self::parse(v).map(Some),
        }
    }
}

/// Validate a review rating is within [`MIN_RATING`]..=[`MAX_RATING`].
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CoreError::Validation(
            "Rating must be between 1 and 5".to_string(),
        ));
    }
    Ok(())
}

/// Validate the required fields of a lap record.
pub fn validate_lap_record(lap_time: &str, track_id: &str, car_id: &str) -> Result<(), CoreError> {
    if lap_time.trim().is_empty() {
        return Err(CoreError::Validation("Lap time is required".to_string()));
    }
    if track_id.trim().is_empty() || car_id.trim().is_empty() {
        return Err(CoreError::Validation(
            "Track and car are required".to_string(),
        ));
    }
    Ok(())
}

/// Average of a set of ratings, or `0.0` when there are none.
pub fn average_rating(ratings: &[i32]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: i64 = ratings.iter().map(|r| i64::from(*r)).sum();
    sum as f64 / ratings.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conditions_parse_exactly() {
        assert_eq!(DrivingCondition::parse("DRY").unwrap(), DrivingCondition::Dry);
        assert_eq!(DrivingCondition::parse("WET").unwrap(), DrivingCondition::Wet);
        assert!(DrivingCondition::parse("dry").is_err());
        assert!(DrivingCondition::parse("SNOW").is_err());
    }

    #[test]
    fn optional_conditions() {
        assert_eq!(DrivingCondition::parse_optional(None).unwrap(), None);
        assert_eq!(DrivingCondition::parse_optional(Some("")).unwrap(), None);
        assert_eq!(
            DrivingCondition::parse_optional(Some("WET")).unwrap(),
            Some(DrivingCondition::Wet)
        );
        assert!(DrivingCondition::parse_optional(Some("ICE")).is_err());
    }

    #[test]
    fn rating_bounds() {
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(6).is_err());
    }

    #[test]
    fn lap_record_requires_time_track_and_car() {
        assert!(validate_lap_record("1:32.104", "t", "c").is_ok());
        assert!(validate_lap_record("  ", "t", "c").is_err());
        assert!(validate_lap_record("1:32.104", "", "c").is_err());
        assert!(validate_lap_record("1:32.104", "t", "").is_err());
    }

    #[test]
    fn average_of_no_ratings_is_zero() {
        assert_eq!(average_rating(&[]), 0.0);
        assert_eq!(average_rating(&[5, 3]), 4.0);
    }
}
