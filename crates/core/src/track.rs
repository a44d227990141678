//! Track, event-type and zone validation.
//!
//! Track creation and editing, zone placement, and the list filters all
//! run through the helpers here.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum length of a track name or location after trimming.
pub const MIN_TRACK_TEXT_LEN: usize = 2;

/// Zone positions are percentages of the track map.
pub const MIN_ZONE_POSITION: f64 = 0.0;
pub const MAX_ZONE_POSITION: f64 = 100.0;

// ---------------------------------------------------------------------------
// Event types
// ---------------------------------------------------------------------------

/// Kind of event a track hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventType {
    Autocross,
    Roadcourse,
    Drift,
    Drag,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Autocross => "AUTOCROSS",
            Self::Roadcourse => "ROADCOURSE",
            Self::Drift => "DRIFT",
            Self::Drag => "DRAG",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "AUTOCROSS" => Ok(Self::Autocross),
            "ROADCOURSE" => Ok(Self::Roadcourse),
            "DRIFT" => Ok(Self::Drift),
            "DRAG" => Ok(Self::Drag),
            _ => Err(CoreError::Validation(format!("Invalid event type: {s}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Track status
// ---------------------------------------------------------------------------

/// Moderation status of a track. Only `Approved` tracks are listed publicly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TrackStatus {
    Pending,
    Approved,
    Rejected,
}

impl TrackStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

fn long_enough(s: &str) -> bool {
    s.trim().chars().count() >= MIN_TRACK_TEXT_LEN
}

/// Validate a new track submission and return its distinct event types in
/// first-seen order.
pub fn validate_new_track(
    name: &str,
    location: &str,
    event_types: &[String],
) -> Result<Vec<EventType>, CoreError> {
    if !long_enough(name) {
        return Err(CoreError::Validation("Track name is required".to_string()));
    }
    if !long_enough(location) {
        return Err(CoreError::Validation("Location is required".to_string()));
    }
    if event_types.is_empty() {
        return Err(CoreError::Validation(
            "Select at least one event type".to_string(),
        ));
    }
    parse_event_types(event_types)
}

/// Parse a list of event type strings, collapsing duplicates.
pub fn parse_event_types(raw: &[String]) -> Result<Vec<EventType>, CoreError> {
    let mut parsed: Vec<EventType> = Vec::with_capacity(raw.len());
    for s in raw {
        let et = EventType::parse(s)?;
        if !parsed.contains(&et) {
            parsed.push(et);
        }
    }
    Ok(parsed)
}

/// Validate the optional name/location of a track edit.
pub fn validate_track_patch(name: Option<&str>, location: Option<&str>) -> Result<(), CoreError> {
    if name.is_some_and(|n| !long_enough(n)) {
        return Err(CoreError::Validation("Track name is required".to_string()));
    }
    if location.is_some_and(|l| !long_enough(l)) {
        return Err(CoreError::Validation("Location is required".to_string()));
    }
    Ok(())
}

/// Validate a new zone's name, map position and optional event type.
pub fn validate_zone(
    name: &str,
    pos_x: f64,
    pos_y: f64,
    event_type: Option<&str>,
) -> Result<Option<EventType>, CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Zone name is required".to_string()));
    }
    let in_range = |v: f64| v.is_finite() && (MIN_ZONE_POSITION..=MAX_ZONE_POSITION).contains(&v);
    if !in_range(pos_x) || !in_range(pos_y) {
        return Err(CoreError::Validation(
            "Position must be between 0 and 100".to_string(),
        ));
    }
    match event_type {
        None | Some("") => Ok(None),
        Some(et) => EventType::parse(et).map(Some),
    }
}

/// Validate tip content.
pub fn validate_tip_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation("Tip content is required".to_string()));
    }
    Ok(())
}

/// Normalise the `state` list filter (uppercased, blank treated as absent).
pub fn normalize_state_filter(state: Option<&str>) -> Option<String> {
    state
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_uppercase)
}
