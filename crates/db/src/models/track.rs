//! Track, track event and track image models, plus the nested list/detail
//! shapes served by the track endpoints.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trackside_core::types::{EntityId, Timestamp};

use super::review::ReviewWithAuthor;
use super::user::{UserBrief, UserWithExperience};
use super::zone::ZoneWithTips;

/// A row from the `tracks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: EntityId,
    pub name: String,
    pub location: String,
    pub state: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: String,
    pub is_imported: bool,
    pub uploaded_by_id: EntityId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `track_events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackEvent {
    pub id: EntityId,
    pub event_type: String,
    pub track_id: EntityId,
}

/// A row from the `track_images` table.
#[derive(Debug, Clone, FromRow)]
pub struct TrackImage {
    pub id: EntityId,
    pub url: String,
    pub caption: Option<String>,
    pub track_id: EntityId,
    pub uploaded_by_id: EntityId,
    pub created_at: Timestamp,
}

/// Gallery entry with its uploader.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackImageWithUploader {
    pub id: EntityId,
    pub url: String,
    pub caption: Option<String>,
    pub created_at: Timestamp,
    pub uploaded_by: UserBrief,
}

/// Aggregate counters embedded as `_count`.
#[derive(Debug, Clone, Default, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackCounts {
    pub reviews: i64,
    pub zones: i64,
    pub lap_records: i64,
}

/// Element of the public track list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackListItem {
    #[serde(flatten)]
    pub track: Track,
    pub events: Vec<TrackEvent>,
    pub uploaded_by: UserBrief,
    #[serde(rename = "_count")]
    pub count: TrackCounts,
    pub avg_rating: f64,
}

/// Full track page: events, zones with tips, reviews with authors.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackDetail {
    #[serde(flatten)]
    pub track: Track,
    pub events: Vec<TrackEvent>,
    pub uploaded_by: UserWithExperience,
    pub zones: Vec<ZoneWithTips>,
    pub reviews: Vec<ReviewWithAuthor>,
    #[serde(rename = "_count")]
    pub count: TrackCounts,
    pub avg_rating: f64,
}

/// `{id, name, location}` embedded in lap records.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TrackBrief {
    pub id: EntityId,
    pub name: String,
    pub location: String,
}

/// Query filters for the public track list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackFilter {
    pub search: Option<String>,
    pub event_type: Option<String>,
    pub state: Option<String>,
}

/// DTO for submitting a new track.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrack {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub event_types: Vec<String>,
}

/// DTO for editing a track. Only supplied fields change.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrack {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
}

/// DTO for attaching an image link to a track.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTrackImage {
    #[serde(default)]
    pub url: String,
    pub caption: Option<String>,
}

/// Outcome of upserting one imported track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    Created,
    Updated,
}
