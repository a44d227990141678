//! Track review model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trackside_core::types::{EntityId, Timestamp};

use super::car::CarBrief;
use super::track::TrackEvent;

/// A row from the `track_reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackReview {
    pub id: EntityId,
    pub rating: i32,
    pub content: Option<String>,
    pub conditions: String,
    pub track_id: EntityId,
    pub track_event_id: Option<EntityId>,
    pub author_id: EntityId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Review author with experience and garage.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewAuthor {
    pub id: EntityId,
    pub name: Option<String>,
    pub experience: String,
    pub cars: Vec<CarBrief>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewWithAuthor {
    #[serde(flatten)]
    pub review: TrackReview,
    pub author: ReviewAuthor,
    pub track_event: Option<TrackEvent>,
}

/// DTO for reviewing a track.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReview {
    #[serde(default)]
    pub rating: i32,
    pub content: Option<String>,
    #[serde(default)]
    pub conditions: String,
    pub track_event_id: Option<EntityId>,
}
