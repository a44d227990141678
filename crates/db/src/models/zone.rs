//! Track zone and zone tip models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trackside_core::types::{EntityId, Timestamp};

use super::user::UserBrief;

/// A row from the `track_zones` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackZone {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub pos_x: f64,
    pub pos_y: f64,
    pub track_id: EntityId,
    pub event_type: Option<String>,
    pub created_at: Timestamp,
}

/// A row from the `zone_tips` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneTip {
    pub id: EntityId,
    pub content: String,
    pub conditions: Option<String>,
    pub zone_id: EntityId,
    pub author_id: EntityId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Serialize)]
pub struct ZoneTipWithAuthor {
    #[serde(flatten)]
    pub tip: ZoneTip,
    pub author: UserBrief,
}

#[derive(Debug, Clone, Serialize)]
pub struct ZoneWithTips {
    #[serde(flatten)]
    pub zone: TrackZone,
    pub tips: Vec<ZoneTipWithAuthor>,
}

/// DTO for placing a zone on the track map.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateZone {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub pos_x: f64,
    #[serde(default)]
    pub pos_y: f64,
    pub event_type: Option<String>,
}

/// DTO for renaming or re-describing a zone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateZone {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// DTO for adding a tip to a zone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateZoneTip {
    #[serde(default)]
    pub content: String,
    pub conditions: Option<String>,
}
