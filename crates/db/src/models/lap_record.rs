//! Lap record ("lapbook") model and DTOs.
//!
//! The sixteen telemetry columns are grouped in [`LapTelemetry`], which is
//! flattened both into the row type and into the create DTO so the wire
//! names (`tirePressureFL`, `camberRR`, ...) are declared once.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trackside_core::types::{EntityId, Timestamp};

use super::car::CarSummary;
use super::track::{TrackBrief, TrackEvent};

/// Optional car setup recorded alongside a lap.
#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct LapTelemetry {
    #[serde(rename = "tirePressureFL", default)]
    pub tire_pressure_fl: Option<f64>,
    #[serde(rename = "tirePressureFR", default)]
    pub tire_pressure_fr: Option<f64>,
    #[serde(rename = "tirePressureRL", default)]
    pub tire_pressure_rl: Option<f64>,
    #[serde(rename = "tirePressureRR", default)]
    pub tire_pressure_rr: Option<f64>,
    #[serde(rename = "fuelLevel", default)]
    pub fuel_level: Option<f64>,
    #[serde(rename = "camberFL", default)]
    pub camber_fl: Option<f64>,
    #[serde(rename = "camberFR", default)]
    pub camber_fr: Option<f64>,
    #[serde(rename = "camberRL", default)]
    pub camber_rl: Option<f64>,
    #[serde(rename = "camberRR", default)]
    pub camber_rr: Option<f64>,
    #[serde(rename = "casterFL", default)]
    pub caster_fl: Option<f64>,
    #[serde(rename = "casterFR", default)]
    pub caster_fr: Option<f64>,
    #[serde(rename = "toeFL", default)]
    pub toe_fl: Option<f64>,
    #[serde(rename = "toeFR", default)]
    pub toe_fr: Option<f64>,
    #[serde(rename = "toeRL", default)]
    pub toe_rl: Option<f64>,
    #[serde(rename = "toeRR", default)]
    pub toe_rr: Option<f64>,
}

/// A row from the `lap_records` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LapRecord {
    pub id: EntityId,
    pub lap_time: String,
    pub conditions: String,
    pub notes: Option<String>,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub telemetry: LapTelemetry,
    pub track_id: EntityId,
    pub track_event_id: Option<EntityId>,
    pub car_id: EntityId,
    pub driver_id: EntityId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LapRecordWithDetails {
    #[serde(flatten)]
    pub record: LapRecord,
    pub track: TrackBrief,
    pub track_event: Option<TrackEvent>,
    pub car: CarSummary,
}

/// Query filters for the caller's lapbook.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LapRecordFilter {
    pub track_id: Option<EntityId>,
    pub car_id: Option<EntityId>,
    pub event_type: Option<String>,
}

/// DTO for logging a lap.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLapRecord {
    #[serde(default)]
    pub lap_time: String,
    #[serde(default)]
    pub conditions: String,
    pub notes: Option<String>,
    #[serde(flatten)]
    pub telemetry: LapTelemetry,
    #[serde(default)]
    pub track_id: EntityId,
    pub track_event_id: Option<EntityId>,
    #[serde(default)]
    pub car_id: EntityId,
}
