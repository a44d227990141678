//! Car and car-mod models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trackside_core::types::{EntityId, Timestamp};

/// A row from the `cars` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: EntityId,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub user_id: EntityId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `car_mods` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarMod {
    pub id: EntityId,
    pub name: String,
    pub category: String,
    pub notes: Option<String>,
    pub car_id: EntityId,
}

/// A car together with its fitted mods.
#[derive(Debug, Clone, Serialize)]
pub struct CarWithMods {
    #[serde(flatten)]
    pub car: Car,
    pub mods: Vec<CarMod>,
}

/// `{make, model, year}` shown next to review authors.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CarBrief {
    pub make: String,
    pub model: String,
    pub year: i32,
}

/// `{id, make, model, year}` embedded in lap records.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CarSummary {
    pub id: EntityId,
    pub make: String,
    pub model: String,
    pub year: i32,
}

/// DTO for creating or replacing a car. Missing fields default so that the
/// validator, not the JSON decoder, reports them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCar {
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub year: i32,
}

/// DTO for fitting a mod to a car.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCarMod {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub notes: Option<String>,
}
