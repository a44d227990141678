//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trackside_core::types::{EntityId, Timestamp};

use super::car::CarWithMods;

/// Full user row from the `users` table.
///
/// Contains the password hash, so it is never serialized. Handlers build one
/// of the narrower response shapes below instead.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: EntityId,
    pub name: Option<String>,
    pub email: String,
    pub password_hash: Option<String>,
    pub image: Option<String>,
    pub experience: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// `{id, name}` author/uploader reference.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserBrief {
    pub id: EntityId,
    pub name: Option<String>,
}

/// `{id, name, experience}` reference used for track uploaders.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserWithExperience {
    pub id: EntityId,
    pub name: Option<String>,
    pub experience: String,
}

/// `{id, name, email}` returned by registration and embedded in login.
#[derive(Debug, Clone, Serialize)]
pub struct UserIdentity {
    pub id: EntityId,
    pub name: Option<String>,
    pub email: String,
}

impl From<&User> for UserIdentity {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.clone(),
            name: u.name.clone(),
            email: u.email.clone(),
        }
    }
}

/// Per-user activity counters shown on the profile page.
#[derive(Debug, Clone, Default, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCounts {
    pub track_reviews: i64,
    pub lap_records: i64,
    pub tracks: i64,
    pub zone_tips: i64,
}

/// Profile of the signed-in user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: EntityId,
    pub name: Option<String>,
    pub email: String,
    pub experience: String,
    pub image: Option<String>,
    pub created_at: Timestamp,
    pub cars: Vec<CarWithMods>,
    #[serde(rename = "_count")]
    pub count: UserCounts,
}

/// Result of a profile edit.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub id: EntityId,
    pub name: Option<String>,
    pub email: String,
    pub experience: String,
}

impl From<&User> for ProfileSummary {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.clone(),
            name: u.name.clone(),
            email: u.email.clone(),
            experience: u.experience.clone(),
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub name: Option<String>,
    pub email: String,
    pub password_hash: Option<String>,
}

/// DTO for a profile edit. Both fields are required by the endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub experience: String,
}
