//! Repository for the `track_zones` and `zone_tips` tables.

use chrono::Utc;
use sqlx::SqlitePool;
use trackside_core::driving::DrivingCondition;
use trackside_core::track::EventType;
use trackside_core::types::new_id;

use crate::models::user::UserBrief;
use crate::models::zone::{
    CreateZone, TrackZone, UpdateZone, ZoneTip, ZoneTipWithAuthor, ZoneWithTips,
};
use crate::repositories::UserRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, pos_x, pos_y, track_id, event_type, created_at";

const TIP_COLUMNS: &str = "id, content, conditions, zone_id, author_id, created_at, updated_at";

/// Provides CRUD operations for track zones and their tips.
pub struct ZoneRepo;

impl ZoneRepo {
    /// List a track's zones in creation order, optionally only those tagged
    /// with `event_type`, each with its tips.
    pub async fn list_with_tips(
        pool: &SqlitePool,
        track_id: &str,
        event_type: Option<&str>,
    ) -> Result<Vec<ZoneWithTips>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM track_zones \
             WHERE track_id = ?1 AND (?2 IS NULL OR event_type = ?2) \
             ORDER BY rowid"
        );
        let zones = sqlx::query_as::<_, TrackZone>(&query)
            .bind(track_id)
            .bind(event_type.filter(|s| !s.is_empty()))
            .fetch_all(pool)
            .await?;

        let mut out = Vec::with_capacity(zones.len());
        for zone in zones {
            out.push(Self::with_tips(pool, zone).await?);
        }
        Ok(out)
    }

    /// Find a zone only if it belongs to `track_id`.
    pub async fn find_for_track(
        pool: &SqlitePool,
        track_id: &str,
        zone_id: &str,
    ) -> Result<Option<TrackZone>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM track_zones WHERE id = ?1 AND track_id = ?2");
        sqlx::query_as::<_, TrackZone>(&query)
            .bind(zone_id)
            .bind(track_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &SqlitePool,
        track_id: &str,
        input: &CreateZone,
        event_type: Option<EventType>,
    ) -> Result<TrackZone, sqlx::Error> {
        let query = format!(
            "INSERT INTO track_zones \
                (id, name, description, pos_x, pos_y, track_id, event_type, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TrackZone>(&query)
            .bind(new_id())
            .bind(input.name.trim())
            .bind(&input.description)
            .bind(input.pos_x)
            .bind(input.pos_y)
            .bind(track_id)
            .bind(event_type.map(|e| e.as_str()))
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Rename or re-describe a zone. Only supplied fields change.
    pub async fn update(
        pool: &SqlitePool,
        zone_id: &str,
        input: &UpdateZone,
    ) -> Result<Option<ZoneWithTips>, sqlx::Error> {
        let query = format!(
            "UPDATE track_zones SET \
                name = COALESCE(?2, name), \
                description = COALESCE(?3, description) \
             WHERE id = ?1 \
             RETURNING {COLUMNS}"
        );
        let zone = sqlx::query_as::<_, TrackZone>(&query)
            .bind(zone_id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(&input.description)
            .fetch_optional(pool)
            .await?;

        match zone {
            Some(zone) => Ok(Some(Self::with_tips(pool, zone).await?)),
            None => Ok(None),
        }
    }

    /// Delete a zone. Its tips cascade.
    pub async fn delete(pool: &SqlitePool, zone_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM track_zones WHERE id = ?1")
            .bind(zone_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Tips
    // -----------------------------------------------------------------------

    pub async fn create_tip(
        pool: &SqlitePool,
        zone_id: &str,
        author_id: &str,
        content: &str,
        conditions: Option<DrivingCondition>,
    ) -> Result<ZoneTipWithAuthor, sqlx::Error> {
        let query = format!(
            "INSERT INTO zone_tips (id, content, conditions, zone_id, author_id, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6) \
             RETURNING {TIP_COLUMNS}"
        );
        let tip = sqlx::query_as::<_, ZoneTip>(&query)
            .bind(new_id())
            .bind(content.trim())
            .bind(conditions.map(|c| c.as_str()))
            .bind(zone_id)
            .bind(author_id)
            .bind(Utc::now())
            .fetch_one(pool)
            .await?;
        Self::tip_with_author(pool, tip).await
    }

    /// Tips for a zone, newest first.
    async fn with_tips(pool: &SqlitePool, zone: TrackZone) -> Result<ZoneWithTips, sqlx::Error> {
        let query = format!(
            "SELECT {TIP_COLUMNS} FROM zone_tips WHERE zone_id = ?1 \
             ORDER BY rowid DESC"
        );
        let tips = sqlx::query_as::<_, ZoneTip>(&query)
            .bind(&zone.id)
            .fetch_all(pool)
            .await?;

        let mut with_authors = Vec::with_capacity(tips.len());
        for tip in tips {
            with_authors.push(Self::tip_with_author(pool, tip).await?);
        }
        Ok(ZoneWithTips {
            zone,
            tips: with_authors,
        })
    }

    async fn tip_with_author(
        pool: &SqlitePool,
        tip: ZoneTip,
    ) -> Result<ZoneTipWithAuthor, sqlx::Error> {
        let author = UserRepo::find_brief(pool, &tip.author_id)
            .await?
            .unwrap_or_else(|| UserBrief {
                id: tip.author_id.clone(),
                name: None,
            });
        Ok(ZoneTipWithAuthor { tip, author })
    }
}
