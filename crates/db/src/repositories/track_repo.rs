//! Repository for the `tracks` and `track_events` tables.
//!
//! List and detail responses are assembled from independent queries issued
//! after the primary result set has been fully read.

use chrono::Utc;
use sqlx::{SqliteConnection, SqlitePool};
use trackside_core::driving::average_rating;
use trackside_core::import::ImportedTrack;
use trackside_core::track::{EventType, TrackStatus};
use trackside_core::types::new_id;

use crate::models::track::{
    CreateTrack, ImportOutcome, Track, TrackCounts, TrackDetail, TrackEvent, TrackFilter,
    TrackListItem, UpdateTrack,
};
use crate::models::user::{UserBrief, UserWithExperience};
use crate::repositories::{ReviewRepo, UserRepo, ZoneRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, location, state, description, image_url, latitude, longitude, \
                       status, is_imported, uploaded_by_id, created_at, updated_at";

const EVENT_COLUMNS: &str = "id, event_type, track_id";

/// Provides CRUD operations for tracks and their event types.
pub struct TrackRepo;

impl TrackRepo {
    /// List approved tracks, newest first, applying the optional filters.
    ///
    /// `search` matches name or location by substring, `event_type` requires a
    /// matching event row, `state` must already be normalised (uppercased).
    pub async fn list_approved(
        pool: &SqlitePool,
        filter: &TrackFilter,
    ) -> Result<Vec<TrackListItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tracks t \
             WHERE t.status = ?1 \
               AND (?2 IS NULL OR t.name LIKE '%' || ?2 || '%' OR t.location LIKE '%' || ?2 || '%') \
               AND (?3 IS NULL OR EXISTS ( \
                     SELECT 1 FROM track_events e WHERE e.track_id = t.id AND e.event_type = ?3)) \
               AND (?4 IS NULL OR t.state = ?4) \
             ORDER BY t.rowid DESC"
        );
        let tracks = sqlx::query_as::<_, Track>(&query)
            .bind(TrackStatus::Approved.as_str())
            .bind(filter.search.as_deref().filter(|s| !s.is_empty()))
            .bind(filter.event_type.as_deref().filter(|s| !s.is_empty()))
            .bind(filter.state.as_deref().filter(|s| !s.is_empty()))
            .fetch_all(pool)
            .await?;

        let mut items = Vec::with_capacity(tracks.len());
        for track in tracks {
            items.push(Self::list_item(pool, track).await?);
        }
        Ok(items)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE id = ?1");
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Full track page. Zones are narrowed to `zone_event_type` when given.
    pub async fn find_detail(
        pool: &SqlitePool,
        id: &str,
        zone_event_type: Option<&str>,
    ) -> Result<Option<TrackDetail>, sqlx::Error> {
        let Some(track) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let events = Self::list_events(pool, &track.id).await?;
        let uploaded_by = UserRepo::find_with_experience(pool, &track.uploaded_by_id)
            .await?
            .unwrap_or_else(|| UserWithExperience {
                id: track.uploaded_by_id.clone(),
                name: None,
                experience: String::new(),
            });
        let zones = ZoneRepo::list_with_tips(pool, &track.id, zone_event_type).await?;
        let reviews = ReviewRepo::list_for_track(pool, &track.id).await?;
        let count = Self::counts(pool, &track.id).await?;
        let avg_rating = average_rating(&ReviewRepo::ratings(pool, &track.id).await?);

        Ok(Some(TrackDetail {
            track,
            events,
            uploaded_by,
            zones,
            reviews,
            count,
            avg_rating,
        }))
    }

    /// Insert an approved, user-submitted track and one event row per type in
    /// a single transaction.
    pub async fn create(
        pool: &SqlitePool,
        user_id: &str,
        input: &CreateTrack,
        event_types: &[EventType],
    ) -> Result<TrackListItem, sqlx::Error> {
        let now = Utc::now();
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO tracks \
                (id, name, location, description, image_url, status, is_imported, \
                 uploaded_by_id, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, 0, ?7, ?8, ?8) \
             RETURNING {COLUMNS}"
        );
        let track = sqlx::query_as::<_, Track>(&query)
            .bind(new_id())
            .bind(input.name.trim())
            .bind(input.location.trim())
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(TrackStatus::Approved.as_str())
            .bind(user_id)
            .bind(now)
            .fetch_one(&mut *tx)
            .await?;

        for et in event_types {
            Self::insert_event(&mut *tx, &track.id, *et).await?;
        }

        tx.commit().await?;
        Self::list_item(pool, track).await
    }

    /// Apply a partial edit. Returns `None` if the track does not exist.
    pub async fn update(
        pool: &SqlitePool,
        id: &str,
        input: &UpdateTrack,
    ) -> Result<Option<Track>, sqlx::Error> {
        let query = format!(
            "UPDATE tracks SET \
                name = COALESCE(?2, name), \
                description = COALESCE(?3, description), \
                location = COALESCE(?4, location), \
                image_url = COALESCE(?5, image_url), \
                updated_at = ?6 \
             WHERE id = ?1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(&input.description)
            .bind(input.location.as_deref().map(str::trim))
            .bind(&input.image_url)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    pub async fn list_events(
        pool: &SqlitePool,
        track_id: &str,
    ) -> Result<Vec<TrackEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {EVENT_COLUMNS} FROM track_events WHERE track_id = ?1 ORDER BY rowid"
        );
        sqlx::query_as::<_, TrackEvent>(&query)
            .bind(track_id)
            .fetch_all(pool)
            .await
    }

    /// Find an event only if it belongs to `track_id`.
    pub async fn find_event_for_track(
        pool: &SqlitePool,
        track_id: &str,
        event_id: &str,
    ) -> Result<Option<TrackEvent>, sqlx::Error> {
        let query =
            format!("SELECT {EVENT_COLUMNS} FROM track_events WHERE id = ?1 AND track_id = ?2");
        sqlx::query_as::<_, TrackEvent>(&query)
            .bind(event_id)
            .bind(track_id)
            .fetch_optional(pool)
            .await
    }

    async fn insert_event(
        conn: &mut SqliteConnection,
        track_id: &str,
        event_type: EventType,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT OR IGNORE INTO track_events (id, event_type, track_id) VALUES (?1, ?2, ?3)",
        )
        .bind(new_id())
        .bind(event_type.as_str())
        .bind(track_id)
        .execute(conn)
        .await?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Import
    // -----------------------------------------------------------------------

    /// Insert or refresh one imported track, keyed on (name, location).
    ///
    /// New tracks are created approved and imported, owned by `system_user_id`.
    /// Existing tracks get description, coordinates and state refreshed, are
    /// flagged imported, and gain any event types they were missing.
    pub async fn upsert_imported(
        pool: &SqlitePool,
        system_user_id: &str,
        data: &ImportedTrack,
        event_types: &[EventType],
    ) -> Result<ImportOutcome, sqlx::Error> {
        let now = Utc::now();
        let state = Some(data.state.trim().to_uppercase()).filter(|s| !s.is_empty());
        let description = Some(data.description.trim()).filter(|s| !s.is_empty());

        let mut tx = pool.begin().await?;

        let existing: Option<String> =
            sqlx::query_scalar("SELECT id FROM tracks WHERE name = ?1 AND location = ?2")
                .bind(&data.name)
                .bind(&data.location)
                .fetch_optional(&mut *tx)
                .await?;

        let (track_id, outcome) = match existing {
            Some(id) => {
                sqlx::query(
                    "UPDATE tracks SET description = ?2, latitude = ?3, longitude = ?4, \
                        state = ?5, is_imported = 1, updated_at = ?6 \
                     WHERE id = ?1",
                )
                .bind(&id)
                .bind(description)
                .bind(data.latitude)
                .bind(data.longitude)
                .bind(&state)
                .bind(now)
                .execute(&mut *tx)
                .await?;
                (id, ImportOutcome::Updated)
            }
            None => {
                let id = new_id();
                sqlx::query(
                    "INSERT INTO tracks \
                        (id, name, location, state, description, latitude, longitude, \
                         status, is_imported, uploaded_by_id, created_at, updated_at) \
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 1, ?9, ?10, ?10)",
                )
                .bind(&id)
                .bind(&data.name)
                .bind(&data.location)
                .bind(&state)
                .bind(description)
                .bind(data.latitude)
                .bind(data.longitude)
                .bind(TrackStatus::Approved.as_str())
                .bind(system_user_id)
                .bind(now)
                .execute(&mut *tx)
                .await?;
                (id, ImportOutcome::Created)
            }
        };

        for et in event_types {
            Self::insert_event(&mut *tx, &track_id, *et).await?;
        }

        tx.commit().await?;
        Ok(outcome)
    }

    // -----------------------------------------------------------------------
    // Aggregates
    // -----------------------------------------------------------------------

    pub async fn counts(pool: &SqlitePool, track_id: &str) -> Result<TrackCounts, sqlx::Error> {
        sqlx::query_as::<_, TrackCounts>(
            "SELECT \
                (SELECT COUNT(*) FROM track_reviews WHERE track_id = ?1) AS reviews, \
                (SELECT COUNT(*) FROM track_zones WHERE track_id = ?1) AS zones, \
                (SELECT COUNT(*) FROM lap_records WHERE track_id = ?1) AS lap_records",
        )
        .bind(track_id)
        .fetch_one(pool)
        .await
    }

    /// Decorate a track row with events, uploader, counts and average rating.
    pub async fn list_item(pool: &SqlitePool, track: Track) -> Result<TrackListItem, sqlx::Error> {
        let events = Self::list_events(pool, &track.id).await?;
        let uploaded_by = UserRepo::find_brief(pool, &track.uploaded_by_id)
            .await?
            .unwrap_or_else(|| UserBrief {
                id: track.uploaded_by_id.clone(),
                name: None,
            });
        let count = Self::counts(pool, &track.id).await?;
        let avg_rating = average_rating(&ReviewRepo::ratings(pool, &track.id).await?);

        Ok(TrackListItem {
            track,
            events,
            uploaded_by,
            count,
            avg_rating,
        })
    }
}
