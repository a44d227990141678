//! Repository for the `lap_records` table.
//!
//! Lap records are private: every query is scoped to the driver.

use chrono::Utc;
use sqlx::SqlitePool;
use trackside_core::driving::DrivingCondition;
use trackside_core::types::new_id;

use crate::models::car::CarSummary;
use crate::models::lap_record::{
    CreateLapRecord, LapRecord, LapRecordFilter, LapRecordWithDetails,
};
use crate::models::track::{TrackBrief, TrackEvent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, lap_time, conditions, notes, \
                       tire_pressure_fl, tire_pressure_fr, tire_pressure_rl, tire_pressure_rr, \
                       fuel_level, camber_fl, camber_fr, camber_rl, camber_rr, \
                       caster_fl, caster_fr, toe_fl, toe_fr, toe_rl, toe_rr, \
                       track_id, track_event_id, car_id, driver_id, created_at, updated_at";

pub struct LapbookRepo;

impl LapbookRepo {
    /// The driver's lap records, newest first, with optional filters.
    ///
    /// `event_type` matches records whose linked track event has that type.
    pub async fn list_for_driver(
        pool: &SqlitePool,
        driver_id: &str,
        filter: &LapRecordFilter,
    ) -> Result<Vec<LapRecordWithDetails>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM lap_records lr \
             WHERE lr.driver_id = ?1 \
               AND (?2 IS NULL OR lr.track_id = ?2) \
               AND (?3 IS NULL OR lr.car_id = ?3) \
               AND (?4 IS NULL OR EXISTS ( \
                     SELECT 1 FROM track_events e \
                     WHERE e.id = lr.track_event_id AND e.event_type = ?4)) \
             ORDER BY lr.rowid DESC"
        );
        let records = sqlx::query_as::<_, LapRecord>(&query)
            .bind(driver_id)
            .bind(filter.track_id.as_deref().filter(|s| !s.is_empty()))
            .bind(filter.car_id.as_deref().filter(|s| !s.is_empty()))
            .bind(filter.event_type.as_deref().filter(|s| !s.is_empty()))
            .fetch_all(pool)
            .await?;

        let mut out = Vec::with_capacity(records.len());
        for record in records {
            out.push(Self::with_details(pool, record).await?);
        }
        Ok(out)
    }

    /// Insert a lap record. Ownership of the car and existence of the track
    /// are checked by the caller.
    pub async fn create(
        pool: &SqlitePool,
        driver_id: &str,
        input: &CreateLapRecord,
        conditions: DrivingCondition,
    ) -> Result<LapRecordWithDetails, sqlx::Error> {
        let t = &input.telemetry;
        let query = format!(
            "INSERT INTO lap_records ( \
                id, lap_time, conditions, notes, \
                tire_pressure_fl, tire_pressure_fr, tire_pressure_rl, tire_pressure_rr, \
                fuel_level, camber_fl, camber_fr, camber_rl, camber_rr, \
                caster_fl, caster_fr, toe_fl, toe_fr, toe_rl, toe_rr, \
                track_id, track_event_id, car_id, driver_id, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, \
                     ?16, ?17, ?18, ?19, ?20, ?21, ?22, ?23, ?24, ?24) \
             RETURNING {COLUMNS}"
        );
        let record = sqlx::query_as::<_, LapRecord>(&query)
            .bind(new_id())
            .bind(input.lap_time.trim())
            .bind(conditions.as_str())
            .bind(&input.notes)
            .bind(t.tire_pressure_fl)
            .bind(t.tire_pressure_fr)
            .bind(t.tire_pressure_rl)
            .bind(t.tire_pressure_rr)
            .bind(t.fuel_level)
            .bind(t.camber_fl)
            .bind(t.camber_fr)
            .bind(t.camber_rl)
            .bind(t.camber_rr)
            .bind(t.caster_fl)
            .bind(t.caster_fr)
            .bind(t.toe_fl)
            .bind(t.toe_fr)
            .bind(t.toe_rl)
            .bind(t.toe_rr)
            .bind(&input.track_id)
            .bind(input.track_event_id.as_deref().filter(|s| !s.is_empty()))
            .bind(&input.car_id)
            .bind(driver_id)
            .bind(Utc::now())
            .fetch_one(pool)
            .await?;
        Self::with_details(pool, record).await
    }

    /// Delete a lap record owned by `driver_id`.
    pub async fn delete(pool: &SqlitePool, id: &str, driver_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM lap_records WHERE id = ?1 AND driver_id = ?2")
            .bind(id)
            .bind(driver_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn with_details(
        pool: &SqlitePool,
        record: LapRecord,
    ) -> Result<LapRecordWithDetails, sqlx::Error> {
        // Both rows are guaranteed by foreign keys with cascading delete.
        let track = sqlx::query_as::<_, TrackBrief>(
            "SELECT id, name, location FROM tracks WHERE id = ?1",
        )
        .bind(&record.track_id)
        .fetch_one(pool)
        .await?;
        let car = sqlx::query_as::<_, CarSummary>(
            "SELECT id, make, model, year FROM cars WHERE id = ?1",
        )
        .bind(&record.car_id)
        .fetch_one(pool)
        .await?;
        let track_event = match &record.track_event_id {
            Some(event_id) => {
                sqlx::query_as::<_, TrackEvent>(
                    "SELECT id, event_type, track_id FROM track_events WHERE id = ?1",
                )
                .bind(event_id)
                .fetch_optional(pool)
                .await?
            }
            None => None,
        };

        Ok(LapRecordWithDetails {
            record,
            track,
            track_event,
            car,
        })
    }
}
