//! Repository for the `track_images` table.

use chrono::Utc;
use sqlx::SqlitePool;
use trackside_core::types::new_id;

use crate::models::track::{CreateTrackImage, TrackImage, TrackImageWithUploader};
use crate::models::user::UserBrief;
use crate::repositories::UserRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, url, caption, track_id, uploaded_by_id, created_at";

/// Provides gallery operations for a track.
pub struct TrackImageRepo;

impl TrackImageRepo {
    /// List a track's images newest first, each with its uploader.
    pub async fn list_for_track(
        pool: &SqlitePool,
        track_id: &str,
    ) -> Result<Vec<TrackImageWithUploader>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM track_images WHERE track_id = ?1 \
             ORDER BY rowid DESC"
        );
        let images = sqlx::query_as::<_, TrackImage>(&query)
            .bind(track_id)
            .fetch_all(pool)
            .await?;

        let mut out = Vec::with_capacity(images.len());
        for image in images {
            out.push(Self::with_uploader(pool, image).await?);
        }
        Ok(out)
    }

    pub async fn create(
        pool: &SqlitePool,
        track_id: &str,
        user_id: &str,
        input: &CreateTrackImage,
    ) -> Result<TrackImageWithUploader, sqlx::Error> {
        let query = format!(
            "INSERT INTO track_images (id, url, caption, track_id, uploaded_by_id, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
             RETURNING {COLUMNS}"
        );
        let image = sqlx::query_as::<_, TrackImage>(&query)
            .bind(new_id())
            .bind(input.url.trim())
            .bind(&input.caption)
            .bind(track_id)
            .bind(user_id)
            .bind(Utc::now())
            .fetch_one(pool)
            .await?;
        Self::with_uploader(pool, image).await
    }

    /// Find an image only if it is attached to `track_id`.
    pub async fn find_for_track(
        pool: &SqlitePool,
        track_id: &str,
        image_id: &str,
    ) -> Result<Option<TrackImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM track_images WHERE id = ?1 AND track_id = ?2");
        sqlx::query_as::<_, TrackImage>(&query)
            .bind(image_id)
            .bind(track_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM track_images WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn with_uploader(
        pool: &SqlitePool,
        image: TrackImage,
    ) -> Result<TrackImageWithUploader, sqlx::Error> {
        let uploaded_by = UserRepo::find_brief(pool, &image.uploaded_by_id)
            .await?
            .unwrap_or_else(|| UserBrief {
                id: image.uploaded_by_id.clone(),
                name: None,
            });
        Ok(TrackImageWithUploader {
            id: image.id,
            url: image.url,
            caption: image.caption,
            created_at: image.created_at,
            uploaded_by,
        })
    }
}
