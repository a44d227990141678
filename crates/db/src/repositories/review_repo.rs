//! Repository for the `track_reviews` table.

use chrono::Utc;
use sqlx::SqlitePool;
use trackside_core::driving::DrivingCondition;
use trackside_core::types::new_id;

use crate::models::review::{CreateReview, ReviewAuthor, ReviewWithAuthor, TrackReview};
use crate::models::track::TrackEvent;
use crate::repositories::{CarRepo, UserRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, rating, content, conditions, track_id, track_event_id, author_id, \
                       created_at, updated_at";

pub struct ReviewRepo;

impl ReviewRepo {
    /// Reviews of a track, newest first, with author and event.
    pub async fn list_for_track(
        pool: &SqlitePool,
        track_id: &str,
    ) -> Result<Vec<ReviewWithAuthor>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM track_reviews WHERE track_id = ?1 \
             ORDER BY rowid DESC"
        );
        let reviews = sqlx::query_as::<_, TrackReview>(&query)
            .bind(track_id)
            .fetch_all(pool)
            .await?;

        let mut out = Vec::with_capacity(reviews.len());
        for review in reviews {
            out.push(Self::with_author(pool, review).await?);
        }
        Ok(out)
    }

    /// Every rating left on a track.
    pub async fn ratings(pool: &SqlitePool, track_id: &str) -> Result<Vec<i32>, sqlx::Error> {
        sqlx::query_scalar::<_, i32>("SELECT rating FROM track_reviews WHERE track_id = ?1")
            .bind(track_id)
            .fetch_all(pool)
            .await
    }

    pub async fn create(
        pool: &SqlitePool,
        track_id: &str,
        author_id: &str,
        input: &CreateReview,
        conditions: DrivingCondition,
    ) -> Result<ReviewWithAuthor, sqlx::Error> {
        let query = format!(
            "INSERT INTO track_reviews \
                (id, rating, content, conditions, track_id, track_event_id, author_id, \
                 created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8) \
             RETURNING {COLUMNS}"
        );
        let review = sqlx::query_as::<_, TrackReview>(&query)
            .bind(new_id())
            .bind(input.rating)
            .bind(&input.content)
            .bind(conditions.as_str())
            .bind(track_id)
            .bind(input.track_event_id.as_deref().filter(|s| !s.is_empty()))
            .bind(author_id)
            .bind(Utc::now())
            .fetch_one(pool)
            .await?;
        Self::with_author(pool, review).await
    }

    async fn with_author(
        pool: &SqlitePool,
        review: TrackReview,
    ) -> Result<ReviewWithAuthor, sqlx::Error> {
        let (name, experience) = match UserRepo::find_with_experience(pool, &review.author_id).await? {
            Some(u) => (u.name, u.experience),
            None => (None, String::new()),
        };
        let cars = CarRepo::list_briefs_for_user(pool, &review.author_id).await?;
        let track_event = match &review.track_event_id {
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

        let author = ReviewAuthor {
            id: review.author_id.clone(),
            name,
            experience,
            cars,
        };
        Ok(ReviewWithAuthor {
            review,
            author,
            track_event,
        })
    }
}
