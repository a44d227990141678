//! Repository for the `users` table.

use chrono::Utc;
use sqlx::SqlitePool;
use trackside_core::account::{ExperienceLevel, SYSTEM_USER_EMAIL, SYSTEM_USER_NAME};
use trackside_core::types::new_id;

use crate::models::user::{CreateUser, User, UserBrief, UserCounts, UserWithExperience};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, email, password_hash, image, experience, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user with the default experience level.
    pub async fn create(pool: &SqlitePool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO users (id, name, email, password_hash, experience, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(new_id())
            .bind(&input.name)
            .bind(input.email.trim())
            .bind(&input.password_hash)
            .bind(ExperienceLevel::default().as_str())
            .bind(now)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = ?1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_email(
        pool: &SqlitePool,
        email: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = ?1");
        sqlx::query_as::<_, User>(&query)
            .bind(email.trim())
            .fetch_optional(pool)
            .await
    }

    /// `{id, name}` reference for an author or uploader.
    pub async fn find_brief(
        pool: &SqlitePool,
        id: &str,
    ) -> Result<Option<UserBrief>, sqlx::Error> {
        sqlx::query_as::<_, UserBrief>("SELECT id, name FROM users WHERE id = ?1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_with_experience(
        pool: &SqlitePool,
        id: &str,
    ) -> Result<Option<UserWithExperience>, sqlx::Error> {
        sqlx::query_as::<_, UserWithExperience>(
            "SELECT id, name, experience FROM users WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Set name and experience. Returns `None` if the user no longer exists.
    pub async fn update_profile(
        pool: &SqlitePool,
        id: &str,
        name: &str,
        experience: ExperienceLevel,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET name = ?2, experience = ?3, updated_at = ?4 \
             WHERE id = ?1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(name.trim())
            .bind(experience.as_str())
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Activity counters for the profile page.
    pub async fn counts(pool: &SqlitePool, id: &str) -> Result<UserCounts, sqlx::Error> {
        sqlx::query_as::<_, UserCounts>(
            "SELECT \
                (SELECT COUNT(*) FROM track_reviews WHERE author_id = ?1) AS track_reviews, \
                (SELECT COUNT(*) FROM lap_records WHERE driver_id = ?1) AS lap_records, \
                (SELECT COUNT(*) FROM tracks WHERE uploaded_by_id = ?1) AS tracks, \
                (SELECT COUNT(*) FROM zone_tips WHERE author_id = ?1) AS zone_tips",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }

    /// Return the account that owns imported tracks, creating it on first use.
    pub async fn find_or_create_system(pool: &SqlitePool) -> Result<User, sqlx::Error> {
        if let Some(user) = Self::find_by_email(pool, SYSTEM_USER_EMAIL).await? {
            return Ok(user);
        }

        let now = Utc::now();
        sqlx::query(
            "INSERT OR IGNORE INTO users \
                (id, name, email, email_verified, experience, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?5, ?4, ?5, ?5)",
        )
        .bind(new_id())
        .bind(SYSTEM_USER_NAME)
        .bind(SYSTEM_USER_EMAIL)
        .bind(ExperienceLevel::default().as_str())
        .bind(now)
        .execute(pool)
        .await?;

        Self::find_by_email(pool, SYSTEM_USER_EMAIL)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }
}
