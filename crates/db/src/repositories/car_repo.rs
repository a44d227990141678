//! Repository for the `cars` and `car_mods` tables.
//!
//! Every car lookup that backs a mutation is scoped by owner, so a car that
//! belongs to someone else is indistinguishable from a missing one.

use chrono::Utc;
use sqlx::SqlitePool;
use trackside_core::garage::ModCategory;
use trackside_core::types::new_id;

use crate::models::car::{Car, CarBrief, CarMod, CarWithMods, CreateCar, CreateCarMod};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, make, model, year, user_id, created_at, updated_at";

const MOD_COLUMNS: &str = "id, name, category, notes, car_id";

/// Provides CRUD operations for cars and their mods.
pub struct CarRepo;

impl CarRepo {
    /// List a user's cars newest first, each with its mods.
    pub async fn list_for_user(
        pool: &SqlitePool,
        user_id: &str,
    ) -> Result<Vec<CarWithMods>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cars WHERE user_id = ?1 \
             ORDER BY rowid DESC"
        );
        let cars = sqlx::query_as::<_, Car>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;

        let mut out = Vec::with_capacity(cars.len());
        for car in cars {
            let mods = Self::list_mods(pool, &car.id).await?;
            out.push(CarWithMods { car, mods });
        }
        Ok(out)
    }

    /// `{make, model, year}` of every car a user owns, newest first.
    pub async fn list_briefs_for_user(
        pool: &SqlitePool,
        user_id: &str,
    ) -> Result<Vec<CarBrief>, sqlx::Error> {
        sqlx::query_as::<_, CarBrief>(
            "SELECT make, model, year FROM cars WHERE user_id = ?1 \
             ORDER BY rowid DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Find a car only if it belongs to `user_id`.
    pub async fn find_by_id_and_user(
        pool: &SqlitePool,
        id: &str,
        user_id: &str,
    ) -> Result<Option<Car>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cars WHERE id = ?1 AND user_id = ?2");
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new car. A fresh car has no mods.
    pub async fn create(
        pool: &SqlitePool,
        user_id: &str,
        input: &CreateCar,
    ) -> Result<CarWithMods, sqlx::Error> {
        let query = format!(
            "INSERT INTO cars (id, make, model, year, user_id, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6) \
             RETURNING {COLUMNS}"
        );
        let car = sqlx::query_as::<_, Car>(&query)
            .bind(new_id())
            .bind(input.make.trim())
            .bind(input.model.trim())
            .bind(input.year)
            .bind(user_id)
            .bind(Utc::now())
            .fetch_one(pool)
            .await?;
        Ok(CarWithMods {
            car,
            mods: Vec::new(),
        })
    }

    /// Replace make/model/year of an owned car.
    ///
    /// Returns `None` if no car with `id` is owned by `user_id`.
    pub async fn update(
        pool: &SqlitePool,
        id: &str,
        user_id: &str,
        input: &CreateCar,
    ) -> Result<Option<CarWithMods>, sqlx::Error> {
        let query = format!(
            "UPDATE cars SET make = ?3, model = ?4, year = ?5, updated_at = ?6 \
             WHERE id = ?1 AND user_id = ?2 \
             RETURNING {COLUMNS}"
        );
        let car = sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.make.trim())
            .bind(input.model.trim())
            .bind(input.year)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await?;

        match car {
            Some(car) => {
                let mods = Self::list_mods(pool, &car.id).await?;
                Ok(Some(CarWithMods { car, mods }))
            }
            None => Ok(None),
        }
    }

    /// Delete an owned car. Mods and lap records cascade.
    pub async fn delete(pool: &SqlitePool, id: &str, user_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cars WHERE id = ?1 AND user_id = ?2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Mods
    // -----------------------------------------------------------------------

    pub async fn list_mods(pool: &SqlitePool, car_id: &str) -> Result<Vec<CarMod>, sqlx::Error> {
        let query = format!("SELECT {MOD_COLUMNS} FROM car_mods WHERE car_id = ?1 ORDER BY rowid");
        sqlx::query_as::<_, CarMod>(&query)
            .bind(car_id)
            .fetch_all(pool)
            .await
    }

    pub async fn create_mod(
        pool: &SqlitePool,
        car_id: &str,
        input: &CreateCarMod,
        category: ModCategory,
    ) -> Result<CarMod, sqlx::Error> {
        let query = format!(
            "INSERT INTO car_mods (id, name, category, notes, car_id) \
             VALUES (?1, ?2, ?3, ?4, ?5) \
             RETURNING {MOD_COLUMNS}"
        );
        sqlx::query_as::<_, CarMod>(&query)
            .bind(new_id())
            .bind(input.name.trim())
            .bind(category.as_str())
            .bind(&input.notes)
            .bind(car_id)
            .fetch_one(pool)
            .await
    }

    /// Delete a mod, but only if it is fitted to `car_id`.
    pub async fn delete_mod(
        pool: &SqlitePool,
        car_id: &str,
        mod_id: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM car_mods WHERE id = ?1 AND car_id = ?2")
            .bind(mod_id)
            .bind(car_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
