use chrono::Utc;
use sqlx::sqlite::SqlitePool;
use uuid::Uuid;

use crate::models::{Workout, WorkoutFields};

/// Fixed listing page size.
pub const PER_PAGE: i64 = 10;

const WORKOUT_COLUMNS: &str = "id, name, date, note, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct WorkoutService {
    db: SqlitePool,
}

impl WorkoutService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn create(&self, fields: WorkoutFields) -> Result<Workout, sqlx::Error> {
        let now = Utc::now();
        let workout = Workout {
            id: Uuid::new_v4(),
            name: fields.name,
            date: fields.date,
            note: fields.note,
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            "INSERT INTO workouts (id, name, date, note, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(workout.id)
        .bind(&workout.name)
        .bind(workout.date)
        .bind(&workout.note)
        .bind(workout.created_at)
        .bind(workout.updated_at)
        .execute(&self.db)
        .await?;

        Ok(workout)
    }

    pub async fn find(&self, id: Uuid) -> Result<Option<Workout>, sqlx::Error> {
        sqlx::query_as::<_, Workout>(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await
    }

    /// Replace every mutable field at once. Returns None when the id has no
    /// live record.
    pub async fn update(
        &self,
        id: Uuid,
        fields: WorkoutFields,
    ) -> Result<Option<Workout>, sqlx::Error> {
        sqlx::query_as::<_, Workout>(&format!(
            "UPDATE workouts SET name = ?, date = ?, note = ?, updated_at = ? \
             WHERE id = ? RETURNING {WORKOUT_COLUMNS}"
        ))
        .bind(&fields.name)
        .bind(fields.date)
        .bind(&fields.note)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.db)
        .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// One fixed-size listing page, most recent workout first. Pages past the
    /// end of the data come back empty.
    pub async fn page(&self, page: i64) -> Result<Vec<Workout>, sqlx::Error> {
        let offset = (page - 1) * PER_PAGE;

        sqlx::query_as::<_, Workout>(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts \
             ORDER BY date DESC, created_at DESC, id ASC LIMIT ? OFFSET ?"
        ))
        .bind(PER_PAGE)
        .bind(offset)
        .fetch_all(&self.db)
        .await
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM workouts")
            .fetch_one(&self.db)
            .await
    }
}
