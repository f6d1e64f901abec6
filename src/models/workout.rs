use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Workout {
    pub id: Uuid,
    pub name: String,
    pub date: NaiveDate,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw form input for create and update. Every field arrives as text so a
/// value like an unparseable date becomes a validation message rather than a
/// request rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkoutParams {
    pub name: Option<String>,
    pub date: Option<String>,
    pub note: Option<String>,
}

impl WorkoutParams {
    /// Fields absent from the request keep their stored values. Updates are
    /// validated against the merged result, all-or-nothing.
    pub fn merge_onto(&self, workout: &Workout) -> WorkoutParams {
        WorkoutParams {
            name: self
                .name
                .clone()
                .or_else(|| Some(workout.name.clone())),
            date: self
                .date
                .clone()
                .or_else(|| Some(workout.date.format("%Y-%m-%d").to_string())),
            note: self.note.clone().or_else(|| workout.note.clone()),
        }
    }
}

impl From<&Workout> for WorkoutParams {
    fn from(workout: &Workout) -> Self {
        Self {
            name: Some(workout.name.clone()),
            date: Some(workout.date.format("%Y-%m-%d").to_string()),
            note: workout.note.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_workout() -> Workout {
        Workout {
            id: Uuid::new_v4(),
            name: "Lower Body".to_string(),
            date: NaiveDate::from_ymd_opt(2015, 3, 4).unwrap(),
            note: Some("great".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn merge_keeps_stored_values_for_absent_fields() {
        let workout = stored_workout();
        let params = WorkoutParams {
            name: Some("HIT".to_string()),
            date: None,
            note: None,
        };

        let merged = params.merge_onto(&workout);
        assert_eq!(merged.name.as_deref(), Some("HIT"));
        assert_eq!(merged.date.as_deref(), Some("2015-03-04"));
        assert_eq!(merged.note.as_deref(), Some("great"));
    }

    #[test]
    fn merge_prefers_submitted_values_even_when_blank() {
        let workout = stored_workout();
        let params = WorkoutParams {
            name: Some(String::new()),
            date: None,
            note: None,
        };

        let merged = params.merge_onto(&workout);
        assert_eq!(merged.name.as_deref(), Some(""));
    }
}
