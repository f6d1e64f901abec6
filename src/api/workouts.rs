use axum::{
    extract::{Form, Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::models::{validate_workout, Workout, WorkoutParams};
use crate::services::WorkoutService;
use crate::views;

use super::error::WorkoutError;

#[derive(Clone)]
pub struct AppState {
    pub workouts: WorkoutService,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Raw page parameter; anything non-numeric or non-positive means page 1.
    pub page: Option<String>,
}

impl ListQuery {
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(1)
    }
}

pub async fn list_workouts(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, WorkoutError> {
    let page = query.page();
    let workouts = state.workouts.page(page).await?;
    let total = state.workouts.count().await?;

    Ok(Html(views::workouts::index_page(&workouts, page, total)))
}

pub async fn new_workout() -> Html<String> {
    Html(views::workouts::new_page(&WorkoutParams::default(), &[]))
}

/// Detail page. An id that is malformed or has no live record redirects to
/// the listing instead of erroring.
pub async fn show_workout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, WorkoutError> {
    let Some(workout) = lookup(&state, &id).await? else {
        return Ok(Redirect::to("/").into_response());
    };

    let form = WorkoutParams::from(&workout);
    Ok(Html(views::workouts::show_page(&workout, &form, &[])).into_response())
}

pub async fn create_workout(
    State(state): State<AppState>,
    Form(params): Form<WorkoutParams>,
) -> Result<Response, WorkoutError> {
    match validate_workout(&params) {
        Ok(fields) => {
            let workout = state.workouts.create(fields).await?;
            tracing::info!("created workout {}", workout.id);
            Ok(Redirect::to(&format!("/workouts/{}", workout.id)).into_response())
        }
        Err(errors) => Ok(Html(views::workouts::new_page(&params, &errors)).into_response()),
    }
}

/// Submitted fields merge onto the stored record; the merged result must pass
/// the create rules or nothing is written.
pub async fn update_workout(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(params): Form<WorkoutParams>,
) -> Result<Response, WorkoutError> {
    let Some(existing) = lookup(&state, &id).await? else {
        return Err(WorkoutError::NotFound);
    };

    let merged = params.merge_onto(&existing);
    match validate_workout(&merged) {
        Ok(fields) => {
            let updated = state
                .workouts
                .update(existing.id, fields)
                .await?
                .ok_or(WorkoutError::NotFound)?;
            let form = WorkoutParams::from(&updated);
            Ok(Html(views::workouts::show_page(&updated, &form, &[])).into_response())
        }
        Err(errors) => {
            // Stored values stay on display; the form echoes the rejected input.
            Ok(Html(views::workouts::show_page(&existing, &merged, &errors)).into_response())
        }
    }
}

pub async fn destroy_workout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, WorkoutError> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(WorkoutError::NotFound);
    };

    if state.workouts.delete(id).await? {
        tracing::info!("deleted workout {}", id);
        Ok(Redirect::to("/"))
    } else {
        Err(WorkoutError::NotFound)
    }
}

async fn lookup(state: &AppState, id: &str) -> Result<Option<Workout>, WorkoutError> {
    let Ok(id) = Uuid::parse_str(id) else {
        return Ok(None);
    };

    Ok(state.workouts.find(id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>) -> ListQuery {
        ListQuery {
            page: page.map(str::to_string),
        }
    }

    #[test]
    fn missing_page_defaults_to_one() {
        assert_eq!(query(None).page(), 1);
    }

    #[test]
    fn non_numeric_page_falls_back_to_one() {
        assert_eq!(query(Some("hah")).page(), 1);
    }

    #[test]
    fn non_positive_pages_fall_back_to_one() {
        assert_eq!(query(Some("-2")).page(), 1);
        assert_eq!(query(Some("0")).page(), 1);
    }

    #[test]
    fn numeric_pages_pass_through() {
        assert_eq!(query(Some("3")).page(), 3);
        assert_eq!(query(Some(" 2 ")).page(), 2);
    }
}
