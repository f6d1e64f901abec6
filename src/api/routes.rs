use axum::{routing::get, Router};
use sqlx::sqlite::SqlitePool;
use tower_http::trace::TraceLayer;

use super::health::health_check;
use super::workouts::{self, AppState};
use crate::services::WorkoutService;

pub fn create_routes(db: SqlitePool) -> Router {
    let state = AppState {
        workouts: WorkoutService::new(db),
    };

    Router::new()
        .route("/", get(workouts::list_workouts))
        .route(
            "/workouts",
            get(workouts::list_workouts).post(workouts::create_workout),
        )
        .route("/workouts/new", get(workouts::new_workout))
        .route(
            "/workouts/:id",
            get(workouts::show_workout)
                .put(workouts::update_workout)
                .patch(workouts::update_workout)
                .delete(workouts::destroy_workout),
        )
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
