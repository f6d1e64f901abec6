use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkoutError {
    #[error("Workout not found")]
    NotFound,
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for WorkoutError {
    fn into_response(self) -> Response {
        let status = match &self {
            WorkoutError::NotFound => StatusCode::NOT_FOUND,
            WorkoutError::Database(err) => {
                tracing::error!("database error: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
