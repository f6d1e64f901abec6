use axum::{
    body::Body,
    http::{header, Method, Request, Response},
    Router,
};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tower::ServiceExt;

use tracking::api::routes::create_routes;
use tracking::models::{Workout, WorkoutFields};
use tracking::services::WorkoutService;

/// Fresh in-memory database with the schema applied. A single connection is
/// shared so every request sees the same data.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    pool
}

pub async fn test_app() -> (Router, WorkoutService) {
    let pool = test_pool().await;
    let service = WorkoutService::new(pool.clone());
    (create_routes(pool), service)
}

/// Seed `count` workouts with strictly descending dates, so the first seeded
/// workout is the first one the listing renders.
pub async fn seed_workouts(service: &WorkoutService, count: usize) -> Vec<Workout> {
    let today = Utc::now().date_naive();
    let mut workouts = Vec::with_capacity(count);

    for i in 0..count {
        let fields = WorkoutFields {
            name: format!("Workout {:02}", i),
            date: today - Duration::days(i as i64 + 1),
            note: None,
        };
        let workout = service
            .create(fields)
            .await
            .expect("failed to seed workout");
        workouts.push(workout);
    }

    workouts
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

pub async fn send_form(app: &Router, method: Method, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

pub async fn send(app: &Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Workout names in listing order, pulled out of the rendered markup.
pub fn workout_names(body: &str) -> Vec<String> {
    body.split("<h3 class=\"workout_name\">")
        .skip(1)
        .map(|chunk| {
            let h3 = chunk.split("</h3>").next().unwrap_or("");
            let inner = h3.split("</a>").next().unwrap_or("");
            inner.rsplit('>').next().unwrap_or("").to_string()
        })
        .collect()
}

pub fn location_header(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("expected a Location header")
        .to_str()
        .unwrap()
        .to_string()
}
