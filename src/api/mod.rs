// API routes and handlers

pub mod error;
pub mod health;
pub mod routes;
pub mod workouts;
