//! Leader's Compass: HTTP API.
//!
//! Exposes the questionnaire, scoring and narrative insights over JSON.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;

/// Builds the application router with every route mounted.
pub fn build_router(app_state: state::AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest(
            "/api/v1/assessment",
            routes::assessment::router().merge(routes::insights::router()),
        )
        .with_state(app_state)
}
