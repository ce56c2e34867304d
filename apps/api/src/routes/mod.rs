pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::assessment::handlers as assessment;
use crate::auth::handlers as auth;
use crate::errors::AppError;
use crate::jobs::handlers as jobs;
use crate::skills::handlers as skills;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

fn assessment_routes() -> Router<AppState> {
    Router::new()
        .route("/start", post(assessment::handle_start))
        .route("/message", post(assessment::handle_message))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/api/skills", get(skills::handle_list_skills))
        .route("/api/jobs/search", get(jobs::handle_search))
        .route("/api/register", post(auth::handle_register))
        .route("/api/login", post(auth::handle_login))
        // Assessment API is served both bare and under /api for existing clients
        .nest("/assessment", assessment_routes())
        .nest("/api/assessment", assessment_routes())
        .fallback(not_found)
        .with_state(state)
}
