pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Match API
        .route("/api/v1/matches/batch", post(handlers::handle_batch_matches))
        .route(
            "/api/v1/matches/:user_id/:job_id",
            get(handlers::handle_get_match).delete(handlers::handle_invalidate_match),
        )
        .route(
            "/api/v1/matches/:user_id/:job_id/recompute",
            post(handlers::handle_recompute_match),
        )
        // Resume profile API
        .route(
            "/api/v1/users/:user_id/recommendations",
            get(handlers::handle_recommendations),
        )
        .route(
            "/api/v1/users/:user_id/resume",
            put(handlers::handle_update_resume),
        )
        .route("/api/v1/skills/extract", post(handlers::handle_extract_skills))
        .with_state(state)
}
