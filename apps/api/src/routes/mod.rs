pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::questions::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Allow some slack above the resume cap for multipart framing and the
    // job-description field; the explicit file-size check enforces the
    // per-file bound.
    let body_limit = state.config.limits.max_file_size + 64 * 1024;

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/generate-questions",
            post(handlers::handle_generate_questions),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
