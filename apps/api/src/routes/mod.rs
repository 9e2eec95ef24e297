pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::coach::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Coach API — one endpoint per use case
        .route(
            "/api/v1/coach/resume-feedback",
            post(handlers::handle_resume_feedback),
        )
        .route("/api/v1/coach/roadmap", post(handlers::handle_roadmap))
        .route("/api/v1/coach/interview", post(handlers::handle_interview))
        .route("/api/v1/coach/advice", post(handlers::handle_advice))
        .with_state(state)
}
