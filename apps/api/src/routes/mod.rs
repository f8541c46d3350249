pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers as matching;
use crate::requests::handlers as requests;
use crate::skills::handlers as skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Match API
        .route("/api/v1/match", post(matching::handle_match))
        .route(
            "/api/v1/match/parse",
            post(matching::handle_parse_requirement),
        )
        .route("/api/v1/match/simulate", post(matching::handle_simulate))
        // Request history
        .route("/api/v1/requests", get(requests::handle_list_requests))
        .route(
            "/api/v1/requests/stats",
            get(requests::handle_request_stats),
        )
        .route("/api/v1/requests/:id", get(requests::handle_get_request))
        // Skill catalogue
        .route("/api/v1/skills", get(skills::handle_list_skills))
        .with_state(state)
}
