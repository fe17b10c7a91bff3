//! Router creation and configuration

use super::handlers::*;
use super::types::AppState;
use crate::config::ServerConfig;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create REST API router
pub fn create_router(config: &ServerConfig) -> Router {
    let state = AppState::from_config(config);

    let router = Router::new()
        .route("/health", get(health))
        .route("/info", get(service_info))
        .route("/grade_short_answer", post(grade_short_answer))
        .route("/recommend_next", post(recommend_next))
        .route("/generate_questions", post(generate_questions))
        .fallback(not_found)
        .with_state(state);

    let router = if config.enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.layer(TraceLayer::new_for_http())
}
