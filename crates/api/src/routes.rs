use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/api/v1/eligibility",
            get(handlers::get_eligibility)
                .post(handlers::post_eligibility)
                .fallback(handlers::method_not_allowed),
        )
        .route("/api/v1/cache/stats", get(handlers::get_cache_stats))
        .with_state(state)
}
