use axum::{
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::api::{handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Dashboard endpoints
        .route("/api/filters", get(handlers::get_filter_options))
        .route(
            "/api/dashboard",
            get(handlers::get_dashboard).post(handlers::post_dashboard),
        )
        // System endpoints
        .route("/health", get(handlers::health_handler))
        .route("/healthz", get(handlers::liveness_handler))
        .route("/metrics", get(handlers::metrics_handler))
        // Add state and CORS
        .with_state(state)
        .layer(cors)
}
