use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::api::{state::AppState, types::*};

/// GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let team_rows = state.dataset.team_row_count();
    let player_rows = state.dataset.player_row_count();

    // An empty table still serves, every chart just degrades
    let status = if team_rows > 0 && player_rows > 0 {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        timestamp: Utc::now(),
        uptime_secs: state.uptime_seconds(),
        team_rows,
        player_rows,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /healthz -- liveness probe
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// GET /metrics -- Prometheus text format
pub async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    let body = state.metrics.prometheus(
        state.uptime_seconds(),
        state.dataset.team_row_count(),
        state.dataset.player_row_count(),
    );

    (
        StatusCode::OK,
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        body,
    )
}
