use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::analytics::{self, DashboardResults};
use crate::api::{state::AppState, types::*};
use crate::domain::FilterSelection;

/// GET /api/dashboard?seasons=2019,2020&teams=Lakers&players=LeBron%20James
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> std::result::Result<Json<DashboardResults>, (StatusCode, String)> {
    let selection = query.into_selection().map_err(|e| {
        warn!("Rejected dashboard query: {}", e);
        state.metrics.inc_requests_rejected();
        (StatusCode::BAD_REQUEST, e.to_string())
    })?;

    compute_dashboard(&state, selection).await
}

/// POST /api/dashboard
pub async fn post_dashboard(
    State(state): State<AppState>,
    Json(selection): Json<FilterSelection>,
) -> std::result::Result<Json<DashboardResults>, (StatusCode, String)> {
    compute_dashboard(&state, selection).await
}

async fn compute_dashboard(
    state: &AppState,
    selection: FilterSelection,
) -> std::result::Result<Json<DashboardResults>, (StatusCode, String)> {
    debug!("Computing dashboard for {}", selection);

    let dataset = state.dataset.clone();
    let config = Arc::clone(&state.analytics);
    let results = tokio::task::spawn_blocking(move || analytics::compute(&dataset, &selection, &config))
        .await
        .map_err(|e| {
            error!("Dashboard computation task failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("dashboard computation failed: {}", e),
            )
        })?;

    state.metrics.record_dashboard(&results);
    Ok(Json(results))
}
