use axum::{extract::State, Json};

use crate::api::state::AppState;
use crate::dataset::FilterOptions;

/// GET /api/filters
pub async fn get_filter_options(State(state): State<AppState>) -> Json<FilterOptions> {
    Json(state.options.as_ref().clone())
}
