//! Dashboard Route
//!
//! - POST /api/v1/dashboard - Charts and table for a crop selection

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{DashboardResponse, SelectionRequest};
use crate::api::state::AppState;
use crate::report::{build_table, change_by_crop, loss_comparison, loss_share_2022, loss_trend};

/// POST /api/v1/dashboard
///
/// Filter the dataset by the selected crops and rebuild the four charts
/// and the table. An empty or non-matching selection yields empty
/// artifacts, not an error.
pub async fn build_dashboard(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SelectionRequest>,
) -> Json<DashboardResponse> {
    let rows = state.table.filter(&req.crops);

    tracing::debug!(selected = req.crops.len(), matched = rows.len(), "Dashboard rebuild");

    Json(DashboardResponse {
        loss_comparison: loss_comparison(&rows),
        change_by_crop: change_by_crop(&rows),
        loss_share_2022: loss_share_2022(&rows),
        loss_trend: loss_trend(&rows),
        table: build_table(&rows),
    })
}
