//! Summary Route
//!
//! - POST /api/v1/summary - Summary sentences for a crop selection

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{SelectionRequest, SummaryResponse};
use crate::api::state::AppState;
use crate::report::build_summary;

/// POST /api/v1/summary
///
/// Filter the dataset by the selected crops and build the summary text.
/// A selection matching no rows yields the fixed placeholder sentence.
pub async fn build_summary_text(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SelectionRequest>,
) -> Json<SummaryResponse> {
    let rows = state.table.filter(&req.crops);

    Json(SummaryResponse {
        summary: build_summary(&rows),
    })
}
