//! Crop List Route
//!
//! - GET /api/v1/crops - Dropdown options in dataset order

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::CropListResponse;
use crate::api::state::AppState;

/// GET /api/v1/crops
///
/// List all crop names in dataset order.
pub async fn list_crops(State(state): State<Arc<AppState>>) -> Json<CropListResponse> {
    let crops = state.table.crops();

    Json(CropListResponse {
        total: crops.len(),
        crops,
    })
}
