//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::report::{ChartSpec, Summary, TableSpec};

// ============================================
// SELECTION DTOs
// ============================================

/// Crop selection sent by both pages on every dropdown change
#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    /// Selected crop names; empty means "nothing selected"
    #[serde(default)]
    pub crops: Vec<String>,
}

/// Dropdown options
#[derive(Debug, Serialize)]
pub struct CropListResponse {
    /// Number of crops in the dataset
    pub total: usize,
    /// Crop names in dataset order
    pub crops: Vec<String>,
}

// ============================================
// DASHBOARD DTOs
// ============================================

/// Everything the dashboard page renders for one selection
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    /// Grouped bar: loss percentage by crop, one series per year
    pub loss_comparison: ChartSpec,
    /// Bar: signed change by crop
    pub change_by_crop: ChartSpec,
    /// Donut: share of 2022 losses
    pub loss_share_2022: ChartSpec,
    /// Line: loss trend per crop across the two years
    pub loss_trend: ChartSpec,
    /// Data table for the filtered rows
    pub table: TableSpec,
}

// ============================================
// SUMMARY DTOs
// ============================================

/// Summary page payload for one selection
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    #[serde(flatten)]
    pub summary: Summary,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "unhealthy"
    pub status: String,
    /// Dataset status: "ok" or "error"
    pub dataset: String,
    /// Number of rows served
    pub rows: usize,
    /// Seconds since startup
    pub uptime_seconds: u64,
    /// Crate version
    pub version: String,
}
