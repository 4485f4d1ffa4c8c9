//! # Harvestboard
//!
//! Interactive web dashboard over a static dataset of crop post-harvest
//! losses (2020 vs 2022). Two pages, both driven by a crop multi-select:
//! a chart dashboard and a textual summary.
//!
//! ## Modules
//!
//! - [`dataset`]: CSV loading and the immutable in-memory crop table
//! - [`report`]: Pure builders for chart specs, the table spec, and summary text
//! - [`api`]: HTTP server with Axum (pages, JSON endpoints, health probes)
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use harvestboard::api::{serve, ApiConfig, AppState};
//! use harvestboard::dataset;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let table = Arc::new(dataset::load_from_path(Path::new("data/crop_losses.csv"))?);
//!
//!     let config = ApiConfig::default();
//!     let state = AppState::new(table, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dataset;
pub mod report;

// Re-export top-level types for convenience
pub use dataset::{CropRecord, CropTable, DatasetError, DatasetResult};

pub use report::{build_summary, build_table, ChartDataset, ChartKind, ChartSpec, Summary, TableSpec};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig};
