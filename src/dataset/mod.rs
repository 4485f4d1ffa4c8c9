//! Crop Loss Dataset
//!
//! In-memory table of crop post-harvest loss records, loaded once from CSV
//! at startup and shared read-only for the process lifetime.

pub mod error;
pub mod loader;
pub mod types;

pub use error::{DatasetError, DatasetResult};
pub use loader::{load_from_path, load_from_reader};
pub use types::{CropRecord, CropTable, COLUMNS};
