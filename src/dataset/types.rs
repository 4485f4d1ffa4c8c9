//! Dataset Types
//!
//! Core data structures for the crop loss table.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::dataset::error::DatasetError;

/// Column headers of the source CSV, in display order.
pub const COLUMNS: [&str; 4] = ["Crops", "2020 Loss (%)", "2022 Loss (%)", "Change (%)"];

/// One row of the dataset: a crop and its loss percentages for both years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropRecord {
    /// Crop name, unique within the table
    #[serde(rename = "Crops")]
    pub crop: String,
    /// Post-harvest loss percentage in 2020
    #[serde(rename = "2020 Loss (%)")]
    pub loss_2020: f64,
    /// Post-harvest loss percentage in 2022
    #[serde(rename = "2022 Loss (%)")]
    pub loss_2022: f64,
    /// Signed difference between the 2022 and 2020 loss percentages
    #[serde(rename = "Change (%)")]
    pub change: f64,
}

impl CropRecord {
    pub fn new(crop: impl Into<String>, loss_2020: f64, loss_2022: f64, change: f64) -> Self {
        Self {
            crop: crop.into(),
            loss_2020,
            loss_2022,
            change,
        }
    }
}

/// Ordered, immutable table of crop records.
///
/// Crop names act as selector identity, so the constructor rejects
/// duplicates. Row order is the CSV order and is preserved by every
/// operation.
#[derive(Debug, Clone)]
pub struct CropTable {
    records: Vec<CropRecord>,
}

impl CropTable {
    /// Build a table, validating that it is non-empty and that crop names
    /// are unique.
    pub fn new(records: Vec<CropRecord>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.crop.as_str()) {
                return Err(DatasetError::DuplicateCrop(record.crop.clone()));
            }
        }

        Ok(Self { records })
    }

    /// All records in original order.
    pub fn records(&self) -> &[CropRecord] {
        &self.records
    }

    /// Crop names in original order (dropdown options).
    pub fn crops(&self) -> Vec<String> {
        self.records.iter().map(|r| r.crop.clone()).collect()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose crop is in `selection`, in original order.
    ///
    /// Empty selection yields an empty result; names that match no row are
    /// silently ignored.
    pub fn filter(&self, selection: &[String]) -> Vec<CropRecord> {
        let selected: HashSet<&str> = selection.iter().map(|s| s.as_str()).collect();
        self.records
            .iter()
            .filter(|r| selected.contains(r.crop.as_str()))
            .cloned()
            .collect()
    }
}
