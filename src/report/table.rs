//! Table Builder
//!
//! Row/column display structure built straight from the filtered records.

use serde::Serialize;

use crate::dataset::{CropRecord, COLUMNS};
use crate::report::summary::format_percent;

/// Renderable table: column headers plus rows of display strings
#[derive(Debug, Clone, Serialize)]
pub struct TableSpec {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Build the table spec, columns in the original CSV order.
pub fn build_table(rows: &[CropRecord]) -> TableSpec {
    TableSpec {
        columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows: rows
            .iter()
            .map(|r| {
                vec![
                    r.crop.clone(),
                    format_percent(r.loss_2020),
                    format_percent(r.loss_2022),
                    format_percent(r.change),
                ]
            })
            .collect(),
    }
}
