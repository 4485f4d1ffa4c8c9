//! Report Builders
//!
//! Pure functions from a filtered slice of crop records to the artifacts
//! the pages render: chart specs, a table spec, and summary sentences.
//! Each builder works independently on the filtered rows; none of them
//! share state or depend on another's output. An empty slice produces an
//! empty artifact, never an error.

pub mod charts;
pub mod summary;
pub mod table;

pub use charts::{
    change_by_crop, loss_comparison, loss_share_2022, loss_trend, ChartDataset, ChartKind,
    ChartSpec,
};
pub use summary::{build_summary, Summary, EMPTY_SELECTION_PLACEHOLDER, SUMMARY_HEADING};
pub use table::{build_table, TableSpec};
