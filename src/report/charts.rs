//! Chart Builders
//!
//! Four chart specs derived from the filtered rows. The JSON shape
//! (labels + datasets with a fixed color palette) is what the frontend
//! canvas renderer consumes.

use serde::Serialize;

use crate::dataset::CropRecord;

/// Series colors, assigned by index modulo the palette length
pub const SERIES_COLORS: [&str; 6] = [
    "#FF9800", // Orange (primary)
    "#4CAF50", // Green
    "#2196F3", // Blue
    "#9C27B0", // Purple
    "#F44336", // Red
    "#00BCD4", // Cyan
];

/// How the frontend should draw a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    GroupedBar,
    Bar,
    Donut,
    Line,
}

/// One series within a chart
#[derive(Debug, Clone, Serialize)]
pub struct ChartDataset {
    /// Series label shown in the legend
    pub label: String,
    /// One value per chart label
    pub data: Vec<f64>,
    /// Series color (hex)
    pub color: String,
}

/// A complete renderable chart description
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    /// Category axis labels (crops, or years for the trend chart)
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
    /// Inner radius fraction for donut charts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hole: Option<f64>,
}

fn color(index: usize) -> String {
    SERIES_COLORS[index % SERIES_COLORS.len()].to_string()
}

fn crop_labels(rows: &[CropRecord]) -> Vec<String> {
    rows.iter().map(|r| r.crop.clone()).collect()
}

/// Grouped bar of loss percentage by crop, one series per year.
pub fn loss_comparison(rows: &[CropRecord]) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::GroupedBar,
        title: "Loss Percentage by Crop (2020 vs 2022)".to_string(),
        labels: crop_labels(rows),
        datasets: vec![
            ChartDataset {
                label: "2020".to_string(),
                data: rows.iter().map(|r| r.loss_2020).collect(),
                color: color(0),
            },
            ChartDataset {
                label: "2022".to_string(),
                data: rows.iter().map(|r| r.loss_2022).collect(),
                color: color(1),
            },
        ],
        hole: None,
    }
}

/// Bar of signed change in loss percentage, one bar per crop.
pub fn change_by_crop(rows: &[CropRecord]) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        title: "Change in Loss Percentage (2020 to 2022)".to_string(),
        labels: crop_labels(rows),
        datasets: vec![ChartDataset {
            label: "Change (%)".to_string(),
            data: rows.iter().map(|r| r.change).collect(),
            color: color(2),
        }],
        hole: None,
    }
}

/// Donut of each crop's share of total 2022 losses.
pub fn loss_share_2022(rows: &[CropRecord]) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Donut,
        title: "Share of 2022 Losses by Crop".to_string(),
        labels: crop_labels(rows),
        datasets: vec![ChartDataset {
            label: "2022 Loss (%)".to_string(),
            data: rows.iter().map(|r| r.loss_2022).collect(),
            color: color(0),
        }],
        hole: Some(0.3),
    }
}

/// Line chart of loss percentage over the two years, one line per crop.
pub fn loss_trend(rows: &[CropRecord]) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Line,
        title: "Loss Trend by Crop (2020 vs 2022)".to_string(),
        labels: vec!["2020".to_string(), "2022".to_string()],
        datasets: rows
            .iter()
            .enumerate()
            .map(|(i, r)| ChartDataset {
                label: r.crop.clone(),
                data: vec![r.loss_2020, r.loss_2022],
                color: color(i),
            })
            .collect(),
        hole: None,
    }
}
