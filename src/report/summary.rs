//! Summary Builder
//!
//! One sentence per selected crop describing the 2020 and 2022 losses and
//! the direction of change.

use serde::Serialize;

use crate::dataset::CropRecord;

/// Sentence emitted when the selection matches no rows
pub const EMPTY_SELECTION_PLACEHOLDER: &str =
    "No crops selected. Please select at least one crop to see the summary.";

/// Heading shown above a non-empty sentence list
pub const SUMMARY_HEADING: &str = "Summary for selected crops:";

/// Textual summary of the selected crops
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// Heading line, absent when the selection is empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    /// One sentence per crop, or the placeholder alone
    pub sentences: Vec<String>,
}

/// Build the summary for the filtered rows.
pub fn build_summary(rows: &[CropRecord]) -> Summary {
    if rows.is_empty() {
        return Summary {
            heading: None,
            sentences: vec![EMPTY_SELECTION_PLACEHOLDER.to_string()],
        };
    }

    Summary {
        heading: Some(SUMMARY_HEADING.to_string()),
        sentences: rows.iter().map(sentence).collect(),
    }
}

fn sentence(record: &CropRecord) -> String {
    let direction = if record.change > 0.0 {
        "increase"
    } else if record.change < 0.0 {
        "decrease"
    } else {
        "no change"
    };

    format!(
        "{}: Loss in 2020 was {}%, in 2022 was {}%. This is a {} of {}%.",
        record.crop,
        format_percent(record.loss_2020),
        format_percent(record.loss_2022),
        direction,
        format_percent(record.change.abs()),
    )
}

/// Render a percentage value with at least one decimal place, so whole
/// numbers read as "5.0" rather than "5".
pub fn format_percent(value: f64) -> String {
    let s = value.to_string();
    if s.contains('.') {
        s
    } else {
        format!("{s}.0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decrease_sentence() {
        let summary = build_summary(&[CropRecord::new("Rice", 5.0, 4.2, -0.8)]);

        assert_eq!(summary.heading.as_deref(), Some(SUMMARY_HEADING));
        assert_eq!(
            summary.sentences,
            vec!["Rice: Loss in 2020 was 5.0%, in 2022 was 4.2%. This is a decrease of 0.8%."]
        );
    }

    #[test]
    fn test_increase_sentence() {
        let summary = build_summary(&[CropRecord::new("Wheat", 4.1, 4.5, 0.4)]);

        assert_eq!(
            summary.sentences,
            vec!["Wheat: Loss in 2020 was 4.1%, in 2022 was 4.5%. This is a increase of 0.4%."]
        );
    }

    #[test]
    fn test_no_change_sentence() {
        let summary = build_summary(&[CropRecord::new("Maize", 3.9, 3.9, 0.0)]);

        assert_eq!(
            summary.sentences,
            vec!["Maize: Loss in 2020 was 3.9%, in 2022 was 3.9%. This is a no change of 0.0%."]
        );
    }

    #[test]
    fn test_empty_selection_placeholder() {
        let summary = build_summary(&[]);

        assert!(summary.heading.is_none());
        assert_eq!(summary.sentences, vec![EMPTY_SELECTION_PLACEHOLDER]);
    }

    #[test]
    fn test_one_sentence_per_row() {
        let rows = vec![
            CropRecord::new("Rice", 5.0, 4.2, -0.8),
            CropRecord::new("Wheat", 4.1, 4.5, 0.4),
            CropRecord::new("Maize", 3.9, 3.9, 0.0),
        ];
        let summary = build_summary(&rows);

        assert_eq!(summary.sentences.len(), 3);
        assert!(summary.sentences[0].starts_with("Rice:"));
        assert!(summary.sentences[1].contains("increase"));
        assert!(summary.sentences[2].contains("no change"));
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(5.0), "5.0");
        assert_eq!(format_percent(4.25), "4.25");
        assert_eq!(format_percent(-0.8), "-0.8");
        assert_eq!(format_percent(12.0), "12.0");
    }
}
