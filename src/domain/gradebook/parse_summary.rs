// ============================================================
// PARSE SUMMARY
// ============================================================
// Statistics gathered while turning raw text into records

use serde::{Deserialize, Serialize};

/// What one parse action did to the input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseSummary {
    /// Records produced
    pub record_count: usize,

    /// Blank lines kept as all-empty records
    pub blank_lines_kept: usize,

    /// Blank lines dropped under the skip policy
    pub blank_lines_skipped: usize,

    /// Tokens beyond the column count, discarded
    pub surplus_tokens: usize,

    /// Cells with no token, filled with the empty string
    pub missing_cells: usize,

    /// Non-empty grade cells that are not numbers and will count as 0
    pub non_numeric_grades: usize,
}

impl ParseSummary {
    /// Whether any input was reshaped to fit the schema
    pub fn has_irregular_rows(&self) -> bool {
        self.surplus_tokens > 0 || self.missing_cells > 0
    }

    pub fn summary(&self) -> String {
        format!(
            "Parsed {} records (blank kept: {}, blank skipped: {}, surplus tokens: {}, \
             missing cells: {}, non-numeric grades: {})",
            self.record_count,
            self.blank_lines_kept,
            self.blank_lines_skipped,
            self.surplus_tokens,
            self.missing_cells,
            self.non_numeric_grades
        )
    }
}
