// ============================================================
// RECORD
// ============================================================
// One parsed input line, keyed by column id

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::ColumnSchema;

/// A single row of the grade table.
///
/// Values stay as raw text; grades are coerced only when averaged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    values: HashMap<String, String>,
}

impl Record {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Raw value for a column, empty when the column postdates the parse
    pub fn value(&self, column_id: &str) -> &str {
        self.values.get(column_id).map(String::as_str).unwrap_or("")
    }

    pub fn column_ids(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Whether every field is empty (a retained blank line)
    pub fn is_blank(&self) -> bool {
        self.values.values().all(|v| v.is_empty())
    }

    /// Values in schema order
    pub fn ordered_values<'a>(&'a self, schema: &'a ColumnSchema) -> Vec<&'a str> {
        schema
            .columns()
            .iter()
            .map(|column| self.value(&column.id))
            .collect()
    }

    /// Mean of the coerced grade values, `None` with no grade columns
    pub fn average(&self, schema: &ColumnSchema) -> Option<f64> {
        let count = schema.grade_count();
        if count == 0 {
            return None;
        }
        let sum: f64 = schema
            .grade_columns()
            .map(|column| parse_grade_value(self.value(&column.id)))
            .sum();
        Some(sum / count as f64)
    }
}

/// Coerce a raw grade cell to a number.
///
/// Surrounding whitespace is ignored. Empty, non-numeric and non-finite
/// input counts as 0.
pub fn parse_grade_value(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Whether a raw grade cell holds something other than a number
pub fn is_coerced_grade(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && !matches!(trimmed.parse::<f64>(), Ok(v) if v.is_finite())
}
