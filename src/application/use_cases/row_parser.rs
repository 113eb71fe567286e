// ============================================================
// ROW PARSER
// ============================================================
// Turn pasted, space-separated text into records

use std::collections::HashMap;

use tracing::debug;

use crate::domain::gradebook::{
    is_coerced_grade, BlankLinePolicy, ColumnSchema, ParseSummary, Record,
};

/// Parse raw text into one record per line.
///
/// There is no header row. Never fails: short lines are padded with empty
/// strings and surplus tokens are dropped.
pub fn parse_rows(raw: &str, schema: &ColumnSchema, blank_lines: BlankLinePolicy) -> Vec<Record> {
    parse_rows_with_summary(raw, schema, blank_lines).0
}

/// Same as [`parse_rows`], also reporting how the input was reshaped
pub fn parse_rows_with_summary(
    raw: &str,
    schema: &ColumnSchema,
    blank_lines: BlankLinePolicy,
) -> (Vec<Record>, ParseSummary) {
    let mut summary = ParseSummary::default();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return (Vec::new(), summary);
    }

    let mut records = Vec::new();
    for line in trimmed.lines() {
        let tokens = split_tokens(line);

        if tokens.is_empty() {
            match blank_lines {
                BlankLinePolicy::Keep => summary.blank_lines_kept += 1,
                BlankLinePolicy::Skip => {
                    summary.blank_lines_skipped += 1;
                    continue;
                }
            }
        }

        summary.surplus_tokens += tokens.len().saturating_sub(schema.len());
        summary.missing_cells += schema.len().saturating_sub(tokens.len());

        let record = zip_record(schema, &tokens);
        summary.non_numeric_grades += schema
            .grade_columns()
            .filter(|column| is_coerced_grade(record.value(&column.id)))
            .count();
        records.push(record);
    }

    summary.record_count = records.len();
    debug!(
        records = summary.record_count,
        surplus_tokens = summary.surplus_tokens,
        missing_cells = summary.missing_cells,
        "Parsed grade rows"
    );

    (records, summary)
}

/// Split on single spaces, dropping the empty tokens runs of spaces leave
fn split_tokens(line: &str) -> Vec<&str> {
    line.split(' ')
        .filter(|token| !token.trim().is_empty())
        .collect()
}

fn zip_record(schema: &ColumnSchema, tokens: &[&str]) -> Record {
    let values: HashMap<String, String> = schema
        .columns()
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let value = tokens.get(index).copied().unwrap_or("");
            (column.id.clone(), value.to_string())
        })
        .collect();
    Record::new(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_column_schema() -> ColumnSchema {
        let mut schema = ColumnSchema::default();
        schema.add_grade_column();
        schema
    }

    #[test]
    fn test_parse_simple_rows() {
        let schema = three_column_schema();
        let rows = parse_rows("A1 90 80\nA2 70 60", &schema, BlankLinePolicy::Keep);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].ordered_values(&schema), vec!["A1", "90", "80"]);
        assert_eq!(rows[1].ordered_values(&schema), vec!["A2", "70", "60"]);
    }

    #[test]
    fn test_consecutive_spaces_collapse() {
        let schema = three_column_schema();
        let rows = parse_rows("A1   90  80", &schema, BlankLinePolicy::Keep);
        assert_eq!(rows[0].ordered_values(&schema), vec!["A1", "90", "80"]);
    }

    #[test]
    fn test_tabs_do_not_separate() {
        let schema = three_column_schema();
        let rows = parse_rows("A1\t90 80", &schema, BlankLinePolicy::Keep);
        assert_eq!(rows[0].ordered_values(&schema), vec!["A1\t90", "80", ""]);
    }

    #[test]
    fn test_short_and_long_rows() {
        let schema = three_column_schema();
        let (rows, summary) =
            parse_rows_with_summary("A1 90\nA2 70 60 50 40", &schema, BlankLinePolicy::Keep);

        assert_eq!(rows[0].ordered_values(&schema), vec!["A1", "90", ""]);
        assert_eq!(rows[1].ordered_values(&schema), vec!["A2", "70", "60"]);
        assert_eq!(summary.missing_cells, 1);
        assert_eq!(summary.surplus_tokens, 2);
        assert!(summary.has_irregular_rows());
    }

    #[test]
    fn test_record_keys_match_column_ids() {
        let schema = three_column_schema();
        let rows = parse_rows("A1", &schema, BlankLinePolicy::Keep);
        let mut keys: Vec<&str> = rows[0].column_ids().collect();
        keys.sort();
        assert_eq!(keys, vec!["col1", "col2", "col3"]);
    }

    #[test]
    fn test_empty_text_yields_no_records() {
        let schema = three_column_schema();
        assert!(parse_rows("", &schema, BlankLinePolicy::Keep).is_empty());
        assert!(parse_rows("  \n \n", &schema, BlankLinePolicy::Keep).is_empty());
        assert!(parse_rows("", &schema, BlankLinePolicy::Skip).is_empty());
    }

    #[test]
    fn test_blank_lines_kept_by_default_policy() {
        let schema = three_column_schema();
        let (rows, summary) =
            parse_rows_with_summary("A1 90 80\n\nA2 70 60", &schema, BlankLinePolicy::Keep);

        assert_eq!(rows.len(), 3);
        assert!(rows[1].is_blank());
        assert_eq!(summary.blank_lines_kept, 1);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let schema = three_column_schema();
        let (rows, summary) =
            parse_rows_with_summary("A1 90 80\n   \nA2 70 60", &schema, BlankLinePolicy::Skip);

        assert_eq!(rows.len(), 2);
        assert_eq!(summary.blank_lines_skipped, 1);
        assert_eq!(summary.record_count, 2);
    }

    #[test]
    fn test_crlf_input() {
        let schema = three_column_schema();
        let rows = parse_rows("A1 90 80\r\nA2 70 60\r\n", &schema, BlankLinePolicy::Keep);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].value("col3"), "80");
    }

    #[test]
    fn test_values_stay_as_text() {
        let schema = three_column_schema();
        let (rows, summary) =
            parse_rows_with_summary("A1 090 abs", &schema, BlankLinePolicy::Keep);
        assert_eq!(rows[0].value("col2"), "090");
        assert_eq!(rows[0].value("col3"), "abs");
        assert_eq!(summary.non_numeric_grades, 1);
    }
}
