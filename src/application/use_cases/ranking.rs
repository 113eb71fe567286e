// ============================================================
// RANKING ENGINE
// ============================================================
// Average, competition rank and "top X%" for one student

use tracing::{debug, warn};

use crate::domain::error::{AppError, Result};
use crate::domain::gradebook::{ColumnSchema, RankResult, Record};

/// Rank the record whose identifier equals `target` among all `records`.
///
/// An unknown identifier, an empty target or an empty record list give an
/// empty result. A schema without grade columns is an error because the
/// average is undefined.
pub fn rank_student(records: &[Record], schema: &ColumnSchema, target: &str) -> Result<RankResult> {
    if records.is_empty() || target.is_empty() {
        return Ok(RankResult::empty());
    }

    let identifier = schema.identifier_column().ok_or_else(|| {
        AppError::ValidationError("schema has no identifier column".to_string())
    })?;

    let Some(student) = records
        .iter()
        .find(|record| record.value(&identifier.id) == target)
    else {
        warn!(student_id = %target, "Identifier not found in parsed records");
        return Ok(RankResult::empty());
    };

    let average = average_of(student, schema)?;

    let mut ahead = 0usize;
    for record in records {
        if average_of(record, schema)? > average {
            ahead += 1;
        }
    }

    let rank = u32::try_from(ahead + 1).map_err(|_| {
        AppError::Internal(format!("rank {} does not fit in u32", ahead + 1))
    })?;

    debug!(student_id = %target, average, rank, total = records.len(), "Ranked student");
    Ok(RankResult::found(rank, records.len()))
}

/// Average grade of a record, erroring when there are no grade columns
pub fn average_of(record: &Record, schema: &ColumnSchema) -> Result<f64> {
    record.average(schema).ok_or_else(|| {
        AppError::ValidationError(
            "cannot average grades: the schema has no grade columns".to_string(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::row_parser::parse_rows;
    use crate::domain::gradebook::{BlankLinePolicy, ColumnDefinition, ColumnKind};

    fn schema_with_grades(grades: usize) -> ColumnSchema {
        let mut schema = ColumnSchema::default();
        for _ in 1..grades {
            schema.add_grade_column();
        }
        schema
    }

    fn ranked(raw: &str, grades: usize, target: &str) -> RankResult {
        let schema = schema_with_grades(grades);
        let records = parse_rows(raw, &schema, BlankLinePolicy::Keep);
        rank_student(&records, &schema, target).unwrap()
    }

    #[test]
    fn test_reference_example() {
        let result = ranked("A1 90 80\nA2 70 60\nA3 100 100", 2, "A1");
        assert_eq!(result.rank, Some(2));
        assert_eq!(result.percentile.as_deref(), Some("66.67"));
    }

    #[test]
    fn test_best_student() {
        let result = ranked("A1 90 80\nA2 70 60\nA3 100 100", 2, "A3");
        assert_eq!(result.rank, Some(1));
        assert_eq!(result.percentile.as_deref(), Some("33.33"));
    }

    #[test]
    fn test_top_of_four_is_25_percent() {
        let result = ranked("S1 50\nS2 99\nS3 70\nS4 10", 1, "S2");
        assert_eq!(result.rank, Some(1));
        assert_eq!(result.percentile.as_deref(), Some("25.00"));
    }

    #[test]
    fn test_ties_share_best_rank() {
        let raw = "A 95 85\nB 90 90\nC 100 80\nD 60 60";
        for id in ["A", "B", "C"] {
            assert_eq!(ranked(raw, 2, id).rank, Some(1), "student {}", id);
        }
        assert_eq!(ranked(raw, 2, "D").rank, Some(4));
    }

    #[test]
    fn test_competition_ranking_skips_after_tie() {
        let raw = "A 90\nB 90\nC 80";
        assert_eq!(ranked(raw, 1, "C").rank, Some(3));
    }

    #[test]
    fn test_rank_ignores_line_order() {
        let forward = ranked("A1 90 80\nA2 70 60\nA3 100 100\nA4 85 85", 2, "A4");
        let reversed = ranked("A4 85 85\nA3 100 100\nA2 70 60\nA1 90 80", 2, "A4");
        let shuffled = ranked("A2 70 60\nA4 85 85\nA1 90 80\nA3 100 100", 2, "A4");
        assert_eq!(forward, reversed);
        assert_eq!(forward, shuffled);
        assert_eq!(forward.rank, Some(2));
    }

    #[test]
    fn test_unknown_identifier_is_empty() {
        let result = ranked("A1 90 80\nA2 70 60", 2, "ZZZ");
        assert!(result.is_empty());
        assert!(result.percentile.is_none());
    }

    #[test]
    fn test_no_records_is_empty() {
        let schema = schema_with_grades(1);
        let result = rank_student(&[], &schema, "A1").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_identifier_compared_exactly() {
        assert!(ranked("a1 90", 1, "A1").is_empty());
        assert!(ranked("A1 90", 1, " A1").is_empty());
        assert_eq!(ranked("A1 90", 1, "A1").rank, Some(1));
    }

    #[test]
    fn test_empty_target_is_empty() {
        assert!(ranked("A1 90\n\nA2 80", 1, "").is_empty());
    }

    #[test]
    fn test_non_numeric_grades_count_as_zero() {
        let result = ranked("A1 abs 100\nA2 40 40", 2, "A1");
        // A1 averages 50, A2 averages 40
        assert_eq!(result.rank, Some(1));
    }

    #[test]
    fn test_zero_grade_columns_is_error() {
        let schema = ColumnSchema::new(vec![ColumnDefinition::new(
            "col1",
            "ID",
            ColumnKind::Identifier,
        )])
        .unwrap();
        let records = parse_rows("A1\nA2", &schema, BlankLinePolicy::Keep);
        let err = rank_student(&records, &schema, "A1").unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn test_first_matching_record_wins() {
        let result = ranked("A1 10\nA2 50\nA1 90", 1, "A1");
        assert_eq!(result.rank, Some(3));
    }
}
