// ============================================================
// GRADEBOOK DOMAIN LAYER
// ============================================================
// Column schema, records and ranking outcomes
// No I/O

mod column;
mod gradebook_config;
mod parse_summary;
mod record;
mod standing;

pub use column::{ColumnDefinition, ColumnKind, ColumnSchema};
pub use gradebook_config::{
    BlankLinePolicy, ExportQuoting, GradebookConfig, DEFAULT_EXPORT_FILE_NAME,
};
pub use parse_summary::ParseSummary;
pub use record::{is_coerced_grade, parse_grade_value, Record};
pub use standing::{RankResult, StandingReport};
