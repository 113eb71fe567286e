//! Backend for the grade calculator form.
//!
//! Pasted, space-separated rows are parsed against a column schema, one
//! student is ranked against the rest by average grade, and the table is
//! exported as CSV. The form itself lives in the frontend and reaches this
//! crate through [`interfaces::commands`].

mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use app::{bootstrap, init_tracing};
pub use application::use_cases::gradebook_session::{GradebookSession, TablePreview};
pub use application::use_cases::ranking::rank_student;
pub use application::use_cases::row_parser::{parse_rows, parse_rows_with_summary};
pub use domain::error::{AppError, Result};
pub use domain::gradebook::{
    parse_grade_value, BlankLinePolicy, ColumnDefinition, ColumnKind, ColumnSchema,
    ExportQuoting, GradebookConfig, ParseSummary, RankResult, Record, StandingReport,
};
pub use infrastructure::csv::CsvWriter;
pub use interfaces::commands::{invoke, AppState};
