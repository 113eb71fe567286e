// ============================================================
// GRADEBOOK SESSION USE CASE
// ============================================================
// Application state behind the grade form; every action replaces the
// state it owns instead of patching it

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::application::use_cases::ranking::rank_student;
use crate::application::use_cases::row_parser::parse_rows_with_summary;
use crate::domain::error::Result;
use crate::domain::gradebook::{
    ColumnDefinition, ColumnSchema, GradebookConfig, ParseSummary, RankResult, Record,
    StandingReport,
};
use crate::infrastructure::csv::CsvWriter;

/// Parsed table laid out for the data preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablePreview {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub struct GradebookSession {
    config: GradebookConfig,
    schema: ColumnSchema,
    raw_text: String,
    records: Vec<Record>,
    search_id: String,
    result: RankResult,
}

impl GradebookSession {
    pub fn new(config: GradebookConfig) -> Self {
        let schema = ColumnSchema::with_names(&config.identifier_name, &config.first_grade_name);
        Self::with_schema(config, schema)
    }

    pub fn with_schema(config: GradebookConfig, schema: ColumnSchema) -> Self {
        Self {
            config,
            schema,
            raw_text: String::new(),
            records: Vec::new(),
            search_id: String::new(),
            result: RankResult::empty(),
        }
    }

    pub fn config(&self) -> &GradebookConfig {
        &self.config
    }

    pub fn schema(&self) -> &ColumnSchema {
        &self.schema
    }

    pub fn columns(&self) -> &[ColumnDefinition] {
        self.schema.columns()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn search_id(&self) -> &str {
        &self.search_id
    }

    pub fn result(&self) -> &RankResult {
        &self.result
    }

    pub fn add_column(&mut self) -> ColumnDefinition {
        let column = self.schema.add_grade_column().clone();
        info!(column_id = %column.id, name = %column.name, "Added grade column");
        column
    }

    pub fn rename_column(&mut self, id: &str, name: &str) -> Result<ColumnDefinition> {
        let column = self.schema.rename(id, name)?.clone();
        info!(column_id = %column.id, name = %column.name, "Renamed column");
        Ok(column)
    }

    pub fn set_raw_text(&mut self, raw_text: impl Into<String>) {
        self.raw_text = raw_text.into();
    }

    /// Re-parse the current text against the current schema
    pub fn parse(&mut self) -> ParseSummary {
        let (records, summary) =
            parse_rows_with_summary(&self.raw_text, &self.schema, self.config.blank_lines);
        self.records = records;
        info!("{}", summary.summary());
        summary
    }

    /// Rank `search_id` among the parsed records and keep the outcome
    pub fn calculate(&mut self, search_id: impl Into<String>) -> Result<RankResult> {
        let search_id = search_id.into();
        let outcome = rank_student(&self.records, &self.schema, &search_id);
        self.search_id = search_id;
        self.result = outcome.as_ref().cloned().unwrap_or_default();
        outcome?;
        info!(
            student_id = %self.search_id,
            rank = ?self.result.rank,
            percentile = ?self.result.percentile,
            "Calculated standing"
        );
        Ok(self.result.clone())
    }

    /// Results panel view of the last calculation
    pub fn standing(&self) -> Option<StandingReport> {
        self.result.report(self.records.len())
    }

    pub fn preview(&self) -> TablePreview {
        TablePreview {
            headers: self
                .schema
                .headers()
                .into_iter()
                .map(str::to_string)
                .collect(),
            rows: self
                .records
                .iter()
                .map(|record| {
                    record
                        .ordered_values(&self.schema)
                        .into_iter()
                        .map(str::to_string)
                        .collect()
                })
                .collect(),
        }
    }

    pub fn export_csv(&self) -> Result<String> {
        CsvWriter::new()
            .with_quoting(self.config.export_quoting)
            .write_table(&self.schema, &self.records)
    }
}

impl Default for GradebookSession {
    fn default() -> Self {
        Self::new(GradebookConfig::default())
    }
}
