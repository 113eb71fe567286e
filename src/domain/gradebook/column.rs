// ============================================================
// COLUMN SCHEMA
// ============================================================
// Ordered column definitions; position maps to parsed tokens

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};

/// Role a column plays in the ranking computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
    /// Designates the record (student id)
    #[serde(rename = "id")]
    Identifier,

    /// Participates in the average
    #[serde(rename = "grade")]
    Grade,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier => write!(f, "id"),
            Self::Grade => write!(f, "grade"),
        }
    }
}

/// A single column of the grade table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ColumnKind,
}

impl ColumnDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }

    pub fn is_grade(&self) -> bool {
        self.kind == ColumnKind::Grade
    }
}

/// Ordered column list.
///
/// The first column is the identifier column. Columns are only ever
/// appended or renamed, so ids stay unique for the life of the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ColumnDefinition>", into = "Vec<ColumnDefinition>")]
pub struct ColumnSchema {
    columns: Vec<ColumnDefinition>,
}

impl ColumnSchema {
    /// Build a schema from an explicit column list
    pub fn new(columns: Vec<ColumnDefinition>) -> Result<Self> {
        let first = columns.first().ok_or_else(|| {
            AppError::ValidationError("schema needs at least one column".to_string())
        })?;
        if first.kind != ColumnKind::Identifier {
            return Err(AppError::ValidationError(format!(
                "first column '{}' must be the identifier column",
                first.id
            )));
        }

        let identifiers = columns
            .iter()
            .filter(|c| c.kind == ColumnKind::Identifier)
            .count();
        if identifiers != 1 {
            return Err(AppError::ValidationError(format!(
                "schema must have exactly one identifier column, found {}",
                identifiers
            )));
        }

        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.id.as_str()) {
                return Err(AppError::ValidationError(format!(
                    "duplicate column id '{}'",
                    column.id
                )));
            }
        }

        Ok(Self { columns })
    }

    /// The startup schema: an identifier column and one grade column
    pub fn with_names(identifier_name: &str, first_grade_name: &str) -> Self {
        Self {
            columns: vec![
                ColumnDefinition::new("col1", identifier_name, ColumnKind::Identifier),
                ColumnDefinition::new("col2", first_grade_name, ColumnKind::Grade),
            ],
        }
    }

    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn identifier_column(&self) -> Option<&ColumnDefinition> {
        self.columns
            .iter()
            .find(|c| c.kind == ColumnKind::Identifier)
    }

    pub fn grade_columns(&self) -> impl Iterator<Item = &ColumnDefinition> {
        self.columns.iter().filter(|c| c.is_grade())
    }

    pub fn grade_count(&self) -> usize {
        self.grade_columns().count()
    }

    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Append a grade column named after the current grade count
    pub fn add_grade_column(&mut self) -> &ColumnDefinition {
        let column = ColumnDefinition::new(
            format!("col{}", self.columns.len() + 1),
            format!("Grade {}", self.grade_count() + 1),
            ColumnKind::Grade,
        );
        self.columns.push(column);
        &self.columns[self.columns.len() - 1]
    }

    /// Rename a column in place
    pub fn rename(&mut self, id: &str, name: impl Into<String>) -> Result<&ColumnDefinition> {
        let column = self
            .columns
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("column '{}'", id)))?;
        column.name = name.into();
        Ok(&*column)
    }
}

impl TryFrom<Vec<ColumnDefinition>> for ColumnSchema {
    type Error = AppError;

    fn try_from(columns: Vec<ColumnDefinition>) -> Result<Self> {
        Self::new(columns)
    }
}

impl From<ColumnSchema> for Vec<ColumnDefinition> {
    fn from(schema: ColumnSchema) -> Self {
        schema.columns
    }
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self::with_names("ID", "Grade 1")
    }
}
