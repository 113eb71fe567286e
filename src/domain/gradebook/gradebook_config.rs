// ============================================================
// GRADEBOOK CONFIGURATION
// ============================================================
// Parse, export and logging knobs; loaded by infrastructure::config

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub const DEFAULT_EXPORT_FILE_NAME: &str = "grade_results.csv";

/// What the row parser does with a blank line inside the input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlankLinePolicy {
    /// Emit an all-empty record
    #[default]
    Keep,

    /// Drop the line
    Skip,
}

impl fmt::Display for BlankLinePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keep => write!(f, "keep"),
            Self::Skip => write!(f, "skip"),
        }
    }
}

impl std::str::FromStr for BlankLinePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keep" => Ok(Self::Keep),
            "skip" => Ok(Self::Skip),
            _ => Err(format!("Unknown blank line policy: {}", s)),
        }
    }
}

/// Quoting applied to exported CSV fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportQuoting {
    /// Quote only fields holding commas, quotes or newlines
    #[default]
    Necessary,

    /// Write every field raw; a comma inside a field splits it
    Never,
}

impl fmt::Display for ExportQuoting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Necessary => write!(f, "necessary"),
            Self::Never => write!(f, "never"),
        }
    }
}

impl std::str::FromStr for ExportQuoting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "necessary" => Ok(Self::Necessary),
            "never" => Ok(Self::Never),
            _ => Err(format!("Unknown export quoting: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GradebookConfig {
    pub blank_lines: BlankLinePolicy,

    pub export_quoting: ExportQuoting,

    /// File name offered for the CSV download
    #[validate(length(min = 1, max = 255), custom(function = "validate_file_name"))]
    pub export_file_name: String,

    /// Directory `grade_save_csv` writes into
    pub export_dir: PathBuf,

    /// Header of the startup identifier column
    #[validate(length(min = 1))]
    pub identifier_name: String,

    /// Header of the startup grade column
    #[validate(length(min = 1))]
    pub first_grade_name: String,

    /// `tracing_subscriber` filter directive
    #[validate(length(min = 1))]
    pub log_filter: String,
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            blank_lines: BlankLinePolicy::Keep,
            export_quoting: ExportQuoting::Necessary,
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
            export_dir: PathBuf::from("."),
            identifier_name: "ID".to_string(),
            first_grade_name: "Grade 1".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

fn validate_file_name(name: &str) -> Result<(), ValidationError> {
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(ValidationError::new("export_file_name_not_plain"));
    }
    Ok(())
}
