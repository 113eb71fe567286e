//! Request and response types for the grade commands
//!
//! Field names are camelCase on the wire to match the frontend.

use serde::{Deserialize, Serialize};

use crate::application::use_cases::gradebook_session::TablePreview;
use crate::domain::gradebook::{ParseSummary, RankResult, StandingReport};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameColumnRequest {
    pub column_id: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseRequest {
    pub raw_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResponse {
    pub summary: ParseSummary,
    pub preview: TablePreview,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    pub search_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    pub result: RankResult,
    pub standing: Option<StandingReport>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportCsvResponse {
    pub file_name: String,
    pub content: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveCsvRequest {
    /// Overrides the configured export directory
    #[serde(default)]
    pub dir: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveCsvResponse {
    pub path: String,
    pub bytes: usize,
}
