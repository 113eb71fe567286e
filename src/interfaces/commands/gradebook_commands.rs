//! Grade Form Commands
//!
//! Entry points the grade form calls for:
//! - column management (list, add, rename)
//! - parsing pasted text and previewing the table
//! - rank/percentile lookup
//! - CSV export

use std::path::PathBuf;

use crate::application::use_cases::gradebook_session::TablePreview;
use crate::domain::error::Result;
use crate::domain::gradebook::ColumnDefinition;
use crate::infrastructure::storage::write_export;

use super::logging::{add_log, LogEntry};
use super::state::AppState;
use super::types::*;

const LOG_SOURCE: &str = "GRADES";

pub fn grade_get_columns(state: &AppState) -> Result<Vec<ColumnDefinition>> {
    Ok(state.session()?.columns().to_vec())
}

pub fn grade_add_column(state: &AppState) -> Result<ColumnDefinition> {
    let column = state.session()?.add_column();
    add_log(
        &state.logs,
        "INFO",
        LOG_SOURCE,
        &format!("Added column {} ({})", column.name, column.id),
    );
    Ok(column)
}

pub fn grade_rename_column(
    state: &AppState,
    request: RenameColumnRequest,
) -> Result<ColumnDefinition> {
    state
        .session()?
        .rename_column(&request.column_id, &request.name)
        .map_err(|e| {
            add_log(&state.logs, "ERROR", LOG_SOURCE, &format!("Rename failed: {}", e));
            e
        })
}

pub fn grade_parse(state: &AppState, request: ParseRequest) -> Result<ParseResponse> {
    let mut session = state.session()?;
    session.set_raw_text(request.raw_text);
    let summary = session.parse();
    let preview = session.preview();
    drop(session);

    add_log(&state.logs, "INFO", LOG_SOURCE, &summary.summary());
    if summary.non_numeric_grades > 0 {
        add_log(
            &state.logs,
            "WARN",
            LOG_SOURCE,
            &format!(
                "{} non-numeric grade cells will count as 0",
                summary.non_numeric_grades
            ),
        );
    }

    Ok(ParseResponse { summary, preview })
}

pub fn grade_calculate(state: &AppState, request: CalculateRequest) -> Result<CalculateResponse> {
    let mut session = state.session()?;
    let result = session.calculate(request.search_id).map_err(|e| {
        add_log(&state.logs, "ERROR", LOG_SOURCE, &format!("Calculation failed: {}", e));
        e
    })?;
    let standing = session.standing();
    let search_id = session.search_id().to_string();
    drop(session);

    match &standing {
        Some(report) => add_log(
            &state.logs,
            "INFO",
            LOG_SOURCE,
            &format!(
                "{}: rank {}, {}",
                search_id, report.rank_label, report.percentile_label
            ),
        ),
        None => add_log(
            &state.logs,
            "WARN",
            LOG_SOURCE,
            &format!("No data for id '{}'", search_id),
        ),
    }

    Ok(CalculateResponse { result, standing })
}

pub fn grade_preview(state: &AppState) -> Result<TablePreview> {
    Ok(state.session()?.preview())
}

/// CSV blob plus the file name the frontend should offer for download
pub fn grade_export_csv(state: &AppState) -> Result<ExportCsvResponse> {
    let session = state.session()?;
    let content = session.export_csv()?;
    Ok(ExportCsvResponse {
        file_name: session.config().export_file_name.clone(),
        content,
    })
}

/// Write the CSV export to disk
pub fn grade_save_csv(state: &AppState, request: SaveCsvRequest) -> Result<SaveCsvResponse> {
    let (content, dir, file_name) = {
        let session = state.session()?;
        let config = session.config();
        let dir = request
            .dir
            .map(PathBuf::from)
            .unwrap_or_else(|| config.export_dir.clone());
        (session.export_csv()?, dir, config.export_file_name.clone())
    };

    let path = write_export(&dir, &file_name, &content).map_err(|e| {
        add_log(&state.logs, "ERROR", LOG_SOURCE, &format!("Export failed: {}", e));
        e
    })?;

    add_log(
        &state.logs,
        "INFO",
        LOG_SOURCE,
        &format!("Exported grades to {}", path.display()),
    );

    Ok(SaveCsvResponse {
        path: path.display().to_string(),
        bytes: content.len(),
    })
}

pub fn grade_get_logs(state: &AppState) -> Result<Vec<LogEntry>> {
    state.log_snapshot()
}
