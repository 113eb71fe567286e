//! Name-based command dispatch for the frontend bridge.
//!
//! Arguments arrive as a JSON object keyed by parameter name, the same
//! shape a webview `invoke` call sends: `{"request": {...}}`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::domain::error::{AppError, Result};

use super::gradebook_commands::*;
use super::state::AppState;
use super::types::SaveCsvRequest;

pub const COMMANDS: &[&str] = &[
    "grade_get_columns",
    "grade_add_column",
    "grade_rename_column",
    "grade_parse",
    "grade_calculate",
    "grade_preview",
    "grade_export_csv",
    "grade_save_csv",
    "grade_get_logs",
];

pub fn invoke(state: &AppState, command: &str, args: JsonValue) -> Result<JsonValue> {
    debug!(command, "Invoking command");
    match command {
        "grade_get_columns" => to_json(grade_get_columns(state)?),
        "grade_add_column" => to_json(grade_add_column(state)?),
        "grade_rename_column" => to_json(grade_rename_column(state, request(&args)?)?),
        "grade_parse" => to_json(grade_parse(state, request(&args)?)?),
        "grade_calculate" => to_json(grade_calculate(state, request(&args)?)?),
        "grade_preview" => to_json(grade_preview(state)?),
        "grade_export_csv" => to_json(grade_export_csv(state)?),
        "grade_save_csv" => {
            let save = match args.get("request") {
                Some(_) => request(&args)?,
                None => SaveCsvRequest::default(),
            };
            to_json(grade_save_csv(state, save)?)
        }
        "grade_get_logs" => to_json(grade_get_logs(state)?),
        other => Err(AppError::NotFound(format!("command '{}'", other))),
    }
}

fn request<T: DeserializeOwned>(args: &JsonValue) -> Result<T> {
    let value = args
        .get("request")
        .cloned()
        .ok_or_else(|| AppError::ValidationError("missing 'request' argument".to_string()))?;
    serde_json::from_value(value).map_err(|e| AppError::ParseError(format!("Invalid request: {}", e)))
}

fn to_json<T: Serialize>(value: T) -> Result<JsonValue> {
    Ok(serde_json::to_value(value)?)
}
