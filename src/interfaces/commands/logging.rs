use std::sync::Mutex;

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Entries kept for the log panel
pub const MAX_LOG_ENTRIES: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub time: String,
    pub level: String,
    pub source: String,
    pub message: String,
}

pub fn add_log_entry(
    logs: &Mutex<Vec<LogEntry>>,
    level: &str,
    source: &str,
    message: &str,
) -> LogEntry {
    let entry = LogEntry {
        time: Local::now().format("%H:%M:%S").to_string(),
        level: level.to_string(),
        source: source.to_string(),
        message: message.to_string(),
    };
    match logs.lock() {
        Ok(mut logs) => {
            logs.push(entry.clone());
            if logs.len() > MAX_LOG_ENTRIES {
                logs.remove(0);
            }
        }
        Err(_) => warn!(
            level,
            source,
            message,
            "Log buffer lock poisoned, dropping UI log entry"
        ),
    }
    entry
}

pub fn add_log(logs: &Mutex<Vec<LogEntry>>, level: &str, source: &str, message: &str) {
    add_log_entry(logs, level, source, message);
}
