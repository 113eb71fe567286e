use std::sync::{Arc, Mutex, MutexGuard};

use crate::application::use_cases::gradebook_session::GradebookSession;
use crate::domain::error::{AppError, Result};
use crate::domain::gradebook::GradebookConfig;

use super::logging::LogEntry;

/// Shared state handed to every command
pub struct AppState {
    pub session: Mutex<GradebookSession>,
    pub logs: Arc<Mutex<Vec<LogEntry>>>,
}

impl AppState {
    pub fn new(config: GradebookConfig) -> Self {
        Self {
            session: Mutex::new(GradebookSession::new(config)),
            logs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn session(&self) -> Result<MutexGuard<'_, GradebookSession>> {
        self.session
            .lock()
            .map_err(|_| AppError::Internal("gradebook session lock poisoned".to_string()))
    }

    pub fn log_snapshot(&self) -> Result<Vec<LogEntry>> {
        self.logs
            .lock()
            .map(|logs| logs.clone())
            .map_err(|_| AppError::Internal("log buffer lock poisoned".to_string()))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(GradebookConfig::default())
    }
}
