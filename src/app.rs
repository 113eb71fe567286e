use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::domain::error::Result;
use crate::infrastructure::config::ConfigService;
use crate::interfaces::commands::AppState;

/// Install the fmt subscriber; `RUST_LOG` wins over `default_filter`
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Load configuration, start logging and build the state the frontend talks to
pub fn bootstrap(config_path: Option<&Path>) -> Result<AppState> {
    dotenvy::dotenv().ok();

    let mut service = ConfigService::new();
    if let Some(path) = config_path {
        service = service.with_file(path);
    }
    let config = service.load()?;

    init_tracing(&config.log_filter);
    info!(
        blank_lines = %config.blank_lines,
        export_quoting = %config.export_quoting,
        "Gradebook ready"
    );

    Ok(AppState::new(config))
}
