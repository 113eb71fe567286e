pub mod gradebook_commands;
pub mod logging;
pub mod registry;
pub mod state;
pub mod types;

pub use gradebook_commands::*;
pub use logging::LogEntry;
pub use registry::{invoke, COMMANDS};
pub use state::AppState;
