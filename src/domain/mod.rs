pub mod error;
pub mod gradebook;
