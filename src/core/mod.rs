// Public modules
pub mod entry_point;
pub mod error;
pub mod local_files;
pub mod migration;
pub mod output;
pub mod plan;
pub mod relocate;
pub mod report;
pub mod rules;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use output::{FileOutcome, FileStatus, MigrationReport, PhaseReport};
