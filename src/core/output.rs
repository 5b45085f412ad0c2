//! Public output types for relocation runs.
//!
//! A run produces one [`MigrationReport`]: a [`PhaseReport`] per file phase, each
//! listing what happened to every file the phase looked at.

use serde::Serialize;

use crate::plan::Phase;

/// What happened to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// Copied to its destination with rules applied.
    Migrated,
    /// Source absent; nothing written.
    Skipped,
    /// Rewritten in place.
    Updated,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileOutcome {
    pub source: String,
    pub destination: String,
    pub status: FileStatus,
    pub replacements: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseReport {
    pub phase: Phase,
    pub files: Vec<FileOutcome>,
}

impl PhaseReport {
    pub fn new(phase: Phase) -> Self {
        PhaseReport {
            phase,
            files: Vec::new(),
        }
    }

    pub fn count(&self, status: FileStatus) -> usize {
        self.files.iter().filter(|f| f.status == status).count()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationReport {
    pub phases: Vec<PhaseReport>,
    pub migrated: usize,
    pub skipped: usize,
}

impl MigrationReport {
    pub fn push(&mut self, phase: PhaseReport) {
        self.migrated += phase.count(FileStatus::Migrated);
        self.skipped += phase.count(FileStatus::Skipped);
        self.phases.push(phase);
    }

    /// Iterate every file outcome across phases in run order.
    pub fn files(&self) -> impl Iterator<Item = &FileOutcome> {
        self.phases.iter().flat_map(|p| p.files.iter())
    }
}
