//! Relocation: copy one file to its new path with a rule set applied.
//!
//! The source is never modified or removed. A missing source surfaces as
//! `ErrorCode::SourceNotFound` before anything is created on disk, so callers can
//! treat it as "already migrated" and move on. Every other failure is fatal.

use std::path::Path;

use crate::error::{Error, Result};
use crate::local_files::FileSystem;
use crate::plan::FileTask;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelocationOutcome {
    pub replacements: usize,
}

/// Read `task.entry.source`, apply `task.rules`, write `task.entry.destination`.
///
/// Both paths are resolved against `root`. Parent directories of the destination
/// are created as needed and an existing destination is overwritten.
pub fn relocate(fs: &dyn FileSystem, root: &Path, task: FileTask<'_>) -> Result<RelocationOutcome> {
    let source = root.join(&task.entry.source);
    let destination = root.join(&task.entry.destination);

    let content = fs.read(&source).map_err(|e| {
        if e.is_source_not_found() {
            Error::source_not_found(task.entry.source.display().to_string())
        } else {
            e
        }
    })?;

    let rewrite = task.rules.rewrite(&content);

    if let Some(parent) = destination.parent() {
        fs.ensure_dir(parent)?;
    }
    fs.write(&destination, &rewrite.content)?;

    log_status!(
        "relocate",
        "{} replacement(s) in {}",
        rewrite.replacements,
        task.entry.destination.display()
    );

    Ok(RelocationOutcome {
        replacements: rewrite.replacements,
    })
}
