//! In-place rewrite of the application entry point.

use std::path::Path;

use crate::error::{Error, Result};
use crate::local_files::FileSystem;
use crate::plan::MigrationPlan;

/// Apply `plan.entry_point_rules` to `plan.entry_point` in place.
///
/// Returns the number of replacements made. Unlike relocation, a missing entry
/// point is a hard failure.
pub fn patch_entry_point(fs: &dyn FileSystem, root: &Path, plan: &MigrationPlan) -> Result<usize> {
    let path = root.join(&plan.entry_point);

    let content = fs.read(&path).map_err(|e| {
        if e.is_source_not_found() {
            Error::entry_point_not_found(plan.entry_point.display().to_string())
        } else {
            e
        }
    })?;

    let rewrite = plan.entry_point_rules.rewrite(&content);
    fs.write_in_place(&path, &rewrite.content)?;

    log_status!(
        "patch",
        "{} import(s) rewritten in {}",
        rewrite.replacements,
        plan.entry_point.display()
    );

    Ok(rewrite.replacements)
}
