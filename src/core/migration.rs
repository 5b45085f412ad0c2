//! Orchestrates a full run: layout files, citizen modules, entry point, report.
//!
//! Phases run strictly in order on a single thread. A missing source in the first
//! two phases is recorded as a skip; any other error aborts the run immediately,
//! leaving already-written destinations in place.

use std::path::Path;

use crate::entry_point::patch_entry_point;
use crate::error::Result;
use crate::local_files::FileSystem;
use crate::output::{FileOutcome, FileStatus, MigrationReport, PhaseReport};
use crate::plan::{FileTask, MigrationPlan, Phase};
use crate::relocate::relocate;
use crate::report::Reporter;

pub fn run_migration(
    fs: &dyn FileSystem,
    root: &Path,
    plan: &MigrationPlan,
    reporter: &mut dyn Reporter,
) -> Result<MigrationReport> {
    let mut report = MigrationReport::default();

    reporter.banner("Component Migration Script");

    reporter.phase(Phase::Layout, "Migrating layout components...");
    report.push(run_file_phase(
        fs,
        root,
        Phase::Layout,
        plan.layout_tasks(),
        reporter,
    )?);

    reporter.phase(Phase::CitizenModules, "Migrating citizen module components...");
    report.push(run_file_phase(
        fs,
        root,
        Phase::CitizenModules,
        plan.citizen_tasks(),
        reporter,
    )?);

    let entry_point = plan.entry_point.display().to_string();
    reporter.phase(
        Phase::EntryPoint,
        &format!("Updating {} imports...", entry_point),
    );
    let replacements = patch_entry_point(fs, root, plan)?;
    reporter.updated(&plan.entry_point);
    let mut entry_phase = PhaseReport::new(Phase::EntryPoint);
    entry_phase.files.push(FileOutcome {
        source: entry_point.clone(),
        destination: entry_point,
        status: FileStatus::Updated,
        replacements,
    });
    report.push(entry_phase);

    print_next_steps(plan, reporter);

    Ok(report)
}

fn run_file_phase(
    fs: &dyn FileSystem,
    root: &Path,
    phase: Phase,
    tasks: Vec<FileTask<'_>>,
    reporter: &mut dyn Reporter,
) -> Result<PhaseReport> {
    let mut phase_report = PhaseReport::new(phase);

    for task in tasks {
        let source = &task.entry.source;
        let destination = &task.entry.destination;

        if !fs.exists(&root.join(source)) {
            reporter.skipped(source);
            phase_report.files.push(outcome(task, FileStatus::Skipped, 0));
            continue;
        }

        reporter.migrating(source, destination);
        match relocate(fs, root, task) {
            Ok(relocated) => {
                reporter.migrated();
                phase_report.files.push(outcome(
                    task,
                    FileStatus::Migrated,
                    relocated.replacements,
                ));
            }
            // Removed between the existence check and the read.
            Err(err) if err.is_source_not_found() => {
                reporter.skipped(source);
                phase_report.files.push(outcome(task, FileStatus::Skipped, 0));
            }
            Err(err) => return Err(err),
        }
    }

    Ok(phase_report)
}

fn outcome(task: FileTask<'_>, status: FileStatus, replacements: usize) -> FileOutcome {
    FileOutcome {
        source: task.entry.source.display().to_string(),
        destination: task.entry.destination.display().to_string(),
        status,
        replacements,
    }
}

fn print_next_steps(plan: &MigrationPlan, reporter: &mut dyn Reporter) {
    reporter.phase(Phase::Report, "Cleanup instructions");
    reporter.line("");
    reporter.banner("Migration Complete!");
    reporter.line("");
    reporter.line("Next steps:");
    for step in &plan.next_steps {
        reporter.line(step);
    }
}
