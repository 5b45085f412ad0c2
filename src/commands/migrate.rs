use clap::Args;

use relocator::local_files;
use relocator::migration::run_migration;
use relocator::plan::MigrationPlan;
use relocator::report::{ConsoleReporter, RecordingReporter};
use relocator::MigrationReport;

use crate::commands::{CmdResult, GlobalArgs};

#[derive(Args, Debug, Default)]
pub struct MigrateArgs {
    /// Print a JSON report instead of progress narration
    #[arg(long)]
    pub json: bool,
}

/// Run every phase, narrating progress to stdout.
pub fn run_narrated(_args: MigrateArgs, global: &GlobalArgs) -> relocator::Result<i32> {
    let plan = MigrationPlan::builtin()?;
    let mut reporter = ConsoleReporter;
    run_migration(&local_files::local(), &global.root, &plan, &mut reporter)?;
    Ok(0)
}

/// Run every phase quietly and return the structured report.
pub fn run(_args: MigrateArgs, global: &GlobalArgs) -> CmdResult<MigrationReport> {
    let plan = MigrationPlan::builtin()?;
    let mut reporter = RecordingReporter::default();
    let report = run_migration(&local_files::local(), &global.root, &plan, &mut reporter)?;
    Ok((report, 0))
}
