use clap::Args;
use serde::Serialize;

use relocator::local_files::{self, FileSystem};
use relocator::plan::{FileTask, MigrationPlan, Phase};
use relocator::rules::RuleSummary;

use crate::commands::{CmdResult, GlobalArgs};

#[derive(Args, Debug, Default)]
pub struct PlanArgs {}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum PlanOutput {
    #[serde(rename = "plan")]
    Plan {
        root: String,
        tasks: Vec<TaskSummary>,
        entry_point: EntryPointSummary,
        rule_sets: Vec<RuleSetSummary>,
        pending: usize,
    },
}

#[derive(Serialize)]
pub struct TaskSummary {
    pub phase: Phase,
    pub source: String,
    pub destination: String,
    pub rule_set: String,
    pub source_exists: bool,
    pub destination_exists: bool,
}

#[derive(Serialize)]
pub struct EntryPointSummary {
    pub path: String,
    pub rule_set: String,
    pub exists: bool,
}

#[derive(Serialize)]
pub struct RuleSetSummary {
    pub name: String,
    pub rules: Vec<RuleSummary>,
}

/// Preview the built-in plan against the files on disk. Writes nothing.
pub fn run(_args: PlanArgs, global: &GlobalArgs) -> CmdResult<PlanOutput> {
    let plan = MigrationPlan::builtin()?;
    let fs = local_files::local();

    let summarize = |phase: Phase, task: FileTask<'_>| TaskSummary {
        phase,
        source: task.entry.source.display().to_string(),
        destination: task.entry.destination.display().to_string(),
        rule_set: task.rules.name.clone(),
        source_exists: fs.exists(&global.root.join(&task.entry.source)),
        destination_exists: fs.exists(&global.root.join(&task.entry.destination)),
    };

    let tasks: Vec<TaskSummary> = plan
        .layout_tasks()
        .into_iter()
        .map(|t| summarize(Phase::Layout, t))
        .chain(
            plan.citizen_tasks()
                .into_iter()
                .map(|t| summarize(Phase::CitizenModules, t)),
        )
        .collect();

    let pending = tasks.iter().filter(|t| t.source_exists).count();

    let entry_point = EntryPointSummary {
        path: plan.entry_point.display().to_string(),
        rule_set: plan.entry_point_rules.name.clone(),
        exists: fs.exists(&global.root.join(&plan.entry_point)),
    };

    let rule_sets = plan
        .rule_sets()
        .iter()
        .map(|set| RuleSetSummary {
            name: set.name.clone(),
            rules: set.summaries(),
        })
        .collect();

    Ok((
        PlanOutput::Plan {
            root: global.root.display().to_string(),
            tasks,
            entry_point,
            rule_sets,
            pending,
        },
        0,
    ))
}
