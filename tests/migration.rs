use std::fs;
use std::path::Path;

use relocator::local_files::local;
use relocator::migration::run_migration;
use relocator::plan::{MigrationPlan, Phase};
use relocator::relocate::relocate;
use relocator::report::RecordingReporter;
use relocator::rules::{apply_rules, RuleSet};
use relocator::{ErrorCode, FileStatus, MigrationReport, PhaseReport};
use tempfile::tempdir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}

fn phase_report(report: &MigrationReport, phase: Phase) -> &PhaseReport {
    report.phases.iter().find(|p| p.phase == phase).unwrap()
}

const LOGIN_PAGE: &str = "import X from './ui/Button'\n";

const CITIZEN_PORTAL: &str = "\
import { Card } from \"./ui/card\";
import PayBills from './citizen/PayBills';
import Queue from './officer/Queue';
import Users from './admin/Users';
import Visits from './field/Visits';
import { helper } from './lib/helper';
";

const GRIEVANCES: &str = "\
import { Button } from '../ui/button';
import { Badge } from \"../ui/badge\";
import { local } from './local';
";

const APP: &str = "\
import CitizenPortal from './components/CitizenPortal';
import LoginPage from \"./components/LoginPage\";
import FirstConnectionForm from './components/citizen/FirstConnectionForm';
import WaterTheme from './components/WaterTheme';
";

fn seed_project(root: &Path) {
    write(root, "components/LoginPage.tsx", LOGIN_PAGE);
    write(root, "components/CitizenPortal.tsx", CITIZEN_PORTAL);
    write(root, "components/citizen/Grievances.tsx", GRIEVANCES);
    write(root, "App.tsx", APP);
}

#[test]
fn login_page_migrates_to_layout_and_source_stays() {
    let dir = tempdir().unwrap();
    seed_project(dir.path());
    let plan = MigrationPlan::builtin().unwrap();

    run_migration(&local(), dir.path(), &plan, &mut RecordingReporter::default()).unwrap();

    assert_eq!(
        read(dir.path(), "src/components/layout/LoginPage.tsx"),
        "import X from '../common/ui/Button'\n"
    );
    assert_eq!(read(dir.path(), "components/LoginPage.tsx"), LOGIN_PAGE);
}

#[test]
fn destinations_equal_rules_applied_to_sources() {
    let dir = tempdir().unwrap();
    seed_project(dir.path());
    let plan = MigrationPlan::builtin().unwrap();

    let report =
        run_migration(&local(), dir.path(), &plan, &mut RecordingReporter::default()).unwrap();

    for entry in &plan.layout {
        if dir.path().join(&entry.source).exists() {
            let source = fs::read_to_string(dir.path().join(&entry.source)).unwrap();
            let destination = fs::read_to_string(dir.path().join(&entry.destination)).unwrap();
            assert_eq!(destination, apply_rules(&source, plan.layout_rules.rules()));
        }
    }
    assert_eq!(
        read(dir.path(), "src/components/modules/citizen/Grievances.tsx"),
        "\
import { Button } from '../../common/ui/button';
import { Badge } from '../../common/ui/badge\";
import { local } from './local';
"
    );
    assert_eq!(
        read(dir.path(), "src/components/layout/CitizenPortal.tsx"),
        "\
import { Card } from '../common/ui/card\";
import PayBills from '../modules/citizen/PayBills';
import Queue from '../modules/officer/Queue';
import Users from '../modules/admin/Users';
import Visits from '../modules/field/Visits';
import { helper } from './lib/helper';
"
    );
    assert_eq!(report.migrated, 3);
    assert_eq!(report.skipped, 16);
    assert_eq!(read(dir.path(), "components/citizen/Grievances.tsx"), GRIEVANCES);
}

#[test]
fn missing_citizen_file_is_skipped_and_not_created() {
    let dir = tempdir().unwrap();
    seed_project(dir.path());
    let plan = MigrationPlan::builtin().unwrap();
    let mut reporter = RecordingReporter::default();

    let report = run_migration(&local(), dir.path(), &plan, &mut reporter).unwrap();

    assert!(!dir
        .path()
        .join("src/components/modules/citizen/PayBills.tsx")
        .exists());
    assert!(reporter.lines.iter().any(|l| l
        == "  ⚠ Skipping components/citizen/PayBills.tsx (not found, may already be migrated)"));

    let citizen = phase_report(&report, Phase::CitizenModules);
    let pay_bills = citizen
        .files
        .iter()
        .find(|f| f.source == "components/citizen/PayBills.tsx")
        .unwrap();
    assert_eq!(pay_bills.status, FileStatus::Skipped);
}

#[test]
fn entry_point_is_patched_in_place() {
    let dir = tempdir().unwrap();
    seed_project(dir.path());
    let plan = MigrationPlan::builtin().unwrap();

    let report =
        run_migration(&local(), dir.path(), &plan, &mut RecordingReporter::default()).unwrap();

    assert_eq!(
        read(dir.path(), "App.tsx"),
        "\
import CitizenPortal from './src/components/layout/CitizenPortal';
import LoginPage from './src/components/layout/LoginPage\";
import FirstConnectionForm from './src/components/modules/citizen/FirstConnectionForm';
import WaterTheme from './components/WaterTheme';
"
    );
    let entry = phase_report(&report, Phase::EntryPoint);
    assert_eq!(entry.files[0].status, FileStatus::Updated);
    assert_eq!(entry.files[0].replacements, 3);
}

#[test]
fn rerun_is_stable() {
    let dir = tempdir().unwrap();
    seed_project(dir.path());
    let plan = MigrationPlan::builtin().unwrap();

    run_migration(&local(), dir.path(), &plan, &mut RecordingReporter::default()).unwrap();
    let first_app = read(dir.path(), "App.tsx");
    let first_portal = read(dir.path(), "src/components/layout/CitizenPortal.tsx");

    run_migration(&local(), dir.path(), &plan, &mut RecordingReporter::default()).unwrap();

    assert_eq!(read(dir.path(), "App.tsx"), first_app);
    assert_eq!(
        read(dir.path(), "src/components/layout/CitizenPortal.tsx"),
        first_portal
    );
    // Migrated output fed back through the same rules is unchanged.
    assert_eq!(
        apply_rules(&first_portal, plan.layout_rules.rules()),
        first_portal
    );
}

#[test]
fn deep_destination_directories_are_created() {
    let dir = tempdir().unwrap();
    write(dir.path(), "in.tsx", "body");
    let entry = relocator::plan::MigrationEntry::new("in.tsx", "a/b/c/d/e/out.tsx");
    let rules = RuleSet::new("none", Vec::new());

    relocate(
        &local(),
        dir.path(),
        relocator::plan::FileTask {
            entry: &entry,
            rules: &rules,
        },
    )
    .unwrap();

    assert_eq!(read(dir.path(), "a/b/c/d/e/out.tsx"), "body");
}

#[test]
fn second_rule_fires_on_first_rules_output() {
    let rules = RuleSet::from_pairs(
        "chain",
        &[("OLD_MARKER", "INSERTED_TOKEN"), ("INSERTED_TOKEN", "final")],
    )
    .unwrap();

    assert_eq!(rules.apply("x OLD_MARKER y"), "x final y");
    assert_eq!(rules.rewrite("x OLD_MARKER y").replacements, 2);
}

#[test]
fn missing_entry_point_aborts_run() {
    let dir = tempdir().unwrap();
    write(dir.path(), "components/LoginPage.tsx", LOGIN_PAGE);
    let plan = MigrationPlan::builtin().unwrap();

    let err = run_migration(&local(), dir.path(), &plan, &mut RecordingReporter::default())
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::EntryPointNotFound);
    // Earlier phases are not rolled back.
    assert!(dir
        .path()
        .join("src/components/layout/LoginPage.tsx")
        .exists());
}

#[test]
fn directory_at_source_path_aborts_with_io_error() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("components/LoginPage.tsx")).unwrap();
    write(dir.path(), "App.tsx", APP);
    let plan = MigrationPlan::builtin().unwrap();
    let mut reporter = RecordingReporter::default();

    let err = run_migration(&local(), dir.path(), &plan, &mut reporter).unwrap_err();

    assert_eq!(err.code, ErrorCode::InternalIoError);
    assert!(!reporter
        .lines
        .iter()
        .any(|l| l.contains("Skipping components/LoginPage.tsx")));
    assert_eq!(read(dir.path(), "App.tsx"), APP);
}

#[test]
fn blocked_layout_destination_stops_before_later_phases() {
    let dir = tempdir().unwrap();
    seed_project(dir.path());
    // A regular file where the layout directory must go.
    write(dir.path(), "src/components/layout", "");
    let plan = MigrationPlan::builtin().unwrap();
    let mut reporter = RecordingReporter::default();

    let err = run_migration(&local(), dir.path(), &plan, &mut reporter).unwrap_err();

    assert_eq!(err.code, ErrorCode::InternalIoError);
    assert_eq!(read(dir.path(), "App.tsx"), APP);
    assert!(!dir
        .path()
        .join("src/components/modules/citizen/Grievances.tsx")
        .exists());
    assert!(!reporter.lines.iter().any(|l| l.starts_with("[Phase 2]")));
}

#[cfg(unix)]
#[test]
fn symlinked_entry_point_keeps_link_and_patches_target() {
    let dir = tempdir().unwrap();
    write(
        dir.path(),
        "RealApp.tsx",
        "import A from './components/AdminPanel';\n",
    );
    std::os::unix::fs::symlink(dir.path().join("RealApp.tsx"), dir.path().join("App.tsx"))
        .unwrap();
    let plan = MigrationPlan::builtin().unwrap();

    run_migration(&local(), dir.path(), &plan, &mut RecordingReporter::default()).unwrap();

    let link = fs::symlink_metadata(dir.path().join("App.tsx")).unwrap();
    assert!(link.file_type().is_symlink());
    assert_eq!(
        read(dir.path(), "RealApp.tsx"),
        "import A from './src/components/layout/AdminPanel';\n"
    );
}
