//! The built-in migration plan.
//!
//! Everything here is fixed configuration: the layout table, the citizen module
//! file list, the entry point and the rule sets for each phase. The plan is built
//! once by [`MigrationPlan::builtin`] and passed by reference to every operation.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::rules::RuleSet;

/// One source → destination pair, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationEntry {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl MigrationEntry {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        MigrationEntry {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// Named stage of the fixed run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Layout,
    CitizenModules,
    EntryPoint,
    Report,
}

impl Phase {
    pub fn number(&self) -> u8 {
        match self {
            Phase::Layout => 1,
            Phase::CitizenModules => 2,
            Phase::EntryPoint => 3,
            Phase::Report => 4,
        }
    }
}

/// A migration entry paired with the rule set of its phase.
#[derive(Debug, Clone, Copy)]
pub struct FileTask<'a> {
    pub entry: &'a MigrationEntry,
    pub rules: &'a RuleSet,
}

#[derive(Debug, Clone)]
pub struct MigrationPlan {
    pub layout: Vec<MigrationEntry>,
    pub layout_rules: RuleSet,
    pub citizen_modules: Vec<MigrationEntry>,
    pub citizen_rules: RuleSet,
    pub entry_point: PathBuf,
    pub entry_point_rules: RuleSet,
    pub next_steps: Vec<String>,
}

const LAYOUT_COMPONENTS: &[&str] = &[
    "CitizenPortal",
    "OfficerPortal",
    "AdminPanel",
    "FieldOfficerPortal",
    "LoginPage",
    "CitizenLanding",
    "WaterTheme",
];

const CITIZEN_FILES: &[&str] = &[
    "ApplicationSuccess.tsx",
    "BillCalculator.tsx",
    "FirstConnectionForm.tsx",
    "FirstConnectionGrievance.tsx",
    "Grievances.tsx",
    "MyConnections.tsx",
    "NewConnectionForm.tsx",
    "PayBills.tsx",
    "RTIInfo.tsx",
    "SubmitReading.tsx",
    "Support.tsx",
    "TrackStatus.tsx",
];

const CITIZEN_SOURCE_PREFIX: &str = "components/citizen";
const CITIZEN_DESTINATION_PREFIX: &str = "src/components/modules/citizen";

const LAYOUT_RULES: &[(&str, &str)] = &[
    (r#"from ['"]\./ui/"#, "from '../common/ui/"),
    (r#"from ['"]\./citizen/"#, "from '../modules/citizen/"),
    (r#"from ['"]\./officer/"#, "from '../modules/officer/"),
    (r#"from ['"]\./admin/"#, "from '../modules/admin/"),
    (r#"from ['"]\./field/"#, "from '../modules/field/"),
];

const CITIZEN_RULES: &[(&str, &str)] = &[(r#"from ['"]\.\./ui/"#, "from '../../common/ui/")];

const ENTRY_POINT: &str = "App.tsx";

const ENTRY_POINT_RULES: &[(&str, &str)] = &[
    (
        r#"from ['"]\./components/CitizenPortal"#,
        "from './src/components/layout/CitizenPortal",
    ),
    (
        r#"from ['"]\./components/OfficerPortal"#,
        "from './src/components/layout/OfficerPortal",
    ),
    (
        r#"from ['"]\./components/AdminPanel"#,
        "from './src/components/layout/AdminPanel",
    ),
    (
        r#"from ['"]\./components/FieldOfficerPortal"#,
        "from './src/components/layout/FieldOfficerPortal",
    ),
    (
        r#"from ['"]\./components/LoginPage"#,
        "from './src/components/layout/LoginPage",
    ),
    (
        r#"from ['"]\./components/CitizenLanding"#,
        "from './src/components/layout/CitizenLanding",
    ),
    (
        r#"from ['"]\./components/citizen/FirstConnectionForm"#,
        "from './src/components/modules/citizen/FirstConnectionForm",
    ),
    (
        r#"from ['"]\./components/citizen/FirstConnectionGrievance"#,
        "from './src/components/modules/citizen/FirstConnectionGrievance",
    ),
];

const NEXT_STEPS: &[&str] = &[
    "1. Test the application to ensure everything works",
    "2. If everything works, delete the old /components folder:",
    "   rm -rf components/",
    "",
    "If you encounter errors, you can revert by running:",
    "   git checkout App.tsx components/",
];

impl MigrationPlan {
    /// Construct the fixed plan. Fails only if a rule pattern does not compile.
    pub fn builtin() -> Result<Self> {
        let layout = LAYOUT_COMPONENTS
            .iter()
            .map(|name| {
                MigrationEntry::new(
                    format!("components/{}.tsx", name),
                    format!("src/components/layout/{}.tsx", name),
                )
            })
            .collect();

        let citizen_modules = CITIZEN_FILES
            .iter()
            .map(|file| {
                MigrationEntry::new(
                    format!("{}/{}", CITIZEN_SOURCE_PREFIX, file),
                    format!("{}/{}", CITIZEN_DESTINATION_PREFIX, file),
                )
            })
            .collect();

        Ok(MigrationPlan {
            layout,
            layout_rules: RuleSet::from_pairs("layout", LAYOUT_RULES)?,
            citizen_modules,
            citizen_rules: RuleSet::from_pairs("citizen", CITIZEN_RULES)?,
            entry_point: PathBuf::from(ENTRY_POINT),
            entry_point_rules: RuleSet::from_pairs("entry_point", ENTRY_POINT_RULES)?,
            next_steps: NEXT_STEPS.iter().map(|s| s.to_string()).collect(),
        })
    }

    pub fn layout_tasks(&self) -> Vec<FileTask<'_>> {
        self.layout
            .iter()
            .map(|entry| FileTask {
                entry,
                rules: &self.layout_rules,
            })
            .collect()
    }

    pub fn citizen_tasks(&self) -> Vec<FileTask<'_>> {
        self.citizen_modules
            .iter()
            .map(|entry| FileTask {
                entry,
                rules: &self.citizen_rules,
            })
            .collect()
    }

    pub fn rule_sets(&self) -> [&RuleSet; 3] {
        [
            &self.layout_rules,
            &self.citizen_rules,
            &self.entry_point_rules,
        ]
    }
}
