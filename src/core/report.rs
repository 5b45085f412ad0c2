//! Human-readable progress narration.

use std::io::{self, Write};
use std::path::Path;

use crate::plan::Phase;

const RULE: &str = "============================================================";

/// Sink for run narration. Not machine-parseable.
pub trait Reporter {
    fn line(&mut self, text: &str);

    fn banner(&mut self, title: &str) {
        self.line(RULE);
        self.line(title);
        self.line(RULE);
    }

    fn phase(&mut self, phase: Phase, title: &str) {
        self.line("");
        self.line(&format!("[Phase {}] {}", phase.number(), title));
    }

    fn migrating(&mut self, source: &Path, destination: &Path) {
        self.line(&format!(
            "Migrating: {} -> {}",
            source.display(),
            destination.display()
        ));
    }

    fn migrated(&mut self) {
        self.line("  ✓ Migrated successfully");
    }

    fn skipped(&mut self, source: &Path) {
        self.line(&format!(
            "  ⚠ Skipping {} (not found, may already be migrated)",
            source.display()
        ));
    }

    fn updated(&mut self, path: &Path) {
        self.line(&format!("  ✓ {} updated", path.display()));
    }
}

/// Writes narration to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn line(&mut self, text: &str) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        // Narration is best-effort: write failures such as a closed pipe are ignored.
        let _ = writeln!(handle, "{}", text);
    }
}

/// Keeps narration in memory.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub lines: Vec<String>,
}

impl Reporter for RecordingReporter {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
