use serde::{Deserialize, Serialize};

use crate::types::{FileOutcome, FileReport};

/// Result of one full run, threaded through orchestration instead of being
/// accumulated in shared state.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunReport {
    pub token_source: String,
    pub token_count: usize,
    pub files: Vec<FileReport>,
}

impl RunReport {
    pub fn new(token_source: impl Into<String>, token_count: usize) -> Self {
        Self {
            token_source: token_source.into(),
            token_count,
            files: vec![],
        }
    }

    pub fn push(&mut self, name: impl Into<String>, outcome: FileOutcome) {
        self.files.push(FileReport {
            name: name.into(),
            outcome,
        });
    }

    pub fn total_violations(&self) -> usize {
        self.files.iter().map(|f| f.outcome.violations().len()).sum()
    }

    pub fn failing_files(&self) -> usize {
        self.files.iter().filter(|f| !f.outcome.passed()).count()
    }

    pub fn passed(&self) -> bool {
        self.failing_files() == 0
    }

    pub fn exit_code(&self) -> u8 {
        if self.passed() {
            0
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Violation, ViolationKind};

    #[test]
    fn test_empty_run_passes() {
        let report = RunReport::new("styles.css", 6);
        assert!(report.passed());
        assert_eq!(report.exit_code(), 0);
        assert_eq!(report.total_violations(), 0);
    }

    #[test]
    fn test_exempt_and_clean_files_pass() {
        let mut report = RunReport::new("styles.css", 6);
        report.push("a.html", FileOutcome::Clean);
        report.push("brandbook.html", FileOutcome::Exempt { reason: "brand reference".into() });
        assert!(report.passed());
    }

    #[test]
    fn test_counts_violations_and_failing_files() {
        let v = Violation::new("a.html", 3, ViolationKind::RgbColor, "rgb(", "no rgb");
        let mut report = RunReport::new("styles.css", 6);
        report.push("a.html", FileOutcome::from_violations(vec![v.clone(), v]));
        report.push("b.html", FileOutcome::from_violations(vec![]));
        assert_eq!(report.total_violations(), 2);
        assert_eq!(report.failing_files(), 1);
        assert_eq!(report.exit_code(), 1);
    }
}
