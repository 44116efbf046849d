use serde::{Deserialize, Serialize};

use crate::model::ViolationKind;

/// One policy deviation found in a scanned file.
///
/// `line` is 1-based; 0 marks a file-level finding.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Violation {
    pub file: String,
    pub line: usize,
    pub kind: ViolationKind,
    pub value: String,
    pub message: String,
}

impl Violation {
    pub fn new(file: &str, line: usize, kind: ViolationKind, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            file: file.to_string(),
            line,
            kind,
            value: value.into(),
            message: message.into(),
        }
    }

    pub fn is_file_level(&self) -> bool {
        self.line == 0
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Clean,
    Exempt { reason: String },
    Violations { violations: Vec<Violation> },
}

impl FileOutcome {
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            FileOutcome::Clean
        } else {
            FileOutcome::Violations { violations }
        }
    }

    pub fn violations(&self) -> &[Violation] {
        match self {
            FileOutcome::Violations { violations } => violations,
            _ => &[],
        }
    }

    pub fn passed(&self) -> bool {
        !matches!(self, FileOutcome::Violations { .. })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileReport {
    pub name: String,
    pub outcome: FileOutcome,
}
