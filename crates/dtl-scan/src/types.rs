use dtl_core::TokenSet;
use serde::{Deserialize, Serialize};

/// Everything a rule needs to evaluate one file.
#[derive(Clone, Copy, Debug)]
pub struct ScanInput<'a> {
    pub file: &'a str,
    pub text: &'a str,
    pub tokens: &'a TokenSet,
}

impl<'a> ScanInput<'a> {
    pub fn new(file: &'a str, text: &'a str, tokens: &'a TokenSet) -> Self {
        Self { file, text, tokens }
    }

    /// 1-based line of a byte offset into `text`.
    pub fn line_at(&self, offset: usize) -> usize {
        line_at(self.text, offset)
    }
}

pub fn line_at(text: &str, offset: usize) -> usize {
    text.as_bytes()[..offset].iter().filter(|b| **b == b'\n').count() + 1
}

/// File-level content every page must reference.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Requirements {
    pub stylesheets: Vec<String>,
    /// Any one of these spellings satisfies the font import.
    pub fonts: Vec<String>,
}

impl Default for Requirements {
    fn default() -> Self {
        Self {
            stylesheets: vec!["styles.css".to_string(), "components.css".to_string()],
            fonts: vec!["Space+Grotesk".to_string(), "Space Grotesk".to_string()],
        }
    }
}
