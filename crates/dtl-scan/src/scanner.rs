use dtl_core::{TokenSet, Violation};
use tracing::debug;

use crate::rule::{InlineStyleRule, RequiredFontRule, RequiredStylesheetsRule, Rule, StyleBlockRule};
use crate::types::{Requirements, ScanInput};

/// Ordered battery of rules run against every non-exempt file.
pub struct Scanner {
    rules: Vec<Box<dyn Rule>>,
}

impl Scanner {
    pub fn new(requirements: &Requirements) -> Self {
        Self::with_rules(vec![
            Box::new(InlineStyleRule),
            Box::new(StyleBlockRule),
            Box::new(RequiredStylesheetsRule {
                stylesheets: requirements.stylesheets.clone(),
            }),
            Box::new(RequiredFontRule {
                families: requirements.fonts.clone(),
            }),
        ])
    }

    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    pub fn rule_ids(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Runs every rule; no rule short-circuits another.
    pub fn scan(&self, file: &str, text: &str, tokens: &TokenSet) -> Vec<Violation> {
        let input = ScanInput::new(file, text, tokens);
        let mut violations = vec![];
        for rule in &self.rules {
            let found = rule.eval(&input);
            debug!(file, rule = rule.id(), count = found.len(), "rule evaluated");
            violations.extend(found);
        }
        violations
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(&Requirements::default())
    }
}
