use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exemption {
    pub pattern: String,
    pub reason: String,
}

impl Exemption {
    pub fn new(pattern: &str, reason: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub trait ExemptionPolicy: Send + Sync {
    /// Reason the file is exempt, if it is.
    fn exempts(&self, file_name: &str) -> Option<&str>;
}

/// Exempts files whose name equals a listed pattern.
#[derive(Clone, Debug, Default)]
pub struct ExactNamePolicy {
    pub entries: Vec<Exemption>,
}

impl ExemptionPolicy for ExactNamePolicy {
    fn exempts(&self, file_name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.pattern == file_name)
            .map(|e| e.reason.as_str())
    }
}

/// Exempts files whose name starts with a listed pattern.
#[derive(Clone, Debug, Default)]
pub struct PrefixPolicy {
    pub entries: Vec<Exemption>,
}

impl ExemptionPolicy for PrefixPolicy {
    fn exempts(&self, file_name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| file_name.starts_with(&e.pattern))
            .map(|e| e.reason.as_str())
    }
}

/// Both policies, exact names consulted first.
#[derive(Clone, Debug, Default)]
pub struct Exemptions {
    pub names: ExactNamePolicy,
    pub prefixes: PrefixPolicy,
}

impl Exemptions {
    pub fn new(names: Vec<Exemption>, prefixes: Vec<Exemption>) -> Self {
        Self {
            names: ExactNamePolicy { entries: names },
            prefixes: PrefixPolicy { entries: prefixes },
        }
    }

    pub fn builtin() -> Self {
        Self::new(default_exempt_names(), default_exempt_prefixes())
    }

    pub fn check(&self, file_name: &str) -> Option<&str> {
        self.names
            .exempts(file_name)
            .or_else(|| self.prefixes.exempts(file_name))
    }
}

pub fn default_exempt_names() -> Vec<Exemption> {
    vec![Exemption::new("brandbook.html", "brand reference")]
}

pub fn default_exempt_prefixes() -> Vec<Exemption> {
    vec![Exemption::new("wireframe-", "wireframe, no brand styling")]
}
