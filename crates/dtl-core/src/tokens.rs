use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Allow-list of palette values derived from the token stylesheet.
///
/// Colors are stored uppercased so lookups are case-insensitive. Fonts, radii
/// and shadows are carried for reporting but never populated by the extractor.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenSet {
    colors: BTreeSet<String>,
    #[serde(default)]
    pub fonts: Vec<String>,
    #[serde(default)]
    pub radii: Vec<String>,
    #[serde(default)]
    pub shadows: Vec<String>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_color(&mut self, hex: &str) -> bool {
        self.colors.insert(hex.to_ascii_uppercase())
    }

    pub fn contains_color(&self, hex: &str) -> bool {
        self.colors.contains(&hex.to_ascii_uppercase())
    }

    pub fn colors(&self) -> impl Iterator<Item = &str> {
        self.colors.iter().map(|c| c.as_str())
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TokenSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TokenSet::new();
        for c in iter {
            set.insert_color(c.as_ref());
        }
        set
    }
}
