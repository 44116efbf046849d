use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use dtl_scan::{default_exempt_names, default_exempt_prefixes, Exemption, Exemptions, Requirements};
use dtl_tokens::ALWAYS_ALLOWED;

pub const CONFIG_FILE: &str = "dtl.toml";

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub palette: PaletteConfig,
    #[serde(default)]
    pub requirements: Requirements,
    #[serde(default)]
    pub exemptions: ExemptionsConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SourcesConfig {
    pub css: String,
    pub html_dir: String,
    pub extension: String, // without the dot
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            css: "styles.css".to_string(),
            html_dir: ".".to_string(),
            extension: "html".to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PaletteConfig {
    pub always_allowed: Vec<String>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            always_allowed: ALWAYS_ALLOWED.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExemptionsConfig {
    pub names: Vec<Exemption>,
    pub prefixes: Vec<Exemption>,
}

impl Default for ExemptionsConfig {
    fn default() -> Self {
        Self {
            names: default_exempt_names(),
            prefixes: default_exempt_prefixes(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let cfg: Config = toml::from_str(&s).with_context(|| format!("parse {}", path.display()))?;
        Ok(cfg)
    }

    /// Config from `dtl.toml` under `root`, or the built-in defaults.
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let path = Self::config_path(root);
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        let s = toml::to_string_pretty(self).with_context(|| "serialize toml")?;
        std::fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }

    pub fn config_path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE)
    }

    pub fn css_path(&self, root: &Path) -> PathBuf {
        resolve(root, &self.sources.css)
    }

    pub fn html_dir(&self, root: &Path) -> PathBuf {
        resolve(root, &self.sources.html_dir)
    }

    pub fn exemptions(&self) -> Exemptions {
        Exemptions::new(self.exemptions.names.clone(), self.exemptions.prefixes.clone())
    }
}

fn resolve(root: &Path, raw: &str) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(raw).to_string());
    if expanded.is_absolute() {
        expanded
    } else {
        root.join(expanded)
    }
}
