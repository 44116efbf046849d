use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dtl_core::{FileOutcome, RunReport, TokenSet};
use dtl_scan::{Exemptions, Scanner};
use dtl_tokens::extract_tokens;
use tracing::{debug, info};

use crate::{
    util::{list_candidates, Candidate},
    Config,
};

pub struct Runner {
    pub root: PathBuf,
    pub cfg: Config,
    pub exemptions: Exemptions,
    pub scanner: Scanner,
}

impl Runner {
    pub fn open(root: PathBuf) -> Result<Self> {
        let cfg = Config::load_or_default(&root)?;
        Ok(Self::with_config(root, cfg))
    }

    pub fn with_config(root: PathBuf, cfg: Config) -> Self {
        let exemptions = cfg.exemptions();
        let scanner = Scanner::new(&cfg.requirements);
        Self {
            root,
            cfg,
            exemptions,
            scanner,
        }
    }

    /// Writes the default config unless one already exists. Returns its path.
    pub fn init_root(root: &Path) -> Result<PathBuf> {
        let cfg_path = Config::config_path(root);
        if !cfg_path.exists() {
            Config::default().save_to(&cfg_path)?;
        }
        Ok(cfg_path)
    }

    /// Allow-set from the token stylesheet. Fails if the stylesheet is missing.
    pub fn tokens(&self) -> Result<TokenSet> {
        let css = self.cfg.css_path(&self.root);
        let tokens = extract_tokens(&css, self.cfg.palette.always_allowed.as_slice())?;
        Ok(tokens)
    }

    /// Full lint pass. HTML files are only read once the token source has
    /// been loaded; any unreadable file aborts the run.
    pub fn run(&self) -> Result<RunReport> {
        let tokens = self.tokens()?;
        let css_name = self
            .cfg
            .css_path(&self.root)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.cfg.sources.css.clone());
        let mut report = RunReport::new(css_name, tokens.len());

        let dir = self.cfg.html_dir(&self.root);
        for page in list_candidates(&dir, &self.cfg.sources.extension)? {
            let outcome = self.check_file(&page, &tokens)?;
            report.push(page.name, outcome);
        }

        info!(
            files = report.files.len(),
            violations = report.total_violations(),
            failing = report.failing_files(),
            "lint run complete"
        );
        Ok(report)
    }

    pub fn check_file(&self, page: &Candidate, tokens: &TokenSet) -> Result<FileOutcome> {
        let name = page.name.as_str();
        if let Some(reason) = self.exemptions.check(name) {
            debug!(file = name, reason, "exempt");
            return Ok(FileOutcome::Exempt {
                reason: reason.to_string(),
            });
        }
        let text = std::fs::read_to_string(&page.path).with_context(|| format!("read {}", page.path.display()))?;
        Ok(FileOutcome::from_violations(self.scanner.scan(name, &text, tokens)))
    }
}
