use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// A page to lint. `name` is the display form of the file name; `path` is
/// what gets read, so files with non UTF-8 names are still checked.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Candidate {
    pub name: String,
    pub path: PathBuf,
}

/// Files directly under `dir` with the given extension, sorted by name.
/// Subdirectories are not entered.
pub fn list_candidates(dir: &Path, extension: &str) -> Result<Vec<Candidate>> {
    let mut found = vec![];
    let entries = std::fs::read_dir(dir).with_context(|| format!("list {}", dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("list {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }
        found.push(Candidate {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
        });
    }
    found.sort();
    Ok(found)
}
