use std::path::Path;
use std::sync::LazyLock;

use dtl_core::{CoreError, CoreResult, TokenSet};
use regex::Regex;
use tracing::debug;

/// Neutrals accepted in both short and long form whether or not the
/// stylesheet spells them out.
pub const ALWAYS_ALLOWED: [&str; 6] = ["#FFF", "#FFFFFF", "#000", "#000000", "#EEE", "#EEEEEE"];

static ROOT_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":root\s*\{([^}]*)\}").expect("root block regex"));
static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#[0-9a-fA-F]{3,8}").expect("hex color regex"));

/// Body of the first `:root { ... }` block, if any.
pub fn root_block(css: &str) -> Option<&str> {
    ROOT_BLOCK.captures(css).and_then(|c| c.get(1)).map(|m| m.as_str())
}

pub fn extract_from_str<S: AsRef<str>>(css: &str, always_allowed: &[S]) -> TokenSet {
    let mut tokens = TokenSet::new();
    match root_block(css) {
        Some(body) => {
            for m in HEX_COLOR.find_iter(body) {
                tokens.insert_color(m.as_str());
            }
            debug!(colors = tokens.len(), "extracted :root colors");
        }
        None => debug!("no :root block found"),
    }
    for c in always_allowed {
        tokens.insert_color(c.as_ref());
    }
    tokens
}

pub fn extract_tokens<S: AsRef<str>>(path: &Path, always_allowed: &[S]) -> CoreResult<TokenSet> {
    if !path.is_file() {
        return Err(CoreError::TokenSourceMissing(path.to_path_buf()));
    }
    let css = std::fs::read_to_string(path).map_err(|source| CoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(extract_from_str(&css, always_allowed))
}
