use std::sync::LazyLock;

use dtl_core::{Violation, ViolationKind};
use regex::{Captures, Regex};

use crate::types::ScanInput;

static STYLE_ATTR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"style="([^"]*)""#).expect("style attr regex"));
static STYLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<style[^>]*>(.*?)</style>").expect("style block regex"));
static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#[0-9a-fA-F]{3,8}").expect("hex color regex"));
static RGB_CALL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"rgba?\([^)]*\)?").expect("rgb regex"));
static FONT_FAMILY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"font-family\s*:\s*([^;]*)").expect("font-family regex"));
static BOX_SHADOW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"box-shadow\s*:\s*([^;]*)").expect("box-shadow regex"));
static BORDER_RADIUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"border-radius\s*:\s*([^;]*)").expect("border-radius regex"));

/// Literal radii that need no token.
pub const RADIUS_EXCEPTIONS: [&str; 3] = ["0", "50%", "0px"];

pub trait Rule: Send + Sync {
    fn id(&self) -> &str;
    fn eval(&self, input: &ScanInput) -> Vec<Violation>;
}

fn uses_var(value: &str) -> bool {
    value.contains("var(")
}

/// Captured declaration value, or None when the match captured nothing.
fn declared_value<'t>(caps: Option<Captures<'t>>) -> Option<&'t str> {
    let value = caps?.get(1)?.as_str().trim();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Checks each `style="..."` attribute for literal colors, fonts, shadows
/// and radii.
pub struct InlineStyleRule;

impl InlineStyleRule {
    fn eval_attr(&self, input: &ScanInput, line: usize, style: &str, out: &mut Vec<Violation>) {
        let file = input.file;

        for m in HEX_COLOR.find_iter(style) {
            let hex = m.as_str();
            if !input.tokens.contains_color(hex) {
                out.push(Violation::new(
                    file,
                    line,
                    ViolationKind::UnknownColor,
                    hex,
                    format!("Hardcoded color {} is not in the token palette", hex),
                ));
            }
        }

        if let Some(m) = RGB_CALL.find(style) {
            out.push(Violation::new(
                file,
                line,
                ViolationKind::RgbColor,
                m.as_str(),
                "rgb()/rgba() colors are not allowed; use a color token",
            ));
        }

        if let Some(value) = declared_value(FONT_FAMILY.captures(style)) {
            if !uses_var(value) {
                out.push(Violation::new(
                    file,
                    line,
                    ViolationKind::HardcodedFont,
                    value,
                    "font-family must reference a font token via var()",
                ));
            }
        }

        if let Some(value) = declared_value(BOX_SHADOW.captures(style)) {
            if !uses_var(value) {
                out.push(Violation::new(
                    file,
                    line,
                    ViolationKind::HardcodedShadow,
                    value,
                    "box-shadow must reference a shadow token via var()",
                ));
            }
        }

        if let Some(value) = declared_value(BORDER_RADIUS.captures(style)) {
            if !uses_var(value) && !RADIUS_EXCEPTIONS.contains(&value) {
                out.push(Violation::new(
                    file,
                    line,
                    ViolationKind::HardcodedRadius,
                    value,
                    "border-radius must reference a radius token via var()",
                ));
            }
        }
    }
}

impl Rule for InlineStyleRule {
    fn id(&self) -> &str {
        "inline_style"
    }

    fn eval(&self, input: &ScanInput) -> Vec<Violation> {
        let mut out = vec![];
        for caps in STYLE_ATTR.captures_iter(input.text) {
            let (Some(whole), Some(style)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let line = input.line_at(whole.start());
            self.eval_attr(input, line, style.as_str(), &mut out);
        }
        out
    }
}

/// Checks colors inside embedded `<style>` blocks, line by line.
///
/// Custom-property lines (containing both `--` and `:`) and lines opening
/// with `/*` or `//` are skipped. A hex literal immediately followed by
/// another hex digit is ignored rather than matched as a shorter prefix.
pub struct StyleBlockRule;

impl StyleBlockRule {
    fn skip_line(line: &str) -> bool {
        if line.contains("--") && line.contains(':') {
            return true;
        }
        let trimmed = line.trim_start();
        trimmed.starts_with("/*") || trimmed.starts_with("//")
    }

    fn followed_by_hex_digit(line: &str, end: usize) -> bool {
        line.as_bytes().get(end).is_some_and(|b| b.is_ascii_hexdigit())
    }
}

impl Rule for StyleBlockRule {
    fn id(&self) -> &str {
        "style_block"
    }

    fn eval(&self, input: &ScanInput) -> Vec<Violation> {
        let mut out = vec![];
        for caps in STYLE_BLOCK.captures_iter(input.text) {
            let Some(body) = caps.get(1) else {
                continue;
            };
            let start_line = input.line_at(body.start());
            for (offset, line) in body.as_str().split('\n').enumerate() {
                if Self::skip_line(line) {
                    continue;
                }
                for m in HEX_COLOR.find_iter(line) {
                    if Self::followed_by_hex_digit(line, m.end()) {
                        continue;
                    }
                    let hex = m.as_str();
                    if !input.tokens.contains_color(hex) {
                        out.push(Violation::new(
                            input.file,
                            start_line + offset,
                            ViolationKind::UnknownColorInStyle,
                            hex,
                            format!("Color {} in <style> block is not in the token palette", hex),
                        ));
                    }
                }
            }
        }
        out
    }
}

/// File must mention every listed stylesheet somewhere in its text.
pub struct RequiredStylesheetsRule {
    pub stylesheets: Vec<String>,
}

impl Rule for RequiredStylesheetsRule {
    fn id(&self) -> &str {
        "required_stylesheets"
    }

    fn eval(&self, input: &ScanInput) -> Vec<Violation> {
        self.stylesheets
            .iter()
            .filter(|sheet| !input.text.contains(sheet.as_str()))
            .map(|sheet| {
                Violation::new(
                    input.file,
                    0,
                    ViolationKind::MissingStylesheet,
                    sheet.as_str(),
                    format!("Missing link to {}", sheet),
                )
            })
            .collect()
    }
}

/// File must mention at least one spelling of the brand font.
pub struct RequiredFontRule {
    pub families: Vec<String>,
}

impl Rule for RequiredFontRule {
    fn id(&self) -> &str {
        "required_font"
    }

    fn eval(&self, input: &ScanInput) -> Vec<Violation> {
        if self.families.is_empty() || self.families.iter().any(|f| input.text.contains(f.as_str())) {
            return vec![];
        }
        vec![Violation::new(
            input.file,
            0,
            ViolationKind::MissingFont,
            self.families.join(" | "),
            format!("Missing font import for {}", self.families[0]),
        )]
    }
}
