use anyhow::Result;
use dtl_core::{FileOutcome, RunReport};

const RULE: &str = "────────────────────────────────────────────────────────────";

pub fn render_text(report: &RunReport) -> String {
    let mut out = format!("Loaded {} color tokens from {}\n\n", report.token_count, report.token_source);

    for file in &report.files {
        match &file.outcome {
            FileOutcome::Clean => out.push_str(&format!("✓ {}\n", file.name)),
            FileOutcome::Exempt { reason } => out.push_str(&format!("✓ {} (exempt — {})\n", file.name, reason)),
            FileOutcome::Violations { violations } => {
                out.push_str(&format!("✗ {} — {} violation(s):\n", file.name, violations.len()));
                for v in violations {
                    out.push_str(&format!("    [{}] {}:{} → {}\n", v.kind, v.file, v.line, v.message));
                    if !v.value.is_empty() {
                        out.push_str(&format!("        value: {}\n", v.value));
                    }
                }
            }
        }
    }

    out.push_str(RULE);
    out.push('\n');
    if report.passed() {
        out.push_str(&format!("✓ All {} file(s) use design tokens\n", report.files.len()));
    } else {
        out.push_str(&format!(
            "✗ {} violation(s) in {} file(s)\n",
            report.total_violations(),
            report.failing_files()
        ));
    }
    out
}

pub fn render_json(report: &RunReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
