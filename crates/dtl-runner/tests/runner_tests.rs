use std::path::{Path, PathBuf};

use dtl_core::{FileOutcome, ViolationKind};
use dtl_runner::{render_text, Config, Runner};

const HEAD: &str = "<link href=\"styles.css\">\n<link href=\"components.css\">\n<p>Space Grotesk</p>\n";

fn fixture_site() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/site")
}

fn write_site(css: Option<&str>, pages: &[(&str, &str)]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    if let Some(css) = css {
        std::fs::write(dir.path().join("styles.css"), css).unwrap();
    }
    for (name, body) in pages {
        std::fs::write(dir.path().join(name), body).unwrap();
    }
    dir
}

#[test]
fn test_allowed_inline_color_passes() {
    let page = format!("{HEAD}<div style=\"color:#112233\">ok</div>\n");
    let dir = write_site(Some(":root { --brand: #112233; }"), &[("index.html", &page)]);

    let report = Runner::open(dir.path().to_path_buf()).unwrap().run().unwrap();
    assert_eq!(report.total_violations(), 0);
    assert_eq!(report.exit_code(), 0);
    assert_eq!(report.token_count, 7);
}

#[test]
fn test_unknown_inline_color_fails() {
    let page = format!("{HEAD}<div style=\"color:#445566\">no</div>\n");
    let dir = write_site(Some(":root { --brand: #112233; }"), &[("index.html", &page)]);

    let report = Runner::open(dir.path().to_path_buf()).unwrap().run().unwrap();
    assert_eq!(report.total_violations(), 1);
    let v = &report.files[0].outcome.violations()[0];
    assert_eq!(v.kind, ViolationKind::UnknownColor);
    assert_eq!(v.value, "#445566");
    assert_eq!(v.line, 4);
    assert_ne!(report.exit_code(), 0);
}

#[test]
fn test_missing_token_source_is_fatal_before_any_html_read() {
    // unreadable page: a scan attempt would surface a read error instead
    let dir = write_site(None, &[]);
    std::fs::write(dir.path().join("index.html"), [0xff, 0xfe]).unwrap();

    let err = Runner::open(dir.path().to_path_buf()).unwrap().run().unwrap_err();
    let core = err.downcast_ref::<dtl_core::CoreError>().expect("core error");
    assert!(matches!(core, dtl_core::CoreError::TokenSourceMissing(_)));
}

#[test]
fn test_empty_directory_passes() {
    let dir = write_site(Some(":root { }"), &[]);
    let report = Runner::open(dir.path().to_path_buf()).unwrap().run().unwrap();
    assert!(report.files.is_empty());
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn test_exempt_files_pass_with_hardcoded_values() {
    let junk = "<div style=\"color:#ABCDEF; border-radius: 3px\">x</div>";
    let dir = write_site(
        Some(":root { --brand: #112233; }"),
        &[("brandbook.html", junk), ("wireframe-cart.html", junk)],
    );
    let report = Runner::open(dir.path().to_path_buf()).unwrap().run().unwrap();
    assert_eq!(report.total_violations(), 0);
    assert!(report
        .files
        .iter()
        .all(|f| matches!(f.outcome, FileOutcome::Exempt { .. })));
}

#[test]
fn test_violations_in_one_file_do_not_stop_the_rest() {
    let dir = write_site(
        Some(":root { --brand: #112233; }"),
        &[("a.html", "<p>bare</p>"), ("b.html", "<p>bare</p>"), ("c.html", HEAD)],
    );
    let report = Runner::open(dir.path().to_path_buf()).unwrap().run().unwrap();
    let names: Vec<&str> = report.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["a.html", "b.html", "c.html"]);
    assert_eq!(report.failing_files(), 2);
    assert_eq!(report.total_violations(), 6);
    assert_eq!(report.files[2].outcome, FileOutcome::Clean);
}

#[test]
fn test_custom_html_dir_and_css_location() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("tokens")).unwrap();
    std::fs::create_dir_all(dir.path().join("pages")).unwrap();
    std::fs::write(dir.path().join("tokens/design.css"), ":root { --x: #010203; }").unwrap();
    std::fs::write(
        dir.path().join("pages/home.htm"),
        format!("{HEAD}<b style=\"color:#010203\">x</b>"),
    )
    .unwrap();

    let mut cfg = Config::default();
    cfg.sources.css = "tokens/design.css".into();
    cfg.sources.html_dir = "pages".into();
    cfg.sources.extension = "htm".into();
    let report = Runner::with_config(dir.path().to_path_buf(), cfg).run().unwrap();
    assert_eq!(report.token_source, "design.css");
    assert_eq!(report.files.len(), 1);
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn test_fixture_site_report() {
    let report = Runner::open(fixture_site()).unwrap().run().unwrap();
    assert_eq!(report.token_count, 9);

    let names: Vec<&str> = report.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["brandbook.html", "index.html", "pricing.html", "wireframe-checkout.html"]
    );
    assert_eq!(report.files[1].outcome, FileOutcome::Clean);

    let found: Vec<(ViolationKind, usize, &str)> = report.files[2]
        .outcome
        .violations()
        .iter()
        .map(|v| (v.kind, v.line, v.value.as_str()))
        .collect();
    assert_eq!(
        found,
        vec![
            (ViolationKind::UnknownColor, 11, "#445566"),
            (ViolationKind::RgbColor, 12, "rgba(0, 0, 0, 0.5)"),
            (ViolationKind::HardcodedRadius, 12, "4px"),
            (ViolationKind::HardcodedFont, 13, "Helvetica, sans-serif"),
            (ViolationKind::UnknownColorInStyle, 6, "#333333"),
            (ViolationKind::MissingStylesheet, 0, "components.css"),
            (ViolationKind::MissingFont, 0, "Space+Grotesk | Space Grotesk"),
        ]
    );
    assert_eq!(report.exit_code(), 1);

    let text = render_text(&report);
    assert!(text.contains("✓ brandbook.html (exempt — brand reference)"));
    assert!(text.contains("✓ wireframe-checkout.html (exempt — wireframe, no brand styling)"));
    assert!(text.contains("✗ pricing.html — 7 violation(s):"));
    assert!(text.trim_end().ends_with("✗ 7 violation(s) in 1 file(s)"));
}

#[cfg(unix)]
#[test]
fn test_non_utf8_file_name_is_still_scanned() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = write_site(Some(":root { --brand: #112233; }"), &[]);
    let page = format!("{HEAD}<p style=\"color:#445566\">x</p>\n");
    std::fs::write(dir.path().join(OsStr::from_bytes(b"caf\xe9.html")), page).unwrap();

    let report = Runner::open(dir.path().to_path_buf()).unwrap().run().unwrap();
    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].name, "caf\u{FFFD}.html");
    let v = &report.files[0].outcome.violations()[0];
    assert_eq!(v.kind, ViolationKind::UnknownColor);
    assert_eq!(v.value, "#445566");
    assert_eq!(report.exit_code(), 1);
}
