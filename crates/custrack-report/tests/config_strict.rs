#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use custrack_report::config::{self, ReportFormat};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
report:
  precison: 3 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert!(cfg.seed_file.is_none());
    assert_eq!(cfg.report.format, ReportFormat::Text);
    assert_eq!(cfg.report.precision, 2);
    assert!(cfg.report.show_ledger && cfg.report.show_demographics && cfg.report.show_charts);
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
seed_file: "events.json"
report:
  format: json
  precision: 4
  show_ledger: false
  bar_width: 10
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.seed_file.as_deref(), Some("events.json"));
    assert_eq!(cfg.report.format, ReportFormat::Json);
    assert_eq!(cfg.report.precision, 4);
    assert!(!cfg.report.show_ledger);
    assert!(cfg.report.show_charts);
    assert_eq!(cfg.report.bar_width, 10);
}

#[test]
fn rejects_wrong_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn rejects_out_of_range_values() {
    for bad in [
        "version: 1\nreport:\n  precision: 9\n",
        "version: 1\nreport:\n  bar_width: 0\n",
        "version: 1\nseed_file: \"  \"\n",
    ] {
        let err = config::load_from_str(bad).expect_err("must fail");
        assert_eq!(err.code().as_str(), "INVALID_CONFIG", "config={bad}");
    }
}

#[test]
fn missing_file_is_internal() {
    let err = config::load_from_file("/nonexistent/custrack.yaml").expect_err("must fail");
    assert_eq!(err.code().as_str(), "INTERNAL");
}

#[test]
fn file_errors_name_the_file() {
    use std::io::Write;

    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(b"version: 1\nreport:\n  colour: true\n").unwrap();

    let err = config::load_from_file(f.path()).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_CONFIG");
    assert!(err.to_string().contains(&f.path().display().to_string()), "{err}");
}
