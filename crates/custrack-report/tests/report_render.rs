//! Report summaries and renderers.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use custrack_core::{Metric, Submission};
use custrack_report::config::{ReportFormat, TrackerConfig};
use custrack_report::report::summary::UNSPECIFIED;
use custrack_report::report::{DemographicSummary, EventHistogram, FrequencyRow, OccurrenceMatrix};
use custrack_report::Tracker;

fn sample(cfg: TrackerConfig) -> Tracker {
    let mut t = Tracker::new(cfg);
    let subs = [
        Submission::new("Visit", "u1").timestamp("2024-03-01 09:00:00").age_bracket("18-26").region("Region A"),
        Submission::new("Visit", "u2").timestamp("2024-03-01 09:05:00").age_bracket("18-26").region("Region B"),
        Submission::new("Purchase", "u1").timestamp("2024-03-01 09:10:00").revenue("40").region("Region A"),
        Submission::new("Visit", "u1").timestamp("2024-03-02 09:00:00").age_bracket("Under 18"),
        Submission::new("Churn", "u2").timestamp("2024-03-03 09:00:00"),
    ];
    for s in subs {
        t.track_event(s).unwrap();
    }
    t
}

fn row(label: &str, count: usize) -> FrequencyRow {
    FrequencyRow { label: label.into(), count }
}

#[test]
fn demographic_breakdown() {
    let t = sample(TrackerConfig::default());
    let demo = DemographicSummary::from_ledger(t.ledger());
    assert_eq!(
        demo.by_age_bracket,
        vec![row("18-26", 2), row(UNSPECIFIED, 2), row("Under 18", 1)]
    );
    assert_eq!(
        demo.by_region,
        vec![row("Region A", 2), row(UNSPECIFIED, 2), row("Region B", 1)]
    );
}

#[test]
fn histogram_and_matrix() {
    let t = sample(TrackerConfig::default());

    let hist = EventHistogram::from_ledger(t.ledger());
    assert_eq!(hist.bars, vec![row("Visit", 3), row("Churn", 1), row("Purchase", 1)]);
    assert_eq!(hist.max(), 3);

    let m = OccurrenceMatrix::from_ledger(t.ledger());
    assert_eq!(m.event_types, vec!["Churn", "Purchase", "Visit"]);
    assert_eq!(m.users, vec!["u1", "u2"]);
    assert_eq!(m.get("Visit", "u1"), 2);
    assert_eq!(m.get("Churn", "u1"), 0);
    assert_eq!(m.get("Churn", "u2"), 1);
    assert_eq!(m.get("Refund", "u2"), 0);
}

#[test]
fn text_report_sections_and_metric_order() {
    let mut t = sample(TrackerConfig::default());
    t.track_event(
        Submission::new("Inquiry", "u1")
            .timestamp("2024-03-04 09:00:00")
            .resolution("Resolved", "7.25"),
    )
    .unwrap();
    t.track_event(
        Submission::new("Checkout", "u2")
            .timestamp("2024-03-04 10:00:00")
            .checkout_status("Completed"),
    )
    .unwrap();
    t.track_event(
        Submission::new("Purchase", "u1")
            .timestamp("2024-03-04 11:00:00")
            .revenue("40")
            .repeat("yes"),
    )
    .unwrap();
    let out = t.report().unwrap();

    let header = out.lines().nth(1).unwrap();
    for col in ["Resolution", "ResTime", "Repeat", "Checkout"] {
        assert!(header.contains(col), "missing column {col}: {header}");
    }
    let line_of = |ts: &str| out.lines().find(|l| l.starts_with(ts)).unwrap().to_string();
    let inquiry = line_of("2024-03-04 09:00:00");
    assert!(inquiry.contains("Resolved") && inquiry.contains("7.25"), "{inquiry}");
    assert!(line_of("2024-03-04 10:00:00").contains("Completed"));
    assert!(line_of("2024-03-04 11:00:00").ends_with("yes"));

    let sections = [
        "Customer Interaction Data:",
        "Demographics (age bracket):",
        "Demographics (region):",
        "Event Distribution:",
        "Event-User Matrix:",
        "Metrics:",
    ];
    let mut last = 0;
    for s in sections {
        let at = out[last..].find(s).unwrap_or_else(|| panic!("missing section {s}\n{out}"));
        last += at + s.len();
    }

    let metrics = &out[out.find("Metrics:").unwrap()..];
    let mut last = 0;
    for m in Metric::ALL {
        let at = metrics[last..].find(m.label()).unwrap_or_else(|| panic!("missing {}", m.label()));
        last += at + m.label().len();
    }

    assert!(out.contains("Churn Rate: 50.00"));
    assert!(out.contains("Conversion Rate: 50.00"));
    assert!(out.contains("Average Order Value (AOV): 40.00"));
    assert!(out.contains("Average Revenue Per User (ARPU): 40.00"));
    assert!(out.contains("Time to Resolution: 7.25"));
    assert!(out.contains("Repeat Purchase Rate: 100.00"));
    assert!(out.contains("Abandonment Rate: 0.00"));
    assert!(out.contains("2024-03-01 09:10:00"));
}

#[test]
fn text_report_respects_toggles_and_precision() {
    let mut cfg = TrackerConfig::default();
    cfg.report.show_ledger = false;
    cfg.report.show_demographics = false;
    cfg.report.show_charts = false;
    cfg.report.precision = 0;

    let out = sample(cfg).report().unwrap();
    assert!(out.trim_start().starts_with("Metrics:"));
    assert!(!out.contains("Customer Interaction Data:"));
    assert!(out.contains("Churn Rate: 50\n"));
}

#[test]
fn histogram_bars_scale_to_width() {
    let mut cfg = TrackerConfig::default();
    cfg.report.bar_width = 6;
    cfg.report.show_ledger = false;
    cfg.report.show_demographics = false;

    let out = sample(cfg).report().unwrap();
    assert!(out.contains("Visit    | ###### 3"), "{out}");
    assert!(out.contains("Churn    | ## 1"), "{out}");
}

#[test]
fn json_report_is_complete() {
    let mut cfg = TrackerConfig::default();
    cfg.report.format = ReportFormat::Json;
    let out = sample(cfg).report().unwrap();

    let doc: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(doc["events"].as_array().unwrap().len(), 5);
    assert_eq!(doc["events"][2]["revenue"], 40.0);
    assert_eq!(doc["events"][0]["demographics"]["region"], "Region A");
    assert_eq!(doc["metrics"]["values"].as_array().unwrap().len(), Metric::ALL.len());
    assert_eq!(doc["metrics"]["values"][0]["metric"], "churn_rate");
    assert!(doc["metrics"]["values"][9]["value"].is_null());
    assert_eq!(doc["event_user_matrix"]["users"][1], "u2");
}

#[test]
fn empty_tracker_reports_without_failing() {
    let out = Tracker::new(TrackerConfig::default()).report().unwrap();
    assert!(out.contains("(no events)"));
    assert!(out.contains("(empty)"));
    assert!(out.contains("Churn Rate: 0.00"));
}
