//! Text and JSON report renderers.
//!
//! Text layout, in order: ledger dump, demographic tables, event histogram,
//! event-user matrix, metrics. The first four can be switched off in config;
//! metrics are always printed. JSON always carries every section.

use std::fmt::Write;

use serde_json::json;

use custrack_core::error::{Result, TrackerError};
use custrack_core::{Ledger, MetricsReport};

use super::summary::{DemographicSummary, EventHistogram, FrequencyRow, OccurrenceMatrix};
use crate::tracker::Tracker;

pub fn render_text(tracker: &Tracker) -> Result<String> {
    let section = &tracker.cfg().report;
    let ledger = tracker.ledger();
    let mut out = String::new();

    if section.show_ledger {
        write_ledger(ledger, &mut out)?;
    }
    if section.show_demographics {
        let demo = DemographicSummary::from_ledger(ledger);
        writeln!(out, "\nDemographics (age bracket):")?;
        write_frequency(&demo.by_age_bracket, &mut out)?;
        writeln!(out, "\nDemographics (region):")?;
        write_frequency(&demo.by_region, &mut out)?;
    }
    if section.show_charts {
        writeln!(out, "\nEvent Distribution:")?;
        write_histogram(&EventHistogram::from_ledger(ledger), section.bar_width, &mut out)?;
        writeln!(out, "\nEvent-User Matrix:")?;
        write_matrix(&OccurrenceMatrix::from_ledger(ledger), &mut out)?;
    }

    writeln!(out, "\nMetrics:")?;
    write_metrics(&MetricsReport::compute(ledger), section.precision, &mut out)?;
    Ok(out)
}

pub fn render_json(tracker: &Tracker) -> Result<String> {
    let ledger = tracker.ledger();
    let events: Vec<_> = ledger.all_events().collect();
    let doc = json!({
        "events": events,
        "demographics": DemographicSummary::from_ledger(ledger),
        "event_histogram": EventHistogram::from_ledger(ledger),
        "event_user_matrix": OccurrenceMatrix::from_ledger(ledger),
        "metrics": MetricsReport::compute(ledger),
    });
    serde_json::to_string_pretty(&doc)
        .map_err(|e| TrackerError::Internal(format!("json report failed: {e}")))
}

fn write_ledger(ledger: &Ledger, out: &mut String) -> Result<()> {
    writeln!(out, "Customer Interaction Data:")?;
    if ledger.is_empty() {
        writeln!(out, "(no events)")?;
        return Ok(());
    }

    let rows: Vec<[String; 10]> = ledger
        .all_events()
        .map(|e| {
            [
                e.timestamp_display(),
                e.event_type.as_str().to_string(),
                e.user_id.clone(),
                cell(e.demographics.age_bracket),
                cell(e.demographics.region),
                cell(e.revenue),
                e.resolution_status.as_ref().map(|r| r.as_str().to_string()).unwrap_or_default(),
                cell(e.resolution_time),
                cell(e.repeat_flag.map(|r| if r { "yes" } else { "no" })),
                e.checkout_status.as_ref().map(|c| c.as_str().to_string()).unwrap_or_default(),
            ]
        })
        .collect();
    let header = [
        "Timestamp", "Event", "UserID", "Age", "Region", "Revenue", "Resolution", "ResTime",
        "Repeat", "Checkout",
    ];

    let mut widths = header.map(str::len);
    for row in &rows {
        for (w, c) in widths.iter_mut().zip(row) {
            *w = (*w).max(c.chars().count());
        }
    }

    let header_cells: Vec<String> = header.iter().map(|h| h.to_string()).collect();
    write_row(&header_cells, &widths, out)?;
    for row in &rows {
        write_row(row, &widths, out)?;
    }
    Ok(())
}

/// Blank when the field is missing.
fn cell<T: ToString>(v: Option<T>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

fn write_row(cells: &[String], widths: &[usize], out: &mut String) -> Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(c, &w)| format!("{c:<w$}"))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}

fn write_frequency(rows: &[FrequencyRow], out: &mut String) -> Result<()> {
    let w = rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);
    for r in rows {
        writeln!(out, "{:<w$}  {}", r.label, r.count)?;
    }
    Ok(())
}

fn write_histogram(hist: &EventHistogram, bar_width: usize, out: &mut String) -> Result<()> {
    let max = hist.max();
    let w = hist.bars.iter().map(|b| b.label.chars().count()).max().unwrap_or(0);
    for b in &hist.bars {
        // ceil so every non-zero count gets at least one mark
        let len = (b.count * bar_width).div_ceil(max.max(1));
        writeln!(out, "{:<w$} | {} {}", b.label, "#".repeat(len), b.count)?;
    }
    Ok(())
}

fn write_matrix(m: &OccurrenceMatrix, out: &mut String) -> Result<()> {
    if m.event_types.is_empty() {
        writeln!(out, "(empty)")?;
        return Ok(());
    }

    let label_w = m
        .event_types
        .iter()
        .map(|k| k.chars().count())
        .chain(std::iter::once("Event".len()))
        .max()
        .unwrap_or(0);
    let col_w: Vec<usize> = m
        .users
        .iter()
        .enumerate()
        .map(|(c, u)| {
            let widest = m.counts.iter().map(|row| row[c].to_string().len()).max().unwrap_or(1);
            u.chars().count().max(widest)
        })
        .collect();

    let mut header = format!("{:<label_w$}", "Event");
    for (u, &w) in m.users.iter().zip(&col_w) {
        write!(header, "  {u:>w$}")?;
    }
    writeln!(out, "{header}")?;

    for (k, row) in m.event_types.iter().zip(&m.counts) {
        let mut line = format!("{k:<label_w$}");
        for (n, &w) in row.iter().zip(&col_w) {
            write!(line, "  {n:>w$}")?;
        }
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn write_metrics(report: &MetricsReport, precision: usize, out: &mut String) -> Result<()> {
    for v in &report.values {
        match v.value {
            Some(x) => writeln!(out, "{}: {:.*}", v.label, precision, x)?,
            None => writeln!(out, "{}: n/a", v.label)?,
        }
    }
    Ok(())
}
