//! Aggregate formulas over a ledger snapshot.
//!
//! Every function is a pure read: filter by event type, group by user or count
//! rows, divide. A zero denominator yields `0.0` for every ratio.

use std::collections::BTreeSet;

use crate::event::{CheckoutStatus, Event, EventKind, ResolutionStatus};
use crate::ledger::Ledger;

fn of_kind(ledger: &Ledger, kind: EventKind) -> impl Iterator<Item = &Event> + '_ {
    ledger.all_events().filter(move |e| e.is(&kind))
}

fn distinct_users<'a>(events: impl Iterator<Item = &'a Event>) -> usize {
    events.map(|e| e.user_id.as_str()).collect::<BTreeSet<_>>().len()
}

fn ratio(numerator: f64, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator / denominator as f64
    }
}

fn percent(numerator: usize, denominator: usize) -> f64 {
    ratio(numerator as f64, denominator) * 100.0
}

fn purchase_revenue(ledger: &Ledger) -> f64 {
    of_kind(ledger, EventKind::Purchase).filter_map(|e| e.revenue).sum()
}

/// Share of all users with at least one Churn event.
pub fn churn_rate(ledger: &Ledger) -> f64 {
    let churned = distinct_users(of_kind(ledger, EventKind::Churn));
    percent(churned, ledger.distinct_users().len())
}

/// Placeholder: not yet defined.
pub fn customer_lifetime_value(_ledger: &Ledger) -> f64 {
    0.0
}

/// Placeholder: not yet defined.
pub fn net_promoter_score(_ledger: &Ledger) -> f64 {
    0.0
}

/// Placeholder: not yet defined.
pub fn customer_satisfaction_score(_ledger: &Ledger) -> f64 {
    0.0
}

/// Purchase revenue divided over every distinct user.
pub fn average_revenue_per_user(ledger: &Ledger) -> f64 {
    ratio(purchase_revenue(ledger), ledger.distinct_users().len())
}

/// Users seen with Last Visit relative to users seen with First Visit.
pub fn retention_rate(ledger: &Ledger) -> f64 {
    let start = distinct_users(of_kind(ledger, EventKind::FirstVisit));
    let end = distinct_users(of_kind(ledger, EventKind::LastVisit));
    percent(end, start)
}

/// Purchasing users relative to visiting users.
pub fn conversion_rate(ledger: &Ledger) -> f64 {
    let visitors = distinct_users(of_kind(ledger, EventKind::Visit));
    let buyers = distinct_users(of_kind(ledger, EventKind::Purchase));
    percent(buyers, visitors)
}

/// Mean revenue per Purchase row. Purchases without revenue still count.
pub fn average_order_value(ledger: &Ledger) -> f64 {
    let orders = of_kind(ledger, EventKind::Purchase).count();
    ratio(purchase_revenue(ledger), orders)
}

pub fn first_contact_resolution_rate(ledger: &Ledger) -> f64 {
    let inquiries = of_kind(ledger, EventKind::Inquiry).count();
    let first_contact = of_kind(ledger, EventKind::Inquiry)
        .filter(|e| e.resolution_status == Some(ResolutionStatus::FirstContact))
        .count();
    percent(first_contact, inquiries)
}

/// Mean resolution time over resolved inquiries; `None` when there is nothing to average.
pub fn time_to_resolution(ledger: &Ledger) -> Option<f64> {
    let (sum, n) = of_kind(ledger, EventKind::Inquiry)
        .filter(|e| e.resolution_status == Some(ResolutionStatus::Resolved))
        .filter_map(|e| e.resolution_time)
        .fold((0.0, 0usize), |(sum, n), t| (sum + t, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/// Placeholder: not yet defined.
pub fn customer_effort_score(_ledger: &Ledger) -> f64 {
    0.0
}

/// Purchasing users with a repeat-flagged purchase, relative to all purchasing users.
pub fn repeat_purchase_rate(ledger: &Ledger) -> f64 {
    let buyers = distinct_users(of_kind(ledger, EventKind::Purchase));
    let repeat = distinct_users(
        of_kind(ledger, EventKind::Purchase).filter(|e| e.repeat_flag == Some(true)),
    );
    percent(repeat, buyers)
}

/// Checkout users who never completed, relative to all checkout users.
pub fn abandonment_rate(ledger: &Ledger) -> f64 {
    let started = distinct_users(of_kind(ledger, EventKind::Checkout));
    let completed = distinct_users(
        of_kind(ledger, EventKind::Checkout)
            .filter(|e| e.checkout_status == Some(CheckoutStatus::Completed)),
    );
    percent(started.saturating_sub(completed), started)
}
