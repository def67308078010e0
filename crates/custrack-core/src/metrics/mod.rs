//! Metrics engine.
//!
//! `formulas` holds one pure function per metric. `Metric` fixes the report
//! order and labels; `MetricsReport` evaluates all of them against a ledger.

pub mod formulas;

use serde::Serialize;

use crate::ledger::Ledger;

pub use formulas::*;

/// Every metric the engine knows, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    ChurnRate,
    CustomerLifetimeValue,
    NetPromoterScore,
    CustomerSatisfactionScore,
    AverageRevenuePerUser,
    RetentionRate,
    ConversionRate,
    AverageOrderValue,
    FirstContactResolutionRate,
    TimeToResolution,
    CustomerEffortScore,
    RepeatPurchaseRate,
    AbandonmentRate,
}

impl Metric {
    pub const ALL: [Metric; 13] = [
        Metric::ChurnRate,
        Metric::CustomerLifetimeValue,
        Metric::NetPromoterScore,
        Metric::CustomerSatisfactionScore,
        Metric::AverageRevenuePerUser,
        Metric::RetentionRate,
        Metric::ConversionRate,
        Metric::AverageOrderValue,
        Metric::FirstContactResolutionRate,
        Metric::TimeToResolution,
        Metric::CustomerEffortScore,
        Metric::RepeatPurchaseRate,
        Metric::AbandonmentRate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::ChurnRate => "Churn Rate",
            Metric::CustomerLifetimeValue => "Customer Lifetime Value (CLV)",
            Metric::NetPromoterScore => "Net Promoter Score (NPS)",
            Metric::CustomerSatisfactionScore => "Customer Satisfaction Score (CSAT)",
            Metric::AverageRevenuePerUser => "Average Revenue Per User (ARPU)",
            Metric::RetentionRate => "Customer Retention Rate",
            Metric::ConversionRate => "Conversion Rate",
            Metric::AverageOrderValue => "Average Order Value (AOV)",
            Metric::FirstContactResolutionRate => "First Contact Resolution Rate",
            Metric::TimeToResolution => "Time to Resolution",
            Metric::CustomerEffortScore => "Customer Effort Score (CES)",
            Metric::RepeatPurchaseRate => "Repeat Purchase Rate",
            Metric::AbandonmentRate => "Abandonment Rate",
        }
    }

    /// Stubbed metrics always report `0.0`.
    pub fn is_placeholder(self) -> bool {
        matches!(
            self,
            Metric::CustomerLifetimeValue
                | Metric::NetPromoterScore
                | Metric::CustomerSatisfactionScore
                | Metric::CustomerEffortScore
        )
    }

    /// `None` only for time to resolution with no resolved inquiries.
    pub fn compute(self, ledger: &Ledger) -> Option<f64> {
        let v = match self {
            Metric::ChurnRate => churn_rate(ledger),
            Metric::CustomerLifetimeValue => customer_lifetime_value(ledger),
            Metric::NetPromoterScore => net_promoter_score(ledger),
            Metric::CustomerSatisfactionScore => customer_satisfaction_score(ledger),
            Metric::AverageRevenuePerUser => average_revenue_per_user(ledger),
            Metric::RetentionRate => retention_rate(ledger),
            Metric::ConversionRate => conversion_rate(ledger),
            Metric::AverageOrderValue => average_order_value(ledger),
            Metric::FirstContactResolutionRate => first_contact_resolution_rate(ledger),
            Metric::TimeToResolution => return time_to_resolution(ledger),
            Metric::CustomerEffortScore => customer_effort_score(ledger),
            Metric::RepeatPurchaseRate => repeat_purchase_rate(ledger),
            Metric::AbandonmentRate => abandonment_rate(ledger),
        };
        Some(v)
    }
}

/// One computed metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricValue {
    pub metric: Metric,
    pub label: &'static str,
    pub value: Option<f64>,
}

/// All metrics evaluated against one ledger state, in report order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub values: Vec<MetricValue>,
}

impl MetricsReport {
    pub fn compute(ledger: &Ledger) -> Self {
        let values = Metric::ALL
            .into_iter()
            .map(|metric| MetricValue {
                metric,
                label: metric.label(),
                value: metric.compute(ledger),
            })
            .collect();
        tracing::debug!(events = ledger.len(), "metrics computed");
        Self { values }
    }

    pub fn get(&self, metric: Metric) -> Option<f64> {
        self.values.iter().find(|v| v.metric == metric).and_then(|v| v.value)
    }
}
