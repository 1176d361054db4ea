//! Derived views: the notification feed, alert counters and dashboard metrics.
//!
//! All of these are recomputed from a snapshot on demand; nothing is cached.

use serde::Serialize;

use crate::alert::{AlertType, RiskAlert};
use crate::snapshot::InventorySnapshot;
use crate::status::StockStatus;

/// Number of alerts shown in the notification dropdown.
pub const RECENT_ALERT_LIMIT: usize = 5;

/// Unresolved alert counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSummary {
    pub unresolved: usize,
    pub high_priority: usize,
    pub stockout_risks: usize,
    pub excess_inventory: usize,
    pub supplier_delays: usize,
}

impl AlertSummary {
    pub fn from_alerts(alerts: &[RiskAlert]) -> Self {
        alerts
            .iter()
            .filter(|a| a.is_open())
            .fold(Self::default(), |mut acc, a| {
                acc.unresolved += 1;
                if a.is_high_priority() {
                    acc.high_priority += 1;
                }
                match a.alert_type {
                    AlertType::StockoutRisk => acc.stockout_risks += 1,
                    AlertType::ExcessInventory => acc.excess_inventory += 1,
                    AlertType::SupplierDelay => acc.supplier_delays += 1,
                    AlertType::AnomalyDetection => {}
                }
                acc
            })
    }
}

/// What the header bell renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationFeed<'a> {
    /// Badge count.
    pub unresolved: usize,
    /// First [`RECENT_ALERT_LIMIT`] alerts in sequence order, resolved included.
    pub recent: &'a [RiskAlert],
    /// Whether more alerts exist beyond `recent`.
    pub has_more: bool,
}

impl<'a> NotificationFeed<'a> {
    pub fn from_alerts(alerts: &'a [RiskAlert]) -> Self {
        let shown = alerts.len().min(RECENT_ALERT_LIMIT);
        Self {
            unresolved: alerts.iter().filter(|a| a.is_open()).count(),
            recent: &alerts[..shown],
            has_more: alerts.len() > shown,
        }
    }
}

/// Headline numbers for the dashboard overview.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_components: usize,
    /// Low Stock plus Critical.
    pub low_stock: usize,
    pub overstocked: usize,
    pub optimal: usize,
    /// Unresolved high-severity alerts.
    pub critical_alerts: usize,
    pub unresolved_alerts: usize,
    /// Σ current stock × unit cost.
    pub total_value: f64,
}

/// Aggregate supplier performance. Averages are `None` with no suppliers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierMetrics {
    pub total: usize,
    pub active: usize,
    pub average_rating: Option<f64>,
    pub average_on_time_delivery: Option<f64>,
    /// 100 minus the average defect rate.
    pub quality_score: Option<f64>,
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> Option<f64> {
    let n = values.len();
    (n > 0).then(|| values.sum::<f64>() / n as f64)
}

impl InventorySnapshot {
    pub fn alert_summary(&self) -> AlertSummary {
        AlertSummary::from_alerts(&self.alerts)
    }

    pub fn notification_feed(&self) -> NotificationFeed<'_> {
        NotificationFeed::from_alerts(&self.alerts)
    }

    pub fn unresolved_alert_count(&self) -> usize {
        self.alert_summary().unresolved
    }

    pub fn high_priority_alert_count(&self) -> usize {
        self.alert_summary().high_priority
    }

    /// The first [`RECENT_ALERT_LIMIT`] alerts, newest first.
    pub fn recent_alerts(&self) -> &[RiskAlert] {
        NotificationFeed::from_alerts(&self.alerts).recent
    }

    pub fn dashboard_metrics(&self) -> DashboardMetrics {
        let count = |status: StockStatus| self.components.iter().filter(|c| c.status == status).count();
        let alerts = self.alert_summary();

        DashboardMetrics {
            total_components: self.components.len(),
            low_stock: count(StockStatus::LowStock) + count(StockStatus::Critical),
            overstocked: count(StockStatus::Overstocked),
            optimal: count(StockStatus::Optimal),
            critical_alerts: alerts.high_priority,
            unresolved_alerts: alerts.unresolved,
            total_value: self.components.iter().map(|c| c.stock_value()).sum(),
        }
    }

    pub fn supplier_metrics(&self) -> SupplierMetrics {
        let suppliers = &self.suppliers;
        let avg_defect = mean(suppliers.iter().map(|s| s.defect_rate));

        SupplierMetrics {
            total: suppliers.len(),
            active: suppliers.iter().filter(|s| s.is_active()).count(),
            average_rating: mean(suppliers.iter().map(|s| s.rating)),
            average_on_time_delivery: mean(suppliers.iter().map(|s| s.on_time_delivery)),
            quality_score: avg_defect.map(|d| 100.0 - d),
        }
    }
}
