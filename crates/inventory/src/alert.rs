use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockwise_core::{AlertId, DomainResult, Entity};

use crate::component::required;

labelled_enum! {
    /// Kind of risk an alert flags.
    pub enum AlertType {
        StockoutRisk => "Stockout Risk",
        ExcessInventory => "Excess Inventory",
        AnomalyDetection => "Anomaly Detection",
        SupplierDelay => "Supplier Delay",
    }
}

labelled_enum! {
    pub enum Severity {
        High => "High",
        Medium => "Medium",
        Low => "Low",
    }
}

/// A flagged condition that needs attention until resolved.
///
/// `resolved` only ever moves from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAlert {
    pub id: AlertId,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub severity: Severity,
    /// Component name. Not checked against the component list.
    pub component: String,
    pub message: String,
    pub date: DateTime<Utc>,
    pub resolved: bool,
}

impl RiskAlert {
    pub fn is_open(&self) -> bool {
        !self.resolved
    }

    pub fn is_high_priority(&self) -> bool {
        self.is_open() && self.severity == Severity::High
    }
}

impl Entity for RiskAlert {
    type Id = AlertId;

    fn id(&self) -> AlertId {
        self.id
    }
}

/// Request: raise an alert. Alerts are always raised unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRiskAlert {
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub severity: Severity,
    pub component: String,
    pub message: String,
}

impl NewRiskAlert {
    pub fn new(
        alert_type: AlertType,
        severity: Severity,
        component: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            alert_type,
            severity,
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn into_alert(self, id: AlertId, at: DateTime<Utc>) -> DomainResult<RiskAlert> {
        Ok(RiskAlert {
            id,
            alert_type: self.alert_type,
            severity: self.severity,
            component: required(self.component, "component")?,
            message: required(self.message, "message")?,
            date: at,
            resolved: false,
        })
    }
}
