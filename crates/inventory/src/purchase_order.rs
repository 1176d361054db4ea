use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use stockwise_core::{DomainError, DomainResult, Entity, PurchaseOrderId};

use crate::component::{Component, non_blank, required};

labelled_enum! {
    pub enum Urgency {
        Low => "Low",
        Normal => "Normal",
        High => "High",
        Urgent => "Urgent",
    }
}

impl Default for Urgency {
    fn default() -> Self {
        Urgency::Normal
    }
}

labelled_enum! {
    pub enum PurchaseOrderStatus {
        Pending => "Pending",
    }
}

/// A replenishment order raised from the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: PurchaseOrderId,
    /// Human-facing order number, `PO-<unix millis>`.
    pub number: String,
    pub supplier: String,
    pub component: String,
    pub quantity: u32,
    pub urgency: Urgency,
    pub expected_delivery: Option<NaiveDate>,
    pub notes: Option<String>,
    pub budget_limit: f64,
    pub status: PurchaseOrderStatus,
    pub created_at: DateTime<Utc>,
    /// `cost × quantity` of the named component, zero when the name is unknown.
    pub estimated_cost: f64,
}

impl PurchaseOrder {
    /// Whether the estimate exceeds a non-zero budget limit.
    pub fn over_budget(&self) -> bool {
        self.budget_limit > 0.0 && self.estimated_cost > self.budget_limit
    }
}

impl Entity for PurchaseOrder {
    type Id = PurchaseOrderId;

    fn id(&self) -> PurchaseOrderId {
        self.id
    }
}

/// Request: create a purchase order. Supplier, component and quantity are required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewPurchaseOrder {
    pub supplier: String,
    pub component: String,
    pub quantity: Option<u32>,
    pub urgency: Urgency,
    pub expected_delivery: Option<NaiveDate>,
    pub notes: Option<String>,
    pub budget_limit: Option<f64>,
}

impl NewPurchaseOrder {
    /// Validate and price the order against `component` (looked up by name).
    pub fn into_order(
        self,
        id: PurchaseOrderId,
        component: Option<&Component>,
        at: DateTime<Utc>,
    ) -> DomainResult<PurchaseOrder> {
        let supplier = required(self.supplier, "supplier")?;
        let component_name = required(self.component, "component")?;
        let quantity = self
            .quantity
            .filter(|q| *q > 0)
            .ok_or(DomainError::missing("quantity"))?;

        let budget_limit = self.budget_limit.unwrap_or(0.0);
        if !(budget_limit.is_finite() && budget_limit >= 0.0) {
            return Err(DomainError::validation("budget limit must be a non-negative amount"));
        }

        let estimated_cost = component
            .map(|c| c.cost * f64::from(quantity))
            .unwrap_or(0.0);

        Ok(PurchaseOrder {
            id,
            number: format!("PO-{}", at.timestamp_millis()),
            supplier,
            component: component_name,
            quantity,
            urgency: self.urgency,
            expected_delivery: self.expected_delivery,
            notes: non_blank(self.notes),
            budget_limit,
            status: PurchaseOrderStatus::Pending,
            created_at: at,
            estimated_cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Category, NewComponent};
    use stockwise_core::ComponentId;

    fn arduino() -> Component {
        NewComponent {
            name: "Arduino Uno R3".into(),
            part_number: "ARD-UNO-R3".into(),
            category: Some(Category::ICs),
            cost: Some(23.5),
            ..NewComponent::default()
        }
        .into_component(ComponentId::new(), Utc::now())
        .unwrap()
    }

    fn form() -> NewPurchaseOrder {
        NewPurchaseOrder {
            supplier: "ElectroSupply Co".into(),
            component: "Arduino Uno R3".into(),
            quantity: Some(10),
            ..NewPurchaseOrder::default()
        }
    }

    #[test]
    fn order_is_priced_from_component_cost() {
        let at = Utc::now();
        let component = arduino();
        let po = form()
            .into_order(PurchaseOrderId::new(), Some(&component), at)
            .unwrap();
        assert_eq!(po.estimated_cost, 235.0);
        assert_eq!(po.status, PurchaseOrderStatus::Pending);
        assert_eq!(po.urgency, Urgency::Normal);
        assert_eq!(po.number, format!("PO-{}", at.timestamp_millis()));
    }

    #[test]
    fn unknown_component_prices_at_zero() {
        let po = form()
            .into_order(PurchaseOrderId::new(), None, Utc::now())
            .unwrap();
        assert_eq!(po.estimated_cost, 0.0);
        assert!(!po.over_budget());
    }

    #[test]
    fn zero_quantity_counts_as_missing() {
        let err = NewPurchaseOrder {
            quantity: Some(0),
            ..form()
        }
        .into_order(PurchaseOrderId::new(), None, Utc::now())
        .unwrap_err();
        assert_eq!(err, DomainError::missing("quantity"));
    }

    #[test]
    fn budget_limit_flags_expensive_orders() {
        let component = arduino();
        let po = NewPurchaseOrder {
            budget_limit: Some(100.0),
            ..form()
        }
        .into_order(PurchaseOrderId::new(), Some(&component), Utc::now())
        .unwrap();
        assert!(po.over_budget());
    }
}
