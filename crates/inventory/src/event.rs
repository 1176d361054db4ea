use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockwise_core::{AlertId, ComponentId, PurchaseOrderId, SupplierId};
use stockwise_events::Event;

use crate::status::StockStatus;

/// Published by the store after each applied mutation.
///
/// Events carry ids rather than records; subscribers read the current snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InventoryEvent {
    ComponentAdded {
        component_id: ComponentId,
        status: StockStatus,
        occurred_at: DateTime<Utc>,
    },
    ComponentUpdated {
        component_id: ComponentId,
        previous_status: StockStatus,
        status: StockStatus,
        occurred_at: DateTime<Utc>,
    },
    SupplierAdded {
        supplier_id: SupplierId,
        occurred_at: DateTime<Utc>,
    },
    RiskAlertRaised {
        alert_id: AlertId,
        occurred_at: DateTime<Utc>,
    },
    RiskAlertResolved {
        alert_id: AlertId,
        occurred_at: DateTime<Utc>,
    },
    SettingsUpdated {
        fields: Vec<String>,
        occurred_at: DateTime<Utc>,
    },
    PurchaseOrderCreated {
        order_id: PurchaseOrderId,
        occurred_at: DateTime<Utc>,
    },
}

impl InventoryEvent {
    /// True when a component update moved it into a different status band.
    pub fn is_status_change(&self) -> bool {
        matches!(
            self,
            InventoryEvent::ComponentUpdated { previous_status, status, .. } if previous_status != status
        )
    }
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ComponentAdded { .. } => "inventory.component.added",
            InventoryEvent::ComponentUpdated { .. } => "inventory.component.updated",
            InventoryEvent::SupplierAdded { .. } => "inventory.supplier.added",
            InventoryEvent::RiskAlertRaised { .. } => "inventory.alert.raised",
            InventoryEvent::RiskAlertResolved { .. } => "inventory.alert.resolved",
            InventoryEvent::SettingsUpdated { .. } => "inventory.settings.updated",
            InventoryEvent::PurchaseOrderCreated { .. } => "inventory.purchase_order.created",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::ComponentAdded { occurred_at, .. }
            | InventoryEvent::ComponentUpdated { occurred_at, .. }
            | InventoryEvent::SupplierAdded { occurred_at, .. }
            | InventoryEvent::RiskAlertRaised { occurred_at, .. }
            | InventoryEvent::RiskAlertResolved { occurred_at, .. }
            | InventoryEvent::SettingsUpdated { occurred_at, .. }
            | InventoryEvent::PurchaseOrderCreated { occurred_at, .. } => *occurred_at,
        }
    }
}
