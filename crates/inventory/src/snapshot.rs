use serde::{Deserialize, Serialize};

use stockwise_core::{AlertId, ComponentId, find_by_id};

use crate::alert::RiskAlert;
use crate::component::Component;
use crate::purchase_order::PurchaseOrder;
use crate::settings::Settings;
use crate::supplier::Supplier;

/// Immutable view of the whole inventory state.
///
/// Sequence order is meaningful: components, suppliers and purchase orders are in
/// insertion order, alerts are newest-first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySnapshot {
    pub(crate) components: Vec<Component>,
    pub(crate) suppliers: Vec<Supplier>,
    pub(crate) alerts: Vec<RiskAlert>,
    pub(crate) purchase_orders: Vec<PurchaseOrder>,
    pub(crate) settings: Settings,
}

impl InventorySnapshot {
    pub fn new(
        components: Vec<Component>,
        suppliers: Vec<Supplier>,
        alerts: Vec<RiskAlert>,
        settings: Settings,
    ) -> Self {
        Self {
            components,
            suppliers,
            alerts,
            purchase_orders: Vec::new(),
            settings,
        }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    /// Alerts, newest first.
    pub fn alerts(&self) -> &[RiskAlert] {
        &self.alerts
    }

    pub fn purchase_orders(&self) -> &[PurchaseOrder] {
        &self.purchase_orders
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        find_by_id(&self.components, id).map(|(_, c)| c)
    }

    pub fn alert(&self, id: AlertId) -> Option<&RiskAlert> {
        find_by_id(&self.alerts, id).map(|(_, a)| a)
    }

    /// First component whose name matches, ignoring case and surrounding whitespace.
    pub fn component_by_name(&self, name: &str) -> Option<&Component> {
        let wanted = name.trim().to_lowercase();
        self.components.iter().find(|c| c.name.trim().to_lowercase() == wanted)
    }

    /// First supplier whose name matches, ignoring case and surrounding whitespace.
    pub fn supplier_by_name(&self, name: &str) -> Option<&Supplier> {
        let wanted = name.trim().to_lowercase();
        self.suppliers.iter().find(|s| s.name.trim().to_lowercase() == wanted)
    }
}
