//! The inventory store: single writer over an immutable snapshot.
//!
//! Every mutation validates its request, builds the next snapshot from a copy of
//! the current one, swaps it in and publishes one [`InventoryEvent`]. Readers that
//! still hold an older `Arc<InventorySnapshot>` keep seeing the old state.
//!
//! Lookup misses (unknown id, alert already resolved) are silent no-ops: the
//! snapshot is left as is and nothing is published.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use stockwise_core::{
    AlertId, ComponentId, DomainResult, PurchaseOrderId, SupplierId, find_by_id,
};
use stockwise_events::{Event, EventBus, InMemoryEventBus, Subscription};

use crate::alert::NewRiskAlert;
use crate::component::{ComponentUpdate, NewComponent};
use crate::event::InventoryEvent;
use crate::purchase_order::NewPurchaseOrder;
use crate::settings::{Settings, SettingsUpdate};
use crate::snapshot::InventorySnapshot;
use crate::supplier::NewSupplier;

/// Result of a store operation: the snapshot after it, plus an outcome value.
#[derive(Debug, Clone)]
pub struct Change<T> {
    pub snapshot: Arc<InventorySnapshot>,
    pub outcome: T,
}

/// Owner of the current inventory snapshot.
#[derive(Debug)]
pub struct InventoryStore<B = Arc<InMemoryEventBus<InventoryEvent>>>
where
    B: EventBus<InventoryEvent>,
{
    current: Arc<InventorySnapshot>,
    bus: B,
}

impl InventoryStore {
    /// Store with its own in-memory bus.
    pub fn new(initial: InventorySnapshot) -> Self {
        Self::with_bus(initial, Arc::new(InMemoryEventBus::new()))
    }
}

impl<B> InventoryStore<B>
where
    B: EventBus<InventoryEvent>,
{
    pub fn with_bus(initial: InventorySnapshot, bus: B) -> Self {
        Self {
            current: Arc::new(initial),
            bus,
        }
    }

    /// The current snapshot. Cheap to clone, never mutated afterwards.
    pub fn snapshot(&self) -> Arc<InventorySnapshot> {
        Arc::clone(&self.current)
    }

    /// Receive an event after every applied mutation.
    pub fn subscribe(&self) -> Subscription<InventoryEvent> {
        self.bus.subscribe()
    }

    pub fn add_component(
        &mut self,
        request: NewComponent,
        at: DateTime<Utc>,
    ) -> DomainResult<Change<ComponentId>> {
        let component = request.into_component(ComponentId::new(), at)?;
        let (id, status) = (component.id, component.status);

        let mut next = self.next();
        next.components.push(component);

        tracing::info!(component_id = %id, %status, "component added");
        let snapshot = self.commit(
            next,
            InventoryEvent::ComponentAdded {
                component_id: id,
                status,
                occurred_at: at,
            },
        );
        Ok(Change { snapshot, outcome: id })
    }

    /// Merge `update` into the component with `id`.
    ///
    /// The outcome is `false` when no component has that id.
    pub fn update_component(
        &mut self,
        id: ComponentId,
        update: ComponentUpdate,
        at: DateTime<Utc>,
    ) -> DomainResult<Change<bool>> {
        update.validate()?;

        let Some((idx, previous_status)) =
            find_by_id(&self.current.components, id).map(|(i, c)| (i, c.status))
        else {
            tracing::debug!(component_id = %id, "update ignored: unknown component");
            return Ok(self.unchanged(false));
        };

        let mut next = self.next();
        update.apply_to(&mut next.components[idx]);
        let status = next.components[idx].status;

        tracing::info!(component_id = %id, %previous_status, %status, "component updated");
        let snapshot = self.commit(
            next,
            InventoryEvent::ComponentUpdated {
                component_id: id,
                previous_status,
                status,
                occurred_at: at,
            },
        );
        Ok(Change { snapshot, outcome: true })
    }

    pub fn add_supplier(
        &mut self,
        request: NewSupplier,
        at: DateTime<Utc>,
    ) -> DomainResult<Change<SupplierId>> {
        let supplier = request.into_supplier(SupplierId::new())?;
        let id = supplier.id;

        let mut next = self.next();
        next.suppliers.push(supplier);

        tracing::info!(supplier_id = %id, "supplier added");
        let snapshot = self.commit(
            next,
            InventoryEvent::SupplierAdded {
                supplier_id: id,
                occurred_at: at,
            },
        );
        Ok(Change { snapshot, outcome: id })
    }

    /// Raise an alert. New alerts go to the front of the sequence.
    pub fn add_risk_alert(
        &mut self,
        request: NewRiskAlert,
        at: DateTime<Utc>,
    ) -> DomainResult<Change<AlertId>> {
        let alert = request.into_alert(AlertId::new(), at)?;
        let (id, severity) = (alert.id, alert.severity);

        let mut next = self.next();
        next.alerts.insert(0, alert);

        tracing::info!(alert_id = %id, %severity, "risk alert raised");
        let snapshot = self.commit(
            next,
            InventoryEvent::RiskAlertRaised {
                alert_id: id,
                occurred_at: at,
            },
        );
        Ok(Change { snapshot, outcome: id })
    }

    /// Mark an alert resolved.
    ///
    /// The outcome is `true` only when this call flipped the flag; unknown and
    /// already-resolved alerts leave the snapshot untouched.
    pub fn resolve_alert(&mut self, id: AlertId, at: DateTime<Utc>) -> Change<bool> {
        let idx = match find_by_id(&self.current.alerts, id) {
            Some((idx, alert)) if !alert.resolved => idx,
            Some(_) => {
                tracing::debug!(alert_id = %id, "alert already resolved");
                return self.unchanged(false);
            }
            None => {
                tracing::debug!(alert_id = %id, "resolve ignored: unknown alert");
                return self.unchanged(false);
            }
        };

        let mut next = self.next();
        next.alerts[idx].resolved = true;

        tracing::info!(alert_id = %id, "risk alert resolved");
        let snapshot = self.commit(
            next,
            InventoryEvent::RiskAlertResolved {
                alert_id: id,
                occurred_at: at,
            },
        );
        Change { snapshot, outcome: true }
    }

    pub fn update_settings(
        &mut self,
        update: SettingsUpdate,
        at: DateTime<Utc>,
    ) -> DomainResult<Change<Settings>> {
        let fields = update.changed_fields();
        let settings = self.current.settings.merged(update)?;
        if settings == self.current.settings {
            return Ok(self.unchanged(settings));
        }
        Ok(self.replace_settings(settings, fields, at))
    }

    /// Restore every setting to its default.
    pub fn reset_settings(&mut self, at: DateTime<Utc>) -> Change<Settings> {
        let defaults = Settings::default();
        if defaults == self.current.settings {
            return self.unchanged(defaults);
        }
        self.replace_settings(defaults, vec!["*"], at)
    }

    pub fn create_purchase_order(
        &mut self,
        request: NewPurchaseOrder,
        at: DateTime<Utc>,
    ) -> DomainResult<Change<PurchaseOrderId>> {
        let component = self.current.component_by_name(request.component.trim());
        let order = request.into_order(PurchaseOrderId::new(), component, at)?;
        let id = order.id;

        tracing::info!(
            order_id = %id,
            number = %order.number,
            estimated_cost = order.estimated_cost,
            "purchase order created"
        );

        let mut next = self.next();
        next.purchase_orders.push(order);

        let snapshot = self.commit(
            next,
            InventoryEvent::PurchaseOrderCreated {
                order_id: id,
                occurred_at: at,
            },
        );
        Ok(Change { snapshot, outcome: id })
    }

    fn replace_settings(
        &mut self,
        settings: Settings,
        fields: Vec<&'static str>,
        at: DateTime<Utc>,
    ) -> Change<Settings> {
        let mut next = self.next();
        next.settings = settings.clone();

        tracing::info!(fields = ?fields, "settings updated");
        let snapshot = self.commit(
            next,
            InventoryEvent::SettingsUpdated {
                fields: fields.into_iter().map(str::to_string).collect(),
                occurred_at: at,
            },
        );
        Change {
            snapshot,
            outcome: settings,
        }
    }

    fn next(&self) -> InventorySnapshot {
        InventorySnapshot::clone(&self.current)
    }

    fn unchanged<T>(&self, outcome: T) -> Change<T> {
        Change {
            snapshot: self.snapshot(),
            outcome,
        }
    }

    fn commit(&mut self, next: InventorySnapshot, event: InventoryEvent) -> Arc<InventorySnapshot> {
        self.current = Arc::new(next);

        // The new snapshot is already in place; a lost notification only delays
        // a re-render.
        if let Err(e) = self.bus.publish(event.clone()) {
            tracing::warn!(event_type = event.event_type(), error = ?e, "failed to publish inventory event");
        }

        self.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::{AlertType, Severity};
    use crate::component::Category;
    use crate::status::{StockStatus, classify};
    use proptest::prelude::*;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    fn store() -> InventoryStore {
        InventoryStore::new(InventorySnapshot::default())
    }

    fn capacitor() -> NewComponent {
        NewComponent {
            name: "Ceramic Capacitor 0.1μF".into(),
            part_number: "CAP-0u1".into(),
            category: Some(Category::Capacitors),
            current_stock: Some(450),
            optimal_stock: Some(500),
            cost: Some(0.05),
            ..NewComponent::default()
        }
    }

    fn stockout_alert(component: &str) -> NewRiskAlert {
        NewRiskAlert::new(
            AlertType::StockoutRisk,
            Severity::High,
            component,
            "Stock will be depleted in 3 days based on current demand",
        )
    }

    #[test]
    fn add_component_appends_and_publishes() {
        let mut store = store();
        let sub = store.subscribe();

        let first = store.add_component(capacitor(), now()).unwrap();
        let second = store
            .add_component(
                NewComponent {
                    name: "Resistor 10kΩ".into(),
                    ..capacitor()
                },
                now(),
            )
            .unwrap();

        let names: Vec<_> = second.snapshot.components().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ceramic Capacitor 0.1μF", "Resistor 10kΩ"]);
        assert_ne!(first.outcome, second.outcome);

        let events = sub.drain();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type(), "inventory.component.added");
    }

    #[test]
    fn invalid_request_leaves_store_untouched() {
        let mut store = store();
        let sub = store.subscribe();
        let before = store.snapshot();

        let err = store
            .add_component(
                NewComponent {
                    part_number: String::new(),
                    ..capacitor()
                },
                now(),
            )
            .unwrap_err();

        assert!(err.is_validation());
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
        assert!(sub.drain().is_empty());
    }

    #[test]
    fn older_snapshots_are_not_mutated() {
        let mut store = store();
        let id = store.add_component(capacitor(), now()).unwrap().outcome;
        let before = store.snapshot();

        store
            .update_component(id, ComponentUpdate::stock(10), now())
            .unwrap();

        assert_eq!(before.component(id).unwrap().current_stock, 450);
        assert_eq!(store.snapshot().component(id).unwrap().current_stock, 10);
    }

    #[test]
    fn update_reclassifies_and_reports_status_change() {
        let mut store = store();
        let sub = store.subscribe();
        let id = store.add_component(capacitor(), now()).unwrap().outcome;

        let change = store
            .update_component(id, ComponentUpdate::stock(40), now())
            .unwrap();
        assert!(change.outcome);
        assert_eq!(change.snapshot.component(id).unwrap().status, StockStatus::Critical);

        let events = sub.drain();
        assert!(events[1].is_status_change());
    }

    #[test]
    fn update_on_unknown_id_is_a_silent_no_op() {
        let mut store = store();
        store.add_component(capacitor(), now()).unwrap();
        let sub = store.subscribe();
        let before = store.snapshot();

        let change = store
            .update_component(ComponentId::new(), ComponentUpdate::stock(1), now())
            .unwrap();

        assert!(!change.outcome);
        assert_eq!(change.snapshot.components(), before.components());
        assert!(sub.drain().is_empty());
    }

    #[test]
    fn new_alerts_are_prepended() {
        let mut store = store();
        store.add_risk_alert(stockout_alert("LED Red 5mm"), now()).unwrap();
        let newest = store
            .add_risk_alert(stockout_alert("Arduino Uno R4"), now())
            .unwrap();

        let alerts = newest.snapshot.alerts();
        assert_eq!(alerts[0].id, newest.outcome);
        assert_eq!(alerts[0].component, "Arduino Uno R4");
        assert_eq!(alerts.len(), 2);
    }

    #[test]
    fn resolve_alert_is_idempotent() {
        let mut store = store();
        let id = store
            .add_risk_alert(stockout_alert("Arduino Uno R3"), now())
            .unwrap()
            .outcome;
        let sub = store.subscribe();

        let once = store.resolve_alert(id, now());
        let twice = store.resolve_alert(id, now());

        assert!(once.outcome);
        assert!(!twice.outcome);
        assert_eq!(once.snapshot.alerts(), twice.snapshot.alerts());
        assert!(twice.snapshot.alert(id).unwrap().resolved);
        assert_eq!(sub.drain().len(), 1);
    }

    #[test]
    fn resolve_unknown_alert_changes_nothing() {
        let mut store = store();
        store.add_risk_alert(stockout_alert("x"), now()).unwrap();
        let before = store.snapshot();

        let change = store.resolve_alert(AlertId::new(), now());
        assert!(!change.outcome);
        assert!(Arc::ptr_eq(&before, &change.snapshot));
    }

    #[test]
    fn add_supplier_applies_defaults() {
        let mut store = store();
        let change = store
            .add_supplier(
                NewSupplier {
                    name: "Acme".into(),
                    contact: "Jo".into(),
                    email: "jo@acme.test".into(),
                    ..NewSupplier::default()
                },
                now(),
            )
            .unwrap();
        let supplier = &change.snapshot.suppliers()[0];
        assert_eq!(supplier.id, change.outcome);
        assert_eq!(supplier.components, vec!["General".to_string()]);
    }

    #[test]
    fn settings_merge_and_reset() {
        let mut store = store();
        let sub = store.subscribe();

        let change = store
            .update_settings(
                SettingsUpdate {
                    auto_reorder: Some(true),
                    ..SettingsUpdate::default()
                },
                now(),
            )
            .unwrap();
        assert!(change.outcome.auto_reorder);
        assert_eq!(change.snapshot.settings().currency, "USD");

        let reset = store.reset_settings(now());
        assert_eq!(reset.outcome, Settings::default());

        // No-op merge and no-op reset publish nothing.
        store.update_settings(SettingsUpdate::default(), now()).unwrap();
        store.reset_settings(now());

        let events = sub.drain();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            &events[0],
            InventoryEvent::SettingsUpdated { fields, .. } if fields == &vec!["autoReorder".to_string()]
        ));
    }

    #[test]
    fn purchase_order_is_priced_from_snapshot() {
        let mut store = store();
        store.add_component(capacitor(), now()).unwrap();

        let change = store
            .create_purchase_order(
                NewPurchaseOrder {
                    supplier: "TechParts Inc".into(),
                    component: "Ceramic Capacitor 0.1μF".into(),
                    quantity: Some(1000),
                    ..NewPurchaseOrder::default()
                },
                now(),
            )
            .unwrap();

        let order = &change.snapshot.purchase_orders()[0];
        assert_eq!(order.id, change.outcome);
        assert!((order.estimated_cost - 50.0).abs() < 1e-9);
    }

    #[test]
    fn purchase_order_pricing_ignores_name_case() {
        let mut store = store();
        store.add_component(capacitor(), now()).unwrap();

        let change = store
            .create_purchase_order(
                NewPurchaseOrder {
                    supplier: "TechParts Inc".into(),
                    component: "ceramic capacitor 0.1μf".into(),
                    quantity: Some(200),
                    ..NewPurchaseOrder::default()
                },
                now(),
            )
            .unwrap();

        assert!((change.snapshot.purchase_orders()[0].estimated_cost - 10.0).abs() < 1e-9);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 200,
            ..ProptestConfig::default()
        })]

        /// Property: status matches the classifier after any sequence of stock updates.
        #[test]
        fn status_tracks_stock_after_updates(
            optimal in 1u32..5_000,
            stocks in proptest::collection::vec(0u32..10_000, 1..20),
        ) {
            let mut store = store();
            let id = store
                .add_component(NewComponent { optimal_stock: Some(optimal), ..capacitor() }, now())
                .unwrap()
                .outcome;

            for stock in stocks {
                let change = store.update_component(id, ComponentUpdate::stock(stock), now()).unwrap();
                let c = change.snapshot.component(id).unwrap();
                prop_assert_eq!(c.status, classify(stock, optimal));
            }
        }
    }
}
