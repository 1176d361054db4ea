//! Inventory domain: stock classification, the in-memory store and the derived
//! views the dashboard renders.
//!
//! Everything here is synchronous and free of IO. The store is the single writer;
//! readers hold `Arc<InventorySnapshot>` values that never change underneath them.

#[macro_use]
mod labels;

pub mod alert;
pub mod component;
pub mod event;
pub mod purchase_order;
pub mod query;
pub mod seed;
pub mod settings;
pub mod snapshot;
pub mod status;
pub mod store;
pub mod supplier;
pub mod views;

pub use alert::{AlertType, NewRiskAlert, RiskAlert, Severity};
pub use component::{Category, Component, ComponentUpdate, DemandTrend, NewComponent};
pub use event::InventoryEvent;
pub use purchase_order::{NewPurchaseOrder, PurchaseOrder, PurchaseOrderStatus, Urgency};
pub use query::{AlertFilter, ComponentFilter};
pub use settings::{Settings, SettingsUpdate};
pub use snapshot::InventorySnapshot;
pub use status::{StockStatus, StockThresholds, classify, classify_with};
pub use store::{Change, InventoryStore};
pub use supplier::{NewSupplier, Supplier, SupplierStatus};
pub use views::{AlertSummary, DashboardMetrics, NotificationFeed, SupplierMetrics, RECENT_ALERT_LIMIT};
