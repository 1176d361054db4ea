//! Demo data the dashboard boots with.

use chrono::{DateTime, NaiveDate, Utc};

use stockwise_core::{AlertId, ComponentId, SupplierId};

use crate::alert::{AlertType, RiskAlert, Severity};
use crate::component::{Category, Component, DemandTrend};
use crate::settings::Settings;
use crate::snapshot::InventorySnapshot;
use crate::status::classify;
use crate::supplier::{Supplier, SupplierStatus};

struct SeedComponent {
    name: &'static str,
    category: Category,
    current_stock: u32,
    optimal_stock: u32,
    supplier: &'static str,
    lead_time_days: u32,
    restocked: (i32, u32, u32),
    cost: f64,
    demand_trend: DemandTrend,
    location: &'static str,
}

const COMPONENTS: &[SeedComponent] = &[
    SeedComponent {
        name: "Ceramic Capacitor 0.1μF",
        category: Category::Capacitors,
        current_stock: 450,
        optimal_stock: 500,
        supplier: "TechParts Inc",
        lead_time_days: 7,
        restocked: (2024, 1, 15),
        cost: 0.05,
        demand_trend: DemandTrend::Stable,
        location: "A1-B2-C3",
    },
    SeedComponent {
        name: "Arduino Uno R3",
        category: Category::ICs,
        current_stock: 25,
        optimal_stock: 50,
        supplier: "ElectroSupply Co",
        lead_time_days: 14,
        restocked: (2024, 1, 10),
        cost: 23.50,
        demand_trend: DemandTrend::Increasing,
        location: "B2-C1-D4",
    },
    SeedComponent {
        name: "LED Red 5mm",
        category: Category::Diodes,
        current_stock: 1200,
        optimal_stock: 800,
        supplier: "BrightLED Ltd",
        lead_time_days: 5,
        restocked: (2024, 1, 20),
        cost: 0.12,
        demand_trend: DemandTrend::Decreasing,
        location: "C3-D2-E1",
    },
    SeedComponent {
        name: "Resistor 10kΩ 1/4W",
        category: Category::Resistors,
        current_stock: 800,
        optimal_stock: 1000,
        supplier: "ResistorWorld",
        lead_time_days: 3,
        restocked: (2024, 1, 18),
        cost: 0.03,
        demand_trend: DemandTrend::Stable,
        location: "A2-B1-C2",
    },
    SeedComponent {
        name: "Temperature Sensor DS18B20",
        category: Category::Sensors,
        current_stock: 60,
        optimal_stock: 80,
        supplier: "SensorTech",
        lead_time_days: 10,
        restocked: (2024, 1, 12),
        cost: 3.25,
        demand_trend: DemandTrend::Increasing,
        location: "D1-E2-F3",
    },
];

// Newest first.
const ALERTS: &[(AlertType, Severity, &str, &str, (i32, u32, u32), bool)] = &[
    (
        AlertType::StockoutRisk,
        Severity::High,
        "Arduino Uno R3",
        "Stock will be depleted in 3 days based on current demand",
        (2024, 1, 22),
        false,
    ),
    (
        AlertType::ExcessInventory,
        Severity::Medium,
        "LED Red 5mm",
        "Inventory is 50% above optimal level",
        (2024, 1, 21),
        false,
    ),
    (
        AlertType::SupplierDelay,
        Severity::Medium,
        "Ceramic Capacitor 0.1μF",
        "TechParts Inc reported 3-day delay in shipment",
        (2024, 1, 20),
        true,
    ),
];

struct SeedSupplier {
    name: &'static str,
    rating: f64,
    on_time_delivery: f64,
    defect_rate: f64,
    components: &'static [&'static str],
    contact: &'static str,
    location: &'static str,
    lead_time_days: u32,
    status: SupplierStatus,
}

const SUPPLIERS: &[SeedSupplier] = &[
    SeedSupplier {
        name: "TechParts Inc",
        rating: 4.2,
        on_time_delivery: 92.0,
        defect_rate: 0.5,
        components: &["Capacitors", "Resistors"],
        contact: "orders@techparts.com",
        location: "California, USA",
        lead_time_days: 7,
        status: SupplierStatus::Active,
    },
    SeedSupplier {
        name: "ElectroSupply Co",
        rating: 4.7,
        on_time_delivery: 96.0,
        defect_rate: 0.2,
        components: &["ICs", "Processors"],
        contact: "sales@electrosupply.com",
        location: "Texas, USA",
        lead_time_days: 14,
        status: SupplierStatus::Active,
    },
    SeedSupplier {
        name: "BrightLED Ltd",
        rating: 4.0,
        on_time_delivery: 88.0,
        defect_rate: 1.2,
        components: &["LEDs", "Displays"],
        contact: "info@brightled.com",
        location: "Shenzhen, China",
        lead_time_days: 5,
        status: SupplierStatus::UnderReview,
    },
];

/// Midnight UTC on the given day, or `fallback` for an impossible date.
fn midnight((y, m, d): (i32, u32, u32), fallback: DateTime<Utc>) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or(fallback)
}

impl InventorySnapshot {
    /// The demo inventory: five components, three alerts and three suppliers.
    ///
    /// Statuses are derived from stock levels like any other component, so they
    /// can differ from the labels the demo data was originally written with.
    pub fn seeded(at: DateTime<Utc>) -> Self {
        let components = COMPONENTS
            .iter()
            .map(|s| Component {
                id: ComponentId::new(),
                name: s.name.to_string(),
                part_number: None,
                description: None,
                category: s.category,
                current_stock: s.current_stock,
                optimal_stock: s.optimal_stock,
                unit: "pieces".to_string(),
                supplier: s.supplier.to_string(),
                lead_time_days: s.lead_time_days,
                last_restock: midnight(s.restocked, at),
                cost: s.cost,
                status: classify(s.current_stock, s.optimal_stock),
                demand_trend: s.demand_trend,
                location: s.location.to_string(),
            })
            .collect();

        let alerts = ALERTS
            .iter()
            .map(|&(alert_type, severity, component, message, date, resolved)| RiskAlert {
                id: AlertId::new(),
                alert_type,
                severity,
                component: component.to_string(),
                message: message.to_string(),
                date: midnight(date, at),
                resolved,
            })
            .collect();

        let suppliers = SUPPLIERS
            .iter()
            .map(|s| Supplier {
                id: SupplierId::new(),
                name: s.name.to_string(),
                rating: s.rating,
                on_time_delivery: s.on_time_delivery,
                defect_rate: s.defect_rate,
                components: s.components.iter().map(|c| c.to_string()).collect(),
                contact: s.contact.to_string(),
                email: None,
                phone: None,
                location: s.location.to_string(),
                lead_time_days: s.lead_time_days,
                payment_terms: None,
                status: s.status,
            })
            .collect();

        InventorySnapshot::new(components, suppliers, alerts, Settings::default())
    }
}
