use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockwise_core::{ComponentId, DomainError, DomainResult, Entity};

use crate::status::{StockStatus, classify};

labelled_enum! {
    /// Component category.
    pub enum Category {
        Resistors => "Resistors",
        Capacitors => "Capacitors",
        Diodes => "Diodes",
        ICs => "ICs",
        Transistors => "Transistors",
        Inductors => "Inductors",
        Connectors => "Connectors",
        Sensors => "Sensors",
    }
}

labelled_enum! {
    /// Direction of recent demand for a component.
    pub enum DemandTrend {
        Increasing => "Increasing",
        Stable => "Stable",
        Decreasing => "Decreasing",
    }
}

/// A stocked inventory item with a target quantity.
///
/// `status` is always `classify(current_stock, optimal_stock)`; it is stored so
/// snapshots serialize exactly what the views display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: ComponentId,
    pub name: String,
    pub part_number: Option<String>,
    pub description: Option<String>,
    pub category: Category,
    pub current_stock: u32,
    pub optimal_stock: u32,
    pub unit: String,
    /// Supplier name. Not checked against the supplier list.
    pub supplier: String,
    pub lead_time_days: u32,
    pub last_restock: DateTime<Utc>,
    pub cost: f64,
    pub status: StockStatus,
    pub demand_trend: DemandTrend,
    pub location: String,
}

impl Component {
    /// Inventory value of the stock on hand.
    pub fn stock_value(&self) -> f64 {
        f64::from(self.current_stock) * self.cost
    }

    fn reclassify(&mut self) {
        self.status = classify(self.current_stock, self.optimal_stock);
    }
}

impl Entity for Component {
    type Id = ComponentId;

    fn id(&self) -> ComponentId {
        self.id
    }
}

/// Request: add a component.
///
/// Mirrors the add-component form: name, part number and category are required,
/// everything else falls back to a default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewComponent {
    pub name: String,
    pub part_number: String,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub current_stock: Option<u32>,
    pub optimal_stock: Option<u32>,
    pub unit: Option<String>,
    pub cost: Option<f64>,
    pub supplier: String,
    pub lead_time_days: Option<u32>,
    pub location: String,
    pub demand_trend: Option<DemandTrend>,
}

pub const DEFAULT_OPTIMAL_STOCK: u32 = 100;
pub const DEFAULT_UNIT: &str = "pieces";
pub const DEFAULT_LEAD_TIME_DAYS: u32 = 7;

impl NewComponent {
    /// Validate and build the component. Status is derived, never supplied.
    pub fn into_component(self, id: ComponentId, at: DateTime<Utc>) -> DomainResult<Component> {
        let name = required(self.name, "name")?;
        let part_number = required(self.part_number, "part_number")?;
        let category = self.category.ok_or(DomainError::missing("category"))?;

        let optimal_stock = self.optimal_stock.unwrap_or(DEFAULT_OPTIMAL_STOCK);
        ensure_positive_optimal(optimal_stock)?;
        let cost = self.cost.unwrap_or(0.0);
        ensure_valid_cost(cost)?;

        let mut component = Component {
            id,
            name,
            part_number: Some(part_number),
            description: non_blank(self.description),
            category,
            current_stock: self.current_stock.unwrap_or(0),
            optimal_stock,
            unit: non_blank(self.unit).unwrap_or_else(|| DEFAULT_UNIT.to_string()),
            supplier: self.supplier.trim().to_string(),
            lead_time_days: self.lead_time_days.unwrap_or(DEFAULT_LEAD_TIME_DAYS),
            last_restock: at,
            cost,
            status: StockStatus::Critical,
            demand_trend: self.demand_trend.unwrap_or(DemandTrend::Stable),
            location: self.location.trim().to_string(),
        };
        component.reclassify();
        Ok(component)
    }
}

/// Partial update: `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentUpdate {
    pub name: Option<String>,
    pub part_number: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub current_stock: Option<u32>,
    pub optimal_stock: Option<u32>,
    pub unit: Option<String>,
    pub supplier: Option<String>,
    pub lead_time_days: Option<u32>,
    pub last_restock: Option<DateTime<Utc>>,
    pub cost: Option<f64>,
    pub demand_trend: Option<DemandTrend>,
    pub location: Option<String>,
}

impl ComponentUpdate {
    /// Stock-level change only; the usual "update stock" action.
    pub fn stock(current_stock: u32) -> Self {
        Self {
            current_stock: Some(current_stock),
            ..Self::default()
        }
    }

    /// Field-level checks that do not need the current record.
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(DomainError::missing("name"));
            }
        }
        if let Some(optimal) = self.optimal_stock {
            ensure_positive_optimal(optimal)?;
        }
        if let Some(cost) = self.cost {
            ensure_valid_cost(cost)?;
        }
        Ok(())
    }

    /// Shallow-merge into `component` and re-derive its status.
    pub fn apply_to(self, component: &mut Component) {
        if let Some(v) = self.name {
            component.name = v.trim().to_string();
        }
        if let Some(v) = self.part_number {
            component.part_number = Some(v);
        }
        if let Some(v) = self.description {
            component.description = Some(v);
        }
        if let Some(v) = self.category {
            component.category = v;
        }
        if let Some(v) = self.current_stock {
            component.current_stock = v;
        }
        if let Some(v) = self.optimal_stock {
            component.optimal_stock = v;
        }
        if let Some(v) = self.unit {
            component.unit = v;
        }
        if let Some(v) = self.supplier {
            component.supplier = v;
        }
        if let Some(v) = self.lead_time_days {
            component.lead_time_days = v;
        }
        if let Some(v) = self.last_restock {
            component.last_restock = v;
        }
        if let Some(v) = self.cost {
            component.cost = v;
        }
        if let Some(v) = self.demand_trend {
            component.demand_trend = v;
        }
        if let Some(v) = self.location {
            component.location = v;
        }
        component.reclassify();
    }
}

pub(crate) fn required(value: String, field: &'static str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::missing(field));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn ensure_positive_optimal(optimal_stock: u32) -> DomainResult<()> {
    if optimal_stock == 0 {
        return Err(DomainError::validation("optimal stock must be greater than zero"));
    }
    Ok(())
}

fn ensure_valid_cost(cost: f64) -> DomainResult<()> {
    if !(cost.is_finite() && cost >= 0.0) {
        return Err(DomainError::validation("cost must be a non-negative amount"));
    }
    Ok(())
}
