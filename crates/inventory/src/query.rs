//! Read-only filters over a snapshot, as used by the list pages.
//!
//! Search terms match case-insensitively on substrings; a blank term matches
//! everything. Results keep snapshot order.

use serde::{Deserialize, Serialize};

use crate::alert::{AlertType, RiskAlert, Severity};
use crate::component::{Category, Component};
use crate::snapshot::InventorySnapshot;
use crate::status::StockStatus;
use crate::supplier::Supplier;

/// Component list filter. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentFilter {
    /// Matched against name and category.
    pub search: String,
    pub category: Option<Category>,
    pub status: Option<StockStatus>,
}

/// Alert list filter. Resolved alerts are hidden unless `show_resolved` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlertFilter {
    /// Matched against component name and message.
    pub search: String,
    pub severity: Option<Severity>,
    pub alert_type: Option<AlertType>,
    pub show_resolved: bool,
}

struct Needle(Option<String>);

impl Needle {
    fn new(term: &str) -> Self {
        let term = term.trim();
        Self((!term.is_empty()).then(|| term.to_lowercase()))
    }

    fn any<'a>(&self, haystacks: impl IntoIterator<Item = &'a str>) -> bool {
        match &self.0 {
            None => true,
            Some(needle) => haystacks
                .into_iter()
                .any(|h| h.to_lowercase().contains(needle.as_str())),
        }
    }
}

impl InventorySnapshot {
    pub fn filter_components(&self, filter: &ComponentFilter) -> Vec<&Component> {
        let needle = Needle::new(&filter.search);
        self.components
            .iter()
            .filter(|c| needle.any([c.name.as_str(), c.category.as_str()]))
            .filter(|c| filter.category.is_none_or(|cat| c.category == cat))
            .filter(|c| filter.status.is_none_or(|s| c.status == s))
            .collect()
    }

    /// Suppliers whose name, location or any covered category contains `term`.
    pub fn search_suppliers(&self, term: &str) -> Vec<&Supplier> {
        let needle = Needle::new(term);
        self.suppliers
            .iter()
            .filter(|s| {
                needle.any(
                    [s.name.as_str(), s.location.as_str()]
                        .into_iter()
                        .chain(s.components.iter().map(String::as_str)),
                )
            })
            .collect()
    }

    pub fn filter_alerts(&self, filter: &AlertFilter) -> Vec<&RiskAlert> {
        let needle = Needle::new(&filter.search);
        self.alerts
            .iter()
            .filter(|a| filter.show_resolved || a.is_open())
            .filter(|a| needle.any([a.component.as_str(), a.message.as_str()]))
            .filter(|a| filter.severity.is_none_or(|s| a.severity == s))
            .filter(|a| filter.alert_type.is_none_or(|t| a.alert_type == t))
            .collect()
    }

    /// Components at Low Stock or Critical, most depleted first.
    pub fn reorder_candidates(&self) -> Vec<&Component> {
        let mut out: Vec<&Component> = self
            .components
            .iter()
            .filter(|c| c.status.needs_reorder())
            .collect();
        // stable: ties keep snapshot order
        out.sort_by_key(|c| c.status.depletion_rank());
        out
    }
}
