use serde::{Deserialize, Serialize};

use stockwise_core::{DomainError, DomainResult};

/// Dashboard-wide inventory settings. One instance per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Percent of optimal stock at which a component counts as low.
    pub low_stock_threshold: u8,
    /// Percent of optimal stock at which a component counts as critical.
    pub critical_stock_threshold: u8,
    pub reorder_point_days: u32,
    pub safety_stock_days: u32,
    pub forecast_period_months: u32,
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub auto_reorder: bool,
    pub currency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            low_stock_threshold: 30,
            critical_stock_threshold: 10,
            reorder_point_days: 14,
            safety_stock_days: 7,
            forecast_period_months: 3,
            email_notifications: true,
            push_notifications: true,
            auto_reorder: false,
            currency: "USD".to_string(),
        }
    }
}

impl Settings {
    /// Merge `update` into a copy of `self`, validating the result.
    pub fn merged(&self, update: SettingsUpdate) -> DomainResult<Settings> {
        let mut next = self.clone();
        if let Some(v) = update.low_stock_threshold {
            next.low_stock_threshold = v;
        }
        if let Some(v) = update.critical_stock_threshold {
            next.critical_stock_threshold = v;
        }
        if let Some(v) = update.reorder_point_days {
            next.reorder_point_days = v;
        }
        if let Some(v) = update.safety_stock_days {
            next.safety_stock_days = v;
        }
        if let Some(v) = update.forecast_period_months {
            next.forecast_period_months = v;
        }
        if let Some(v) = update.email_notifications {
            next.email_notifications = v;
        }
        if let Some(v) = update.push_notifications {
            next.push_notifications = v;
        }
        if let Some(v) = update.auto_reorder {
            next.auto_reorder = v;
        }
        if let Some(v) = update.currency {
            next.currency = v.trim().to_uppercase();
        }
        next.validate()?;
        Ok(next)
    }

    fn validate(&self) -> DomainResult<()> {
        if self.low_stock_threshold > 100 || self.critical_stock_threshold > 100 {
            return Err(DomainError::validation("thresholds are percentages (0-100)"));
        }
        if self.critical_stock_threshold > self.low_stock_threshold {
            return Err(DomainError::validation(
                "critical threshold cannot exceed the low-stock threshold",
            ));
        }
        if self.forecast_period_months == 0 {
            return Err(DomainError::validation("forecast period must be at least one month"));
        }
        if self.currency.is_empty() {
            return Err(DomainError::missing("currency"));
        }
        Ok(())
    }
}

/// Partial settings change: `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsUpdate {
    pub low_stock_threshold: Option<u8>,
    pub critical_stock_threshold: Option<u8>,
    pub reorder_point_days: Option<u32>,
    pub safety_stock_days: Option<u32>,
    pub forecast_period_months: Option<u32>,
    pub email_notifications: Option<bool>,
    pub push_notifications: Option<bool>,
    pub auto_reorder: Option<bool>,
    pub currency: Option<String>,
}

impl SettingsUpdate {
    /// Names of the fields this update touches, in declaration order.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        let mut mark = |present: bool, name: &'static str| {
            if present {
                fields.push(name);
            }
        };
        mark(self.low_stock_threshold.is_some(), "lowStockThreshold");
        mark(self.critical_stock_threshold.is_some(), "criticalStockThreshold");
        mark(self.reorder_point_days.is_some(), "reorderPointDays");
        mark(self.safety_stock_days.is_some(), "safetyStockDays");
        mark(self.forecast_period_months.is_some(), "forecastPeriodMonths");
        mark(self.email_notifications.is_some(), "emailNotifications");
        mark(self.push_notifications.is_some(), "pushNotifications");
        mark(self.auto_reorder.is_some(), "autoReorder");
        mark(self.currency.is_some(), "currency");
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_only_touches_present_fields() {
        let base = Settings::default();
        let next = base
            .merged(SettingsUpdate {
                auto_reorder: Some(true),
                currency: Some(" eur ".into()),
                ..SettingsUpdate::default()
            })
            .unwrap();

        assert!(next.auto_reorder);
        assert_eq!(next.currency, "EUR");
        assert_eq!(next.low_stock_threshold, base.low_stock_threshold);
        assert_eq!(next.reorder_point_days, base.reorder_point_days);
    }

    #[test]
    fn inverted_thresholds_are_rejected() {
        let err = Settings::default()
            .merged(SettingsUpdate {
                critical_stock_threshold: Some(40),
                ..SettingsUpdate::default()
            })
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn changed_fields_lists_camel_case_names() {
        let update = SettingsUpdate {
            safety_stock_days: Some(3),
            push_notifications: Some(false),
            ..SettingsUpdate::default()
        };
        assert_eq!(update.changed_fields(), vec!["safetyStockDays", "pushNotifications"]);
    }
}
