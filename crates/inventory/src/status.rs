//! Stock status classification.
//!
//! A component's status is a pure function of its current and optimal stock:
//!
//! | stock as % of optimal | status      |
//! |-----------------------|-------------|
//! | ≤ 10                  | Critical    |
//! | ≤ 30                  | Low Stock   |
//! | > 120                 | Overstocked |
//! | otherwise             | Optimal     |
//!
//! Comparisons are done in integer arithmetic so the boundaries are exact.

labelled_enum! {
    /// Stock adequacy of a component.
    pub enum StockStatus {
        Critical => "Critical",
        LowStock => "Low Stock",
        Optimal => "Optimal",
        Overstocked => "Overstocked",
    }
}

impl StockStatus {
    /// Position on the depleted → overstocked axis (0 is most depleted).
    pub fn depletion_rank(self) -> u8 {
        match self {
            StockStatus::Critical => 0,
            StockStatus::LowStock => 1,
            StockStatus::Optimal => 2,
            StockStatus::Overstocked => 3,
        }
    }

    /// Whether a component in this state should be reordered.
    pub fn needs_reorder(self) -> bool {
        matches!(self, StockStatus::Critical | StockStatus::LowStock)
    }
}

/// Percentage boundaries used by [`classify_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockThresholds {
    /// At or below this percentage of optimal: Critical.
    pub critical_pct: u32,
    /// At or below this percentage of optimal: Low Stock.
    pub low_pct: u32,
    /// Strictly above this percentage of optimal: Overstocked.
    pub overstock_pct: u32,
}

impl Default for StockThresholds {
    fn default() -> Self {
        Self {
            critical_pct: 10,
            low_pct: 30,
            overstock_pct: 120,
        }
    }
}

/// Classify with the standard 10 / 30 / 120 percent thresholds.
pub fn classify(current_stock: u32, optimal_stock: u32) -> StockStatus {
    classify_with(StockThresholds::default(), current_stock, optimal_stock)
}

/// Classify against explicit thresholds.
///
/// An optimal stock of zero has no meaningful ratio and is always Critical.
pub fn classify_with(
    thresholds: StockThresholds,
    current_stock: u32,
    optimal_stock: u32,
) -> StockStatus {
    if optimal_stock == 0 {
        return StockStatus::Critical;
    }

    // stock / optimal <= pct / 100  <=>  stock * 100 <= optimal * pct
    let scaled_stock = u64::from(current_stock) * 100;
    let optimal = u64::from(optimal_stock);

    if scaled_stock <= optimal * u64::from(thresholds.critical_pct) {
        StockStatus::Critical
    } else if scaled_stock <= optimal * u64::from(thresholds.low_pct) {
        StockStatus::LowStock
    } else if scaled_stock > optimal * u64::from(thresholds.overstock_pct) {
        StockStatus::Overstocked
    } else {
        StockStatus::Optimal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_shelf_is_critical() {
        assert_eq!(classify(0, 50), StockStatus::Critical);
    }

    #[test]
    fn exactly_optimal_is_optimal() {
        assert_eq!(classify(80, 80), StockStatus::Optimal);
    }

    #[test]
    fn half_again_over_optimal_is_overstocked() {
        assert_eq!(classify(150, 100), StockStatus::Overstocked);
    }

    #[test]
    fn half_of_optimal_is_optimal_not_low() {
        assert_eq!(classify(25, 50), StockStatus::Optimal);
    }

    #[test]
    fn boundaries_are_inclusive_below_and_exclusive_above() {
        assert_eq!(classify(10, 100), StockStatus::Critical);
        assert_eq!(classify(11, 100), StockStatus::LowStock);
        assert_eq!(classify(30, 100), StockStatus::LowStock);
        assert_eq!(classify(31, 100), StockStatus::Optimal);
        assert_eq!(classify(120, 100), StockStatus::Optimal);
        assert_eq!(classify(121, 100), StockStatus::Overstocked);
    }

    #[test]
    fn zero_optimal_is_always_critical() {
        assert_eq!(classify(0, 0), StockStatus::Critical);
        assert_eq!(classify(1_000, 0), StockStatus::Critical);
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        assert_eq!(classify(u32::MAX, 1), StockStatus::Overstocked);
        assert_eq!(classify(1, u32::MAX), StockStatus::Critical);
        assert_eq!(classify(u32::MAX, u32::MAX), StockStatus::Optimal);
    }

    #[test]
    fn custom_thresholds_shift_the_bands() {
        let strict = StockThresholds {
            critical_pct: 25,
            low_pct: 50,
            overstock_pct: 100,
        };
        assert_eq!(classify_with(strict, 20, 100), StockStatus::Critical);
        assert_eq!(classify_with(strict, 45, 100), StockStatus::LowStock);
        assert_eq!(classify_with(strict, 101, 100), StockStatus::Overstocked);
    }

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!("low stock".parse::<StockStatus>().unwrap(), StockStatus::LowStock);
        assert_eq!(StockStatus::LowStock.to_string(), "Low Stock");
        assert!("Depleted".parse::<StockStatus>().is_err());
    }

    #[test]
    fn serde_uses_display_labels() {
        let json = serde_json::to_string(&StockStatus::LowStock).unwrap();
        assert_eq!(json, "\"Low Stock\"");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 1000,
            ..ProptestConfig::default()
        })]

        /// Property: a higher stock never yields a more depleted status.
        #[test]
        fn classification_is_monotonic_in_stock(
            optimal in 1u32..100_000,
            a in 0u32..300_000,
            b in 0u32..300_000,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                classify(lo, optimal).depletion_rank() <= classify(hi, optimal).depletion_rank()
            );
        }

        /// Property: zero stock is Critical and 1.5x optimal is Overstocked.
        #[test]
        fn anchors_hold_for_any_optimal(optimal in 2u32..1_000_000) {
            prop_assert_eq!(classify(0, optimal), StockStatus::Critical);
            prop_assert_eq!(classify(optimal, optimal), StockStatus::Optimal);
            prop_assert_eq!(classify(optimal + optimal / 2, optimal), StockStatus::Overstocked);
        }
    }
}
