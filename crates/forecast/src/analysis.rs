//! Reading a forecast: stockout prediction and reorder points.

use serde::Serialize;

use stockwise_inventory::Component;

use crate::generator::ForecastPoint;

/// Fraction of optimal stock held back as safety stock.
pub const SAFETY_STOCK_RATIO: f64 = 0.3;

/// Days of optimal stock assumed to be consumed per month.
const DAYS_PER_STOCK_CYCLE: f64 = 30.0;

pub fn safety_stock(optimal_stock: u32) -> f64 {
    f64::from(optimal_stock) * SAFETY_STOCK_RATIO
}

/// First day the prediction falls to or below safety stock.
pub fn predict_stockout(points: &[ForecastPoint]) -> Option<&ForecastPoint> {
    points.iter().find(|p| f64::from(p.predicted) <= p.safety)
}

/// Stock level at which to reorder: lead-time usage plus safety stock.
///
/// Daily usage is estimated as a thirtieth of optimal stock.
pub fn reorder_point(component: &Component) -> u32 {
    let daily_usage = f64::from(component.optimal_stock) / DAYS_PER_STOCK_CYCLE;
    let point = daily_usage * f64::from(component.lead_time_days) + safety_stock(component.optimal_stock);
    point.round() as u32
}

/// What the forecasting page shows next to the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSummary {
    pub stockout: Option<ForecastPoint>,
    pub reorder_point: u32,
    /// Current stock has already reached the reorder point.
    pub reorder_now: bool,
    pub min_predicted: u32,
    pub average_predicted: f64,
}

impl ForecastSummary {
    /// `None` for an empty forecast.
    pub fn from_forecast(component: &Component, points: &[ForecastPoint]) -> Option<Self> {
        let min_predicted = points.iter().map(|p| p.predicted).min()?;
        let total: f64 = points.iter().map(|p| f64::from(p.predicted)).sum();
        let reorder_point = reorder_point(component);

        Some(Self {
            stockout: predict_stockout(points).copied(),
            reorder_point,
            reorder_now: component.current_stock <= reorder_point,
            min_predicted,
            average_predicted: total / points.len() as f64,
        })
    }
}
