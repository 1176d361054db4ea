//! `stockwise-forecast`: simulated demand forecasting.
//!
//! Forecasts are a projection of current stock along the component's demand trend
//! plus bounded noise. They are advisory only: nothing here mutates inventory.

pub mod analysis;
pub mod error;
pub mod generator;

pub use analysis::{ForecastSummary, SAFETY_STOCK_RATIO, predict_stockout, reorder_point, safety_stock};
pub use error::ForecastError;
pub use generator::{
    DEFAULT_FORECAST_LATENCY, FORECAST_HORIZON_DAYS, ForecastPoint, ForecastSeries, ForecastService,
    daily_drift,
};
