//! Forecast generation.
//!
//! A forecast is [`FORECAST_HORIZON_DAYS`] daily points starting today. Day `i`
//! predicts `current_stock + drift × i + U(-5, 5)`, rounded and floored at zero,
//! where the drift follows the component's demand trend.

use std::fmt;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use stockwise_core::{CancelToken, ComponentId};
use stockwise_inventory::{Component, DemandTrend, InventorySnapshot};

use crate::analysis::safety_stock;
use crate::error::ForecastError;

pub const FORECAST_HORIZON_DAYS: usize = 30;

/// Simulated model latency before a forecast resolves.
pub const DEFAULT_FORECAST_LATENCY: Duration = Duration::from_millis(1500);

/// Half-width of the uniform noise added to each prediction.
const NOISE_AMPLITUDE: f64 = 5.0;

/// Expected stock change per day for a demand trend.
pub fn daily_drift(trend: DemandTrend) -> f64 {
    match trend {
        DemandTrend::Increasing => -2.0,
        DemandTrend::Decreasing => 1.0,
        DemandTrend::Stable => -0.5,
    }
}

/// One day of a forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub predicted: u32,
    pub optimal: u32,
    pub safety: f64,
}

/// Lazily generated forecast for one component. Always yields exactly
/// [`FORECAST_HORIZON_DAYS`] points.
#[derive(Debug, Clone)]
pub struct ForecastSeries<R> {
    rng: R,
    start: NaiveDate,
    base: f64,
    drift: f64,
    optimal: u32,
    safety: f64,
    day: usize,
}

impl<R: Rng> ForecastSeries<R> {
    pub fn new(component: &Component, start: NaiveDate, rng: R) -> Self {
        Self {
            rng,
            start,
            base: f64::from(component.current_stock),
            drift: daily_drift(component.demand_trend),
            optimal: component.optimal_stock,
            safety: safety_stock(component.optimal_stock),
            day: 0,
        }
    }
}

impl<R: Rng> Iterator for ForecastSeries<R> {
    type Item = ForecastPoint;

    fn next(&mut self) -> Option<ForecastPoint> {
        if self.day >= FORECAST_HORIZON_DAYS {
            return None;
        }
        let i = self.day;
        self.day += 1;

        let noise = self.rng.gen_range(-NOISE_AMPLITUDE..NOISE_AMPLITUDE);
        let raw = self.base + self.drift * i as f64 + noise;

        Some(ForecastPoint {
            date: self.start.checked_add_days(Days::new(i as u64))?,
            // `as` saturates; the max(0) keeps negatives out explicitly
            predicted: raw.round().max(0.0) as u32,
            optimal: self.optimal,
            safety: self.safety,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = FORECAST_HORIZON_DAYS.saturating_sub(self.day);
        (left, Some(left))
    }
}

impl<R: Rng> ExactSizeIterator for ForecastSeries<R> {}

/// Produces forecasts after a simulated model latency.
///
/// The random source is owned by the service so a seeded service gives
/// reproducible forecasts.
pub struct ForecastService {
    latency: Duration,
    rng: Mutex<StdRng>,
}

impl ForecastService {
    /// Entropy-seeded service with the default latency.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Deterministic service for tests and benchmarks.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            latency: DEFAULT_FORECAST_LATENCY,
            rng: Mutex::new(rng),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Forecast `component_id` from `snapshot`, starting at `today`.
    ///
    /// Waits out the latency first; cancelling during the wait yields
    /// [`ForecastError::Cancelled`]. An unknown id yields an empty forecast.
    pub async fn generate_forecast(
        &self,
        snapshot: &InventorySnapshot,
        component_id: ComponentId,
        today: NaiveDate,
        cancel: &CancelToken,
    ) -> Result<Vec<ForecastPoint>, ForecastError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::warn!(%component_id, "forecast cancelled");
                return Err(ForecastError::Cancelled);
            }
            _ = tokio::time::sleep(self.latency) => {}
        }

        let Some(component) = snapshot.component(component_id) else {
            tracing::debug!(%component_id, "forecast requested for unknown component");
            return Ok(Vec::new());
        };

        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let points: Vec<_> = ForecastSeries::new(component, today, &mut *rng).collect();

        tracing::info!(
            %component_id,
            points = points.len(),
            trend = %component.demand_trend,
            "forecast generated"
        );
        Ok(points)
    }
}

impl Default for ForecastService {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ForecastService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForecastService")
            .field("latency", &self.latency)
            .finish_non_exhaustive()
    }
}
