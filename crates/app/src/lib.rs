//! `stockwise-app`: wiring for the inventory dashboard.
//!
//! Configuration, the [`DashboardContext`] state object and the mapping from
//! failures to user-facing notices.

pub mod config;
pub mod context;
pub mod errors;

pub use config::{AppConfig, AuthBackend};
pub use context::{DashboardContext, ForecastReport, Reply};
pub use errors::{AppError, AppResult, Notice, NoticeLevel};
