use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ForecastError {
    /// The caller cancelled before the forecast was produced.
    #[error("forecast cancelled")]
    Cancelled,
}
