//! Application error type and the notices shown to the user.

use serde::Serialize;
use thiserror::Error;

use stockwise_auth::AuthError;
use stockwise_core::DomainError;
use stockwise_forecast::ForecastError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error("not signed in")]
    Unauthenticated,

    #[error("invalid configuration for {key}: {message}")]
    Config { key: &'static str, message: String },
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn config(key: &'static str, message: impl Into<String>) -> Self {
        Self::Config {
            key,
            message: message.into(),
        }
    }

    /// The toast for this failure.
    pub fn notice(&self) -> Notice {
        match self {
            AppError::Domain(DomainError::MissingField(_)) => {
                Notice::error("Missing Information", "Please fill in all required fields")
            }
            AppError::Domain(DomainError::Validation(msg)) => Notice::error("Invalid Input", msg.clone()),
            AppError::Domain(other) => Notice::error("Error", other.to_string()),
            AppError::Auth(AuthError::MissingCredentials) => {
                Notice::error("Error", AuthError::MissingCredentials.user_message())
            }
            AppError::Auth(AuthError::NoSession) | AppError::Unauthenticated => {
                Notice::error("Not Signed In", "Please sign in to continue.")
            }
            AppError::Auth(err) => Notice::error("Login Failed", err.user_message()),
            AppError::Forecast(ForecastError::Cancelled) => {
                Notice::info("Forecast Cancelled", "The forecast request was cancelled.")
            }
            AppError::Config { .. } => Notice::error("Configuration Error", self.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A short title/description pair for the toast area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub level: NoticeLevel,
}

impl Notice {
    fn new(level: NoticeLevel, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            level,
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, title, description)
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, title, description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_maps_to_missing_information() {
        let notice = AppError::from(DomainError::missing("name")).notice();
        assert_eq!(notice.title, "Missing Information");
        assert_eq!(notice.level, NoticeLevel::Error);
    }

    #[test]
    fn auth_failures_keep_their_own_messages() {
        let limited = AppError::from(AuthError::RateLimited { retry_after_secs: 10 }).notice();
        let disabled = AppError::from(AuthError::AccountDisabled).notice();
        assert_eq!(limited.title, "Login Failed");
        assert_ne!(limited.description, disabled.description);

        let blank = AppError::from(AuthError::MissingCredentials).notice();
        assert_eq!(blank.title, "Error");
        assert_eq!(blank.description, "Please enter both email and password");
    }

    #[test]
    fn unauthenticated_and_no_session_read_the_same() {
        assert_eq!(
            AppError::Unauthenticated.notice(),
            AppError::from(AuthError::NoSession).notice()
        );
    }

    #[test]
    fn notice_serializes_lowercase_level() {
        let json = serde_json::to_value(Notice::success("Alert Resolved", "done")).unwrap();
        assert_eq!(json["level"], "success");
    }
}
