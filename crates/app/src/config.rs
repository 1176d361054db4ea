//! Environment configuration.
//!
//! | variable                        | default                      |
//! |---------------------------------|------------------------------|
//! | `STOCKWISE_AUTH_URL`            | unset                        |
//! | `STOCKWISE_AUTH_ANON_KEY`       | unset                        |
//! | `STOCKWISE_DEMO_AUTH`           | `true`                       |
//! | `STOCKWISE_FORECAST_LATENCY_MS` | `1500`                       |
//! | `STOCKWISE_LOGIN_LATENCY_MS`    | `1000`                       |
//! | `STOCKWISE_LOG_FORMAT`          | `json`                       |
//! | `STOCKWISE_DEMO_EMAIL`          | `demo.manager@stockwise.dev` |
//! | `STOCKWISE_DEMO_PASSWORD`       | `demo`                       |

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use stockwise_auth::{AuthProvider, DEFAULT_LOGIN_LATENCY, DemoAuthProvider, UnconfiguredAuthProvider};
use stockwise_forecast::DEFAULT_FORECAST_LATENCY;
use stockwise_observability::LogFormat;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_DEMO_EMAIL: &str = "demo.manager@stockwise.dev";
pub const DEFAULT_DEMO_PASSWORD: &str = "demo";

/// Which identity backend to wire in.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthBackend {
    /// Endpoint and key for an external identity service.
    Remote { url: String, anon_key: String },
    Demo,
    Unconfigured,
}

impl fmt::Debug for AuthBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthBackend::Remote { url, .. } => f
                .debug_struct("Remote")
                .field("url", url)
                .field("anon_key", &"<redacted>")
                .finish(),
            AuthBackend::Demo => f.write_str("Demo"),
            AuthBackend::Unconfigured => f.write_str("Unconfigured"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub auth: AuthBackend,
    pub forecast_latency: Duration,
    pub login_latency: Duration,
    pub log_format: LogFormat,
    pub demo_email: String,
    pub demo_password: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth: AuthBackend::Demo,
            forecast_latency: DEFAULT_FORECAST_LATENCY,
            login_latency: DEFAULT_LOGIN_LATENCY,
            log_format: LogFormat::Json,
            demo_email: DEFAULT_DEMO_EMAIL.to_string(),
            demo_password: DEFAULT_DEMO_PASSWORD.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let demo_enabled = match get("STOCKWISE_DEMO_AUTH") {
            Some(v) => parse_bool("STOCKWISE_DEMO_AUTH", &v)?,
            None => true,
        };
        let auth = match (get("STOCKWISE_AUTH_URL"), get("STOCKWISE_AUTH_ANON_KEY")) {
            (Some(url), Some(anon_key)) => AuthBackend::Remote { url, anon_key },
            _ if demo_enabled => AuthBackend::Demo,
            _ => AuthBackend::Unconfigured,
        };

        let log_format = match get("STOCKWISE_LOG_FORMAT") {
            Some(v) => LogFormat::from_str(&v).map_err(|e| AppError::config("STOCKWISE_LOG_FORMAT", e.to_string()))?,
            None => defaults.log_format,
        };

        Ok(Self {
            auth,
            forecast_latency: millis(&get, "STOCKWISE_FORECAST_LATENCY_MS")?.unwrap_or(defaults.forecast_latency),
            login_latency: millis(&get, "STOCKWISE_LOGIN_LATENCY_MS")?.unwrap_or(defaults.login_latency),
            log_format,
            demo_email: get("STOCKWISE_DEMO_EMAIL").unwrap_or(defaults.demo_email),
            demo_password: get("STOCKWISE_DEMO_PASSWORD").unwrap_or(defaults.demo_password),
        })
    }

    /// The identity backend for this configuration.
    ///
    /// This build ships no network client, so a remote backend is reported and
    /// treated as unconfigured.
    pub fn auth_provider(&self) -> Arc<dyn AuthProvider> {
        match &self.auth {
            AuthBackend::Demo => Arc::new(DemoAuthProvider::new().with_latency(self.login_latency)),
            AuthBackend::Remote { url, .. } => {
                tracing::warn!(%url, "remote auth backend is not available in this build; sign-in disabled");
                Arc::new(UnconfiguredAuthProvider)
            }
            AuthBackend::Unconfigured => {
                tracing::warn!(
                    "STOCKWISE_AUTH_URL / STOCKWISE_AUTH_ANON_KEY not set and demo sign-in disabled; sign-in will fail"
                );
                Arc::new(UnconfiguredAuthProvider)
            }
        }
    }
}

fn parse_bool(key: &'static str, value: &str) -> AppResult<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::config(key, format!("expected a boolean, got {value:?}"))),
    }
}

fn millis(get: &impl Fn(&str) -> Option<String>, key: &'static str) -> AppResult<Option<Duration>> {
    get(key)
        .map(|v| {
            v.parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| AppError::config(key, format!("expected milliseconds, got {v:?}")))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.forecast_latency, Duration::from_millis(1500));
    }

    #[test]
    fn url_and_key_select_remote_backend() {
        let config = AppConfig::from_lookup(lookup(&[
            ("STOCKWISE_AUTH_URL", "https://id.example.test"),
            ("STOCKWISE_AUTH_ANON_KEY", "anon"),
        ]))
        .unwrap();
        assert!(matches!(config.auth, AuthBackend::Remote { .. }));
        assert!(!format!("{:?}", config.auth).contains("anon\""));
    }

    #[test]
    fn url_without_key_falls_back_to_demo() {
        let config = AppConfig::from_lookup(lookup(&[("STOCKWISE_AUTH_URL", "https://id.example.test")])).unwrap();
        assert_eq!(config.auth, AuthBackend::Demo);
    }

    #[test]
    fn demo_can_be_switched_off() {
        let config = AppConfig::from_lookup(lookup(&[("STOCKWISE_DEMO_AUTH", "false")])).unwrap();
        assert_eq!(config.auth, AuthBackend::Unconfigured);
    }

    #[test]
    fn latencies_and_format_are_parsed() {
        let config = AppConfig::from_lookup(lookup(&[
            ("STOCKWISE_FORECAST_LATENCY_MS", "0"),
            ("STOCKWISE_LOGIN_LATENCY_MS", " 250 "),
            ("STOCKWISE_LOG_FORMAT", "pretty"),
        ]))
        .unwrap();
        assert_eq!(config.forecast_latency, Duration::ZERO);
        assert_eq!(config.login_latency, Duration::from_millis(250));
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn malformed_values_are_config_errors() {
        let err = AppConfig::from_lookup(lookup(&[("STOCKWISE_FORECAST_LATENCY_MS", "soon")])).unwrap_err();
        assert!(matches!(err, AppError::Config { key: "STOCKWISE_FORECAST_LATENCY_MS", .. }));

        let err = AppConfig::from_lookup(lookup(&[("STOCKWISE_DEMO_AUTH", "maybe")])).unwrap_err();
        assert!(matches!(err, AppError::Config { key: "STOCKWISE_DEMO_AUTH", .. }));

        let err = AppConfig::from_lookup(lookup(&[("STOCKWISE_LOG_FORMAT", "xml")])).unwrap_err();
        assert!(matches!(err, AppError::Config { key: "STOCKWISE_LOG_FORMAT", .. }));
    }
}
