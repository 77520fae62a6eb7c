//! Application configuration loaded from environment variables.

use core::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use stockpilot_ai::GeminiConfig;
use stockpilot_inventory::AnalyticsConfig;
use stockpilot_observability::{LogFormat, ObservabilityConfig};

pub const LOW_STOCK_THRESHOLD: &str = "STOCKPILOT_LOW_STOCK_THRESHOLD";
pub const MIN_STOCK_THRESHOLD: &str = "STOCKPILOT_MIN_STOCK_THRESHOLD";
pub const SAFETY_STOCK_DAYS: &str = "STOCKPILOT_SAFETY_STOCK_DAYS";
pub const LOG_FORMAT: &str = "STOCKPILOT_LOG_FORMAT";
pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
pub const GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
pub const GEMINI_TIMEOUT_SECS: &str = "GEMINI_TIMEOUT_SECS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub analytics: AnalyticsConfig,
    pub observability: ObservabilityConfig,
    /// `None` when no API key is configured; the assistant is then unavailable.
    pub gemini: Option<GeminiConfig>,
    /// Non-fatal problems found while loading, logged once tracing is up.
    pub notices: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut analytics = AnalyticsConfig::default();
        if let Some(units) = parse(&get, LOW_STOCK_THRESHOLD)? {
            analytics = analytics.with_low_stock_threshold(units);
        }
        if let Some(units) = parse(&get, MIN_STOCK_THRESHOLD)? {
            analytics = analytics.with_min_stock_threshold(units);
        }
        if let Some(days) = parse(&get, SAFETY_STOCK_DAYS)? {
            analytics = analytics.with_safety_stock_days(days);
        }

        let mut observability = ObservabilityConfig::default();
        if let Some(format) = get(LOG_FORMAT) {
            observability.format = format
                .parse::<LogFormat>()
                .map_err(|message| ConfigError::Invalid {
                    key: LOG_FORMAT,
                    message,
                })?;
        }

        let mut notices = Vec::new();
        let gemini = match get(GEMINI_API_KEY) {
            Some(api_key) => {
                let mut cfg = GeminiConfig::new(api_key.trim());
                if let Some(model) = get(GEMINI_MODEL) {
                    cfg = cfg.with_model(model.trim());
                }
                if let Some(base_url) = get(GEMINI_BASE_URL) {
                    cfg = cfg.with_base_url(base_url.trim());
                }
                if let Some(secs) = parse::<u64, _>(&get, GEMINI_TIMEOUT_SECS)? {
                    cfg = cfg.with_timeout(Duration::from_secs(secs));
                }
                Some(cfg)
            }
            None => {
                if get(GEMINI_MODEL).is_some() {
                    notices.push(format!(
                        "{GEMINI_MODEL} is set but {GEMINI_API_KEY} is not; assistant disabled"
                    ));
                }
                None
            }
        };

        Ok(Self {
            analytics,
            observability,
            gemini,
            notices,
        })
    }
}

fn parse<T, F>(get: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: core::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    get(key)
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
                key,
                message: format!("'{raw}': {e}"),
            })
        })
        .transpose()
}
