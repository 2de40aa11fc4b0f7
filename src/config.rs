//! Runtime configuration.
//!
//! Defaults match the product's simulated latencies. Each value can be
//! overridden from the environment; unparseable values are logged and ignored.
//!
//! ```ignore
//! use study_monk::config::AppConfig;
//!
//! let config = AppConfig::from_env()
//!     .with_search_delay(std::time::Duration::from_millis(500));
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{StudyError, StudyResult};

pub const ENV_SEARCH_DELAY_MS: &str = "STUDY_MONK_SEARCH_DELAY_MS";
pub const ENV_LEAD_DELAY_MS: &str = "STUDY_MONK_LEAD_DELAY_MS";
pub const ENV_ASSETS: &str = "STUDY_MONK_ASSETS";
pub const ENV_LOG: &str = "STUDY_MONK_LOG";

const DEFAULT_SEARCH_DELAY_MS: u64 = 2500;
const DEFAULT_LEAD_DELAY_MS: u64 = 800;
const DEFAULT_TICK_MS: u64 = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Simulated latency before search results appear
    pub search_delay: Duration,
    /// Simulated latency before the download step of the lead form
    pub lead_delay: Duration,
    /// Event loop tick for spinner animation
    pub tick_rate: Duration,
    /// Directory holding `public/logo.png` and `public/hero.png`
    pub asset_root: PathBuf,
    /// `tracing` filter directive
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            search_delay: Duration::from_millis(DEFAULT_SEARCH_DELAY_MS),
            lead_delay: Duration::from_millis(DEFAULT_LEAD_DELAY_MS),
            tick_rate: Duration::from_millis(DEFAULT_TICK_MS),
            asset_root: PathBuf::from("."),
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_delay(mut self, delay: Duration) -> Self {
        self.search_delay = delay;
        self
    }

    pub fn with_lead_delay(mut self, delay: Duration) -> Self {
        self.lead_delay = delay;
        self
    }

    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = root.into();
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Defaults overridden by any `STUDY_MONK_*` variables that are set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Bad values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_SEARCH_DELAY_MS) {
            match parse_millis(ENV_SEARCH_DELAY_MS, &raw) {
                Ok(d) => config = config.with_search_delay(d),
                Err(e) => tracing::warn!(category = %e.category(), "{}, using default", e),
            }
        }
        if let Some(raw) = lookup(ENV_LEAD_DELAY_MS) {
            match parse_millis(ENV_LEAD_DELAY_MS, &raw) {
                Ok(d) => config = config.with_lead_delay(d),
                Err(e) => tracing::warn!(category = %e.category(), "{}, using default", e),
            }
        }
        if let Some(root) = lookup(ENV_ASSETS).filter(|s| !s.trim().is_empty()) {
            config = config.with_asset_root(root);
        }
        if let Some(filter) = lookup(ENV_LOG).filter(|s| !s.trim().is_empty()) {
            config = config.with_log_filter(filter);
        }

        config
    }
}

/// Parse a millisecond count
pub fn parse_millis(key: &str, raw: &str) -> StudyResult<Duration> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| StudyError::Config {
            key: key.to_string(),
            value: raw.to_string(),
        })
}
