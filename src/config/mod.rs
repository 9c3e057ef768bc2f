//! Configuration management for the vuoro watcher
//!
//! Configuration is assembled once at process start, validated, and then
//! passed by reference; nothing reads the environment after startup. The
//! engine itself takes no configuration beyond the rarity rules and the
//! first-run policy, which are explicit values here rather than hidden
//! constants.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::engine::{FirstRunPolicy, RarityRules};
use crate::models::Weekday;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Booking-site scraper configuration
    pub scraper: ScraperConfig,

    /// Discord delivery configuration
    pub discord: DiscordConfig,

    /// Rare-slot rules and notification policy
    pub rarity: RarityConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Scraper-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Booking-site login email
    pub email: String,

    /// Booking-site login password
    pub password: String,

    /// Times of day to look for, `HH:MM`
    pub desired_times: Vec<String>,

    /// How many days forward from today to scan
    pub days_ahead: u32,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

/// Discord channel and token configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    /// Bot token
    pub token: String,

    /// Channel holding the single availability-table message
    pub table_channel_id: String,

    /// Channel receiving rare-slot notifications
    pub notification_channel_id: String,

    /// Channel holding the single snapshot message
    pub history_channel_id: String,
}

/// Rarity rules plus the first-run notification policy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RarityConfig {
    /// Which (time, weekday) pairs count as rare
    #[serde(flatten)]
    pub rules: RarityRules,

    /// Behavior when no prior snapshot exists
    #[serde(default)]
    pub first_run_policy: FirstRunPolicy,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

fn default_desired_times() -> Vec<String> {
    [
        "17:00", "17:30", "18:00", "18:30", "19:00", "19:30", "20:00", "20:30", "21:00", "21:30",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("missing required environment variable {key}"))
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Credentials and channel ids are required; everything else falls
    /// back to defaults and accepts `VUORO_*` overrides.
    pub fn from_env() -> Result<Self> {
        let email = require_env("EMAIL")?;
        let password = require_env("PASSWORD")?;
        let token = require_env("DISCORD_TOKEN")?;
        let table_channel_id = require_env("TABLE_CHANNEL_ID")?;
        let notification_channel_id = require_env("NOTIFICATION_CHANNEL_ID")?;
        let history_channel_id = require_env("HISTORY_CHANNEL_ID")?;

        let days_ahead = std::env::var("VUORO_DAYS_AHEAD")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(7);

        let request_timeout_secs = std::env::var("VUORO_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        let desired_times = std::env::var("VUORO_DESIRED_TIMES")
            .map(|v| v.split(',').map(|t| t.trim().to_string()).collect())
            .unwrap_or_else(|_| default_desired_times());

        let mut rarity = RarityConfig::default();
        if let Ok(times) = std::env::var("VUORO_RARE_TIMES") {
            rarity.rules.times = times.split(',').map(|t| t.trim().to_string()).collect();
        }
        if let Ok(weekdays) = std::env::var("VUORO_RARE_WEEKDAYS") {
            rarity.rules.weekdays = weekdays
                .split(',')
                .filter_map(|w| Weekday::from_abbrev(w.trim()))
                .collect();
        }
        if let Ok(policy) = std::env::var("VUORO_FIRST_RUN_POLICY") {
            rarity.first_run_policy = match policy.as_str() {
                "suppress" => FirstRunPolicy::Suppress,
                _ => FirstRunPolicy::NotifyAll,
            };
        }

        let level = std::env::var("VUORO_LOG_LEVEL").unwrap_or_else(|_| String::from("info"));
        let format = std::env::var("VUORO_LOG_FORMAT").unwrap_or_else(|_| String::from("text"));

        Ok(Self {
            scraper: ScraperConfig {
                email,
                password,
                desired_times,
                days_ahead,
                request_timeout_secs,
            },
            discord: DiscordConfig {
                token,
                table_channel_id,
                notification_channel_id,
                history_channel_id,
            },
            rarity,
            logging: LoggingConfig { level, format },
        })
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.scraper.days_ahead == 0 {
            anyhow::bail!("days_ahead must be greater than 0");
        }

        if self.scraper.desired_times.is_empty() {
            anyhow::bail!("desired_times must not be empty");
        }

        for time in self
            .scraper
            .desired_times
            .iter()
            .chain(self.rarity.rules.times.iter())
        {
            if !is_hhmm(time) {
                anyhow::bail!("invalid time of day: {time:?} (expected HH:MM)");
            }
        }

        if self.rarity.rules.weekdays.is_empty() {
            anyhow::bail!("rare weekday set must not be empty");
        }

        Ok(())
    }

    /// Get request timeout as Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.scraper.request_timeout_secs)
    }
}

fn is_hhmm(time: &str) -> bool {
    let Some((h, m)) = time.split_once(':') else {
        return false;
    };
    if h.len() != 2 || m.len() != 2 {
        return false;
    }
    matches!((h.parse::<u8>(), m.parse::<u8>()), (Ok(h), Ok(m)) if h < 24 && m < 60)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scraper: ScraperConfig {
                email: String::new(),
                password: String::new(),
                desired_times: default_desired_times(),
                days_ahead: 7,
                request_timeout_secs: 30,
            },
            discord: DiscordConfig {
                token: String::new(),
                table_channel_id: String::new(),
                notification_channel_id: String::new(),
                history_channel_id: String::new(),
            },
            rarity: RarityConfig::default(),
            logging: LoggingConfig {
                level: String::from("info"),
                format: String::from("text"),
            },
        }
    }
}
