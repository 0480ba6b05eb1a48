use crate::error::{FlashdeckError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_STATS_DAYS: usize = 7;
const MAX_STATS_DAYS: usize = 365;

pub const CONFIG_KEYS: &[&str] = &["stats-days"];

/// Configuration for flashdeck, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlashdeckConfig {
    /// Number of days in the `stats` review history
    #[serde(default = "default_stats_days")]
    pub stats_days: usize,
}

fn default_stats_days() -> usize {
    DEFAULT_STATS_DAYS
}

impl Default for FlashdeckConfig {
    fn default() -> Self {
        Self {
            stats_days: DEFAULT_STATS_DAYS,
        }
    }
}

impl FlashdeckConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FlashdeckError::Io)?;
        let config: FlashdeckConfig =
            serde_json::from_str(&content).map_err(FlashdeckError::Serialization)?;
        check_stats_days(config.stats_days)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FlashdeckError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FlashdeckError::Serialization)?;
        fs::write(config_path, content).map_err(FlashdeckError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "stats-days" => Some(self.stats_days.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "stats-days" => {
                let days: usize = value.trim().parse().map_err(|_| {
                    FlashdeckError::Config(format!("stats-days must be a number, got {}", value))
                })?;
                self.stats_days = check_stats_days(days)?;
                Ok(())
            }
            other => Err(unknown_key(other)),
        }
    }
}

/// Reject history lengths outside `1..=365`.
pub fn check_stats_days(days: usize) -> Result<usize> {
    if (1..=MAX_STATS_DAYS).contains(&days) {
        Ok(days)
    } else {
        Err(FlashdeckError::Config(format!(
            "stats-days must be between 1 and {}, got {}",
            MAX_STATS_DAYS, days
        )))
    }
}

pub fn unknown_key(key: &str) -> FlashdeckError {
    FlashdeckError::Config(format!(
        "Unknown config key: {} (known keys: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
