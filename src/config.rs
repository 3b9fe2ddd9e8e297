//! Configuration Module
//!
//! Loads composer settings from environment variables (and `.env`, if present).

use std::env;

use crate::cache::DEFAULT_TTL_SECS;

/// Default interval between background sweeps, in seconds
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;

/// Default site name appended to page titles
pub const DEFAULT_SITE_NAME: &str = "Local Experiences";

/// Composer configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Time-to-live in seconds for cached page compositions
    pub cache_ttl: u64,
    /// Background sweep interval in seconds
    pub sweep_interval: u64,
    /// Site name used in page titles
    pub site_name: String,
}

impl Config {
    /// Loads `.env` from the working directory, then reads the environment.
    ///
    /// A missing `.env` file is not an error.
    pub fn load() -> Self {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL` - Cache TTL in seconds (default: 300)
    /// - `SWEEP_INTERVAL` - Sweep frequency in seconds, must be non-zero (default: 60)
    /// - `SITE_NAME` - Site name for page titles (default: "Local Experiences")
    pub fn from_env() -> Self {
        Self {
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TTL_SECS),
            sweep_interval: env::var("SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs: &u64| *secs > 0)
                .unwrap_or(DEFAULT_SWEEP_INTERVAL_SECS),
            site_name: env::var("SITE_NAME")
                .ok()
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SITE_NAME.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_TTL_SECS,
            sweep_interval: DEFAULT_SWEEP_INTERVAL_SECS,
            site_name: DEFAULT_SITE_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_ttl, 300);
        assert_eq!(config.sweep_interval, 60);
        assert_eq!(config.site_name, "Local Experiences");
    }

    // Only test that mutates the process environment
    #[test]
    fn test_config_from_env() {
        env::remove_var("CACHE_TTL");
        env::remove_var("SWEEP_INTERVAL");
        env::remove_var("SITE_NAME");

        let config = Config::from_env();
        assert_eq!(config.cache_ttl, 300);
        assert_eq!(config.sweep_interval, 60);
        assert_eq!(config.site_name, "Local Experiences");

        env::set_var("CACHE_TTL", "30");
        env::set_var("SWEEP_INTERVAL", "0");
        env::set_var("SITE_NAME", "Harbor Tours");

        let config = Config::from_env();
        assert_eq!(config.cache_ttl, 30);
        assert_eq!(config.sweep_interval, 60);
        assert_eq!(config.site_name, "Harbor Tours");

        env::set_var("CACHE_TTL", "soon");
        assert_eq!(Config::from_env().cache_ttl, 300);

        env::remove_var("CACHE_TTL");
        env::remove_var("SWEEP_INTERVAL");
        env::remove_var("SITE_NAME");
    }
}
