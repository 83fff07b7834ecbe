//! Configuration Module
//!
//! Handles loading application configuration from environment variables.

use std::env;
use std::time::Duration;

/// Application configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache TTL in seconds; entries older than this are reaped
    pub cache_ttl: u64,
    /// Reaper tick interval in seconds
    pub reap_interval: u64,
    /// Base URL of the PokeAPI instance to query
    pub api_base_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL` - cache TTL in seconds (default: 30)
    /// - `REAP_INTERVAL` - reaper tick in seconds (default: 1)
    /// - `POKEAPI_URL` - PokeAPI base URL (default: https://pokeapi.co/api/v2)
    pub fn from_env() -> Self {
        Self {
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            reap_interval: env::var("REAP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
            api_base_url: env::var("POKEAPI_URL")
                .unwrap_or_else(|_| "https://pokeapi.co/api/v2".to_string()),
        }
    }

    /// Cache TTL as a [`Duration`].
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// Reaper tick interval as a [`Duration`].
    pub fn reap_interval(&self) -> Duration {
        Duration::from_secs(self.reap_interval)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: 30,
            reap_interval: 1,
            api_base_url: "https://pokeapi.co/api/v2".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_ttl, 30);
        assert_eq!(config.reap_interval, 1);
        assert_eq!(config.api_base_url, "https://pokeapi.co/api/v2");
    }

    #[test]
    fn test_config_durations() {
        let config = Config::default();
        assert_eq!(config.cache_ttl(), Duration::from_secs(30));
        assert_eq!(config.reap_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("CACHE_TTL");
        env::remove_var("REAP_INTERVAL");
        env::remove_var("POKEAPI_URL");

        let config = Config::from_env();
        assert_eq!(config.cache_ttl, 30);
        assert_eq!(config.reap_interval, 1);
        assert_eq!(config.api_base_url, "https://pokeapi.co/api/v2");
    }
}
