//! Configuration management for hargastok using the prefer crate.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::Dataset;

/// Default auto-refresh interval in seconds.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 30;

/// Published CSV export of the harga sheet.
const DEFAULT_HARGA_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vTpP3VHWDYD_sju_TrkIIvOQm_PoTbfQX8mMvm6HkcrsJ56cAQjP229Quz9Y_0hpaLwktjE5w8RBJzK/pub?gid=0&single=true&output=csv";

/// CSV export of the stok sheet.
const DEFAULT_STOK_URL: &str =
    "https://docs.google.com/spreadsheets/d/1YEu-awdBQxR1zOwSUZwDYkv_t3YFSzZ4srIeGCxW5zc/export?format=csv&gid=0";

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Feed URL for the harga dataset.
    pub harga_url: String,
    /// Feed URL for the stok dataset.
    pub stok_url: String,
    /// User agent for HTTP requests.
    pub user_agent: String,
    /// Request timeout in seconds.
    pub request_timeout: u64,
    /// Quiescence window for the search box, in milliseconds.
    pub debounce_ms: u64,
    /// Minimum trimmed query length before a search runs.
    pub min_query_length: usize,
    /// Auto-refresh interval in seconds.
    pub refresh_interval_secs: u64,
    /// Bind host for the dashboard server.
    pub host: String,
    /// Bind port for the dashboard server.
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            harga_url: DEFAULT_HARGA_URL.to_string(),
            stok_url: DEFAULT_STOK_URL.to_string(),
            user_agent: "hargastok/0.1".to_string(),
            request_timeout: 30,
            debounce_ms: 300,
            min_query_length: 1,
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            host: "127.0.0.1".to_string(),
            port: 8642,
        }
    }
}

impl Settings {
    /// Feed URL for a dataset.
    pub fn feed_url(&self, dataset: Dataset) -> &str {
        match dataset {
            Dataset::Harga => &self.harga_url,
            Dataset::Stok => &self.stok_url,
        }
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Feed URL for the harga dataset.
    #[serde(default)]
    pub harga_url: Option<String>,
    /// Feed URL for the stok dataset.
    #[serde(default)]
    pub stok_url: Option<String>,
    /// User agent string.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Request timeout in seconds.
    #[serde(default)]
    pub request_timeout: Option<u64>,
    /// Search box debounce in milliseconds.
    #[serde(default)]
    pub debounce_ms: Option<u64>,
    /// Minimum trimmed query length.
    #[serde(default)]
    pub min_query_length: Option<usize>,
    /// Auto-refresh interval in seconds.
    #[serde(default)]
    pub refresh_interval_secs: Option<u64>,
    /// Bind host for the dashboard server.
    #[serde(default)]
    pub host: Option<String>,
    /// Bind port for the dashboard server.
    #[serde(default)]
    pub port: Option<u16>,
}

impl Config {
    /// Load configuration using prefer crate.
    /// Automatically discovers hargastok config files in standard locations.
    pub async fn load() -> Self {
        match prefer::load("hargastok").await {
            Ok(pref_config) => {
                let harga_url: Option<String> = pref_config.get("harga_url").ok();
                let stok_url: Option<String> = pref_config.get("stok_url").ok();
                let user_agent: Option<String> = pref_config.get("user_agent").ok();
                let request_timeout: Option<u64> = pref_config.get("request_timeout").ok();
                let debounce_ms: Option<u64> = pref_config.get("debounce_ms").ok();
                let min_query_length: Option<usize> =
                    pref_config.get("min_query_length").ok();
                let refresh_interval_secs: Option<u64> =
                    pref_config.get("refresh_interval_secs").ok();
                let host: Option<String> = pref_config.get("host").ok();
                let port: Option<u16> = pref_config.get("port").ok();

                Config {
                    harga_url,
                    stok_url,
                    user_agent,
                    request_timeout,
                    debounce_ms,
                    min_query_length,
                    refresh_interval_secs,
                    host,
                    port,
                }
            }
            Err(_) => {
                // No config file found, use defaults
                Self::default()
            }
        }
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings) {
        if let Some(ref url) = self.harga_url {
            settings.harga_url = url.clone();
        }
        if let Some(ref url) = self.stok_url {
            settings.stok_url = url.clone();
        }
        if let Some(ref user_agent) = self.user_agent {
            settings.user_agent = user_agent.clone();
        }
        if let Some(timeout) = self.request_timeout {
            settings.request_timeout = timeout;
        }
        if let Some(debounce) = self.debounce_ms {
            settings.debounce_ms = debounce;
        }
        if let Some(min_len) = self.min_query_length {
            settings.min_query_length = min_len;
        }
        if let Some(interval) = self.refresh_interval_secs {
            settings.refresh_interval_secs = interval;
        }
        if let Some(ref host) = self.host {
            settings.host = host.clone();
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
    }
}

/// Load settings from configuration.
pub async fn load_settings() -> Settings {
    let config = Config::load().await;
    let mut settings = Settings::default();
    config.apply_to_settings(&mut settings);
    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.debounce_ms, 300);
        assert_eq!(settings.min_query_length, 1);
        assert_eq!(settings.refresh_interval_secs, 30);
        assert!(settings.feed_url(Dataset::Harga).contains("output=csv"));
        assert!(settings.feed_url(Dataset::Stok).contains("format=csv"));
    }

    #[test]
    fn test_apply_to_settings_overrides_set_fields_only() {
        let config = Config {
            stok_url: Some("https://example.com/stok.csv".to_string()),
            refresh_interval_secs: Some(5),
            ..Default::default()
        };

        let mut settings = Settings::default();
        config.apply_to_settings(&mut settings);

        assert_eq!(settings.stok_url, "https://example.com/stok.csv");
        assert_eq!(settings.refresh_interval(), Duration::from_secs(5));
        // Untouched fields keep their defaults.
        assert_eq!(settings.harga_url, Settings::default().harga_url);
        assert_eq!(settings.debounce_ms, 300);
    }
}
