use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the shop API and its image CDN live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme + host shared by the API and the CDN (e.g. "https://larek-api.nomoreparties.co").
    #[serde(default = "default_origin")]
    pub origin: String,
    /// Path of the JSON API under the origin.
    #[serde(default = "default_api_path")]
    pub api_path: String,
    /// Path of product images under the origin.
    #[serde(default = "default_cdn_path")]
    pub cdn_path: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval in milliseconds when no input arrives.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Defaults to `weblarek.log` in the local data dir.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_origin() -> String {
    "https://larek-api.nomoreparties.co".to_string()
}

fn default_api_path() -> String {
    "/api/weblarek".to_string()
}

fn default_cdn_path() -> String {
    "/content/weblarek".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ApiConfig {
    pub fn api_url(&self) -> String {
        join_url(&self.origin, &self.api_path)
    }

    pub fn cdn_url(&self) -> String {
        join_url(&self.origin, &self.cdn_path)
    }
}

impl LoggingConfig {
    pub fn log_path(&self) -> PathBuf {
        if let Some(path) = &self.file {
            return path.clone();
        }
        let data_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("weblarek").join("weblarek.log")
    }
}

fn join_url(origin: &str, path: &str) -> String {
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
    .trim_end_matches('/')
    .to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            api_path: default_api_path(),
            cdn_path: default_cdn_path(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
