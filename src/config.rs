//! Application configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::{AppError, Result};

/// Default cat image search endpoint.
pub const DEFAULT_CAT_API_URL: &str = "https://api.thecatapi.com/v1/images/search";

/// Default random joke endpoint.
pub const DEFAULT_JOKE_API_URL: &str = "https://official-joke-api.appspot.com/random_joke";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server ===
    /// Address the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    // === Upstreams ===
    /// Cat image search endpoint.
    #[serde(default = "default_cat_api_url")]
    pub cat_api_url: String,

    /// Random joke endpoint.
    #[serde(default = "default_joke_api_url")]
    pub joke_api_url: String,

    /// Timeout for outbound calls. Unset means no timeout.
    #[serde(default)]
    pub upstream_timeout_ms: Option<u64>,

    /// Idle pooled connections kept per upstream host.
    #[serde(default = "default_pool_size")]
    pub http_pool_size: usize,

    // === Observability ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Log output format: `text` or `json`.
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Start the Prometheus exporter.
    #[serde(default)]
    pub metrics_enabled: bool,

    /// Prometheus exporter port.
    #[serde(default = "default_metrics_port")]
    pub metrics_port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cat_api_url() -> String {
    DEFAULT_CAT_API_URL.to_string()
}

fn default_joke_api_url() -> String {
    DEFAULT_JOKE_API_URL.to_string()
}

fn default_pool_size() -> usize {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_metrics_port() -> u16 {
    9090
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cat_api_url: default_cat_api_url(),
            joke_api_url: default_joke_api_url(),
            upstream_timeout_ms: None,
            http_pool_size: default_pool_size(),
            rust_log: default_log_level(),
            log_format: default_log_format(),
            metrics_enabled: false,
            metrics_port: default_metrics_port(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Validate, reporting failure as [`AppError::InvalidConfig`].
    pub fn ensure_valid(&self) -> Result<()> {
        self.validate().map_err(AppError::InvalidConfig)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.host.parse::<IpAddr>().is_err() {
            return Err(format!("HOST must be an IP address, got {:?}", self.host));
        }

        check_upstream_url("CAT_API_URL", &self.cat_api_url)?;
        check_upstream_url("JOKE_API_URL", &self.joke_api_url)?;

        if self.upstream_timeout_ms == Some(0) {
            return Err("UPSTREAM_TIMEOUT_MS must be greater than 0 when set".to_string());
        }

        if !matches!(self.log_format.as_str(), "text" | "json") {
            return Err(format!("LOG_FORMAT must be text or json, got {:?}", self.log_format));
        }

        if self.metrics_enabled && self.metrics_port == self.port {
            return Err("METRICS_PORT must differ from PORT".to_string());
        }

        Ok(())
    }

    /// Socket address for the HTTP server.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| AppError::InvalidConfig(format!("invalid HOST {:?}: {}", self.host, e)))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Outbound timeout, if one is configured.
    pub fn upstream_timeout(&self) -> Option<Duration> {
        self.upstream_timeout_ms.map(Duration::from_millis)
    }

    /// Whether logs should be emitted as JSON.
    pub fn json_logs(&self) -> bool {
        self.log_format == "json"
    }
}

fn check_upstream_url(name: &str, value: &str) -> std::result::Result<(), String> {
    let url = Url::parse(value).map_err(|e| format!("{} is not a valid URL: {}", name, e))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("{} must use http or https, got {}", name, other)),
    }
}
